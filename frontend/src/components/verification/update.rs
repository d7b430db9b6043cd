//! State transitions of the verification widget.
//!
//! Both input paths end in `Msg::Verified`; the panel is built by
//! `common::model::verification::panel_for`, which applies the per-path
//! status rules.

use common::model::verification::{
    normalize_batch_code, panel_for, ResultPanel, VerificationSource, CAMERA_REQUIRED_MESSAGE,
    EMPTY_BATCH_MESSAGE,
};
use common::scanner::scan_batch_code;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::camera;
use super::messages::{Msg, Tab};
use super::state::VerificationWidget;

pub fn update(
    component: &mut VerificationWidget,
    ctx: &Context<VerificationWidget>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SelectTab(tab) => {
            if component.tab == tab {
                return false;
            }
            if tab == Tab::Manual {
                component.release_camera();
            }
            component.tab = tab;
            true
        }
        Msg::BatchInput(value) => {
            component.batch_input = value;
            false
        }
        Msg::SubmitManual => {
            if component.busy.is_some() {
                return false;
            }
            let Some(code) = normalize_batch_code(&component.batch_input) else {
                show_panel(component, ResultPanel::notice(false, EMPTY_BATCH_MESSAGE));
                return true;
            };
            let entered = component.batch_input.trim().to_string();
            verify(component, ctx, VerificationSource::Manual, code, entered);
            true
        }
        Msg::StartScanner => {
            if component.busy.is_some() {
                return false;
            }
            let Some(ticket) = component.scan.start() else {
                return false;
            };
            component.busy = Some(VerificationSource::Scan);
            component.panel = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match camera::open().await {
                    Ok(stream) => link.send_message(Msg::CameraReady(ticket, stream)),
                    Err(err) => link.send_message(Msg::CameraFailed(ticket, err)),
                }
            });
            true
        }
        Msg::CameraReady(ticket, stream) => {
            if component.tab != Tab::Scanner {
                camera::stop(&stream, &NodeRef::default());
                component.release_camera();
                return true;
            }
            if !component.scan.camera_ready(ticket) {
                log::debug!("Releasing camera stream of an abandoned scan");
                camera::stop(&stream, &NodeRef::default());
                return false;
            }
            camera::attach(&stream, &component.video_ref);
            component.camera = Some(stream);
            let delay = component.config.scan_delay_ms;
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                link.send_message(Msg::ScanElapsed(ticket));
            });
            true
        }
        Msg::CameraFailed(ticket, err) => {
            if !component.scan.camera_failed(ticket) {
                log::debug!("Ignoring camera failure of an abandoned scan: {err}");
                return false;
            }
            log::warn!("Camera access failed: {err}");
            component.busy = None;
            show_panel(component, ResultPanel::notice(false, CAMERA_REQUIRED_MESSAGE));
            true
        }
        Msg::ScanElapsed(ticket) => {
            if !component.scan.elapsed(ticket) {
                log::debug!("Scan finished after it was abandoned");
                return false;
            }
            if let Some(stream) = component.camera.take() {
                camera::stop(&stream, &component.video_ref);
            }
            // No frame is grabbed; the simulated decoder ignores its input.
            let code = scan_batch_code(component.decoder.as_ref(), &[]);
            log::info!("QR scan produced batch {code}");
            component.batch_input = code.clone();
            component.busy = None;
            verify(component, ctx, VerificationSource::Scan, code.clone(), code);
            true
        }
        Msg::Verified {
            source,
            entered,
            outcome,
        } => {
            if let Err(err) = &outcome {
                log::error!("Verification request failed: {err}");
            }
            component.busy = None;
            show_panel(component, panel_for(source, &entered, outcome));
            true
        }
    }
}

fn verify(
    component: &mut VerificationWidget,
    ctx: &Context<VerificationWidget>,
    source: VerificationSource,
    code: String,
    entered: String,
) {
    component.busy = Some(source);
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api.verify_batch(&code).await;
        link.send_message(Msg::Verified {
            source,
            entered,
            outcome,
        });
    });
}

fn show_panel(component: &mut VerificationWidget, panel: ResultPanel) {
    component.panel = Some(panel);
    component.reveal_result = true;
}
