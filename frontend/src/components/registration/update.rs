//! Elm-style `update` for the registration wizard.
//!
//! The wizard state machine in `common` decides every transition; this module
//! turns its answers into side effects: alerts, scrolling, storage writes and
//! the async API calls.

use common::display::registration_reference;
use common::error::ApiError;
use common::model::registration::RegistrationReceipt;
use common::store::mark_registration_completed;
use common::wizard::{Flow, PrimaryAction, StepChange, SubmitOutcome, UniquenessQuery};
use gloo_timers::future::TimeoutFuture;
use web_sys::Element;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser;

use super::messages::Msg;
use super::state::RegistrationWizard;

pub fn update(
    component: &mut RegistrationWizard,
    ctx: &Context<RegistrationWizard>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Input { name, value } => {
            component.wizard.set_text(name, value);
            true
        }
        Msg::Toggle { name, checked } => {
            component.wizard.set_checked(name, checked);
            true
        }
        Msg::Blur(name) => {
            if let Some(query) = component.wizard.blur(name, browser::today()) {
                check_uniqueness(component, ctx, query);
            }
            true
        }
        Msg::UniquenessChecked { query, result } => {
            component.wizard.finish_uniqueness_check(&query, result);
            true
        }
        Msg::FilesSelected { name, files } => {
            component.drag_target = None;
            for rejection in component.wizard.select_files(name, files) {
                browser::alert(&rejection.to_string());
            }
            true
        }
        Msg::RemoveFile { name, index } => component.wizard.remove_file(name, index),
        Msg::DragOver(target) => {
            let changed = component.drag_target != target;
            component.drag_target = target;
            changed
        }
        Msg::Next => {
            let change = component.wizard.next(browser::today());
            apply_step_change(component, change)
        }
        Msg::Previous => {
            let change = component.wizard.previous();
            apply_step_change(component, change)
        }
        Msg::JumpTo(index) => {
            let change = component.wizard.jump_to(index);
            apply_step_change(component, change)
        }
        Msg::Submit => submit(component, ctx),
        Msg::Submitted(result) => finish(component, result),
        Msg::TogglePasswordVisibility => {
            component.password_visible = !component.password_visible;
            true
        }
        Msg::Shortcut => match component.wizard.primary_action() {
            PrimaryAction::Next => update(component, ctx, Msg::Next),
            PrimaryAction::Submit => update(component, ctx, Msg::Submit),
        },
    }
}

fn apply_step_change(component: &mut RegistrationWizard, change: StepChange) -> bool {
    match change {
        StepChange::Moved(step) => {
            log::debug!("{} form moved to step {step}", component.flow().as_str());
            if let Some(form) = component.form_ref.cast::<Element>() {
                browser::scroll_into_view(&form);
            }
            true
        }
        StepChange::Blocked { alert } => {
            if let Some(alert) = alert {
                browser::alert(alert);
            }
            true
        }
        StepChange::Unchanged => false,
    }
}

fn check_uniqueness(
    component: &RegistrationWizard,
    ctx: &Context<RegistrationWizard>,
    query: UniquenessQuery,
) {
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.check_field(query.kind, &query.value).await;
        link.send_message(Msg::UniquenessChecked { query, result });
    });
}

fn submit(component: &mut RegistrationWizard, ctx: &Context<RegistrationWizard>) -> bool {
    let form = match component.wizard.prepare_submission() {
        Ok(form) => form,
        Err(blocked) => {
            match blocked.alert() {
                Some(alert) => browser::alert(alert),
                None => log::debug!("Submit ignored: {blocked}"),
            }
            return false;
        }
    };
    let flow = component.flow();
    log::info!("Submitting {} registration ({} parts)", flow.as_str(), form.len());
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.submit_registration(flow, &form).await;
        link.send_message(Msg::Submitted(result));
    });
    true
}

fn finish(
    component: &mut RegistrationWizard,
    result: Result<RegistrationReceipt, ApiError>,
) -> bool {
    match component.wizard.finish_submission(result) {
        SubmitOutcome::Succeeded {
            alert,
            marks_completion,
        } => {
            let flow = component.flow();
            if marks_completion {
                mark_registration_completed(&mut component.storage, flow.as_str());
            }
            let has_id = component
                .wizard
                .receipt()
                .is_some_and(|r| r.registration_id.is_some());
            if flow == Flow::Pharmacy && !has_id {
                component.reference = Some(registration_reference(browser::now_millis()));
            }
            browser::smooth_scroll_to(0.0);
            if let Some(alert) = alert {
                // Let the success panel paint before the blocking alert.
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    browser::alert(alert);
                });
            }
            true
        }
        SubmitOutcome::Failed { alert } => {
            browser::alert(&alert);
            true
        }
        SubmitOutcome::Ignored => false,
    }
}
