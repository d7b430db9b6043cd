use common::model::verification::VerificationSource;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::{Msg, Tab};
use super::state::VerificationWidget;

pub fn view(component: &VerificationWidget, ctx: &Context<VerificationWidget>) -> Html {
    let link = ctx.link();
    let tab_class = |tab: Tab| classes!("tab-btn", (component.tab == tab).then_some("active"));
    html! {
        <div class="verification-widget">
            <div class="verification-tabs">
                <button
                    type="button"
                    class={tab_class(Tab::Manual)}
                    onclick={link.callback(|_| Msg::SelectTab(Tab::Manual))}
                >
                    <i class="fas fa-keyboard"></i>{ " Manual Entry" }
                </button>
                <button
                    type="button"
                    class={tab_class(Tab::Scanner)}
                    onclick={link.callback(|_| Msg::SelectTab(Tab::Scanner))}
                >
                    <i class="fas fa-qrcode"></i>{ " Scan QR Code" }
                </button>
            </div>
            {
                match component.tab {
                    Tab::Manual => manual_view(component, ctx),
                    Tab::Scanner => scanner_view(component, ctx),
                }
            }
            { result_view(component) }
        </div>
    }
}

fn manual_view(component: &VerificationWidget, ctx: &Context<VerificationWidget>) -> Html {
    let link = ctx.link();
    let oninput = link.callback(|e: InputEvent| {
        Msg::BatchInput(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitManual
    });
    let busy = component.busy.is_some();
    let label = match component.busy {
        Some(source) => source.busy_label(),
        None => "Verify",
    };
    html! {
        <form id="verify-form" class="verify-form" {onsubmit}>
            <div class="input-group">
                <input
                    id="batch-number"
                    type="text"
                    placeholder="Enter batch number (e.g., PCM5112025)"
                    value={component.batch_input.clone()}
                    {oninput}
                />
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    if busy {
                        <i class="fas fa-spinner fa-spin"></i>{ " " }
                    } else {
                        <i class="fas fa-search"></i>{ " " }
                    }
                    { label }
                </button>
            </div>
        </form>
    }
}

fn scanner_view(component: &VerificationWidget, ctx: &Context<VerificationWidget>) -> Html {
    let scanning = component.busy == Some(VerificationSource::Scan);
    html! {
        <div class="scanner-container">
            <video
                id="qr-video"
                ref={component.video_ref.clone()}
                class={classes!("qr-video", component.camera.is_some().then_some("active"))}
                autoplay=true
                playsinline=true
            ></video>
            if component.camera.is_none() {
                <div class="scanner-placeholder">
                    <i class="fas fa-camera"></i>
                    <p>{ "Point your camera at the QR code on the medicine pack" }</p>
                </div>
            }
            <button
                type="button"
                class="btn btn-primary"
                disabled={component.busy.is_some()}
                onclick={ctx.link().callback(|_| Msg::StartScanner)}
            >
                if scanning {
                    <i class="fas fa-spinner fa-spin"></i>{ " " }{ VerificationSource::Scan.busy_label() }
                } else {
                    <i class="fas fa-camera"></i>{ " Start Scanning" }
                }
            </button>
        </div>
    }
}

fn result_view(component: &VerificationWidget) -> Html {
    let Some(panel) = &component.panel else {
        return html! {};
    };
    html! {
        <div
            id="verification-result"
            ref={component.result_ref.clone()}
            class={classes!("verification-result", panel.css_class())}
        >
            <div class="result-icon"><i class={panel.icon_class()}></i></div>
            <div class="result-content">
                <h3>{ panel.title().to_string() }</h3>
                { for panel.detail_lines().into_iter().map(|line| html! { <p>{ line }</p> }) }
            </div>
        </div>
    }
}
