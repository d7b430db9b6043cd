//! Multi-step registration wizard shared by the manufacturer and pharmacy
//! pages.
//!
//! Responsibilities
//! - Hold a `common::wizard::Wizard` for the flow named in the props and feed
//!   it every DOM event through `Msg`.
//! - Run the async side effects the wizard asks for (uniqueness lookups,
//!   the final multipart submission) and hand the answers back.
//! - Bind Ctrl/Cmd+Enter to next/submit for flows that enable the shortcut.

use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::browser::WindowListener;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegistrationProps;
pub use state::RegistrationWizard;

impl Component for RegistrationWizard {
    type Message = Msg;
    type Properties = RegistrationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = RegistrationWizard::new(ctx.props());
        if component.wizard.spec().keyboard_shortcut {
            let link = ctx.link().clone();
            component.shortcut = WindowListener::new("keydown", move |event: Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if (key.ctrl_key() || key.meta_key()) && key.key() == "Enter" {
                    event.prevent_default();
                    link.send_message(Msg::Shortcut);
                }
            });
        }
        log::info!("{} form initialized", component.wizard.spec().title);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
