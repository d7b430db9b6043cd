//! Batch verification widget: manual entry and a simulated QR scan feeding
//! one result panel.
//!
//! Submodules follow the usual split: `messages` is the event contract,
//! `state` the component data, `update` the transitions, `view` the markup and
//! `camera` the `getUserMedia` plumbing.

use yew::prelude::*;

mod camera;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Msg, Tab};
pub use props::VerificationProps;
pub use state::VerificationWidget;

impl Component for VerificationWidget {
    type Message = Msg;
    type Properties = VerificationProps;

    fn create(ctx: &Context<Self>) -> Self {
        VerificationWidget::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.reveal_result {
            self.reveal_result = false;
            if let Some(panel) = self.result_ref.cast::<web_sys::Element>() {
                crate::browser::scroll_into_view(&panel);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.release_camera();
    }
}
