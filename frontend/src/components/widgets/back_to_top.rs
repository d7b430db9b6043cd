use std::rc::Rc;

use common::config::SiteConfig;
use yew::prelude::*;

use crate::browser::{self, Debouncer, WindowListener};

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub config: Rc<SiteConfig>,
}

pub enum Msg {
    Scrolled,
    Measure,
    Top,
}

/// Floating button shown past `back_to_top_offset`; visibility is
/// re-measured once scrolling settles.
pub struct BackToTop {
    visible: bool,
    debounce: Debouncer,
    _scroll: Option<WindowListener>,
}

impl Component for BackToTop {
    type Message = Msg;
    type Properties = BackToTopProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            visible: browser::scroll_y() > ctx.props().config.back_to_top_offset,
            debounce: Debouncer::new(50),
            _scroll: WindowListener::new("scroll", move |_| link.send_message(Msg::Scrolled)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => {
                let link = ctx.link().clone();
                self.debounce.call(move || link.send_message(Msg::Measure));
                false
            }
            Msg::Measure => {
                let visible = browser::scroll_y() > ctx.props().config.back_to_top_offset;
                let changed = visible != self.visible;
                self.visible = visible;
                changed
            }
            Msg::Top => {
                browser::smooth_scroll_to(0.0);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <button
                id="back-to-top"
                class={classes!("back-to-top", self.visible.then_some("visible"))}
                aria-label="Back to top"
                onclick={ctx.link().callback(|_| Msg::Top)}
            >
                <i class="fas fa-arrow-up"></i>
            </button>
        }
    }
}
