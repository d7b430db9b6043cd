use common::display::scroll_progress;
use yew::prelude::*;

use crate::browser::{self, WindowListener};

pub enum Msg {
    Scrolled,
}

/// Thin bar across the top of the viewport tracking how far the page is read.
pub struct ScrollProgress {
    percent: f64,
    _scroll: Option<WindowListener>,
}

impl ScrollProgress {
    fn measure() -> f64 {
        let (top, height, client) = browser::page_metrics();
        scroll_progress(top, height, client)
    }
}

impl Component for ScrollProgress {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            percent: Self::measure(),
            _scroll: WindowListener::new("scroll", move |_| link.send_message(Msg::Scrolled)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => {
                let percent = Self::measure();
                let changed = (percent - self.percent).abs() > f64::EPSILON;
                self.percent = percent;
                changed
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div
                id="scroll-progress"
                class="scroll-progress"
                style={format!("width: {:.2}%", self.percent)}
            ></div>
        }
    }
}
