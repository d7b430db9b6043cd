//! Count-up statistic that starts once it scrolls into view.

use std::rc::Rc;

use common::config::SiteConfig;
use common::display::{CounterAnimation, CounterFrame};
use gloo_timers::future::TimeoutFuture;
use web_sys::Element;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::VisibilityWatch;

#[derive(Properties, PartialEq)]
pub struct StatsCounterProps {
    pub config: Rc<SiteConfig>,
    pub target: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
}

pub enum Msg {
    Start,
    Frame(CounterFrame),
}

pub struct StatsCounter {
    display: String,
    started: bool,
    node_ref: NodeRef,
    watch: Option<VisibilityWatch>,
}

impl Component for StatsCounter {
    type Message = Msg;
    type Properties = StatsCounterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            display: "0".to_string(),
            started: false,
            node_ref: NodeRef::default(),
            watch: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                if self.started {
                    return false;
                }
                self.started = true;
                let config = &ctx.props().config;
                let mut animation = CounterAnimation::new(
                    ctx.props().target,
                    config.counter_duration_ms,
                    config.counter_tick_ms,
                );
                let tick_ms = config.counter_tick_ms;
                let link = ctx.link().clone();
                spawn_local(async move {
                    loop {
                        TimeoutFuture::new(tick_ms).await;
                        let frame = animation.tick();
                        link.send_message(Msg::Frame(frame));
                        if frame.done {
                            break;
                        }
                    }
                });
                false
            }
            Msg::Frame(frame) => {
                self.display = frame.label();
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(element) = self.node_ref.cast::<Element>() {
            let link = ctx.link().clone();
            self.watch =
                VisibilityWatch::observe_once(&element, 0.1, move || link.send_message(Msg::Start));
        }
        if self.watch.is_none() {
            ctx.link().send_message(Msg::Start);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="stat-item" ref={self.node_ref.clone()}>
                if let Some(icon) = &props.icon {
                    <div class="stat-icon"><i class={icon.to_string()}></i></div>
                }
                <div class="stat-number" data-target={props.target.to_string()}>
                    { format!("{}{}", self.display, props.suffix) }
                </div>
                <div class="stat-label">{ props.label.clone() }</div>
            </div>
        }
    }
}
