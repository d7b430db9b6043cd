use web_sys::Element;
use yew::prelude::*;

use crate::browser::VisibilityWatch;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
}

pub enum Msg {
    Shown,
}

/// Fades and lifts its children in the first time they scroll into view.
pub struct Reveal {
    shown: bool,
    node_ref: NodeRef,
    watch: Option<VisibilityWatch>,
}

impl Component for Reveal {
    type Message = Msg;
    type Properties = RevealProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            shown: false,
            node_ref: NodeRef::default(),
            watch: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Shown => {
                let changed = !self.shown;
                self.shown = true;
                changed
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
                VisibilityWatch::observe_once(&element, 0.1, move || link.send_message(Msg::Shown));
        }
        if self.watch.is_none() {
            ctx.link().send_message(Msg::Shown);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let style = if self.shown {
            "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
        } else {
            "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;"
        };
        html! {
            <div
                ref={self.node_ref.clone()}
                class={classes!("reveal", ctx.props().class.clone(), self.shown.then_some("revealed"))}
                {style}
            >
                { ctx.props().children.clone() }
            </div>
        }
    }
}
