use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub visible: bool,
    #[prop_or(AttrValue::Static("Processing..."))]
    pub message: AttrValue,
}

/// Full-screen sheet shown while a request is in flight. The `show` class
/// drives the slide-in; content stays mounted so the transition can run.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    html! {
        <div
            class={classes!("loading-overlay", props.visible.then_some("show"))}
            aria-hidden={(!props.visible).to_string()}
        >
            <div class="loading-content">
                <div class="spinner"><i class="fas fa-spinner fa-spin"></i></div>
                <p>{ props.message.clone() }</p>
            </div>
        </div>
    }
}
