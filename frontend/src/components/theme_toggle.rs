use common::model::theme::ThemePreference;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: ThemePreference,
    pub on_toggle: Callback<()>,
}

/// Moon in light mode, sun in dark mode.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit(()));
    html! {
        <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            <i class={props.theme.icon_class()}></i>
        </button>
    }
}
