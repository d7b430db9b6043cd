//! Fixed top navigation bar.
//!
//! - Gains the `scrolled` class once the page is scrolled past
//!   `SiteConfig::nav_scrolled_offset`.
//! - Anchor links scroll smoothly to their section, leaving room for the bar
//!   itself, and close the mobile menu.
//! - Off the home page the same links point back to `/#section`.

use std::rc::Rc;

use common::config::SiteConfig;
use common::display::nav_scroll_target;
use common::model::theme::ThemePreference;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::browser::{self, WindowListener};

use super::theme_toggle::ThemeToggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const SITE_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "Verify", anchor: "verify" },
    NavLink { label: "Features", anchor: "features" },
    NavLink { label: "Register", anchor: "register" },
    NavLink { label: "Contact", anchor: "contact" },
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub config: Rc<SiteConfig>,
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
    #[prop_or(true)]
    pub in_page: bool,
}

pub enum Msg {
    Scrolled,
    ToggleMenu,
    Navigate(&'static str),
}

pub struct Navbar {
    scrolled: bool,
    menu_open: bool,
    node_ref: NodeRef,
    _scroll: Option<WindowListener>,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = NavbarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            scrolled: browser::scroll_y() > ctx.props().config.nav_scrolled_offset,
            menu_open: false,
            node_ref: NodeRef::default(),
            _scroll: WindowListener::new("scroll", move |_| link.send_message(Msg::Scrolled)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => {
                let scrolled = browser::scroll_y() > ctx.props().config.nav_scrolled_offset;
                let changed = scrolled != self.scrolled;
                self.scrolled = scrolled;
                changed
            }
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::Navigate(anchor) => {
                let nav_height = self
                    .node_ref
                    .cast::<HtmlElement>()
                    .map(|nav| f64::from(nav.offset_height()))
                    .unwrap_or(ctx.props().config.nav_fallback_height);
                match browser::element_offset_top(anchor) {
                    Some(top) => browser::smooth_scroll_to(nav_scroll_target(top, nav_height)),
                    None => log::debug!("No #{anchor} section on this page"),
                }
                let was_open = self.menu_open;
                self.menu_open = false;
                was_open
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav
                id="navbar"
                ref={self.node_ref.clone()}
                class={classes!("navbar", self.scrolled.then_some("scrolled"))}
            >
                <div class="nav-container">
                    <a href="/" class="nav-logo">
                        <i class="fas fa-shield-alt"></i>
                        <span>{ "PharmaLedger" }</span>
                    </a>
                    <ul class={classes!("nav-menu", self.menu_open.then_some("active"))}>
                        { for SITE_LINKS.iter().map(|link| self.link_view(ctx, *link)) }
                    </ul>
                    <div class="nav-actions">
                        <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                        <button
                            class={classes!("hamburger", self.menu_open.then_some("active"))}
                            aria-label="Toggle menu"
                            onclick={ctx.link().callback(|_| Msg::ToggleMenu)}
                        >
                            <span class="bar"></span>
                            <span class="bar"></span>
                            <span class="bar"></span>
                        </button>
                    </div>
                </div>
            </nav>
        }
    }
}

impl Navbar {
    fn link_view(&self, ctx: &Context<Self>, link: NavLink) -> Html {
        if !ctx.props().in_page {
            return html! {
                <li class="nav-item">
                    <a class="nav-link" href={format!("/#{}", link.anchor)}>{ link.label }</a>
                </li>
            };
        }
        let anchor = link.anchor;
        let onclick = ctx.link().callback(move |e: MouseEvent| {
            e.prevent_default();
            Msg::Navigate(anchor)
        });
        html! {
            <li class="nav-item">
                <a class="nav-link" href={format!("#{anchor}")} {onclick}>{ link.label }</a>
            </li>
        }
    }
}
