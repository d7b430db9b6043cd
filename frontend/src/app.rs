//! Root component.
//!
//! Picks the page from the URL path, owns the theme store and builds the
//! `SiteConfig` every widget shares. Configuration is captured at build time
//! with `option_env!`, since a static bundle has no process environment.

use std::rc::Rc;

use common::config::SiteConfig;
use common::store::ThemeStore;
use common::wizard::Flow;
use yew::{html, Component, Context, Html};

use crate::browser;
use crate::components::navbar::Navbar;
use crate::components::widgets::{BackToTop, ScrollProgress};
use crate::pages;
use crate::storage::LocalStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Registration(Flow),
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/').trim_end_matches(".html");
        match path {
            "/manufacturer-registration" => Page::Registration(Flow::Manufacturer),
            "/pharmacy-registration" => Page::Registration(Flow::Pharmacy),
            _ => Page::Home,
        }
    }
}

pub enum Msg {
    ToggleTheme,
}

pub struct App {
    config: Rc<SiteConfig>,
    theme: ThemeStore<LocalStorage>,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = Rc::new(load_config());
        let theme = ThemeStore::load(LocalStorage::open());
        browser::apply_theme(theme.current());
        let page = Page::from_path(&browser::pathname());
        log::info!("PharmaLedger app initialized successfully");
        Self {
            config,
            theme,
            page,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTheme => {
                let theme = self.theme.toggle();
                browser::apply_theme(theme);
                log::debug!("Theme switched to {}", theme.as_str());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = match self.page {
            Page::Home => pages::home(&self.config),
            Page::Registration(flow) => pages::registration(&self.config, flow),
        };
        html! {
            <>
                <ScrollProgress />
                <Navbar
                    config={self.config.clone()}
                    theme={self.theme.current()}
                    on_toggle_theme={ctx.link().callback(|_| Msg::ToggleTheme)}
                    in_page={self.page == Page::Home}
                />
                <main>{ content }</main>
                { pages::footer() }
                <BackToTop config={self.config.clone()} />
            </>
        }
    }
}

fn build_time_setting(key: &str) -> Option<String> {
    let value = match key {
        "PHARMALEDGER_API_BASE" => option_env!("PHARMALEDGER_API_BASE"),
        "PHARMALEDGER_SCAN_DELAY_MS" => option_env!("PHARMALEDGER_SCAN_DELAY_MS"),
        "PHARMALEDGER_COUNTER_DURATION_MS" => option_env!("PHARMALEDGER_COUNTER_DURATION_MS"),
        "PHARMALEDGER_COUNTER_TICK_MS" => option_env!("PHARMALEDGER_COUNTER_TICK_MS"),
        "PHARMALEDGER_CONTACT_DELAY_MS" => option_env!("PHARMALEDGER_CONTACT_DELAY_MS"),
        "PHARMALEDGER_TOAST_MS" => option_env!("PHARMALEDGER_TOAST_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

fn load_config() -> SiteConfig {
    SiteConfig::from_lookup(build_time_setting).unwrap_or_else(|err| {
        log::error!("Invalid build-time configuration, using defaults: {err}");
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_paths_select_their_flow() {
        assert_eq!(
            Page::from_path("/manufacturer-registration"),
            Page::Registration(Flow::Manufacturer)
        );
        assert_eq!(
            Page::from_path("/pharmacy-registration.html"),
            Page::Registration(Flow::Pharmacy)
        );
        assert_eq!(
            Page::from_path("/pharmacy-registration/"),
            Page::Registration(Flow::Pharmacy)
        );
    }

    #[test]
    fn anything_else_is_home() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/unknown"), Page::Home);
    }
}
