use crate::app::App;

mod app;
mod browser;
mod components;
mod logger;
mod pages;
mod storage;
mod transport;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    yew::Renderer::<App>::new().render();
}
