mod back_to_top;
mod contact_form;
mod loading_overlay;
mod reveal;
mod scroll_progress;
mod stats_counter;

pub use back_to_top::BackToTop;
pub use contact_form::ContactForm;
pub use loading_overlay::LoadingOverlay;
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
pub use stats_counter::StatsCounter;
