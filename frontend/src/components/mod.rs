pub mod navbar;
pub mod registration;
pub mod theme_toggle;
pub mod verification;
pub mod widgets;
