pub mod registration;
pub mod theme;
pub mod verification;
