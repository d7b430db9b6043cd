//! Browser-independent core of the PharmaLedger site.
//!
//! Everything the frontend components decide (which theme applies, whether a
//! wizard step may advance, which verification panel to show, what a remote
//! endpoint answered) is computed here so it can be tested without a DOM.
//! The frontend crate only wires these types to Yew components and `web-sys`.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod requests;
pub mod scanner;
pub mod store;
pub mod validation;
pub mod wizard;
