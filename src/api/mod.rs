//! API Access
//!
//! Requests against the results server the page was loaded from.

pub mod client;

pub use client::{fetch_dataset, fetch_model, fetch_options};
