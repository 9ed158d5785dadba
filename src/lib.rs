//! GEKKO Results Dashboard
//!
//! Single-page dashboard for GEKKO optimization output, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Any number of independent time-series plots over the `get_data` feed
//! - Model / Variables metadata browser over `get_options` and `get_model`
//! - Explicit loading, error and retry states for every fetch
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads from the server the page was loaded from over HTTP.
//! The models under [`state`] are plain Rust and are tested natively.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;

pub use app::App;
pub use config::{ConfigError, DashboardConfig};
pub use error::{FetchError, FetchResult};
