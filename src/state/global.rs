//! Global Application State
//!
//! Shared context for every component: configuration, the resize fan-out and
//! the error toast.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::resize::ResizeHub;
use crate::config::DashboardConfig;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Runtime configuration, fixed after startup
    pub config: Rc<DashboardConfig>,
    /// Window resize fan-out to mounted plots
    pub resize_hub: ResizeHub,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Pending auto-dismiss for the current message
    toast_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Provide global state to the component tree
pub fn provide_global_state(config: DashboardConfig) {
    provide_context(GlobalState::new(config));
}

impl GlobalState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Rc::new(config),
            resize_hub: ResizeHub::new(),
            error: create_rw_signal(None),
            toast_timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Show an error message (auto-clears after the configured timeout).
    ///
    /// A newer message restarts the countdown; dropping the previous
    /// `Timeout` cancels it.
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        let timer = Timeout::new(self.config.toast_timeout_ms, move || {
            error_signal.try_set(None);
        });
        *self.toast_timer.borrow_mut() = Some(timer);
    }

    /// Clear error message
    pub fn clear_error(&self) {
        *self.toast_timer.borrow_mut() = None;
        self.error.set(None);
    }
}
