//! Dashboard Page
//!
//! The only screen: metadata browser on the left, plot collection on the
//! right.

use leptos::*;

use crate::components::{MetadataBrowser, PlotCollectionPanel};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One window listener for the page; plots subscribe through the hub
    let hub = state.resize_hub.clone();
    let listener = window_event_listener(ev::resize, move |_| {
        let notified = hub.broadcast();
        log::debug!("viewport resized; {} plots notified", notified);
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="grid md:grid-cols-12 gap-6">
            <aside class="md:col-span-3">
                <MetadataBrowser />
            </aside>

            <section class="md:col-span-9">
                <PlotCollectionPanel />
            </section>
        </div>
    }
}
