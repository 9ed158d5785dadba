//! Plot Collection Component
//!
//! Owns plot membership. Widgets only ask to be removed; the collection
//! decides.

use leptos::*;

use super::plot_widget::PlotWidget;
use crate::state::global::GlobalState;
use crate::state::plots::{PlotCollection, PlotId};

#[component]
pub fn PlotCollectionPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let plots = create_rw_signal(PlotCollection::initialize());
    let can_remove = Signal::derive(move || plots.with(PlotCollection::can_remove));

    let on_remove = Callback::new(move |id: PlotId| {
        plots.update(|plots| {
            if plots.remove(id) {
                log::debug!("removed plot {} ({} left)", id, plots.len());
            }
        });
    });

    let add_plot = move |_| {
        plots.update(|plots| {
            let id = plots.add();
            log::debug!("added plot {} ({} total)", id, plots.len());
        });
    };

    // A membership change reflows the column; refit every plot next frame
    let hub = state.resize_hub.clone();
    create_effect(move |_| {
        let count = plots.with(PlotCollection::len);
        let hub = hub.clone();
        request_animation_frame(move || {
            let notified = hub.broadcast();
            log::debug!("{} plots on screen; {} refitted", count, notified);
        });
    });

    view! {
        <div class="space-y-4">
            <div class="plots-div space-y-4">
                <For
                    each=move || plots.with(|plots| plots.entries().to_vec())
                    key=|entry| entry.id
                    children=move |entry| view! {
                        <PlotWidget entry=entry can_remove=can_remove on_remove=on_remove />
                    }
                />
            </div>

            <button
                type="button"
                on:click=add_plot
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Add Plot"
            </button>
        </div>
    }
}
