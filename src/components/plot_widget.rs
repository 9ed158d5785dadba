//! Plot Widget
//!
//! One chart. Fetches the dataset once on mount, draws every series into its
//! own canvas, and refits to its container on viewport resize for as long as
//! it stays mounted.

use leptos::*;

use super::chart::{self, ChartLegend};
use super::error_panel::ErrorPanel;
use super::loading::ChartSkeleton;
use crate::api;
use crate::state::dataset::{build_series, TimeSeriesDataset};
use crate::state::fetch::FetchState;
use crate::state::global::GlobalState;
use crate::state::plots::{PlotEntry, PlotId};

/// A single chart in the plot collection
#[component]
pub fn PlotWidget(
    /// Membership entry; its render target names the canvas element
    entry: PlotEntry,
    /// Whether the remove control is shown
    #[prop(into)]
    can_remove: Signal<bool>,
    /// Asks the owning collection to drop this plot
    #[prop(into)]
    on_remove: Callback<PlotId>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let PlotEntry { id, render_target } = entry;
    let canvas_ref = create_node_ref::<html::Canvas>();
    let dataset = create_rw_signal(FetchState::<TimeSeriesDataset>::Loading);

    let series = create_memo(move |_| {
        dataset.with(|d| d.ready().map(build_series).unwrap_or_default())
    });
    let names = Signal::derive(move || {
        series.with(|s| s.iter().map(|d| d.name.clone()).collect::<Vec<_>>())
    });

    let state_for_load = state.clone();
    let load = Callback::new(move |()| {
        dataset.set(FetchState::Loading);

        let state = state_for_load.clone();
        spawn_local(async move {
            let result = api::fetch_dataset(&state.config).await;
            let failure = result.as_ref().err().map(ToString::to_string);

            // The widget may have been removed while the request was in flight
            if dataset.try_set(result.into()).is_some() {
                log::debug!("plot {} unmounted before its dataset arrived; discarded", id);
                return;
            }
            if let Some(message) = failure {
                log::warn!("plot {}: dataset fetch failed: {}", id, message);
                state.show_error(&format!("Plot {}: {}", id, message));
            }
        });
    });

    // Redraw when the series change or the canvas mounts
    create_effect(move |_| {
        series.with(|series| {
            if let Some(canvas) = canvas_ref.get() {
                chart::fit_canvas_to_container(&canvas);
                chart::draw_series(&canvas, series);
            }
        });
    });

    let subscription = state.resize_hub.subscribe(id, move || {
        if let Some(canvas) = canvas_ref.get_untracked() {
            if chart::fit_canvas_to_container(&canvas) {
                series.try_with_untracked(|series| chart::draw_series(&canvas, series));
            }
        }
    });
    on_cleanup(move || {
        drop(subscription);
        log::debug!("plot {} unmounted", id);
    });

    log::debug!("plot {} mounted", id);
    load.call(());

    view! {
        <div class="plot-div relative bg-gray-800 rounded-xl p-4">
            <Show when=move || can_remove.get()>
                <button
                    type="button"
                    class="plot-close absolute top-2 right-2 z-10 px-2 py-0.5 bg-red-600 hover:bg-red-700 rounded text-sm font-bold"
                    on:click=move |_| on_remove.call(id)
                >
                    "X"
                </button>
            </Show>

            <div class="relative w-full h-80">
                <canvas
                    id=render_target
                    node_ref=canvas_ref
                    class="absolute inset-0 w-full h-full rounded-lg"
                    class:invisible=move || series.with(Vec::is_empty)
                />

                {move || dataset.with(|d| match d {
                    FetchState::Loading => view! {
                        <div class="absolute inset-0"><ChartSkeleton /></div>
                    }.into_view(),
                    FetchState::Failed(error) => view! {
                        <div class="absolute inset-0">
                            <ErrorPanel error=error.clone() on_retry=load />
                        </div>
                    }.into_view(),
                    FetchState::Ready(data) if data.series_count() == 0 => view! {
                        <div class="absolute inset-0 flex items-center justify-center text-gray-500">
                            "No series to plot"
                        </div>
                    }.into_view(),
                    FetchState::Ready(_) => ().into_view(),
                })}
            </div>

            <ChartLegend names=names />
        </div>
    }
}
