//! Error Panel Component
//!
//! Failed-fetch state with a retry action.

use leptos::*;

use crate::error::FetchError;

#[component]
pub fn ErrorPanel(
    error: FetchError,
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-8 space-y-3 text-center" role="alert">
            <span class="text-red-400 text-sm">{error.to_string()}</span>
            <button
                type="button"
                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                on:click=move |_| on_retry.call(())
            >
                "Retry"
            </button>
        </div>
    }
}
