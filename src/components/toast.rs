//! Toast Notification Component
//!
//! Transient fetch-error notifications.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                error.get().map(|msg| {
                    let state = state.clone();
                    view! {
                        <ToastMessage message=msg on_dismiss=move || state.clear_error() />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    on_dismiss: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in">
            <span class="text-lg">"✕"</span>
            <span class="text-sm font-medium">{message}</span>
            <button
                type="button"
                class="ml-2 text-white/80 hover:text-white"
                on:click=move |_| on_dismiss()
            >
                "Dismiss"
            </button>
        </div>
    }
}
