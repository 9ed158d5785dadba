//! Metadata Browser Component
//!
//! Model / Variables tabs over the options and model documents, both fetched
//! once on mount.

use leptos::*;

use super::error_panel::ErrorPanel;
use super::loading::ListSkeleton;
use super::property_table::PropertyTable;
use crate::api;
use crate::error::FetchResult;
use crate::state::fetch::FetchState;
use crate::state::global::GlobalState;
use crate::state::metadata::{
    MetadataBrowserState, MetadataSection, PropertySet, Tab, VariableSet,
};

#[component]
pub fn MetadataBrowser() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let browser = create_rw_signal(MetadataBrowserState::default());

    let load = Callback::new(move |()| {
        let Some(generation) = browser.try_update(MetadataBrowserState::begin_loading) else {
            return;
        };

        let options_state = state.clone();
        spawn_local(async move {
            let result = api::fetch_options(&options_state.config).await;
            let failure = failure_message(&result);
            // None once unmounted, false once a retry superseded this load
            if browser.try_update(|b| b.apply_options(generation, result)) == Some(true) {
                report(&options_state, "options", failure);
            }
        });

        let model_state = state.clone();
        spawn_local(async move {
            let result = api::fetch_model(&model_state.config).await;
            let failure = failure_message(&result);
            if browser.try_update(|b| b.apply_model(generation, result)) == Some(true) {
                report(&model_state, "model", failure);
            }
        });
    });

    // Only the selected tab's content; a result for the other tab leaves the
    // rendered section (and its collapsed groups) alone
    let tab = create_memo(move |_| browser.with(MetadataBrowserState::tab));
    let section = create_memo(move |_| browser.with(MetadataBrowserState::active_section));

    load.call(());

    view! {
        <div class="bg-gray-800 rounded-xl p-4">
            <ul class="flex border-b border-gray-700 mb-4">
                {Tab::ALL
                    .into_iter()
                    .map(|link| view! { <TabLink link=link active=tab browser=browser /> })
                    .collect_view()}
            </ul>

            <div class="tab-div max-h-[70vh] overflow-y-auto">
                {move || match section.get() {
                    FetchState::Loading => {
                        let rows = if tab.get_untracked() == Tab::Variables { 5 } else { 3 };
                        view! { <ListSkeleton count=rows /> }.into_view()
                    }
                    FetchState::Failed(error) => {
                        view! { <ErrorPanel error=error on_retry=load /> }.into_view()
                    }
                    FetchState::Ready(MetadataSection::ModelProperties(properties)) => {
                        view! { <PropertyTable properties=properties /> }.into_view()
                    }
                    FetchState::Ready(MetadataSection::VariableProperties(variables)) => {
                        view! { <VariablesList variables=variables /> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

fn failure_message<T>(result: &FetchResult<T>) -> Option<String> {
    result.as_ref().err().map(ToString::to_string)
}

fn report(state: &GlobalState, document: &str, failure: Option<String>) {
    if let Some(message) = failure {
        log::warn!("{} document fetch failed: {}", document, message);
        state.show_error(&format!("Metadata ({}): {}", document, message));
    }
}

#[component]
fn TabLink(link: Tab, active: Memo<Tab>, browser: RwSignal<MetadataBrowserState>) -> impl IntoView {
    let is_active = create_memo(move |_| active.get() == link);

    view! {
        <li class="mr-1">
            <button
                type="button"
                on:click=move |_| browser.update(|b| b.select(link))
                class=move || {
                    let base = "px-4 py-2 rounded-t-lg text-sm font-medium transition-colors";
                    if is_active.get() {
                        format!("{} bg-gray-700 text-white", base)
                    } else {
                        format!("{} text-gray-400 hover:text-white", base)
                    }
                }
            >
                {link.label()}
            </button>
        </li>
    }
}

#[component]
fn VariablesList(variables: VariableSet) -> impl IntoView {
    if variables.is_empty() {
        return view! { <p class="text-gray-500 text-sm">"No variables"</p> }.into_view();
    }
    variables
        .iter()
        .map(|(name, properties)| view! {
            <VariableGroup name=name.to_string() properties=properties.clone() />
        })
        .collect_view()
}

/// One variable's sub-table; the label toggles it open and closed
#[component]
fn VariableGroup(name: String, properties: PropertySet) -> impl IntoView {
    let (open, set_open) = create_signal(true);

    view! {
        <div class="tab-table-item mb-4">
            <button
                type="button"
                class="font-semibold text-primary-400 hover:underline mb-1"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {name}
            </button>
            <Show when=move || open.get()>
                <PropertyTable properties=properties.clone() />
            </Show>
        </div>
    }
}
