//! Property Table Component
//!
//! Two-column (Property, Value) table used by both metadata tabs.

use leptos::*;

use crate::state::metadata::PropertySet;

#[component]
pub fn PropertyTable(properties: PropertySet) -> impl IntoView {
    let rows = properties.rows();
    let empty = rows.is_empty();

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="py-1 pr-4">"Property"</th>
                        <th class="py-1">"Value"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|(name, value)| view! {
                        <tr class="border-b border-gray-800 odd:bg-gray-800/50">
                            <td class="py-1 pr-4 font-mono">{name}</td>
                            <td class="py-1 font-mono">{value}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            {empty.then(|| view! {
                <p class="text-gray-500 text-sm py-2">"No properties"</p>
            })}
        </div>
    }
}
