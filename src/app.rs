//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::config::DashboardConfig;
use crate::pages::Dashboard;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    log::info!("dashboard starting against {}", config.api_base);

    // Provide global state to all components
    provide_global_state(config);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <main class="container mx-auto px-4 py-8">
                    <h1 class="text-3xl font-bold mb-6">"GEKKO Optimization Results"</h1>

                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Anything other than `/` points back at the dashboard
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h2 class="text-2xl font-bold mb-2">"Page Not Found"</h2>
            <p class="text-gray-400 mb-6">"The results dashboard lives at the site root."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
