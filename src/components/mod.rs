//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod error_panel;
pub mod loading;
pub mod metadata_browser;
pub mod plot_collection;
pub mod plot_widget;
pub mod property_table;
pub mod toast;

pub use chart::ChartLegend;
pub use error_panel::ErrorPanel;
pub use loading::{ChartSkeleton, ListSkeleton};
pub use metadata_browser::MetadataBrowser;
pub use plot_collection::PlotCollectionPanel;
pub use plot_widget::PlotWidget;
pub use property_table::PropertyTable;
pub use toast::Toast;
