//! State Management
//!
//! Pure dashboard models (plot membership, datasets, metadata, resize
//! fan-out) plus the reactive global context that carries them.

pub mod dataset;
pub mod fetch;
pub mod global;
pub mod metadata;
pub mod plots;
pub mod resize;

pub use dataset::{build_series, SeriesDescriptor, SeriesMode, TimeSeriesDataset, TIME_KEY};
pub use fetch::FetchState;
pub use global::{provide_global_state, GlobalState};
pub use metadata::{
    MetadataBrowserState, MetadataDocument, MetadataSection, PropertySet, Tab, VariableSet,
};
pub use plots::{PlotCollection, PlotEntry, PlotId};
pub use resize::{ResizeHub, ResizeSubscription};
