//! Model Metadata
//!
//! Partitions the `get_options` document into the model's scalar properties
//! (the `APM` entry) and one property set per variable (every other key except
//! `INFO`), and merges in the separately fetched `get_model` document.

use serde_json::{Map, Value};

use super::fetch::FetchState;
use crate::error::{FetchError, FetchResult};

/// Options entry describing the solver run; never shown as a variable
pub const INFO_KEY: &str = "INFO";
/// Options entry holding the model-level properties
pub const APM_KEY: &str = "APM";
/// Top-level keys excluded from the variable partition
pub const RESERVED_KEYS: [&str; 2] = [INFO_KEY, APM_KEY];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Ordered `property -> value` rows of one table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet(Vec<(String, Value)>);

impl PropertySet {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    /// An object becomes one row per key; anything else a single `value` row
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Self(vec![("value".to_string(), other.clone())]),
        }
    }

    /// Parse a `get_model` body
    pub fn from_json(value: Value) -> FetchResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(&map)),
            _ => Err(FetchError::Parse("model document must be a JSON object".to_string())),
        }
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(property, display text)` pairs in document order
    pub fn rows(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(name, value)| (name.clone(), display_value(value)))
            .collect()
    }
}

/// Table cell text for a JSON scalar
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Per-variable property sets in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableSet(Vec<(String, PropertySet)>);

impl VariableSet {
    pub fn get(&self, name: &str) -> Option<&PropertySet> {
        self.0
            .iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, properties)| properties)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySet)> {
        self.0.iter().map(|(name, properties)| (name.as_str(), properties))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One partition of the metadata document
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataSection {
    ModelProperties(PropertySet),
    VariableProperties(VariableSet),
}

/// The options document split by the reserved-key rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocument {
    pub model: PropertySet,
    pub variables: VariableSet,
}

impl MetadataDocument {
    /// Partition a decoded options object
    pub fn partition(options: &Map<String, Value>) -> Self {
        let model = options
            .get(APM_KEY)
            .map(PropertySet::from_value)
            .unwrap_or_default();

        let variables = options
            .iter()
            .filter(|(key, _)| !is_reserved(key))
            .map(|(key, value)| (key.clone(), PropertySet::from_value(value)))
            .collect();

        Self {
            model,
            variables: VariableSet(variables),
        }
    }

    /// Parse a `get_options` body
    pub fn from_json(value: Value) -> FetchResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::partition(&map)),
            _ => Err(FetchError::Parse("options document must be a JSON object".to_string())),
        }
    }
}

/// Browser tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Model,
    Variables,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Model, Tab::Variables];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Model => "Model",
            Tab::Variables => "Variables",
        }
    }

    pub fn toggled(self) -> Tab {
        match self {
            Tab::Model => Tab::Variables,
            Tab::Variables => Tab::Model,
        }
    }
}

/// Everything the metadata browser renders from.
///
/// The two fetches may land in either order; what is shown depends only on
/// their final states, never on arrival order. Each load gets a generation
/// number and results carrying an older one are dropped, so a slow request
/// from before a retry cannot overwrite the retry's outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataBrowserState {
    options: FetchState<MetadataDocument>,
    model: FetchState<PropertySet>,
    tab: Tab,
    generation: u64,
}

impl MetadataBrowserState {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn toggle(&mut self) {
        self.tab = self.tab.toggled();
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark both documents as in flight (mount and retry). Returns the
    /// generation the new fetches must report back with.
    pub fn begin_loading(&mut self) -> u64 {
        self.generation += 1;
        self.options = FetchState::Loading;
        self.model = FetchState::Loading;
        self.generation
    }

    /// Store an options result; `false` if it belongs to a superseded load
    pub fn apply_options(
        &mut self,
        generation: u64,
        result: FetchResult<MetadataDocument>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.options = result.into();
        true
    }

    /// Store a model result; `false` if it belongs to a superseded load
    pub fn apply_model(&mut self, generation: u64, result: FetchResult<PropertySet>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.model = result.into();
        true
    }

    /// Model tab content.
    ///
    /// The model document wins when it resolved. Otherwise the options-derived
    /// `APM` set is shown, as a default while the model fetch is pending or as
    /// a fallback when it failed.
    pub fn model_properties(&self) -> FetchState<PropertySet> {
        match (&self.model, &self.options) {
            (FetchState::Ready(model), _) => FetchState::Ready(model.clone()),
            (_, FetchState::Ready(options)) => FetchState::Ready(options.model.clone()),
            (FetchState::Failed(err), FetchState::Failed(_)) => FetchState::Failed(err.clone()),
            _ => FetchState::Loading,
        }
    }

    /// Variables tab content
    pub fn variables(&self) -> FetchState<VariableSet> {
        self.options.clone().map(|document| document.variables)
    }

    /// Content of the selected tab
    pub fn active_section(&self) -> FetchState<MetadataSection> {
        match self.tab {
            Tab::Model => self.model_properties().map(MetadataSection::ModelProperties),
            Tab::Variables => self.variables().map(MetadataSection::VariableProperties),
        }
    }
}
