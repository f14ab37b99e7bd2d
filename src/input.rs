//! Host-side input types: the tabular payload, the viewport and the
//! settings-override map.
//!
//! These mirror the shape a host delivers on every update. Everything is
//! optional on purpose: a host may send a payload with no table, or a table
//! with no rows yet, and the builder turns that into an empty view model
//! instead of an error.

use crate::error::InputError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single opaque cell value, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An empty cell.
    #[default]
    Null,
    /// A boolean cell.
    Bool(bool),
    /// A numeric cell, kept in the host's own representation.
    Number(serde_json::Number),
    /// A text cell.
    Text(String),
    /// Any other JSON value (arrays, objects), passed through untouched.
    Other(serde_json::Value),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<f64> for CellValue {
    /// Non-finite numbers have no host representation and become `Null`.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null)
    }
}

/// Column metadata as delivered by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewColumn {
    /// The header text shown for the column. A missing or null name is empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DataViewColumn {
    /// Creates a column with the given display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// The tabular part of a host payload.
///
/// Both parts are optional; a table missing either one is treated as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataViewTable {
    /// Column descriptors in display order.
    #[serde(default)]
    pub columns: Option<Vec<DataViewColumn>>,
    /// Rows of cells in display order.
    #[serde(default)]
    pub rows: Option<Vec<Vec<CellValue>>>,
}

/// Per-object property overrides, keyed by `(object, property)`.
///
/// Hosts persist formatting choices here, e.g. `pagesize.numberofrows`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataViewObjects(BTreeMap<String, BTreeMap<String, serde_json::Value>>);

impl DataViewObjects {
    /// Creates an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an override map from its JSON form,
    /// e.g. `{"pagesize": {"numberofrows": 5}}`.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets a raw override value (builder pattern).
    pub fn with_value(
        mut self,
        object: impl Into<String>,
        property: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.0
            .entry(object.into())
            .or_default()
            .insert(property.into(), value);
        self
    }

    /// Sets a numeric override (builder pattern). Non-finite numbers are
    /// ignored, since they cannot be stored by the host.
    pub fn with_number(self, object: impl Into<String>, property: impl Into<String>, value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => self.with_value(object, property, serde_json::Value::Number(n)),
            None => self,
        }
    }

    /// Returns the raw override for `object.property`, if any.
    pub fn get(&self, object: &str, property: &str) -> Option<&serde_json::Value> {
        self.0.get(object).and_then(|props| props.get(property))
    }

    /// Returns the override for `object.property` if it is present and numeric.
    pub fn get_number(&self, object: &str, property: &str) -> Option<f64> {
        self.get(object, property).and_then(serde_json::Value::as_f64)
    }

    /// Returns true if no overrides are set.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }
}

/// Metadata attached to a host payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataViewMetadata {
    /// Persisted formatting overrides.
    #[serde(default)]
    pub objects: DataViewObjects,
}

/// A complete host payload for one update.
///
/// # Examples
///
/// ```rust
/// use paginated_table::input::DataView;
///
/// let view = DataView::from_json(r#"{
///     "table": {
///         "columns": [{"displayName": "Name"}, {"displayName": "Qty"}],
///         "rows": [["apples", 3], ["pears", 5]]
///     },
///     "metadata": {"objects": {"pagesize": {"numberofrows": 10}}}
/// }"#).unwrap();
///
/// assert_eq!(view.metadata.objects.get_number("pagesize", "numberofrows"), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataView {
    /// The table, if the host queried one.
    #[serde(default)]
    pub table: Option<DataViewTable>,
    /// Payload metadata.
    #[serde(default)]
    pub metadata: DataViewMetadata,
}

impl DataView {
    /// Creates a payload holding a complete table and no overrides.
    pub fn from_table<C, S>(columns: C, rows: Vec<Vec<CellValue>>) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: Some(DataViewTable {
                columns: Some(columns.into_iter().map(DataViewColumn::new).collect()),
                rows: Some(rows),
            }),
            metadata: DataViewMetadata::default(),
        }
    }

    /// Parses a payload from the host's JSON form.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attaches formatting overrides (builder pattern).
    pub fn with_objects(mut self, objects: DataViewObjects) -> Self {
        self.metadata.objects = objects;
        self
    }
}

/// Size of the host surface in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Available width.
    pub width: f64,
    /// Available height.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything the host hands over on a single update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateOptions {
    /// Size of the surface to render into.
    pub viewport: Viewport,
    /// The payload, absent when the host has nothing bound yet.
    pub data_view: Option<DataView>,
    /// Formatting overrides.
    pub objects: DataViewObjects,
}

impl UpdateOptions {
    /// Creates update options with no payload and no overrides.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Creates update options from a payload, taking the overrides from its
    /// metadata the way hosts deliver them.
    pub fn from_data_view(viewport: Viewport, data_view: DataView) -> Self {
        let objects = data_view.metadata.objects.clone();
        Self {
            viewport,
            data_view: Some(data_view),
            objects,
        }
    }

    /// Sets the payload (builder pattern), replacing the overrides with the
    /// ones in its metadata as [`UpdateOptions::from_data_view`] does.
    pub fn with_data_view(mut self, data_view: DataView) -> Self {
        self.objects = data_view.metadata.objects.clone();
        self.data_view = Some(data_view);
        self
    }

    /// Sets the overrides (builder pattern).
    pub fn with_objects(mut self, objects: DataViewObjects) -> Self {
        self.objects = objects;
        self
    }
}
