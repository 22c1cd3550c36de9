//! Track ingestion from JSON documents
//!
//! A track document is either an array of sample objects or an object whose
//! values are sample objects (keyed by an arbitrary id). Both shapes go
//! through the same [`TrackLoader`]; each shape has its own [`SampleSource`]
//! adapter. Keyed documents are read in `serde_json::Map` iteration order,
//! which is sorted by key.

use crate::core::{Sample, Track, MISSING_COORDINATE_DEG, MISSING_TIMESTAMP_S};
use crate::validation::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Values substituted for fields absent from a sample object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleDefaults {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: f64,
}

impl Default for SampleDefaults {
    fn default() -> Self {
        Self {
            latitude: MISSING_COORDINATE_DEG,
            longitude: MISSING_COORDINATE_DEG,
            timestamp: MISSING_TIMESTAMP_S,
        }
    }
}

/// One container shape holding sample objects
pub trait SampleSource {
    /// Samples in document order
    fn samples(&self, defaults: &SampleDefaults) -> Result<Vec<Sample>, LoadError>;
}

/// `[ {..}, {..} ]`
pub struct ArraySource<'a>(pub &'a [Value]);

/// `{ "id": {..}, "id2": {..} }`
pub struct KeyedSource<'a>(pub &'a Map<String, Value>);

impl SampleSource for ArraySource<'_> {
    fn samples(&self, defaults: &SampleDefaults) -> Result<Vec<Sample>, LoadError> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, value)| parse_sample(&index.to_string(), value, defaults))
            .collect()
    }
}

impl SampleSource for KeyedSource<'_> {
    fn samples(&self, defaults: &SampleDefaults) -> Result<Vec<Sample>, LoadError> {
        self.0
            .iter()
            .map(|(key, value)| parse_sample(key, value, defaults))
            .collect()
    }
}

/// Builds tracks from JSON text, files or already-parsed values
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackLoader {
    defaults: SampleDefaults,
}

impl TrackLoader {
    pub fn new(defaults: SampleDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &SampleDefaults {
        &self.defaults
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Track, LoadError> {
        let text = fs::read_to_string(path)?;
        self.parse_str(&text)
    }

    pub fn parse_str(&self, text: &str) -> Result<Track, LoadError> {
        let document: Value = serde_json::from_str(text)?;
        self.from_value(&document)
    }

    pub fn from_value(&self, document: &Value) -> Result<Track, LoadError> {
        let samples = match document {
            Value::Array(items) => ArraySource(items).samples(&self.defaults)?,
            Value::Object(members) => KeyedSource(members).samples(&self.defaults)?,
            other => {
                return Err(LoadError::UnsupportedDocument { found: json_type_name(other) })
            }
        };
        Ok(Track::new(samples))
    }
}

/// Non-object entries carry no fields and become an all-default sample
fn parse_sample(id: &str, value: &Value, defaults: &SampleDefaults) -> Result<Sample, LoadError> {
    let Some(object) = value.as_object() else {
        return Ok(Sample::new(defaults.latitude, defaults.longitude, defaults.timestamp));
    };
    Ok(Sample {
        latitude: numeric_field(id, object, "lat", defaults.latitude)?,
        longitude: numeric_field(id, object, "lon", defaults.longitude)?,
        timestamp: numeric_field(id, object, "timestamp", defaults.timestamp)?,
    })
}

fn numeric_field(
    id: &str,
    object: &Map<String, Value>,
    field: &'static str,
    default: f64,
) -> Result<f64, LoadError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.as_f64().ok_or_else(|| LoadError::InvalidField {
            sample: id.to_string(),
            field,
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
