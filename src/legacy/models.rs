//! Flat id-keyed merging of raw JSON models.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A raw model: the JSON object as received.
pub type Record = Map<String, Value>;

/// Collections by name, each keyed by model id.
pub type Collections = IndexMap<String, IndexMap<String, Record>>;

fn model_id(model: &Record) -> Option<String> {
    match model.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Merge `payload[name]` (one object or an array of objects) into
/// `collections[name]` and return the affected ids in payload order.
///
/// Merging is shallow: incoming keys win, incoming `null`s are ignored, and
/// keys missing from the update keep their stored values. Models without an
/// id are skipped.
pub fn add_models(collections: &mut Collections, name: &str, payload: &Value) -> Vec<String> {
    let models: Vec<&Record> = match payload.get(name) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        Some(Value::Object(model)) => vec![model],
        _ => Vec::new(),
    };

    let mut ids = Vec::with_capacity(models.len());
    for model in models {
        let Some(id) = model_id(model) else {
            tracing::trace!(collection = name, "skipping model without id");
            continue;
        };
        let record = collections
            .entry(name.to_string())
            .or_default()
            .entry(id.clone())
            .or_default();
        for (key, value) in model {
            if !value.is_null() {
                record.insert(key.clone(), value.clone());
            }
        }
        ids.push(id);
    }
    ids
}
