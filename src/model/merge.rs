//! Smart merge: incoming data wins, incoming absence never does.
//!
//! Every normalized record is merged field by field. A field that is
//! absent (`None`) or `null` in an update keeps whatever the store already
//! holds, so a sparse response can never erase data fetched earlier.

use serde_json::Value;

/// Field-wise merge of an incoming value into an existing one.
pub trait Merge {
    fn merge(&mut self, incoming: Self);
}

/// Merge an optional incoming field into an optional current field.
///
/// `None` keeps `current`; `Some` fills an empty slot or merges into the
/// existing value.
pub fn merge_field<T: Merge>(current: &mut Option<T>, incoming: Option<T>) {
    let Some(value) = incoming else {
        return;
    };
    if let Some(existing) = current.as_mut() {
        existing.merge(value);
    } else {
        *current = Some(value);
    }
}

/// Deep merge for opaque JSON blobs (images, attachments, actions).
///
/// Objects merge key-wise and recursively, `null` never overwrites at any
/// depth, and every other incoming value replaces the current one.
pub fn merge_value(current: &mut Value, incoming: Value) {
    match (current, incoming) {
        (_, Value::Null) => {}
        (Value::Object(existing), Value::Object(update)) => {
            for (key, value) in update {
                match existing.get_mut(&key) {
                    Some(slot) => merge_value(slot, value),
                    None if value.is_null() => {}
                    None => {
                        existing.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

impl Merge for Value {
    fn merge(&mut self, incoming: Self) {
        merge_value(self, incoming);
    }
}

impl<T> Merge for Vec<T> {
    fn merge(&mut self, incoming: Self) {
        *self = incoming;
    }
}

macro_rules! replace_on_merge {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Merge for $ty {
                fn merge(&mut self, incoming: Self) {
                    *self = incoming;
                }
            }
        )+
    };
}

replace_on_merge!(String, bool, u64, i64);

/// Merge the listed `Option` fields of `$incoming` into `$current`.
macro_rules! merge_fields {
    ($current:ident, $incoming:ident; $($field:ident),+ $(,)?) => {
        $(
            $crate::model::merge::merge_field(&mut $current.$field, $incoming.$field);
        )+
    };
}

pub(crate) use merge_fields;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_field_keeps_current() {
        let mut name = Some("Foo".to_string());
        merge_field(&mut name, None);
        assert_eq!(name.as_deref(), Some("Foo"));
    }

    #[test]
    fn present_field_replaces_current() {
        let mut name = Some("Foo".to_string());
        merge_field(&mut name, Some("Bar".to_string()));
        assert_eq!(name.as_deref(), Some("Bar"));
    }

    #[test]
    fn present_field_fills_empty_slot() {
        let mut count: Option<u64> = None;
        merge_field(&mut count, Some(3));
        assert_eq!(count, Some(3));
    }

    #[test]
    fn value_merge_is_deep_and_skips_nulls() {
        let mut current = json!({
            "original": { "url": "a.png", "metadata": { "width": 10 } },
            "large": { "url": "b.png" }
        });
        merge_value(
            &mut current,
            json!({
                "original": { "metadata": { "height": 20 }, "url": null },
                "large": null,
                "small": { "url": "c.png" }
            }),
        );
        assert_eq!(
            current,
            json!({
                "original": { "url": "a.png", "metadata": { "width": 10, "height": 20 } },
                "large": { "url": "b.png" },
                "small": { "url": "c.png" }
            })
        );
    }

    #[test]
    fn value_merge_replaces_arrays_and_scalars() {
        let mut current = json!({ "tags": ["a", "b"], "kind": "image" });
        merge_value(&mut current, json!({ "tags": ["c"], "kind": "embed" }));
        assert_eq!(current, json!({ "tags": ["c"], "kind": "embed" }));
    }

    #[test]
    fn null_into_empty_slot_stays_absent() {
        let mut current = json!({});
        merge_value(&mut current, json!({ "missing": null }));
        assert_eq!(current, json!({}));
    }
}
