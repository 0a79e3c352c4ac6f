use serde_json as json;
use serde_yaml as yaml;
use tracing::*;

// Resources show up in two in-memory shapes: a parsed JSON document tree
// (what an apiserver response deserializes into) and a key-ordered YAML
// mapping (what an edited manifest deserializes into).  The decoder reads
// fields through this trait so the decoding logic is written once against
// either shape.
//
// Lookups degrade instead of failing: a missing key, a null, or a value of
// the wrong type all read as None.
pub trait FieldSource: Copy + Sized {
    /// String-valued field.
    fn string(self, key: &str) -> Option<String>;

    /// 64-bit integer field, using the underlying format's coercion rules.
    fn integer(self, key: &str) -> Option<i64>;

    /// Mapping-shaped child, e.g., the metadata envelope.
    fn nested(self, key: &str) -> Option<Self>;

    /// Sequence-shaped child, narrowed to its mapping-shaped elements;
    /// anything else in the sequence is skipped.
    fn entries(self, key: &str) -> Option<Vec<Self>>;

    /// Mapping-shaped child copied out as an opaque JSON map.
    fn opaque(self, key: &str) -> Option<json::Map<String, json::Value>>;
}

impl FieldSource for &json::Value {
    fn string(self, key: &str) -> Option<String> {
        self.get(key)?.as_str().map(String::from)
    }

    fn integer(self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    fn nested(self, key: &str) -> Option<Self> {
        self.get(key).filter(|child| child.is_object())
    }

    fn entries(self, key: &str) -> Option<Vec<Self>> {
        let elements = self.get(key)?.as_array()?;
        let mut kept = vec![];
        for element in elements {
            if element.is_object() {
                kept.push(element);
            } else {
                warn!("skipping non-mapping entry in {key}: {element:?}");
            }
        }
        Some(kept)
    }

    fn opaque(self, key: &str) -> Option<json::Map<String, json::Value>> {
        self.get(key)?.as_object().cloned()
    }
}

impl FieldSource for &yaml::Mapping {
    fn string(self, key: &str) -> Option<String> {
        self.get(key)?.as_str().map(String::from)
    }

    fn integer(self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    fn nested(self, key: &str) -> Option<Self> {
        self.get(key)?.as_mapping()
    }

    fn entries(self, key: &str) -> Option<Vec<Self>> {
        let elements = self.get(key)?.as_sequence()?;
        let mut kept = vec![];
        for element in elements {
            match element.as_mapping() {
                Some(mapping) => kept.push(mapping),
                None => warn!("skipping non-mapping entry in {key}: {element:?}"),
            }
        }
        Some(kept)
    }

    fn opaque(self, key: &str) -> Option<json::Map<String, json::Value>> {
        Some(mapping_to_json(self.get(key)?.as_mapping()?))
    }
}

// YAML is a superset of what a JSON value can hold, so copying a mapping into
// the opaque spec bag drops whatever has no JSON equivalent: non-string keys,
// non-finite floats.  Tags are unwrapped to their inner value.
fn mapping_to_json(mapping: &yaml::Mapping) -> json::Map<String, json::Value> {
    mapping
        .iter()
        .filter_map(|(key, value)| Some((key.as_str()?.to_string(), value_to_json(value)?)))
        .collect()
}

fn value_to_json(value: &yaml::Value) -> Option<json::Value> {
    let converted = match value {
        yaml::Value::Null => json::Value::Null,
        yaml::Value::Bool(b) => json::Value::Bool(*b),
        yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json::Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                json::Value::Number(u.into())
            } else {
                json::Value::Number(json::Number::from_f64(n.as_f64()?)?)
            }
        },
        yaml::Value::String(s) => json::Value::String(s.clone()),
        yaml::Value::Sequence(elements) => json::Value::Array(elements.iter().filter_map(value_to_json).collect()),
        yaml::Value::Mapping(mapping) => json::Value::Object(mapping_to_json(mapping)),
        yaml::Value::Tagged(tagged) => value_to_json(&tagged.value)?,
    };
    Some(converted)
}
