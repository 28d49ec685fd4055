//! mf2 ↔ jf2 conversion
//!
//! Pure functions, no I/O. mf2 wraps every property value in an array and
//! prefixes types with `h-`; jf2 unwraps single-element arrays to scalars and
//! carries the bare type string. Nested documents (embedded citations, author
//! cards) convert recursively.

use serde_json::{Map, Value};

use kindling_core::Jf2Document;

use crate::error::{CodecError, CodecResult};

/// Decode an mf2 JSON object into its flat jf2 form.
pub fn decode(value: &Value) -> CodecResult<Jf2Document> {
    let obj = value.as_object().ok_or(CodecError::NotAnObject)?;

    let doc_type = decode_type(obj)?;

    let mut map = Map::new();
    map.insert("type".to_string(), Value::String(doc_type));

    if let Some(properties) = obj.get("properties") {
        let properties = properties.as_object().ok_or(CodecError::NotAnObject)?;
        for (key, value) in properties {
            map.insert(key.clone(), decode_property(value)?);
        }
    }

    Ok(Jf2Document::from(map))
}

/// Encode a jf2 document back into the mf2 wire shape.
pub fn encode(doc: &Jf2Document) -> CodecResult<Value> {
    let doc_type = match doc.get("type") {
        None => return Err(CodecError::MissingType),
        Some(Value::String(t)) => t.clone(),
        Some(other) => return Err(CodecError::InvalidType(other.to_string())),
    };
    let mf2_type = if doc_type.starts_with("h-") {
        doc_type
    } else {
        format!("h-{doc_type}")
    };

    let mut properties = Map::new();
    for (key, value) in doc.iter() {
        if key == "type" {
            continue;
        }
        let items = match value {
            Value::Array(elements) => elements
                .iter()
                .map(encode_value)
                .collect::<CodecResult<Vec<Value>>>()?,
            single => vec![encode_value(single)?],
        };
        properties.insert(key.clone(), Value::Array(items));
    }

    let mut out = Map::new();
    out.insert(
        "type".to_string(),
        Value::Array(vec![Value::String(mf2_type)]),
    );
    out.insert("properties".to_string(), Value::Object(properties));
    Ok(Value::Object(out))
}

/// Pull the bare type string out of an mf2 object's `type` array.
fn decode_type(obj: &Map<String, Value>) -> CodecResult<String> {
    let type_field = obj.get("type").ok_or(CodecError::MissingType)?;
    let first = type_field
        .as_array()
        .and_then(|a| a.first())
        .and_then(Value::as_str)
        .ok_or_else(|| CodecError::InvalidType(type_field.to_string()))?;
    Ok(first.strip_prefix("h-").unwrap_or(first).to_string())
}

/// Decode one mf2 property value: unwrap single-element arrays, recurse into
/// nested mf2 objects.
fn decode_property(value: &Value) -> CodecResult<Value> {
    match value {
        Value::Array(elements) => {
            let mut decoded = elements
                .iter()
                .map(decode_element)
                .collect::<CodecResult<Vec<Value>>>()?;
            if decoded.len() == 1 {
                Ok(decoded.remove(0))
            } else {
                Ok(Value::Array(decoded))
            }
        }
        // Tolerate already-flat values rather than reject the document
        other => Ok(other.clone()),
    }
}

fn decode_element(value: &Value) -> CodecResult<Value> {
    if is_mf2_object(value) {
        Ok(decode(value)?.into_value())
    } else {
        Ok(value.clone())
    }
}

/// Encode one jf2 value: nested jf2 documents (objects carrying a string
/// `type`) become mf2 objects, everything else passes through.
fn encode_value(value: &Value) -> CodecResult<Value> {
    match value {
        Value::Object(map) if matches!(map.get("type"), Some(Value::String(_))) => {
            encode(&Jf2Document::from(map.clone()))
        }
        other => Ok(other.clone()),
    }
}

fn is_mf2_object(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|o| o.get("type"))
        .is_some_and(Value::is_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_entry() {
        let wire = json!({
            "type": ["h-entry"],
            "properties": {
                "name": ["Example"],
                "url": ["https://example.com/a"],
                "category": ["one", "two"]
            }
        });

        let doc = decode(&wire).unwrap();
        assert_eq!(doc.doc_type(), Some("entry"));
        assert_eq!(doc.name(), Some("Example"));
        assert_eq!(doc.url(), Some("https://example.com/a"));
        assert_eq!(doc.get("category"), Some(&json!(["one", "two"])));
    }

    #[test]
    fn test_encode_cite() {
        let doc = Jf2Document::from_value(json!({
            "type": "cite",
            "name": "Example",
            "url": "https://example.com/a"
        }))
        .unwrap();

        let wire = encode(&doc).unwrap();
        assert_eq!(
            wire,
            json!({
                "type": ["h-cite"],
                "properties": {
                    "name": ["Example"],
                    "url": ["https://example.com/a"]
                }
            })
        );
    }

    #[test]
    fn test_nested_author_card_round_trips() {
        let doc = Jf2Document::from_value(json!({
            "type": "cite",
            "name": "Post",
            "author": {
                "type": "card",
                "name": "Ada",
                "url": "https://ada.example"
            }
        }))
        .unwrap();

        let wire = encode(&doc).unwrap();
        assert_eq!(
            wire["properties"]["author"],
            json!([{
                "type": ["h-card"],
                "properties": {
                    "name": ["Ada"],
                    "url": ["https://ada.example"]
                }
            }])
        );

        let back = decode(&wire).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_decode_then_encode_is_identity_on_wire_values() {
        let wire = json!({
            "type": ["h-cite"],
            "properties": {
                "name": ["Example"],
                "summary": ["A summary"],
                "category": ["a", "b"]
            }
        });

        let round_tripped = encode(&decode(&wire).unwrap()).unwrap();
        assert_eq!(round_tripped, wire);
    }

    #[test]
    fn test_encode_then_decode_is_identity_on_documents() {
        let doc = Jf2Document::from_value(json!({
            "type": "cite",
            "name": "Example",
            "url": "https://example.com/a",
            "category": ["a", "b"]
        }))
        .unwrap();

        let back = decode(&encode(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_type_prefix_is_not_doubled() {
        let doc = Jf2Document::from_value(json!({"type": "h-cite", "name": "x"})).unwrap();
        let wire = encode(&doc).unwrap();
        assert_eq!(wire["type"], json!(["h-cite"]));
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        assert_eq!(decode(&json!("nope")), Err(CodecError::NotAnObject));
        assert_eq!(
            decode(&json!({"properties": {}})),
            Err(CodecError::MissingType)
        );
        assert!(matches!(
            decode(&json!({"type": 7})),
            Err(CodecError::InvalidType(_))
        ));
        assert!(matches!(
            decode(&json!({"type": []})),
            Err(CodecError::InvalidType(_))
        ));
    }

    #[test]
    fn test_encode_rejects_untyped_documents() {
        let doc = Jf2Document::from_value(json!({"name": "untyped"})).unwrap();
        assert_eq!(encode(&doc), Err(CodecError::MissingType));
    }

    #[test]
    fn test_decode_without_properties_yields_bare_document() {
        let doc = decode(&json!({"type": ["h-cite"]})).unwrap();
        assert_eq!(doc.doc_type(), Some("cite"));
        assert_eq!(doc.as_map().len(), 1);
    }
}
