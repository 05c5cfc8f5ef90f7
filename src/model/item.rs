//! # Item
//!
//! A coffee record. `price` is kept as the client's JSON number literal
//! (serde_json `arbitrary_precision`), so `456` never becomes `456.0` and
//! integers wider than 64 bits are not rounded through `f64`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::errors::{ModelError, ModelResult};

/// A coffee item, keyed by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Client-assigned primary key
    pub id: String,

    /// Display name
    pub name: String,

    /// Price; should be non-negative but this is not enforced
    pub price: Number,

    /// Whether the item can currently be ordered
    pub available: bool,
}

impl Item {
    /// Create an item
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Number,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available,
        }
    }

    /// Decode and validate a create body
    pub fn from_body(body: Option<&str>) -> ModelResult<Self> {
        let body = non_empty_body(body)?;
        let item: Item = serde_json::from_str(body)?;

        if item.id.trim().is_empty() {
            return Err(ModelError::EmptyField("id"));
        }

        Ok(item)
    }

    /// Apply a patch in place. The id is never touched.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = &patch.price {
            self.price = price.clone();
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}

/// Partial update for an existing item
///
/// Fields left as `None` keep their stored value. An `id` in the body is
/// accepted only when it repeats the path id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPatch {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl ItemPatch {
    /// Decode and validate an update body against the target id
    pub fn from_body(body: Option<&str>, path_id: &str) -> ModelResult<Self> {
        let body = non_empty_body(body)?;
        let patch: ItemPatch = serde_json::from_str(body)?;

        if let Some(body_id) = &patch.id {
            if body_id != path_id {
                return Err(ModelError::IdMismatch {
                    path: path_id.to_string(),
                    body: body_id.clone(),
                });
            }
        }

        if patch.is_empty() {
            return Err(ModelError::EmptyPatch);
        }

        Ok(patch)
    }

    /// True when no updatable field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.available.is_none()
    }
}

fn non_empty_body(body: Option<&str>) -> ModelResult<&str> {
    match body {
        Some(b) if !b.trim().is_empty() => Ok(b),
        _ => Err(ModelError::MissingBody),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_from_body() {
        let item = Item::from_body(Some(
            r#"{"id":"c123","name":"new cold coffee","price":456,"available":true}"#,
        ))
        .unwrap();

        assert_eq!(item.id, "c123");
        assert_eq!(item.price, Number::from(456));
        assert!(item.available);
    }

    #[test]
    fn test_price_keeps_integer_form() {
        let item = Item::from_body(Some(r#"{"id":"a","name":"x","price":456,"available":false}"#))
            .unwrap();
        let encoded = serde_json::to_string(&item).unwrap();
        assert!(encoded.contains("\"price\":456"));
        assert!(!encoded.contains("456.0"));
    }

    #[test]
    fn test_price_literal_survives_round_trip() {
        for price in ["1000000000000000000000000", "4.50", "-0.1"] {
            let body = format!(r#"{{"id":"a","name":"x","price":{price},"available":true}}"#);
            let item = Item::from_body(Some(&body)).unwrap();

            assert_eq!(item.price.to_string(), price);
            assert_eq!(serde_json::to_string(&item).unwrap(), body);
        }
    }

    #[test]
    fn test_item_missing_field_is_named() {
        let err = Item::from_body(Some(r#"{"name":"x","price":1,"available":true}"#)).unwrap_err();
        match err {
            ModelError::Malformed(msg) => assert!(msg.contains("id")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_item_rejects_bad_input() {
        assert_eq!(Item::from_body(None), Err(ModelError::MissingBody));
        assert_eq!(Item::from_body(Some("  ")), Err(ModelError::MissingBody));
        assert!(matches!(Item::from_body(Some("{not json")), Err(ModelError::Malformed(_))));
        assert!(matches!(
            Item::from_body(Some(r#"{"id":"a","name":"x","price":"cheap","available":true}"#)),
            Err(ModelError::Malformed(_))
        ));
        assert!(matches!(
            Item::from_body(Some(r#"{"id":"a","name":"x","price":1,"available":true,"size":"L"}"#)),
            Err(ModelError::Malformed(_))
        ));
        assert_eq!(
            Item::from_body(Some(r#"{"id":" ","name":"x","price":1,"available":true}"#)),
            Err(ModelError::EmptyField("id"))
        );
    }

    #[test]
    fn test_negative_price_is_accepted() {
        let item = Item::from_body(Some(r#"{"id":"a","name":"x","price":-1.5,"available":true}"#));
        assert!(item.is_ok());
    }

    #[test]
    fn test_patch_apply() {
        let mut item = Item::new("c1", "latte", Number::from(300), true);
        let patch = ItemPatch::from_body(Some(r#"{"price":500}"#), "c1").unwrap();

        item.apply(&patch);

        assert_eq!(item.price, Number::from(500));
        assert_eq!(item.name, "latte");
        assert_eq!(item.id, "c1");
    }

    #[test]
    fn test_patch_id_rules() {
        assert!(ItemPatch::from_body(Some(r#"{"id":"c1","name":"mocha"}"#), "c1").is_ok());
        assert!(matches!(
            ItemPatch::from_body(Some(r#"{"id":"c2","name":"mocha"}"#), "c1"),
            Err(ModelError::IdMismatch { .. })
        ));
    }

    #[test]
    fn test_patch_requires_a_field() {
        assert_eq!(ItemPatch::from_body(Some("{}"), "c1"), Err(ModelError::EmptyPatch));
        assert_eq!(
            ItemPatch::from_body(Some(r#"{"id":"c1"}"#), "c1"),
            Err(ModelError::EmptyPatch)
        );
    }

    #[test]
    fn test_patch_serialization_skips_id() {
        let patch = ItemPatch::from_body(Some(r#"{"id":"c1","available":false}"#), "c1").unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"available": false}));
    }
}
