//! Schema checks for the order submission body.
//!
//! The body is walked as raw JSON so that every failing field is reported,
//! not just the first one serde trips over.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::actor_framework::EntityId;
use crate::domain::{LineItem, PlaceOrder};

const NAME_MIN: usize = 2;
const PHONE_MIN: usize = 10;
const ADDRESS_MIN: usize = 5;

/// One failing field: where, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path such as `items[0].quantity`; empty for the body itself.
    pub path: String,
    pub message: String,
}

/// All issues found in one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error: ")?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            if issue.path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{} at \"{}\"", issue.message, issue.path)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate an order submission and convert it to a [`PlaceOrder`].
///
/// Nothing is persisted here; a submission either passes every rule or is
/// rejected with the full list of issues.
pub fn parse_place_order(body: &Value) -> Result<PlaceOrder, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Value::Object(object) = body else {
        errors.push("", expected("object", body));
        return Err(errors);
    };

    let customer_name = min_length(
        &mut errors,
        object,
        "customerName",
        NAME_MIN,
        "Name must contain at least 2 characters",
    );
    let phone = min_length(&mut errors, object, "phone", PHONE_MIN, "Enter a valid phone number");
    let address = min_length(&mut errors, object, "address", ADDRESS_MIN, "Enter a valid address");
    let items = line_items(&mut errors, object);

    let (Some(customer_name), Some(phone), Some(address), Some(items)) =
        (customer_name, phone, address, items)
    else {
        return Err(errors);
    };
    if !errors.issues.is_empty() {
        return Err(errors);
    }

    PlaceOrder::new(customer_name, phone, address, items).map_err(|_| {
        errors.push("items", "Number is out of range");
        errors
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(wanted: &str, got: &Value) -> String {
    format!("Expected {wanted}, received {}", type_name(got))
}

fn min_length(
    errors: &mut ValidationErrors,
    object: &Map<String, Value>,
    key: &str,
    min: usize,
    message: &str,
) -> Option<String> {
    match object.get(key) {
        None => {
            errors.push(key, "Required");
            None
        }
        Some(Value::String(text)) if text.chars().count() < min => {
            errors.push(key, message);
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            errors.push(key, expected("string", other));
            None
        }
    }
}

fn line_items(errors: &mut ValidationErrors, object: &Map<String, Value>) -> Option<Vec<LineItem>> {
    let entries = match object.get("items") {
        None => {
            errors.push("items", "Required");
            return None;
        }
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            errors.push("items", expected("array", other));
            return None;
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let path = format!("items[{index}]");
        let Value::Object(fields) = entry else {
            errors.push(path, expected("object", entry));
            continue;
        };

        let product_id = number(errors, fields, &path, "productId")
            .and_then(|n| product_id(errors, &path, n));
        let quantity = number(errors, fields, &path, "quantity")
            .and_then(|n| quantity(errors, &path, n));
        let price = number(errors, fields, &path, "price").and_then(|n| price(errors, &path, n));

        if let (Some(product_id), Some(quantity), Some(price)) = (product_id, quantity, price) {
            items.push(LineItem {
                product_id,
                quantity,
                price,
            });
        }
    }
    Some(items)
}

fn number<'a>(
    errors: &mut ValidationErrors,
    fields: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Option<&'a Number> {
    match fields.get(key) {
        None => {
            errors.push(format!("{path}.{key}"), "Required");
            None
        }
        Some(Value::Number(n)) => Some(n),
        Some(other) => {
            errors.push(format!("{path}.{key}"), expected("number", other));
            None
        }
    }
}

/// Integer value of `n`. Floats with no fractional part (`2.0`) count.
fn integer(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < 1e38)
        .map(|f| f as i128)
}

fn product_id(errors: &mut ValidationErrors, path: &str, n: &Number) -> Option<EntityId> {
    let field = format!("{path}.productId");
    match integer(n) {
        None => errors.push(field, "Expected integer, received float"),
        Some(id) if id < 0 => errors.push(field, "Number must be greater than or equal to 0"),
        Some(id) => match EntityId::try_from(id) {
            Ok(id) => return Some(id),
            Err(_) => errors.push(field, format!("Number must be less than or equal to {}", EntityId::MAX)),
        },
    }
    None
}

fn quantity(errors: &mut ValidationErrors, path: &str, n: &Number) -> Option<u32> {
    let field = format!("{path}.quantity");
    match integer(n) {
        None => errors.push(field, "Expected integer, received float"),
        Some(q) if q < 1 => errors.push(field, "Number must be greater than or equal to 1"),
        Some(q) => match u32::try_from(q) {
            Ok(q) => return Some(q),
            Err(_) => errors.push(field, format!("Number must be less than or equal to {}", u32::MAX)),
        },
    }
    None
}

fn price(errors: &mut ValidationErrors, path: &str, n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    match Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        Ok(price) => Some(price.normalize()),
        Err(_) => {
            errors.push(format!("{path}.price"), "Number is out of range");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "customerName": "Ann Lee",
            "phone": "1234567890",
            "address": "1 Main St",
            "items": [
                {"productId": 1, "quantity": 2, "price": 10},
                {"productId": 2, "quantity": 1, "price": 5.25}
            ]
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut body = valid_body();
        body[field] = value;
        body
    }

    fn with_item(field: &str, value: Value) -> Value {
        let mut body = valid_body();
        body["items"][0][field] = value;
        body
    }

    fn with_items(items: Value) -> Value {
        with("items", items)
    }

    fn without_item_field(field: &str) -> Value {
        let mut body = valid_body();
        if let Some(item) = body["items"][0].as_object_mut() {
            item.remove(field);
        }
        body
    }

    #[test]
    fn test_valid_submission() {
        let order = parse_place_order(&valid_body()).unwrap();
        assert_eq!(order.customer_name, "Ann Lee");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_id, 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[1].price.to_string(), "5.25");
    }

    #[test]
    fn test_empty_items_are_accepted() {
        let order = parse_place_order(&with("items", json!([]))).unwrap();
        assert!(order.items.is_empty());
    }

    #[rstest]
    #[case::quantity(with_item("quantity", json!(2.0)))]
    #[case::product_id(with_item("productId", json!(1.0)))]
    fn test_whole_floats_count_as_integers(#[case] body: Value) {
        let order = parse_place_order(&body).unwrap();
        assert_eq!(order.items[0].product_id, 1);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_huge_price_within_range_is_accepted() {
        let order = parse_place_order(&with_items(json!([
            {"productId": 1, "quantity": 1, "price": 5e28}
        ])))
        .unwrap();
        assert_eq!(order.total().to_string(), "50000000000000000000000000000");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two Cyrillic letters are four bytes but two characters.
        assert!(parse_place_order(&with("customerName", json!("Ян"))).is_ok());
    }

    #[rstest]
    #[case::short_name(with("customerName", json!("A")), "customerName", "Name must contain at least 2 characters")]
    #[case::short_phone(with("phone", json!("12345")), "phone", "Enter a valid phone number")]
    #[case::short_address(with("address", json!("1 Ma")), "address", "Enter a valid address")]
    #[case::name_not_string(with("customerName", json!(42)), "customerName", "Expected string, received number")]
    #[case::items_not_array(with("items", json!({})), "items", "Expected array, received object")]
    #[case::item_not_object(with("items", json!([7])), "items[0]", "Expected object, received number")]
    #[case::zero_quantity(with_item("quantity", json!(0)), "items[0].quantity", "Number must be greater than or equal to 1")]
    #[case::negative_quantity(with_item("quantity", json!(-3)), "items[0].quantity", "Number must be greater than or equal to 1")]
    #[case::fractional_quantity(with_item("quantity", json!(1.5)), "items[0].quantity", "Expected integer, received float")]
    #[case::price_as_string(with_item("price", json!("10")), "items[0].price", "Expected number, received string")]
    #[case::product_id_null(with_item("productId", json!(null)), "items[0].productId", "Expected number, received null")]
    #[case::missing_price(without_item_field("price"), "items[0].price", "Required")]
    #[case::missing_product_id(without_item_field("productId"), "items[0].productId", "Required")]
    #[case::huge_quantity(with_item("quantity", json!(5_000_000_000u64)), "items[0].quantity", "Number must be less than or equal to 4294967295")]
    #[case::price_above_decimal_range(with_item("price", json!(1e29)), "items[0].price", "Number is out of range")]
    #[case::price_below_decimal_precision(with_item("price", json!(1e-30)), "items[0].price", "Number is out of range")]
    #[case::line_total_overflow(
        with_items(json!([{"productId": 1, "quantity": 4_000_000_000u64, "price": 1e20}])),
        "items",
        "Number is out of range"
    )]
    #[case::sum_overflow(
        with_items(json!([
            {"productId": 1, "quantity": 1, "price": 5e28},
            {"productId": 2, "quantity": 1, "price": 5e28}
        ])),
        "items",
        "Number is out of range"
    )]
    fn test_single_issue(#[case] body: Value, #[case] path: &str, #[case] message: &str) {
        let errors = parse_place_order(&body).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[ValidationIssue {
                path: path.to_string(),
                message: message.to_string(),
            }]
        );
    }

    #[test]
    fn test_all_issues_are_reported_in_field_order() {
        let body = json!({"customerName": "A", "address": "1 Main St"});
        let errors = parse_place_order(&body).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Validation error: Name must contain at least 2 characters at \"customerName\"; \
             Required at \"phone\"; Required at \"items\""
        );
    }

    #[test]
    fn test_body_must_be_object() {
        let errors = parse_place_order(&json!([1, 2])).unwrap_err();
        assert_eq!(errors.to_string(), "Validation error: Expected object, received array");
    }
}
