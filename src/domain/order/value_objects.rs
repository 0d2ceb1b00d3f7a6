//! Order Context - Value Objects

use rust_decimal::Decimal;
use serde_json::Value;

use super::OrderError;

/// The items of an order: an opaque, non-empty JSON array.
///
/// Items are persisted verbatim; no menu lookup or per-item validation
/// happens anywhere in the service.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItems(Value);

impl OrderItems {
    pub fn new(value: Value) -> Result<Self, OrderError> {
        match value.as_array() {
            None => Err(OrderError::InvalidItems("items must be a JSON array")),
            Some(arr) if arr.is_empty() => {
                Err(OrderError::InvalidItems("items must not be empty"))
            }
            Some(_) => Ok(Self(value)),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// The order total: a non-negative decimal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotal(Decimal);

impl OrderTotal {
    pub fn new(amount: Decimal) -> Result<Self, OrderError> {
        if amount.is_sign_negative() {
            return Err(OrderError::InvalidTotal("total must not be negative"));
        }
        Ok(Self(amount))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for OrderTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_must_be_array() {
        assert!(OrderItems::new(json!({"name": "pizza"})).is_err());
        assert!(OrderItems::new(json!("pizza")).is_err());
        assert!(OrderItems::new(json!(null)).is_err());
    }

    #[test]
    fn test_items_must_not_be_empty() {
        assert!(OrderItems::new(json!([])).is_err());
    }

    #[test]
    fn test_items_accepts_opaque_entries() {
        let items = json!([{"name": "pizza", "qty": 2}, "refrigerante"]);
        let vo = OrderItems::new(items.clone()).unwrap();
        assert_eq!(vo.as_value(), &items);
    }

    #[test]
    fn test_total_rejects_negative() {
        assert!(OrderTotal::new(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_total_accepts_zero_and_positive() {
        assert!(OrderTotal::new(Decimal::ZERO).is_ok());
        let total = OrderTotal::new(Decimal::new(4250, 2)).unwrap();
        assert_eq!(total.to_string(), "42.50");
    }
}
