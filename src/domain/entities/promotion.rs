//! Promotion entity: a percentage discount identified by a code.

use crate::domain::errors::ValidationError;

/// A percentage discount attached to catalog products.
///
/// The discount is guaranteed to lie within `0..=100` once constructed.
/// Promotions are plain values: cloning one is cheap and products hold
/// their own copy rather than a shared handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    id: i64,
    code: String,
    discount: i32,
}

impl Promotion {
    /// Lowest accepted discount percentage.
    pub const MIN_DISCOUNT: i32 = 0;
    /// Highest accepted discount percentage.
    pub const MAX_DISCOUNT: i32 = 100;

    /// Creates a promotion.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DiscountOutOfRange`] when `discount` is
    /// below 0 or above 100.
    pub fn new(id: i64, code: impl Into<String>, discount: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN_DISCOUNT..=Self::MAX_DISCOUNT).contains(&discount) {
            return Err(ValidationError::DiscountOutOfRange { discount });
        }

        Ok(Self {
            id,
            code: code.into(),
            discount,
        })
    }

    /// The promotion granted to palindrome searches, keeping `id`.
    pub(crate) fn palindrome(id: i64) -> Self {
        Self {
            id,
            code: super::product::PALINDROME_PROMOTION_CODE.to_string(),
            discount: super::product::PALINDROME_DISCOUNT,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Discount percentage in `0..=100`.
    pub fn discount(&self) -> i32 {
        self.discount
    }

    /// Returns `price` reduced by this promotion's percentage.
    ///
    /// No rounding is applied; presentation layers format the value.
    pub fn apply_discount(&self, price: f64) -> f64 {
        price - (price * f64::from(self.discount) / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_creation() {
        let promotion = Promotion::new(1, "SUMMER50", 50).unwrap();

        assert_eq!(promotion.id(), 1);
        assert_eq!(promotion.code(), "SUMMER50");
        assert_eq!(promotion.discount(), 50);
    }

    #[test]
    fn test_negative_discount_rejected() {
        let err = Promotion::new(1, "INVALID", -10).unwrap_err();
        assert_eq!(err, ValidationError::DiscountOutOfRange { discount: -10 });
        assert_eq!(err.to_string(), "discount out of range");
    }

    #[test]
    fn test_discount_above_hundred_rejected() {
        assert!(Promotion::new(1, "INVALID", 150).is_err());
        assert!(Promotion::new(1, "INVALID", 101).is_err());
    }

    #[test]
    fn test_boundary_discounts_accepted() {
        assert!(Promotion::new(1, "FREE", 100).is_ok());
        assert!(Promotion::new(2, "NONE", 0).is_ok());
    }

    #[test]
    fn test_apply_discount() {
        let half = Promotion::new(1, "HALF", 50).unwrap();
        assert_eq!(half.apply_discount(100.0), 50.0);
        assert_eq!(half.apply_discount(200.0), 100.0);

        let save20 = Promotion::new(1, "SAVE20", 20).unwrap();
        let save75 = Promotion::new(2, "SAVE75", 75).unwrap();
        assert_eq!(save20.apply_discount(100.0), 80.0);
        assert_eq!(save75.apply_discount(100.0), 25.0);
    }

    #[test]
    fn test_apply_discount_edges() {
        let none = Promotion::new(1, "NONE", 0).unwrap();
        let free = Promotion::new(2, "FREE", 100).unwrap();

        assert_eq!(none.apply_discount(100.0), 100.0);
        assert_eq!(free.apply_discount(100.0), 0.0);
    }

    #[test]
    fn test_apply_discount_matches_percentage_formula() {
        for discount in [0, 1, 13, 33, 50, 67, 99, 100] {
            let promotion = Promotion::new(1, "P", discount).unwrap();
            for price in [0.0, 1.0, 19.99, 1299.99] {
                let expected = price * (1.0 - f64::from(discount) / 100.0);
                assert!((promotion.apply_discount(price) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_apply_discount_decimal_price() {
        let promotion = Promotion::new(1, "SAVE20", 20).unwrap();
        assert!((promotion.apply_discount(99.99) - 79.992).abs() < 1e-9);
    }
}
