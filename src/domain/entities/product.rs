//! Product entity and the palindrome discount rule.

use std::borrow::Cow;

use super::promotion::Promotion;
use crate::domain::errors::ValidationError;

/// Discount granted when a shopper searches for a palindrome.
pub const PALINDROME_DISCOUNT: i32 = 50;

/// Code carried by the promotion synthesized for palindrome searches.
pub const PALINDROME_PROMOTION_CODE: &str = "PALINDROME";

/// An immutable catalog entry.
///
/// The price is guaranteed to be non-negative. A product may be associated
/// with one [`Promotion`]; all derived prices are computed on demand from
/// that association. Changing the promotion yields a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: i64,
    title: String,
    description: Option<String>,
    price: f64,
    image_url: Option<String>,
    promotion: Option<Promotion>,
    is_palindrome_discount: bool,
}

impl Product {
    /// Creates a product without a palindrome discount.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativePrice`] when `price` is negative
    /// or not a number.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: Option<String>,
        price: f64,
        image_url: Option<String>,
        promotion: Option<Promotion>,
    ) -> Result<Self, ValidationError> {
        // NaN fails this comparison as well
        if !(price >= 0.0) {
            return Err(ValidationError::NegativePrice { price });
        }

        Ok(Self {
            id,
            title: title.into(),
            description,
            price,
            image_url,
            promotion,
            is_palindrome_discount: false,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// List price before any promotion.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// True when the current promotion was granted by a palindrome search.
    pub fn is_palindrome_discount(&self) -> bool {
        self.is_palindrome_discount
    }

    pub fn has_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Price after the associated promotion, or the list price without one.
    pub fn final_price(&self) -> f64 {
        match &self.promotion {
            Some(promotion) => promotion.apply_discount(self.price),
            None => self.price,
        }
    }

    /// Amount saved through the promotion; zero without one.
    pub fn discount_amount(&self) -> f64 {
        if self.promotion.is_none() {
            return 0.0;
        }
        self.price - self.final_price()
    }

    /// Applies the palindrome promotion when it beats the current one.
    ///
    /// Products without a promotion, or whose promotion is below
    /// [`PALINDROME_DISCOUNT`], come back as a new product carrying a
    /// synthetic `PALINDROME` promotion (reusing the existing promotion id,
    /// or `0`) and flagged as a palindrome discount. Products that already
    /// have an equal or better discount are returned borrowed and untouched.
    pub fn apply_palindrome_discount(&self) -> Cow<'_, Product> {
        let current = self.promotion.as_ref().map(Promotion::discount);
        if current.is_some_and(|discount| discount >= PALINDROME_DISCOUNT) {
            return Cow::Borrowed(self);
        }

        let promotion = Promotion::palindrome(self.promotion.as_ref().map_or(0, Promotion::id));

        Cow::Owned(Product {
            promotion: Some(promotion),
            is_palindrome_discount: true,
            ..self.clone()
        })
    }
}
