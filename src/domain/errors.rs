//! Validation failures raised while constructing domain values.

/// Invariant violation detected when a domain value is constructed.
///
/// Raised synchronously by the constructor of the offending value and never
/// recovered inside the domain; callers surface it as a client error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("discount out of range")]
    DiscountOutOfRange { discount: i32 },

    #[error("price must be non-negative")]
    NegativePrice { price: f64 },

    #[error("page must be non-negative")]
    NegativePage { page: i64 },

    #[error("pageSize must be positive")]
    NonPositivePageSize { page_size: i64 },
}

impl ValidationError {
    /// Name of the input field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::DiscountOutOfRange { .. } => "discount",
            Self::NegativePrice { .. } => "price",
            Self::NegativePage { .. } => "page",
            Self::NonPositivePageSize { .. } => "pageSize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::DiscountOutOfRange { discount: 150 }.to_string(),
            "discount out of range"
        );
        assert_eq!(
            ValidationError::NegativePrice { price: -1.0 }.to_string(),
            "price must be non-negative"
        );
        assert_eq!(
            ValidationError::NegativePage { page: -1 }.to_string(),
            "page must be non-negative"
        );
        assert_eq!(
            ValidationError::NonPositivePageSize { page_size: 0 }.to_string(),
            "pageSize must be positive"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::NegativePage { page: -3 }.field(), "page");
        assert_eq!(
            ValidationError::NonPositivePageSize { page_size: -5 }.field(),
            "pageSize"
        );
    }
}
