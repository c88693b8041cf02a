//! Submit-time checks on a product draft

use thiserror::Error;

use super::product::ProductDraft;

/// Reason a draft cannot be submitted. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Price must be greater than zero")]
    PriceNotPositive,

    #[error("Quantity cannot be negative")]
    NegativeQuantity,
}

impl ProductDraft {
    /// Runs the submit rules in order and stops at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        // Written as a negation so NaN is rejected as well
        if !(self.price > 0.0) {
            return Err(ValidationError::PriceNotPositive);
        }
        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductDraft {
        ProductDraft::new("Desk", "Wood", 199.99, 5)
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        for name in ["", "   ", "\t\n"] {
            let draft = ProductDraft { name: name.to_string(), ..valid() };
            assert_eq!(draft.validate(), Err(ValidationError::NameRequired));
        }
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        for price in [0.0, -0.01, -100.0, f64::NAN] {
            let draft = ProductDraft { price, ..valid() };
            assert_eq!(draft.validate(), Err(ValidationError::PriceNotPositive));
        }
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let draft = ProductDraft { quantity: -1, ..valid() };
        assert_eq!(draft.validate(), Err(ValidationError::NegativeQuantity));

        let zero = ProductDraft { quantity: 0, ..valid() };
        assert_eq!(zero.validate(), Ok(()));
    }

    #[test]
    fn test_rules_stop_at_first_failure() {
        let draft = ProductDraft::new(" ", "", -1.0, -1);
        assert_eq!(draft.validate(), Err(ValidationError::NameRequired));

        let draft = ProductDraft::new("Desk", "", 0.0, -1);
        assert_eq!(draft.validate(), Err(ValidationError::PriceNotPositive));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            ValidationError::PriceNotPositive.to_string(),
            "Price must be greater than zero"
        );
        assert_eq!(
            ValidationError::NegativeQuantity.to_string(),
            "Quantity cannot be negative"
        );
    }
}
