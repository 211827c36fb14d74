//! # Validation Module
//!
//! Input validation utilities for the Bazaar storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (form inputs)                                       │
//! │  ├── Basic format checks (empty, required attributes)                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field format validation (email, phone, postal code)               │
//! │  └── Amount/quantity validation before store mutations                 │
//! │                                                                         │
//! │  Defense in depth: the store layer never trusts the form alone         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::validation::{validate_amount, validate_mobile};
//!
//! // Validate a deposit before creating the transaction
//! validate_amount(Money::from_tomans(500_000)).unwrap();
//!
//! // Validate a shipping phone number
//! validate_mobile("09123456789").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount / Quantity Validators
// =============================================================================

/// Validates a monetary amount for a wallet transaction.
///
/// ## Rules
/// - Must be strictly positive (the sign lives in the transaction type)
pub fn validate_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }
    Ok(())
}

/// Validates an item quantity.
///
/// ## Rules
/// - Must be strictly positive; zero/negative quantities are expressed by
///   removing the item, not by storing them
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field (names, address, city).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with a dot somewhere after it
///
/// This is a shape check, not RFC 5322; the store never sends mail.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates an Iranian mobile number.
///
/// ## Rules
/// - 11 digits starting with `09` (e.g. 09123456789)
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_mobile;
///
/// assert!(validate_mobile("09123456789").is_ok());
/// assert!(validate_mobile("9123456789").is_err());
/// assert!(validate_mobile("0912-345-678").is_err());
/// ```
pub fn validate_mobile(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() != 11 || !phone.starts_with("09") || !phone.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be 11 digits starting with 09".to_string(),
        });
    }

    Ok(())
}

/// Validates an Iranian postal code (10 digits).
pub fn validate_postal_code(postal_code: &str) -> ValidationResult<()> {
    let postal_code = postal_code.trim();

    if postal_code.is_empty() {
        return Err(ValidationError::Required {
            field: "postal_code".to_string(),
        });
    }

    if postal_code.len() != 10 || !postal_code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "postal_code".to_string(),
            reason: "must be 10 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(Money::from_tomans(500_000)).is_ok());
        assert!(validate_amount(Money::zero()).is_err());
        assert!(validate_amount(Money::from_tomans(-100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("first_name", "علی").is_ok());
        assert!(validate_required("first_name", "").is_err());
        assert!(validate_required("first_name", "   ").is_err());
        assert!(validate_required("notes", &"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ali@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("ali.example.com").is_err());
        assert!(validate_email("ali@com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_validate_mobile() {
        assert!(validate_mobile("09123456789").is_ok());
        assert!(validate_mobile("").is_err());
        assert!(validate_mobile("9123456789").is_err());
        assert!(validate_mobile("091234567890").is_err());
        assert!(validate_mobile("0912345678a").is_err());
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("1234567890").is_ok());
        assert!(validate_postal_code("").is_err());
        assert!(validate_postal_code("12345").is_err());
        assert!(validate_postal_code("12345678ab").is_err());
    }
}
