//! # Validation Module
//!
//! Field-level parsing for text typed into the front-end's forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end                                                    │
//! │  └── Required markers, number inputs                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Forms (forms.rs) using THIS MODULE                           │
//! │  ├── Blank → Required                                                  │
//! │  └── "12abc" → InvalidFormat                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: DataStore                                                    │
//! │  └── Referential checks (store, customer, supplier exist)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mobilefixer_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("quantity", "15").unwrap(), 15);
//! assert!(parse_price("buy price", "abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ESTIMATED_DAYS, MAX_PRICE_MINOR, MAX_QUANTITY_CHANGE, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Returns the trimmed value, or `Required` when blank.
pub fn require(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value.to_string())
}

/// Blank optional fields become `None`.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be blank
/// - Digits plus `+ - ( )` and spaces only
/// - At least 7 digits
///
/// The number is kept exactly as typed (trimmed): customers are looked up
/// by exact string match.
pub fn validate_phone(field: &str, phone: &str) -> ValidationResult<String> {
    let phone = require(field, phone)?;

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
    {
        return Err(ValidationError::invalid(
            field,
            "must contain only digits, spaces, and + - ( )",
        ));
    }

    if phone.chars().filter(char::is_ascii_digit).count() < 7 {
        return Err(ValidationError::invalid(field, "must have at least 7 digits"));
    }

    Ok(phone)
}

/// Trims each issue and drops blanks; at least one must remain.
pub fn validate_issues(issues: &[String]) -> ValidationResult<Vec<String>> {
    let issues: Vec<String> = issues
        .iter()
        .map(|issue| issue.trim())
        .filter(|issue| !issue.is_empty())
        .map(str::to_string)
        .collect();

    if issues.is_empty() {
        return Err(ValidationError::required("At least one issue"));
    }

    Ok(issues)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a stock quantity (whole number, zero allowed).
pub fn parse_quantity(field: &str, text: &str) -> ValidationResult<u32> {
    let text = require(field, text)?;

    let value: i64 = text
        .parse()
        .map_err(|_| ValidationError::invalid(field, "must be a whole number"))?;

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

/// Parses the signed change of an update request.
///
/// ## Rules
/// - Whole number, sign allowed ("-2", "+5", "5")
/// - Not zero
/// - Magnitude at most `MAX_QUANTITY_CHANGE`
pub fn parse_quantity_change(text: &str) -> ValidationResult<i64> {
    const FIELD: &str = "quantity change";
    let text = require(FIELD, text)?;

    let value: i64 = text
        .parse()
        .map_err(|_| ValidationError::invalid(FIELD, "must be a whole number"))?;

    if value == 0 {
        return Err(ValidationError::MustBeNonZero {
            field: FIELD.to_string(),
        });
    }

    if value.abs() > MAX_QUANTITY_CHANGE {
        return Err(ValidationError::OutOfRange {
            field: FIELD.to_string(),
            min: -MAX_QUANTITY_CHANGE,
            max: MAX_QUANTITY_CHANGE,
        });
    }

    Ok(value)
}

/// Parses a required, non-negative amount of at most `MAX_PRICE_MINOR`.
///
/// ## Example
/// ```rust
/// use mobilefixer_core::validation::parse_price;
///
/// assert_eq!(parse_price("bill", "299.99").unwrap().minor(), 29999);
/// assert!(parse_price("bill", "-1").is_err());
/// assert!(parse_price("bill", "").is_err());
/// ```
pub fn parse_price(field: &str, text: &str) -> ValidationResult<Money> {
    let text = require(field, text)?;

    let amount = Money::parse_decimal(&text)
        .ok_or_else(|| ValidationError::invalid(field, "must be an amount like 199.99"))?;

    if amount.is_negative() || amount.minor() > MAX_PRICE_MINOR {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_MINOR,
        });
    }

    Ok(amount)
}

/// Like [`parse_price`], but a blank field means zero.
pub fn parse_optional_price(field: &str, text: &str) -> ValidationResult<Money> {
    if text.trim().is_empty() {
        return Ok(Money::zero());
    }
    parse_price(field, text)
}

/// Parses the estimated repair duration in days.
pub fn parse_days(text: &str, default: u32) -> ValidationResult<u32> {
    const FIELD: &str = "estimated days";
    if text.trim().is_empty() {
        return Ok(default);
    }

    let days = parse_quantity(FIELD, text)?;
    if days > MAX_ESTIMATED_DAYS {
        return Err(ValidationError::OutOfRange {
            field: FIELD.to_string(),
            min: 0,
            max: i64::from(MAX_ESTIMATED_DAYS),
        });
    }

    Ok(days)
}

// =============================================================================
// Unit Tests
// =============================================================================
