//! Input/output types for the account usecases.

pub mod authn;
pub mod profile;

use validator::ValidationError;

/// Loose phone check: an optional leading `+`, then 7 to 15 digits once
/// separators are ignored. Normalization for WhatsApp links happens later.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    let allowed = value.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));

    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_spaced_local_numbers() {
        assert!(validate_phone("300 123 4567").is_ok());
        assert!(validate_phone("+57 300 123 4567").is_ok());
    }

    #[test]
    fn rejects_letters_and_short_numbers() {
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("12345").is_err());
    }
}
