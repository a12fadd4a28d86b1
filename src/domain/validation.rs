//! Form validation gate.
//!
//! A pure predicate over the current [`FormInput`] snapshot. There is no
//! transition history: the gate is `Valid` or `Invalid` depending only on the
//! fields as they are right now.

use crate::domain::entities::FormInput;
use crate::utils::{SeparatorPolicy, normalize_phone_number};
use serde::Serialize;

/// A single failed field constraint, suitable for rendering next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str, label: &str) -> Self {
        Self {
            field,
            message: format!("{label} is required"),
        }
    }
}

/// Outcome of evaluating the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(Vec<FieldError>),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Validity::Valid => &[],
            Validity::Invalid(errors) => errors.as_slice(),
        }
    }
}

/// Evaluates every field constraint.
///
/// # Rules
///
/// - `country_code`: at least one character
/// - `phone_number`: at least one character left after normalization
/// - `text`: unconstrained
pub fn evaluate(input: &FormInput, policy: SeparatorPolicy) -> Validity {
    let mut errors = Vec::new();

    if input.country_code.is_empty() {
        errors.push(FieldError::required("country_code", "Country code"));
    }

    if normalize_phone_number(&input.phone_number, policy).is_empty() {
        errors.push(FieldError::required("phone_number", "Phone number"));
    }

    if errors.is_empty() {
        Validity::Valid
    } else {
        Validity::Invalid(errors)
    }
}

/// Returns `true` when the snapshot may be turned into an actionable link.
pub fn is_valid(input: &FormInput, policy: SeparatorPolicy) -> bool {
    evaluate(input, policy).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_country_is_invalid() {
        let input = FormInput::new("", "123", "");
        assert!(!is_valid(&input, SeparatorPolicy::Strip));
    }

    #[test]
    fn test_empty_phone_is_invalid() {
        let input = FormInput::new("ID", "", "");
        assert!(!is_valid(&input, SeparatorPolicy::Strip));
    }

    #[test]
    fn test_country_and_phone_is_valid() {
        let input = FormInput::new("ID", "123", "");
        assert!(is_valid(&input, SeparatorPolicy::Strip));
    }

    #[test]
    fn test_text_has_no_minimum() {
        let with_text = FormInput::new("ID", "123", "hello");
        let without_text = FormInput::new("ID", "123", "");

        assert_eq!(
            is_valid(&with_text, SeparatorPolicy::Keep),
            is_valid(&without_text, SeparatorPolicy::Keep)
        );
    }

    #[test]
    fn test_phone_of_only_zeros_is_invalid() {
        let input = FormInput::new("ID", "000", "");
        assert!(!is_valid(&input, SeparatorPolicy::Keep));
    }

    #[test]
    fn test_phone_of_only_separators_depends_on_policy() {
        let input = FormInput::new("ID", " - ", "");

        assert!(!is_valid(&input, SeparatorPolicy::Strip));
        assert!(is_valid(&input, SeparatorPolicy::Keep));
    }

    #[test]
    fn test_whitespace_country_passes_length_check() {
        let input = FormInput::new(" ", "123", "");
        assert!(is_valid(&input, SeparatorPolicy::Strip));
    }

    #[test]
    fn test_evaluate_reports_every_failed_field() {
        let validity = evaluate(&FormInput::default(), SeparatorPolicy::Strip);

        let fields: Vec<_> = validity.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["country_code", "phone_number"]);
        assert_eq!(validity.errors()[1].message, "Phone number is required");
    }

    #[test]
    fn test_gate_is_reenterable() {
        let mut input = FormInput::new("ID", "812", "");
        assert!(is_valid(&input, SeparatorPolicy::Strip));

        input.phone_number.clear();
        assert!(!is_valid(&input, SeparatorPolicy::Strip));

        input.phone_number.push('9');
        assert!(is_valid(&input, SeparatorPolicy::Strip));
    }

    #[test]
    fn test_valid_has_no_errors() {
        assert!(Validity::Valid.errors().is_empty());
    }
}
