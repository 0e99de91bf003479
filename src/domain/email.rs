//! Email - Address Validation
//!
//! Validates the "valid e-mail address" production used by `<input type=email>`:
//!
//! ```text
//! local  = 1*( ALPHA / DIGIT / "." / "!#$%&'*+/=?^_`{|}~-" )
//! label  = let-dig [ [ ldh-str ] let-dig ]   ; at most 63 chars
//! email  = local "@" label *( "." label )
//! ```
//!
//! Checks run from coarse to fine so the first failing one names the most
//! useful problem, the way browsers word their validation bubbles.

use std::sync::LazyLock;

use regex::Regex;
use snafu::Snafu;

use crate::i18n::{Locale, format_message};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

const LOCAL_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Why a value is not a valid email address
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum EmailError {
    #[snafu(display("Please fill out this field."))]
    ValueMissing,

    #[snafu(display("Please include an '@' in the email address. '{value}' is missing an '@'."))]
    MissingAt { value: String },

    #[snafu(display("Please enter a part followed by '@'. '{value}' is incomplete."))]
    MissingLocal { value: String },

    #[snafu(display("Please enter a part following '@'. '{value}' is incomplete."))]
    MissingDomain { value: String },

    #[snafu(display("A part followed by '@' should not contain the symbol '{symbol}'."))]
    InvalidLocalSymbol { symbol: char },

    #[snafu(display("A part following '@' should not contain the symbol '{symbol}'."))]
    InvalidDomainSymbol { symbol: char },

    #[snafu(display("'.' is used at a wrong position in '{domain}'."))]
    DotPosition { domain: String },

    #[snafu(display("Please enter an email address."))]
    Malformed,
}

impl EmailError {
    /// Catalog key of the localized message
    pub fn key(&self) -> &'static str {
        match self {
            EmailError::ValueMissing => "validation.valueMissing",
            EmailError::MissingAt { .. } => "validation.missingAt",
            EmailError::MissingLocal { .. } => "validation.missingLocal",
            EmailError::MissingDomain { .. } => "validation.missingDomain",
            EmailError::InvalidLocalSymbol { .. } => "validation.invalidLocalSymbol",
            EmailError::InvalidDomainSymbol { .. } => "validation.invalidDomainSymbol",
            EmailError::DotPosition { .. } => "validation.dotPosition",
            EmailError::Malformed => "validation.malformed",
        }
    }

    /// Validation message in `locale`, falling back to the English text
    pub fn message(&self, locale: Locale) -> String {
        let default = self.to_string();
        let symbol;
        let args: Vec<(&str, &str)> = match self {
            EmailError::MissingAt { value }
            | EmailError::MissingLocal { value }
            | EmailError::MissingDomain { value } => vec![("value", value.as_str())],
            EmailError::InvalidLocalSymbol { symbol: c }
            | EmailError::InvalidDomainSymbol { symbol: c } => {
                symbol = c.to_string();
                vec![("symbol", symbol.as_str())]
            }
            EmailError::DotPosition { domain } => vec![("domain", domain.as_str())],
            EmailError::ValueMissing | EmailError::Malformed => Vec::new(),
        };

        format_message(locale, self.key(), &default, &args)
    }
}

/// Apply the value sanitization of an email input: drop line breaks, then
/// strip leading and trailing whitespace.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate a required email field
pub fn validate(value: &str) -> Result<(), EmailError> {
    let value = sanitize(value);

    if value.is_empty() {
        return Err(EmailError::ValueMissing);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(EmailError::MissingAt { value });
    };

    if local.is_empty() {
        return Err(EmailError::MissingLocal { value });
    }
    if domain.is_empty() {
        return Err(EmailError::MissingDomain { value });
    }

    if let Some(symbol) = local
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || LOCAL_SYMBOLS.contains(c)))
    {
        return Err(EmailError::InvalidLocalSymbol { symbol });
    }

    if let Some(symbol) = domain
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
    {
        return Err(EmailError::InvalidDomainSymbol { symbol });
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err(EmailError::DotPosition {
            domain: domain.to_string(),
        });
    }

    if !EMAIL_PATTERN.is_match(&value) {
        return Err(EmailError::Malformed);
    }

    Ok(())
}

/// Whether `value` is a non-empty valid email address
pub fn is_valid(value: &str) -> bool {
    validate(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_addresses() {
        for email in [
            "a@b.com",
            "a@b",
            "first.last@example.co.uk",
            "user+tag@sub-domain.example",
            "o'brien!#$%&*/=?^_`{|}~-@x.io",
            "  padded@example.com  ",
            "line\nbreak@example.com",
        ] {
            assert!(is_valid(email), "{email:?} should be valid");
        }
    }

    #[test]
    fn empty_value_is_missing() {
        assert_eq!(validate(""), Err(EmailError::ValueMissing));
        assert_eq!(validate("   "), Err(EmailError::ValueMissing));
    }

    #[test]
    fn reports_missing_parts() {
        assert_eq!(
            validate("a"),
            Err(EmailError::MissingAt {
                value: "a".to_string()
            })
        );
        assert_eq!(
            validate("@b.com"),
            Err(EmailError::MissingLocal {
                value: "@b.com".to_string()
            })
        );
        assert_eq!(
            validate("a@"),
            Err(EmailError::MissingDomain {
                value: "a@".to_string()
            })
        );
    }

    #[test]
    fn reports_first_invalid_symbol() {
        assert_eq!(
            validate("a b@c.com"),
            Err(EmailError::InvalidLocalSymbol { symbol: ' ' })
        );
        assert_eq!(
            validate("a@b@c.com"),
            Err(EmailError::InvalidDomainSymbol { symbol: '@' })
        );
        assert_eq!(
            validate("a@exa_mple.com"),
            Err(EmailError::InvalidDomainSymbol { symbol: '_' })
        );
    }

    #[test]
    fn reports_dot_position() {
        for domain in [".example.com", "example.com.", "example..com"] {
            assert_eq!(
                validate(&format!("a@{domain}")),
                Err(EmailError::DotPosition {
                    domain: domain.to_string()
                })
            );
        }
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(validate("a@-example.com"), Err(EmailError::Malformed));
        assert_eq!(validate("a@example-.com"), Err(EmailError::Malformed));
        let long_label = "x".repeat(64);
        assert_eq!(
            validate(&format!("a@{long_label}.com")),
            Err(EmailError::Malformed)
        );
    }

    #[test]
    fn english_message_matches_display() {
        let err = EmailError::MissingAt {
            value: "a".to_string(),
        };
        assert_eq!(err.message(Locale::EnUS), err.to_string());
        assert_eq!(
            EmailError::InvalidLocalSymbol { symbol: ' ' }.message(Locale::EnUS),
            "A part followed by '@' should not contain the symbol ' '."
        );
    }

    #[test]
    fn localized_message_substitutes_arguments() {
        let err = EmailError::DotPosition {
            domain: "b..c".to_string(),
        };
        assert_eq!(err.message(Locale::ZhCN), "“.”在“b..c”中的位置有误。");
    }
}
