//! i18n - Internationalization Module
//!
//! Message lookup over the `rust-i18n` catalogs in `locales/`, with a literal
//! default-language fallback supplied at every call site.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Catalog tag used by `rust-i18n`
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Map a BCP 47 / POSIX style tag to a supported locale.
    ///
    /// Only the primary language subtag matters: `en_GB.UTF-8` is English and
    /// `zh-Hant-TW` is still served the Chinese catalog.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Detect the locale from the operating system, falling back to English
    pub fn detect() -> Self {
        let current = locale_config::Locale::current().to_string();
        current
            .split(',')
            .filter_map(|range| {
                // Ranges may carry a category prefix such as `messages=zh-CN`
                let tag = range.rsplit('=').next().unwrap_or(range);
                Locale::from_tag(tag)
            })
            .next()
            .unwrap_or_default()
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Look up a key in the catalog of `locale`.
///
/// Returns `None` when neither the locale nor the fallback catalog has it.
pub fn lookup(locale: Locale, key: &str) -> Option<String> {
    let tag = locale.tag();
    let translated = t!(key, locale = tag).to_string();

    // rust-i18n echoes the (possibly locale-prefixed) key on a miss
    if translated == key || translated == format!("{tag}.{key}") {
        None
    } else {
        Some(translated)
    }
}

/// Translate `key`, or return `default` when the catalogs don't have it
pub fn message(locale: Locale, key: &str, default: &str) -> String {
    lookup(locale, key).unwrap_or_else(|| default.to_string())
}

/// Translate `key` and substitute `%{name}` placeholders.
///
/// # Example
/// ```ignore
/// // With translation `submitted: "Sign-in requested for %{email}"`
/// format_message(Locale::EnUS, "demo.submitted", "...", &[("email", "a@b.com")])
/// // Returns "Sign-in requested for a@b.com"
/// ```
pub fn format_message(locale: Locale, key: &str, default: &str, args: &[(&str, &str)]) -> String {
    let mut result = message(locale, key, default);

    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }

    result
}

/// Translate a key for display
pub fn t(locale: Locale, key: &str, default: &str) -> SharedString {
    SharedString::from(message(locale, key, default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_uses_primary_subtag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::EnUS));
        assert_eq!(Locale::from_tag("en_GB.UTF-8"), Some(Locale::EnUS));
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_tag("ZH-Hant-TW"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn toggled_switches_between_locales() {
        assert_eq!(Locale::EnUS.toggled(), Locale::ZhCN);
        assert_eq!(Locale::ZhCN.toggled(), Locale::EnUS);
    }

    #[test]
    fn known_keys_come_from_the_catalog() {
        assert_eq!(
            message(Locale::EnUS, "signin.joinFree", "fallback"),
            "Join Free"
        );
        assert_eq!(message(Locale::ZhCN, "signin.joinFree", "fallback"), "免费注册");
    }

    #[test]
    fn unknown_keys_fall_back_to_default() {
        assert_eq!(lookup(Locale::EnUS, "signin.doesNotExist"), None);
        assert_eq!(
            message(Locale::ZhCN, "signin.doesNotExist", "Literal default"),
            "Literal default"
        );
    }

    #[test]
    fn format_message_substitutes_named_arguments() {
        let text = format_message(
            Locale::EnUS,
            "validation.missingAt",
            "",
            &[("value", "abc")],
        );
        assert_eq!(
            text,
            "Please include an '@' in the email address. 'abc' is missing an '@'."
        );
    }
}
