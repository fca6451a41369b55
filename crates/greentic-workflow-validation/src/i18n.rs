use std::collections::BTreeMap;
use std::env;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "nl"];

/// Message catalog: key to display text.
pub type Catalog = BTreeMap<String, String>;

static EN_MESSAGES: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../i18n/en.json"))
        .expect("parse embedded i18n/en.json catalog")
});

static NL_MESSAGES: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../i18n/nl.json"))
        .expect("parse embedded i18n/nl.json catalog")
});

/// i18n text descriptor: a catalog key plus optional `{name}` arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nText {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<BTreeMap<String, Value>>,
}

impl I18nText {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: None,
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

pub fn normalize_locale(raw: &str) -> Option<String> {
    let mut cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    if let Some((head, _)) = cleaned.split_once('.') {
        cleaned = head;
    }
    if let Some((head, _)) = cleaned.split_once('@') {
        cleaned = head;
    }
    cleaned
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .ok()
        .map(|lid| lid.to_string())
}

/// Maps a requested locale onto a bundled catalog, falling back from
/// region-specific tags to the base language.
pub fn resolve_supported_locale(candidate: &str) -> Option<&'static str> {
    let norm = normalize_locale(candidate)?;
    let base = norm.split('-').next().unwrap_or(DEFAULT_LOCALE).to_ascii_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == norm || *supported == base)
}

fn detect_env_locale() -> Option<String> {
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(val) = env::var(key) {
            let trimmed = val.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Explicit locale first, then the environment, then English.
pub fn select_locale(requested: Option<&str>) -> &'static str {
    if let Some(requested) = requested
        && let Some(found) = resolve_supported_locale(requested)
    {
        return found;
    }
    if let Some(env_loc) = detect_env_locale()
        && let Some(found) = resolve_supported_locale(&env_loc)
    {
        return found;
    }
    DEFAULT_LOCALE
}

/// English catalog with the locale's messages layered on top.
pub fn catalog(locale: &str) -> Catalog {
    let mut merged = (*EN_MESSAGES).clone();
    if resolve_supported_locale(locale) == Some("nl") {
        merged.extend(NL_MESSAGES.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

#[derive(Debug, Clone)]
pub struct Localizer {
    locale: &'static str,
    messages: Catalog,
}

impl Localizer {
    pub fn new(requested: Option<&str>) -> Self {
        let locale = select_locale(requested);
        Self {
            locale,
            messages: catalog(locale),
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Looks up a key, returning the key itself when no catalog has it.
    pub fn tr_key(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn tr_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut output = self.tr_key(key);
        for (name, value) in args {
            output = output.replace(&format!("{{{name}}}"), value);
        }
        output
    }

    pub fn resolve(&self, text: &I18nText) -> String {
        interpolate_args(&self.tr_key(&text.key), text.args.as_ref())
    }
}

fn interpolate_args(template: &str, args: Option<&BTreeMap<String, Value>>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    let mut output = template.to_string();
    for (name, value) in args {
        let token = format!("{{{}}}", name);
        let value_text = match value {
            Value::String(v) => v.clone(),
            _ => value.to_string(),
        };
        output = output.replace(&token, &value_text);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_locales_normalize() {
        assert_eq!(normalize_locale("nl_BE.UTF-8").as_deref(), Some("nl-BE"));
        assert_eq!(normalize_locale("en_US@euro").as_deref(), Some("en-US"));
        assert_eq!(normalize_locale("   "), None);
    }

    #[test]
    fn region_tags_fall_back_to_base_language() {
        assert_eq!(resolve_supported_locale("nl-BE"), Some("nl"));
        assert_eq!(resolve_supported_locale("en-GB"), Some("en"));
        assert_eq!(resolve_supported_locale("fr"), None);
    }

    #[test]
    fn explicit_locale_wins() {
        assert_eq!(select_locale(Some("nl")), "nl");
    }

    #[test]
    fn missing_translations_fall_back_to_english_then_key() {
        let localizer = Localizer::new(Some("nl"));
        assert_eq!(localizer.tr_key("workflow.outcome.valid"), "Geldig");
        assert_eq!(localizer.tr_key("cli.evaluate.field_error"), "  {field}: {message}");
        assert_eq!(localizer.tr_key("no.such.key"), "no.such.key");
    }

    #[test]
    fn arguments_are_interpolated() {
        let localizer = Localizer::new(Some("en"));
        let text = I18nText::new("workflow.activity.required_when_checked.summary")
            .with_arg("fields", "reason")
            .with_arg("trigger", "agree");
        assert_eq!(localizer.resolve(&text), "Requires reason when agree is checked");
        assert_eq!(
            localizer.tr_args("cli.evaluate.strict_failed", &[("count", "2")]),
            "validation failed for 2 field(s) (--strict)"
        );
    }
}
