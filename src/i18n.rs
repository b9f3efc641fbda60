//! Label translation.
//!
//! Menu labels and UI strings are keys into per-locale tables embedded at
//! compile time. Lookup never fails: a missing entry renders the key itself.

use std::collections::HashMap;
use std::sync::LazyLock;

const EN_JSON: &str = include_str!("../locales/en.json");
const ZH_JSON: &str = include_str!("../locales/zh.json");

static EN: LazyLock<HashMap<String, String>> = LazyLock::new(|| parse_table("en", EN_JSON));
static ZH: LazyLock<HashMap<String, String>> = LazyLock::new(|| parse_table("zh", ZH_JSON));

fn parse_table(locale: &str, json: &str) -> HashMap<String, String> {
    match serde_json::from_str(json) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("Locale table '{}' failed to parse: {}", locale, e);
            HashMap::new()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Accepts bare codes and region-tagged ones ("zh-CN"); unknown -> English.
    pub fn parse(s: &str) -> Self {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "zh" => Locale::Zh,
            _ => Locale::En,
        }
    }

    fn table(&self) -> &'static HashMap<String, String> {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

/// Localized string for `key`, or `key` when the table has no entry.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    match locale.table().get(key) {
        Some(value) => value.as_str(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse() {
        assert!(!EN.is_empty());
        assert_eq!(EN.len(), ZH.len());
    }

    #[test]
    fn known_key_translates() {
        assert_eq!(translate(Locale::En, "Home"), "Home");
        assert_eq!(translate(Locale::Zh, "Home"), "首页");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(translate(Locale::En, "no.such.key"), "no.such.key");
        assert_eq!(translate(Locale::Zh, ""), "");
    }

    #[test]
    fn locale_parse() {
        assert_eq!(Locale::parse("zh-CN"), Locale::Zh);
        assert_eq!(Locale::parse("ZH_tw"), Locale::Zh);
        assert_eq!(Locale::parse("en-US"), Locale::En);
        assert_eq!(Locale::parse("fr"), Locale::En);
        assert_eq!(Locale::parse(""), Locale::En);
    }
}
