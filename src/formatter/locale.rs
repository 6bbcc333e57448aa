use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// Invariant canonical patterns, also the fallback for sparse locale entries.
const INVARIANT_POSITIVE_PATTERN: &str = "d':'h':'mm':'ss'.'FFFFFFF";
const INVARIANT_NEGATIVE_PATTERN: &str = "'-'d':'h':'mm':'ss'.'FFFFFFF";

/// Locale-supplied canonical duration patterns for the general layouts.
#[derive(Debug, Clone)]
pub struct Locale {
    full_positive_pattern: String,
    full_negative_pattern: String,
}

impl Locale {
    pub fn full_positive_pattern(&self) -> &str {
        &self.full_positive_pattern
    }

    pub fn full_negative_pattern(&self) -> &str {
        &self.full_negative_pattern
    }

    fn from_raw(raw: LocaleRaw) -> Self {
        Self {
            full_positive_pattern: if raw.full_positive_pattern.is_empty() {
                INVARIANT_POSITIVE_PATTERN.to_string()
            } else {
                raw.full_positive_pattern
            },
            full_negative_pattern: if raw.full_negative_pattern.is_empty() {
                INVARIANT_NEGATIVE_PATTERN.to_string()
            } else {
                raw.full_negative_pattern
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LocaleFile {
    default: LocaleRaw,
    locales: HashMap<String, LocaleRaw>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocaleRaw {
    #[serde(default, rename = "fullPositivePattern")]
    full_positive_pattern: String,
    #[serde(default, rename = "fullNegativePattern")]
    full_negative_pattern: String,
}

#[derive(Debug, Clone)]
struct LocaleId {
    lang: String,
    language: String,
}

struct LocaleRegistry {
    default: Locale,
    locales: HashMap<String, Locale>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

pub fn default_locale() -> &'static Locale {
    &REGISTRY.get_or_init(LocaleRegistry::load).default
}

pub fn get_locale(tag: Option<&str>) -> Option<&'static Locale> {
    tag.and_then(lookup_locale)
}

pub fn get_locale_or_default(tag: Option<&str>) -> &'static Locale {
    get_locale(tag).unwrap_or_else(default_locale)
}

fn lookup_locale(tag: &str) -> Option<&'static Locale> {
    let registry = REGISTRY.get_or_init(LocaleRegistry::load);
    let parsed = parse_locale_tag(tag)?;
    if let Some(locale) = registry.locales.get(&parsed.lang) {
        return Some(locale);
    }
    registry.locales.get(&parsed.language)
}

impl LocaleRegistry {
    fn load() -> Self {
        let raw: LocaleFile =
            serde_json::from_str(include_str!("./locales.json")).expect("invalid locale data");

        let default = Locale::from_raw(raw.default);
        let mut locales = HashMap::new();
        for (key, value) in raw.locales {
            let canonical = canonicalize_key(&key);
            locales.insert(canonical, Locale::from_raw(value));
        }
        Self { default, locales }
    }
}

fn canonicalize_key(key: &str) -> String {
    parse_locale_tag(key)
        .map(|id| id.lang)
        .unwrap_or_else(|| key.to_ascii_lowercase())
}

fn parse_locale_tag(input: &str) -> Option<LocaleId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let head = trimmed.split('@').next().unwrap_or(trimmed);
    let head = head.split('.').next().unwrap_or(head);
    let mut parts = head
        .split(['-', '_'])
        .filter(|part| !part.is_empty());

    let language = parts.next()?.to_ascii_lowercase();
    if !language.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let territory = parts.next().map(|part| part.to_ascii_uppercase());
    if parts.next().is_some() {
        return None;
    }

    let lang = if let Some(region) = &territory {
        format!("{}_{}", language, region)
    } else {
        language.clone()
    };

    Some(LocaleId { lang, language })
}
