//! Supported locales and their static metadata.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Supported language codes.
///
/// Declaration order is the display order and the order overlays are merged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-HK")]
    ZhHk,
}

/// The base language. Every other locale is an overlay on top of it.
pub const DEFAULT_LANGUAGE: Locale = Locale::En;

/// All supported locales, in selector order.
pub const SUPPORTED_LANGUAGES: [Locale; 4] = [Locale::En, Locale::ZhCn, Locale::ZhTw, Locale::ZhHk];

/// Short code still written by older clients; maps to Simplified Chinese.
const LEGACY_CHINESE_ALIAS: &str = "zh";

/// Static per-locale metadata shown by language selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub code: Locale,
    /// Name of the language as written in Simplified Chinese.
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    /// BCP 47 tag.
    pub locale: &'static str,
}

const EN_CONFIG: LocaleConfig = LocaleConfig {
    code: Locale::En,
    name: "English",
    native_name: "English",
    flag: "🇺🇸",
    locale: "en-US",
};

const ZH_CN_CONFIG: LocaleConfig = LocaleConfig {
    code: Locale::ZhCn,
    name: "中文（简体）",
    native_name: "简体中文",
    flag: "🇨🇳",
    locale: "zh-CN",
};

const ZH_TW_CONFIG: LocaleConfig = LocaleConfig {
    code: Locale::ZhTw,
    name: "中文（繁体）-中国台湾",
    native_name: "繁體中文（台灣）",
    flag: "🇹🇼",
    locale: "zh-TW",
};

const ZH_HK_CONFIG: LocaleConfig = LocaleConfig {
    code: Locale::ZhHk,
    name: "中文（繁体）-中国香港",
    native_name: "繁體中文（香港）",
    flag: "🇭🇰",
    locale: "zh-HK",
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code: '{0}'")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Language code as used in file names, cookies and HTML `lang` attributes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::ZhHk => "zh-HK",
        }
    }

    /// Exact (case-sensitive) lookup of a supported code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES.into_iter().find(|locale| locale.code() == code)
    }

    /// Resolves a language cookie value to a locale.
    ///
    /// The legacy `zh` code is treated as `zh-CN`. Missing or unsupported values
    /// fall back to [`DEFAULT_LANGUAGE`].
    #[must_use]
    pub fn from_cookie_value(value: Option<&str>) -> Self {
        let normalized = match value {
            Some(LEGACY_CHINESE_ALIAS) => Some(Self::ZhCn.code()),
            other => other,
        };

        normalized.and_then(Self::from_code).unwrap_or(DEFAULT_LANGUAGE)
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }

    /// Translation file name for this locale (e.g. `zh-CN.yaml`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.yaml", self.code())
    }

    #[must_use]
    pub const fn config(self) -> &'static LocaleConfig {
        match self {
            Self::En => &EN_CONFIG,
            Self::ZhCn => &ZH_CN_CONFIG,
            Self::ZhTw => &ZH_TW_CONFIG,
            Self::ZhHk => &ZH_HK_CONFIG,
        }
    }

    /// Every supported locale except the default one.
    pub fn overlays() -> impl Iterator<Item = Self> {
        SUPPORTED_LANGUAGES.into_iter().filter(|locale| !locale.is_default())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Checks whether `code` is one of the supported language codes.
#[must_use]
pub fn is_valid_language(code: &str) -> bool {
    Locale::from_code(code).is_some()
}

/// Metadata for every supported locale, in selector order.
#[must_use]
pub fn all_configs() -> Vec<&'static LocaleConfig> {
    SUPPORTED_LANGUAGES.iter().map(|locale| locale.config()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::english("en", Some(Locale::En))]
    #[case::simplified("zh-CN", Some(Locale::ZhCn))]
    #[case::taiwan("zh-TW", Some(Locale::ZhTw))]
    #[case::hong_kong("zh-HK", Some(Locale::ZhHk))]
    #[case::lowercase_region("zh-cn", None)]
    #[case::legacy_alias_is_not_a_code("zh", None)]
    #[case::empty("", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Locale>) {
        assert_eq!(Locale::from_code(code), expected);
        assert_eq!(is_valid_language(code), expected.is_some());
    }

    #[rstest]
    #[case::missing(None, Locale::En)]
    #[case::legacy_alias(Some("zh"), Locale::ZhCn)]
    #[case::exact(Some("zh-HK"), Locale::ZhHk)]
    #[case::unsupported(Some("ja"), Locale::En)]
    #[case::empty(Some(""), Locale::En)]
    fn test_from_cookie_value(#[case] value: Option<&str>, #[case] expected: Locale) {
        assert_eq!(Locale::from_cookie_value(value), expected);
    }

    #[googletest::test]
    fn test_overlays_exclude_default() {
        let overlays: Vec<Locale> = Locale::overlays().collect();

        expect_that!(overlays, elements_are![eq(&Locale::ZhCn), eq(&Locale::ZhTw), eq(&Locale::ZhHk)]);
        expect_that!(DEFAULT_LANGUAGE.is_default(), eq(true));
    }

    #[googletest::test]
    fn test_config_matches_code() {
        for locale in SUPPORTED_LANGUAGES {
            expect_that!(locale.config().code, eq(locale));
        }
        expect_that!(Locale::ZhTw.config().native_name, eq("繁體中文（台灣）"));
        expect_that!(all_configs(), len(eq(4)));
    }

    #[rstest]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&[Locale::En, Locale::ZhCn]).unwrap();
        assert_eq!(json, r#"["en","zh-CN"]"#);

        let parsed: Locale = serde_json::from_str(r#""zh-TW""#).unwrap();
        assert_eq!(parsed, Locale::ZhTw);
    }

    #[rstest]
    fn test_from_str_error() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language code: 'fr'");
        assert_eq!(Locale::ZhCn.file_name(), "zh-CN.yaml");
    }
}
