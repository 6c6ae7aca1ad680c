//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Supported reply languages
///
/// Both full locale tags (`en-IN`) and short codes (`en`) are accepted on the
/// wire. Anything unrecognised is treated as English.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    /// Parse a locale tag or short code
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" | "hi-in" => Language::Hindi,
            "mr" | "mr-in" => Language::Marathi,
            _ => Language::English,
        }
    }

    /// Short ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Indian locale tag
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi => "hi-IN",
            Language::Marathi => "mr-IN",
        }
    }

    /// English name of the language, as used in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::parse(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.locale().to_string()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.locale())
    }
}
