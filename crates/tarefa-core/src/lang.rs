use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported interface languages.
///
/// The set is closed: a preference outside it reads back as "no
/// preference recorded" and resolves to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English (the fallback language).
    #[default]
    En,
    /// Portuguese.
    Pt,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [Self::En, Self::Pt, Self::Es, Self::Fr];

    /// Parse a language code, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// The two-letter code, as used in preference documents and locale
    /// file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
