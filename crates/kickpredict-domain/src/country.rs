//! Country module - 2-letter country codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Countries the prediction model was trained on, with display names
pub const KNOWN_COUNTRIES: &[(&str, &str)] = &[
    ("US", "Estados Unidos"),
    ("GB", "Reino Unido"),
    ("CA", "Canadá"),
    ("AU", "Austrália"),
    ("DE", "Alemanha"),
    ("FR", "França"),
    ("IT", "Itália"),
    ("ES", "Espanha"),
    ("NL", "Países Baixos"),
    ("SE", "Suécia"),
    ("BR", "Brasil"),
    ("JP", "Japão"),
    ("MX", "México"),
];

/// An uppercased 2-letter country code
///
/// Any two ASCII letters are accepted; [`CountryCode::is_known`] tells whether
/// the code appears in [`KNOWN_COUNTRIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// The default country when none is given
    pub const US: CountryCode = CountryCode(*b"US");

    /// Parse a 2-letter code, uppercasing it
    ///
    /// # Examples
    ///
    /// ```
    /// use kickpredict_domain::CountryCode;
    ///
    /// assert_eq!(CountryCode::parse("br").unwrap().as_str(), "BR");
    /// assert!(CountryCode::parse("BRA").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.trim().as_bytes();
        match bytes {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Some(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => None,
        }
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction
        std::str::from_utf8(&self.0).unwrap_or("US")
    }

    /// Display name for known countries
    pub fn display_name(&self) -> Option<&'static str> {
        KNOWN_COUNTRIES
            .iter()
            .find(|(code, _)| *code == self.as_str())
            .map(|(_, name)| *name)
    }

    /// Whether the model was trained with projects from this country
    pub fn is_known(&self) -> bool {
        self.display_name().is_some()
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::US
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CountryCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid country code: {}", s))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}
