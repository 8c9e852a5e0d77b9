//! Wine record

use serde::{Serialize, Serializer};
use std::fmt;

/// Primary wine type, taken from the first token of the raw style string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WineStyle {
    Red,
    White,
    Rose,
    Sparkling,
    Fortified,
    /// Unrecognised token, lower-cased. Matches no style rule.
    Other(String),
}

impl WineStyle {
    /// Map a style token (English or Portuguese) to a style
    pub fn from_token(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        match token.as_str() {
            "red" | "tinto" => WineStyle::Red,
            "white" | "branco" => WineStyle::White,
            "rosé" | "rose" => WineStyle::Rose,
            "sparkling" | "espumante" => WineStyle::Sparkling,
            "fortified" | "licoroso" => WineStyle::Fortified,
            _ => WineStyle::Other(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WineStyle::Red => "red",
            WineStyle::White => "white",
            WineStyle::Rose => "rosé",
            WineStyle::Sparkling => "sparkling",
            WineStyle::Fortified => "fortified",
            WineStyle::Other(token) => token,
        }
    }
}

impl fmt::Display for WineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WineStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A wine from the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wine {
    /// 1-based load position; not stable across restarts
    pub id: u32,
    pub name: String,
    /// Same as `name` in the current dataset
    pub grape_variety: String,
    pub style: WineStyle,
    /// Unsplit style string from the source, for display
    pub full_style: String,
    pub region: String,
    pub description: String,
    pub pairing_tags: Vec<String>,
}
