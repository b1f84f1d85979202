//! US and Canadian postal code validation.
//!
//! A stateless companion to the parser for callers that validate extracted
//! fields. It has no coupling to the layout or extraction machinery.

use regex::Regex;
use std::sync::LazyLock;

static US_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<zip>\d{5})(-?(?P<plus4>\d{4}))?$").unwrap_or_else(|_| unreachable!())
});

static CANADIAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[ABCEGHJKLMNPRSTVXY]\d[A-Z] *\d[A-Z]\d$").unwrap_or_else(|_| unreachable!())
});

/// A validated postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipCode {
    zip: String,
    plus4: String,
}

impl ZipCode {
    /// Validate a US zip code: 5 digits with an optional 4-digit extension,
    /// dash optional ("12345", "12345-6789", "123456789").
    pub fn parse_us(input: &str) -> Option<ZipCode> {
        let captures = US_PATTERN.captures(input)?;
        Some(ZipCode {
            zip: captures["zip"].to_string(),
            plus4: captures
                .name("plus4")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Validate a US zip code, falling back to the Canadian `A1A 1A1` shape
    /// (case-insensitive). Canadian codes have no plus-4 component.
    pub fn parse_us_or_canadian(input: &str) -> Option<ZipCode> {
        if let Some(zip) = Self::parse_us(input) {
            return Some(zip);
        }
        if CANADIAN_PATTERN.is_match(input) {
            return Some(ZipCode {
                zip: input.to_string(),
                plus4: String::new(),
            });
        }
        None
    }

    /// The 5-digit zip (or full Canadian code).
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// The optional 4-digit extension; empty when absent.
    pub fn plus4(&self) -> &str {
        &self.plus4
    }

    /// The full code, "12345-6789" when an extension is present.
    pub fn full(&self) -> String {
        if self.plus4.is_empty() {
            self.zip.clone()
        } else {
            format!("{}-{}", self.zip, self.plus4)
        }
    }
}
