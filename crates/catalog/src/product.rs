//! The product record.

use serde::{Deserialize, Serialize};

/// Rarity value meaning "not rare".
pub const RARITY_COMMON: &str = "Common";

/// A single record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: String,
    /// Performing artist.
    pub artist: String,
    /// Album title.
    pub album: String,
    /// Genre name as shown in the genre filter.
    pub genre: String,
    /// Price in USD.
    pub price: f64,
    /// Price before discount, if discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Grading, e.g. "Mint" or "VG+".
    pub condition: String,
    /// Rarity tier; [`RARITY_COMMON`] means not rare.
    pub rarity: String,
    /// Physical format, e.g. "LP, 180g".
    pub format: String,
    /// Release year.
    pub year: u16,
    /// Long-form description.
    pub description: String,
    /// Cover image reference.
    pub cover: String,
}

impl Product {
    /// Whether this record belongs in the rarities vault.
    pub fn is_rare(&self) -> bool {
        self.rarity != RARITY_COMMON
    }

    /// Formatted price, e.g. `$45` or `$52.50`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Whole-percent discount against the original price, if any.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= 0.0 {
            return None;
        }
        Some((((original - self.price) / original) * 100.0).round() as u32)
    }

    /// `Artist - Album`, the reference used in inquiry links.
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist, self.album)
    }
}

/// Format a dollar amount for display, dropping the cents when they are zero.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, original_price: Option<f64>, rarity: &str) -> Product {
        Product {
            id: "x-1".to_string(),
            artist: "Miles Davis".to_string(),
            album: "Kind of Blue".to_string(),
            genre: "Jazz".to_string(),
            price,
            original_price,
            condition: "Mint".to_string(),
            rarity: rarity.to_string(),
            format: "LP".to_string(),
            year: 1959,
            description: String::new(),
            cover: String::new(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(45.0), "$45");
        assert_eq!(format_price(52.5), "$52.50");
        assert_eq!(format_price(0.99), "$0.99");
        assert_eq!(format_price(1e20), "$100000000000000000000");
    }

    #[test]
    fn test_is_rare() {
        assert!(!record(10.0, None, "Common").is_rare());
        assert!(record(10.0, None, "Grail").is_rare());
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(record(45.0, Some(60.0), "Rare").discount_percent(), Some(25));
        assert_eq!(record(45.0, None, "Rare").discount_percent(), None);
        assert_eq!(record(60.0, Some(45.0), "Rare").discount_percent(), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(record(1.0, None, "Common").label(), "Miles Davis - Kind of Blue");
    }
}
