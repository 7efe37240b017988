//! Plain-text inventory context for the assistant prompt.
//!
//! Every product renders as one line carrying its identifying fields:
//!
//! ```text
//! ID: tr-001, Artist: Miles Davis, Album: Kind of Blue, Genre: Jazz, Price: $45, Condition: Near Mint, Rarity: Rare
//! ```
//!
//! The listing must cover the whole catalog because the assistant answers
//! stock questions from it. [`parse_context`] reads the lines back so that
//! completeness can be checked against the live catalog.

use crate::product::Product;

/// One product line recovered from a context listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextEntry {
    pub id: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub price: f64,
    pub condition: String,
    pub rarity: String,
}

impl ContextEntry {
    /// Parse a single context line. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix("ID: ")?;

        // Trailing fields are taken from the right so that free-text
        // artist and album names cannot shift them.
        let (rest, rarity) = rest.rsplit_once(", Rarity: ")?;
        let (rest, condition) = rest.rsplit_once(", Condition: ")?;
        let (rest, price) = rest.rsplit_once(", Price: $")?;
        let (rest, genre) = rest.rsplit_once(", Genre: ")?;
        let (id, rest) = rest.split_once(", Artist: ")?;
        let (artist, album) = rest.split_once(", Album: ")?;

        Some(Self {
            id: id.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            genre: genre.to_string(),
            price: price.parse().ok()?,
            condition: condition.to_string(),
            rarity: rarity.to_string(),
        })
    }
}

/// Render one product as a context line. The price is written exactly as
/// stored, with no display rounding.
pub fn render_line(product: &Product) -> String {
    format!(
        "ID: {}, Artist: {}, Album: {}, Genre: {}, Price: ${}, Condition: {}, Rarity: {}",
        product.id,
        product.artist,
        product.album,
        product.genre,
        product.price,
        product.condition,
        product.rarity
    )
}

/// Render every product, one per line, in catalog order.
pub fn render_context(products: &[Product]) -> String {
    products
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse every product line in a context listing, skipping other lines.
pub fn parse_context(context: &str) -> Vec<ContextEntry> {
    context.lines().filter_map(ContextEntry::parse).collect()
}
