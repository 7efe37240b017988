//! Static vinyl catalog for the Spin City storefront.
//!
//! This crate is the read-only product source shared by the shop views, the
//! search overlay and the assistant's inventory context. It provides:
//!
//! - [`Product`] - An immutable catalog record
//! - [`Catalog`] - The product list with search, rarity and genre filters
//! - [`context`] - Plain-text inventory rendering handed to the assistant
//! - [`links`] - Pre-filled messaging, mail and share links
//! - [`GENRE_GUIDE`] - The fixed genre directory with subgenres
//!
//! # Example
//!
//! ```rust
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hits = catalog.search("miles");
//! assert!(hits.iter().any(|p| p.artist == "Miles Davis"));
//! ```

mod inventory;
pub mod context;
mod error;
mod genres;
pub mod links;
mod product;

pub use inventory::Catalog;
pub use context::{parse_context, render_context, ContextEntry};
pub use error::CatalogError;
pub use genres::{GenreGuide, GENRE_GUIDE};
pub use product::{format_price, Product, RARITY_COMMON};
