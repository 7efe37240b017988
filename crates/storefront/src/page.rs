//! Pages reachable from the navigation.

use std::fmt;
use std::str::FromStr;

/// A top-level storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Shop,
    Genres,
    Rarities,
    FreeMusic,
    About,
    Contact,
    ShareMe,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Shop,
        Page::Genres,
        Page::Rarities,
        Page::FreeMusic,
        Page::About,
        Page::Contact,
        Page::ShareMe,
    ];

    /// URL-style identifier, e.g. `free-music`.
    pub const fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Shop => "shop",
            Page::Genres => "genres",
            Page::Rarities => "rarities",
            Page::FreeMusic => "free-music",
            Page::About => "about",
            Page::Contact => "contact",
            Page::ShareMe => "share-me",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().to_ascii_lowercase();
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    /// Translation key of the navigation label. Home has none; the logo
    /// leads there.
    pub const fn nav_key(self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::Shop => Some("nav.shop"),
            Page::Genres => Some("nav.genres"),
            Page::Rarities => Some("nav.rarities"),
            Page::FreeMusic => Some("nav.free_music"),
            Page::About => Some("nav.about"),
            Page::Contact => Some("nav.contact"),
            Page::ShareMe => Some("nav.share_me"),
        }
    }

    /// Page for a navigation key. Unknown keys lead home.
    pub fn from_nav_key(key: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|page| page.nav_key() == Some(key))
            .unwrap_or(Page::Home)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_slug(s).ok_or_else(|| {
            let valid: Vec<_> = Page::ALL.iter().map(|p| p.slug()).collect();
            format!("unknown page '{}', expected one of: {}", s, valid.join(", "))
        })
    }
}
