//! Outbound commerce and share links.
//!
//! Purchases never happen in-app; every buy or inquiry action opens a
//! pre-filled message in an external app. These are plain URI builders.

use crate::product::Product;

/// Contact endpoints used to build outbound links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLinks {
    /// WhatsApp number in international format without `+`.
    pub whatsapp_number: String,
    /// Public Telegram channel URL.
    pub telegram_channel: String,
    /// Contact mailbox.
    pub email: String,
    /// Public site URL used by share links.
    pub site_url: String,
}

impl Default for StoreLinks {
    fn default() -> Self {
        Self {
            whatsapp_number: "989120000000".to_string(),
            telegram_channel: "https://t.me/tehranrecords".to_string(),
            email: "info@tehranrecords.com".to_string(),
            site_url: "https://tehranrecords.vercel.app".to_string(),
        }
    }
}

impl StoreLinks {
    /// Plain WhatsApp chat link.
    pub fn whatsapp(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    /// WhatsApp link pre-filled with an arbitrary message.
    pub fn whatsapp_with_text(&self, text: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            urlencoding::encode(text)
        )
    }

    /// Inquiry link shown on a product card.
    pub fn inquire(&self, product: &Product) -> String {
        self.whatsapp_with_text(&format!(
            "Hi Tehran Records, I'm interested in {}",
            product.label()
        ))
    }

    /// Buy link shown in the product detail view.
    pub fn buy(&self, product: &Product) -> String {
        self.whatsapp_with_text(&format!("I want to buy {}", product.label()))
    }

    /// Telegram channel link.
    pub fn telegram(&self) -> &str {
        &self.telegram_channel
    }

    /// `mailto:` link for the contact mailbox.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Share links for the site, as `(label, url)` pairs.
    pub fn share(&self) -> Vec<(&'static str, String)> {
        let site = urlencoding::encode(&self.site_url).into_owned();
        vec![
            ("Telegram", format!("https://t.me/share/url?url={}", site)),
            (
                "WhatsApp",
                format!("https://api.whatsapp.com/send?text={}", site),
            ),
            (
                "Email",
                format!(
                    "mailto:?subject={}&body={}",
                    urlencoding::encode("Tehran Records"),
                    site
                ),
            ),
            (
                "LinkedIn",
                format!(
                    "https://www.linkedin.com/sharing/share-offsite/?url={}",
                    site
                ),
            ),
        ]
    }
}
