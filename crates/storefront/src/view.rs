//! Locale and theme shared by every renderer.

use clap::ValueEnum;
use translations::{Direction, Locale, Translator};

const RESET: &str = "\x1b[0m";

/// Terminal color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Gold accents on a dark terminal.
    #[default]
    Dark,
    /// Blue accents for light backgrounds.
    Light,
    /// No escape codes.
    Plain,
}

impl Theme {
    fn accent(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("\x1b[1;33m"),
            Theme::Light => Some("\x1b[1;34m"),
            Theme::Plain => None,
        }
    }

    fn muted(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("\x1b[2;37m"),
            Theme::Light => Some("\x1b[2;30m"),
            Theme::Plain => None,
        }
    }
}

/// What a renderer needs to know about the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewContext {
    pub locale: Locale,
    pub theme: Theme,
}

impl ViewContext {
    pub fn new(locale: Locale, theme: Theme) -> Self {
        Self { locale, theme }
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale)
    }

    /// Localized string for `key`.
    pub fn t(&self, key: &str) -> String {
        self.translator().t(key)
    }

    /// Highlight a heading.
    pub fn accent(&self, text: &str) -> String {
        paint(self.theme.accent(), text)
    }

    /// De-emphasize secondary text.
    pub fn muted(&self, text: &str) -> String {
        paint(self.theme.muted(), text)
    }

    /// Prefix every line with a right-to-left mark for RTL locales.
    pub fn directed(&self, text: &str) -> String {
        match self.locale.direction() {
            Direction::Ltr => text.to_string(),
            Direction::Rtl => text
                .lines()
                .map(|line| format!("\u{200F}{}", line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn paint(code: Option<&str>, text: &str) -> String {
    match code {
        Some(code) => format!("{}{}{}", code, text, RESET),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_has_no_escapes() {
        let ctx = ViewContext::new(Locale::En, Theme::Plain);
        assert_eq!(ctx.accent("THE VAULT"), "THE VAULT");
        assert_eq!(ctx.muted("Just Now"), "Just Now");
    }

    #[test]
    fn test_dark_theme_wraps_text() {
        let ctx = ViewContext::default();
        let heading = ctx.accent("THE VAULT");
        assert!(heading.starts_with("\x1b["));
        assert!(heading.contains("THE VAULT"));
        assert!(heading.ends_with(RESET));
    }

    #[test]
    fn test_rtl_marks_each_line() {
        let fa = ViewContext::new(Locale::Fa, Theme::Plain);
        assert_eq!(fa.directed("a\nb"), "\u{200F}a\n\u{200F}b");

        let en = ViewContext::new(Locale::En, Theme::Plain);
        assert_eq!(en.directed("a\nb"), "a\nb");
    }

    #[test]
    fn test_translation_follows_locale() {
        assert_eq!(ViewContext::new(Locale::Es, Theme::Plain).t("nav.shop"), "Tienda");
        assert_eq!(
            ViewContext::default().t("nav.nonexistent"),
            "nav.nonexistent"
        );
    }
}
