//! Text renderings of the storefront pages.
//!
//! Every function here is pure: the same page, context and catalog give the
//! same text.

use catalog::links::StoreLinks;
use catalog::{Catalog, GenreGuide, Product, GENRE_GUIDE};

use crate::page::Page;
use crate::view::ViewContext;

/// Render a whole page, navigation bar included.
///
/// `genre_filter` narrows the home page collection; other pages ignore it.
pub fn render(
    page: Page,
    ctx: &ViewContext,
    catalog: &Catalog,
    genre_filter: Option<&str>,
) -> String {
    let links = StoreLinks::default();
    let body = match page {
        Page::Home => render_home(ctx, catalog, genre_filter),
        Page::Shop => render_shop(ctx, catalog),
        Page::Genres => render_genres(ctx, catalog),
        Page::Rarities => render_rarities(ctx, catalog),
        Page::FreeMusic => render_free_music(ctx, &links),
        Page::About => render_about(ctx),
        Page::Contact => render_contact(ctx, &links),
        Page::ShareMe => render_share(ctx, &links),
    };
    ctx.directed(&format!("{}\n\n{}", render_nav(ctx, page), body))
}

/// Navigation bar with the current page highlighted.
pub fn render_nav(ctx: &ViewContext, current: Page) -> String {
    let mut items = vec![if current == Page::Home {
        ctx.accent("[TEHRAN RECORDS]")
    } else {
        "TEHRAN RECORDS".to_string()
    }];

    for page in Page::ALL {
        let Some(key) = page.nav_key() else { continue };
        let label = ctx.t(key);
        items.push(if page == current {
            ctx.accent(&format!("[{}]", label))
        } else {
            label
        });
    }

    items.join(" | ")
}

/// One-line summary used in product lists.
pub fn render_card(ctx: &ViewContext, product: &Product) -> String {
    let mut price = product.display_price();
    if let (Some(original), Some(discount)) = (product.original_price, product.discount_percent())
    {
        price = format!(
            "{} {}",
            price,
            ctx.muted(&format!("({}, -{}%)", catalog::format_price(original), discount))
        );
    }

    let mut line = format!(
        "[{}] {} ({}) · {} · {} · {}",
        product.id,
        product.label(),
        product.year,
        product.genre,
        price,
        product.condition
    );
    if product.is_rare() {
        line.push_str(&format!(" · {}", ctx.accent(&product.rarity)));
    }
    line
}

/// Full product view with purchase links.
pub fn render_product(ctx: &ViewContext, product: &Product, links: &StoreLinks) -> String {
    let mut lines = vec![
        ctx.accent(&product.album),
        product.artist.clone(),
        String::new(),
        format!("{}: {}", ctx.t("common.price"), product.display_price()),
    ];
    if let (Some(original), Some(discount)) = (product.original_price, product.discount_percent())
    {
        lines.push(ctx.muted(&format!(
            "{} -{}%",
            catalog::format_price(original),
            discount
        )));
    }
    lines.extend([
        format!("{}: {}", ctx.t("common.condition"), product.condition),
        format!("{}: {}", ctx.t("common.year"), product.year),
        format!("{} · {} · {}", product.genre, product.format, product.rarity),
        String::new(),
        format!("{}:", ctx.t("common.description")),
        product.description.clone(),
        String::new(),
        format!("{}: {}", ctx.t("common.buy_now"), links.buy(product)),
        format!("{}: {}", ctx.t("common.inquire_whatsapp"), links.inquire(product)),
    ]);
    ctx.directed(&lines.join("\n"))
}

/// Search results for the overlay.
pub fn render_search(ctx: &ViewContext, catalog: &Catalog, query: &str) -> String {
    let results = catalog.search(query);
    if results.is_empty() {
        return ctx.directed(&format!("{} \"{}\"", ctx.t("common.no_results"), query.trim()));
    }
    ctx.directed(&render_list(ctx, &results))
}

fn render_list(ctx: &ViewContext, products: &[Product]) -> String {
    products
        .iter()
        .map(|p| render_card(ctx, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_home(ctx: &ViewContext, catalog: &Catalog, genre_filter: Option<&str>) -> String {
    let mut sections = vec![
        format!(
            "{}\n{}\n{}",
            ctx.accent(&ctx.t("hero.find_music")),
            ctx.t("hero.spin_city"),
            ctx.muted(&ctx.t("hero.description"))
        ),
    ];

    if let Some(featured) = catalog.rarities().first() {
        sections.push(format!(
            "{}: {}",
            ctx.t("common.featured"),
            render_card(ctx, featured)
        ));
    }

    // Genre filter chips: "All" plus every genre in the catalog.
    let all = ctx.t("common.all");
    let mut chips = vec![if genre_filter.is_none() {
        ctx.accent(&format!("[{}]", all))
    } else {
        all
    }];
    chips.extend(catalog.genres().into_iter().map(|genre| {
        if genre_filter == Some(genre) {
            ctx.accent(&format!("[{}]", genre))
        } else {
            genre.to_string()
        }
    }));

    let products = catalog.by_genre(genre_filter);
    let listing = if products.is_empty() {
        format!(
            "{} \"{}\"",
            ctx.t("common.no_results"),
            genre_filter.unwrap_or_default()
        )
    } else {
        render_list(ctx, &products)
    };

    sections.push(format!(
        "{}\n{}\n{}\n\n{}",
        ctx.accent(&ctx.t("common.collection")),
        ctx.muted(&ctx.t("common.curated")),
        chips.join("  "),
        listing
    ));

    sections.join("\n\n")
}

fn render_shop(ctx: &ViewContext, catalog: &Catalog) -> String {
    format!(
        "{}\n{}\n\n{}",
        ctx.accent(&ctx.t("nav.shop")),
        ctx.muted(&ctx.t("common.curated")),
        render_list(ctx, catalog.all())
    )
}

fn render_genres(ctx: &ViewContext, catalog: &Catalog) -> String {
    let guide = GENRE_GUIDE
        .iter()
        .map(|entry| render_genre(entry, catalog.by_genre(Some(entry.name)).len()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n{}\n\n{}",
        ctx.accent(&ctx.t("genres.title")),
        ctx.muted(&ctx.t("genres.sub")),
        guide
    )
}

fn render_genre(entry: &GenreGuide, in_stock: usize) -> String {
    let mut line = format!("{}: {}", entry.name, entry.subgenres.join(", "));
    if in_stock > 0 {
        line.push_str(&format!(" ({})", in_stock));
    }
    line
}

fn render_rarities(ctx: &ViewContext, catalog: &Catalog) -> String {
    format!(
        "{}\n{}\n\n{}",
        ctx.accent(&ctx.t("rarities.title")),
        ctx.muted(&ctx.t("rarities.sub")),
        render_list(ctx, &catalog.rarities())
    )
}

fn render_free_music(ctx: &ViewContext, links: &StoreLinks) -> String {
    [
        ctx.accent(&ctx.t("free_music.title")),
        ctx.muted(&ctx.t("free_music.sub")),
        String::new(),
        ctx.t("free_music.gift"),
        ctx.t("free_music.p1"),
        ctx.t("free_music.p2"),
        ctx.t("free_music.search"),
        String::new(),
        format!(
            "{}: {} ({})",
            ctx.t("free_music.download_btn"),
            links.telegram(),
            ctx.t("free_music.opens_telegram")
        ),
    ]
    .join("\n")
}

fn render_about(ctx: &ViewContext) -> String {
    let cards = (1..=3)
        .map(|i| {
            format!(
                "* {}: {}",
                ctx.t(&format!("about.card{}_title", i)),
                ctx.t(&format!("about.card{}_desc", i))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    [
        ctx.accent(&ctx.t("about.title")),
        ctx.muted(&ctx.t("about.chrome_title")),
        String::new(),
        ctx.t("about.p1"),
        ctx.t("about.p2"),
        String::new(),
        cards,
        String::new(),
        ctx.accent(&ctx.t("owner.golden_vault")),
        ctx.t("owner.p1"),
        ctx.t("owner.p2"),
        ctx.t("owner.p3"),
        ctx.t("owner.quote"),
        format!("{} · {}", ctx.t("owner.owner_title"), ctx.t("owner.role")),
    ]
    .join("\n")
}

fn render_contact(ctx: &ViewContext, links: &StoreLinks) -> String {
    [
        ctx.accent(&ctx.t("contact.title")),
        String::new(),
        format!("{}:", ctx.t("contact.visit")),
        ctx.t("contact.address"),
        ctx.t("contact.city"),
        String::new(),
        format!("{}:", ctx.t("contact.hours")),
        ctx.t("contact.time"),
        ctx.t("contact.fri"),
        String::new(),
        format!(
            "{}: {} ({})",
            ctx.t("contact.management"),
            ctx.t("contact.owner_name"),
            ctx.t("contact.owner_role")
        ),
        String::new(),
        format!("{}:", ctx.t("contact.direct")),
        format!("{}: {}", ctx.t("contact.whatsapp"), links.whatsapp()),
        format!("{}: {}", ctx.t("contact.telegram"), links.telegram()),
        format!("{}: {}", ctx.t("contact.email_us"), links.mailto()),
    ]
    .join("\n")
}

fn render_share(ctx: &ViewContext, links: &StoreLinks) -> String {
    let mut lines = vec![
        ctx.accent(&format!("{} {}", ctx.t("share.title"), ctx.t("share.vibe"))),
        ctx.muted(&ctx.t("share.invite")),
        String::new(),
        format!("{}: {}", ctx.t("share.scan"), links.site_url),
    ];
    lines.extend(
        links
            .share()
            .into_iter()
            .map(|(label, url)| format!("{}: {}", label, url)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Theme;
    use translations::Locale;

    fn plain(locale: Locale) -> ViewContext {
        ViewContext::new(locale, Theme::Plain)
    }

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_nav_marks_current_page() {
        let nav = render_nav(&plain(Locale::En), Page::Shop);
        assert!(nav.contains("[Shop]"));
        assert!(nav.contains("Rarities"));
        assert!(!nav.contains("[Rarities]"));
        assert!(nav.starts_with("TEHRAN RECORDS"));

        let home = render_nav(&plain(Locale::En), Page::Home);
        assert!(home.starts_with("[TEHRAN RECORDS]"));
    }

    #[test]
    fn test_card_shows_discount_and_rarity() {
        let catalog = catalog();
        let product = catalog.get("tr-001").unwrap();
        let card = render_card(&plain(Locale::En), product);

        assert!(card.starts_with("[tr-001] Miles Davis - Kind of Blue"));
        assert!(card.contains("$45 ($60, -25%)"));
        assert!(card.contains("Near Mint"));
        assert!(card.ends_with("Rare"));
    }

    #[test]
    fn test_home_genre_filter() {
        let catalog = catalog();
        let page = render(Page::Home, &plain(Locale::En), &catalog, Some("Jazz"));
        assert!(page.contains("FIND YOUR MUSIC"));
        assert!(page.contains("[Jazz]"));
        assert!(page.contains("Kind of Blue"));

        let listing = page.split("The Collection").nth(1).unwrap();
        for product in catalog.all().iter().filter(|p| p.genre != "Jazz") {
            assert!(!listing.contains(&format!("[{}]", product.id)));
        }
    }

    #[test]
    fn test_home_without_filter_lists_everything() {
        let catalog = catalog();
        let page = render(Page::Home, &plain(Locale::En), &catalog, None);
        assert!(page.contains("[All]"));
        for product in catalog.all() {
            assert!(page.contains(&format!("[{}]", product.id)));
        }
    }

    #[test]
    fn test_rarities_page_excludes_common() {
        let catalog = catalog();
        let page = render(Page::Rarities, &plain(Locale::En), &catalog, None);
        assert!(page.contains("THE VAULT"));
        for product in catalog.all() {
            let listed = page.contains(&format!("[{}]", product.id));
            assert_eq!(listed, product.is_rare(), "{}", product.id);
        }
    }

    #[test]
    fn test_every_page_renders_in_every_locale() {
        let catalog = catalog();
        for locale in translations::SUPPORTED_LOCALES {
            for page in Page::ALL {
                let text = render(page, &plain(*locale), &catalog, None);
                assert!(!text.is_empty());
                // No unresolved keys from the page bodies.
                for prefix in [
                    "nav.", "hero.", "common.", "contact.", "about.", "owner.", "share.",
                    "genres.", "free_music.",
                ] {
                    assert!(
                        !text.contains(prefix),
                        "{} {:?} leaks {}",
                        page,
                        locale,
                        prefix
                    );
                }
            }
        }
    }

    #[test]
    fn test_farsi_pages_are_rtl() {
        let page = render(Page::About, &plain(Locale::Fa), &catalog(), None);
        assert!(page.lines().all(|line| line.starts_with('\u{200F}')));
    }

    #[test]
    fn test_search_results() {
        let catalog = catalog();
        let ctx = plain(Locale::En);

        let hits = render_search(&ctx, &catalog, "MILES");
        assert!(hits.contains("Miles Davis"));

        let none = render_search(&ctx, &catalog, "zzzz-not-a-record");
        assert_eq!(none, "No records found matching \"zzzz-not-a-record\"");
    }

    #[test]
    fn test_product_links() {
        let catalog = catalog();
        let product = catalog.get("tr-001").unwrap();
        let text = render_product(&plain(Locale::En), product, &StoreLinks::default());

        assert!(text.contains("Buy Now: https://wa.me/989120000000?text=I%20want%20to%20buy"));
        assert!(text.contains("Inquire on WhatsApp: https://wa.me/"));
        assert!(text.contains("Price: $45"));
    }

    #[test]
    fn test_contact_and_share_links() {
        let catalog = catalog();
        let contact = render(Page::Contact, &plain(Locale::En), &catalog, None);
        assert!(contact.contains("mailto:info@tehranrecords.com"));
        assert!(contact.contains("https://t.me/tehranrecords"));

        let share = render(Page::ShareMe, &plain(Locale::En), &catalog, None);
        assert!(share.contains("LinkedIn: https://www.linkedin.com/sharing/share-offsite/"));
    }

    #[test]
    fn test_genre_guide_counts_stock() {
        let catalog = catalog();
        let page = render(Page::Genres, &plain(Locale::En), &catalog, None);
        let jazz = catalog.by_genre(Some("Jazz")).len();
        assert!(page.contains("Jazz: "));
        assert!(page.lines().any(|l| l.starts_with("Jazz:") && l.ends_with(&format!("({})", jazz))));
    }
}
