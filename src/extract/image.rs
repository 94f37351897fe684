//! Hero image selection for an event homepage.
//!
//! Candidates come from social-preview meta tags, inline `background-image` styles and
//! `<img>` tags. Only URLs with an image extension survive; "banner" beats "main"
//! beats "logo" beats document order. Pages without a usable HTTPS candidate get a
//! stock image picked deterministically from the event id.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::debug;

use crate::net::{Fetch, Request};

/// Curated stock images used when a page offers nothing usable.
pub const FALLBACK_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1452626038306-9aae5e071dd3?w=1200&q=80",
    "https://images.unsplash.com/photo-1513593771513-7b58b6c4af38?w=1200&q=80",
    "https://images.unsplash.com/photo-1530143584546-02191bc84eb5?w=1200&q=80",
    "https://images.unsplash.com/photo-1594882645126-14020914d58d?w=1200&q=80",
    "https://images.unsplash.com/photo-1541252260730-0412e8e2108e?w=1200&q=80",
    "https://images.unsplash.com/photo-1571008887538-b36bb32f4571?w=1200&q=80",
    "https://images.unsplash.com/photo-1486218119243-13883505764c?w=1200&q=80",
    "https://images.unsplash.com/photo-1502904550040-7534597429ae?w=1200&q=80",
];

const PREFERRED_KEYWORDS: [&str; 3] = ["banner", "main", "logo"];

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

fn image_extension_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\.(jpg|jpeg|png|webp|gif|bmp|svg)(\?|$|#)")
            .expect("valid image extension regex")
    })
}

fn decorative_asset_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(icon|btn|button|arrow|sprite|pixel|spacer|1x1|blank)")
            .expect("valid decorative asset regex")
    })
}

fn background_declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"background(-image)?\s*:").expect("valid background declaration regex")
    })
}

fn css_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"url\(['"]?([^'")]+)['"]?\)"#).expect("valid css url regex")
    })
}

fn selector(slot: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    slot.get_or_init(|| Selector::parse(css).expect("valid css selector"))
}

fn og_image_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, r#"meta[property="og:image"]"#)
}

fn twitter_image_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, r#"meta[name="twitter:image"]"#)
}

fn styled_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "[style]")
}

fn img_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "img[src]")
}

pub fn is_image_url(url: &str) -> bool {
    image_extension_re().is_match(url)
}

fn resolve(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match base {
        Some(base) => base.join(href).ok().map(String::from),
        None => Url::parse(href).ok().map(String::from),
    }
}

/// Every candidate image URL on the page, resolved against `page_url`, grouped by
/// source (og, twitter, backgrounds, img) and in document order within a group.
pub fn collect_image_candidates(html: &str, page_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let base = Url::parse(page_url).ok();
    let base = base.as_ref();
    let mut candidates = Vec::new();

    for meta_selector in [og_image_selector(), twitter_image_selector()] {
        if let Some(content) = document
            .select(meta_selector)
            .next()
            .and_then(|meta| meta.value().attr("content"))
        {
            candidates.extend(resolve(base, content));
        }
    }

    for element in document.select(styled_selector()) {
        let style = element.value().attr("style").unwrap_or("");
        if !background_declaration_re().is_match(style) {
            continue;
        }
        if let Some(caps) = css_url_re().captures(style) {
            candidates.extend(resolve(base, &caps[1]));
        }
    }

    for img in document.select(img_selector()) {
        let src = img.value().attr("src").unwrap_or("");
        if decorative_asset_re().is_match(src) {
            continue;
        }
        candidates.extend(resolve(base, src));
    }

    candidates
}

/// Preferred candidate among those with an image extension.
pub fn pick_hero_image(candidates: &[String]) -> Option<String> {
    let images: Vec<&String> = candidates.iter().filter(|url| is_image_url(url)).collect();
    PREFERRED_KEYWORDS
        .iter()
        .find_map(|keyword| {
            images
                .iter()
                .find(|url| url.to_lowercase().contains(keyword))
        })
        .or_else(|| images.first())
        .map(|url| (*url).clone())
}

fn stable_hash(value: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in value.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash = (hash ^ (hash >> 30)).wrapping_mul(SPLITMIX64_M1);
    hash = (hash ^ (hash >> 27)).wrapping_mul(SPLITMIX64_M2);
    hash ^ (hash >> 31)
}

/// Stock image for `id`; the same id always maps to the same image.
pub fn hero_image_fallback(id: &str) -> &'static str {
    let slot = stable_hash(id) % FALLBACK_IMAGES.len() as u64;
    FALLBACK_IMAGES[slot as usize]
}

/// Hero image for an already fetched page.
pub fn select_hero_image(html: &str, page_url: &str, id: &str) -> String {
    match pick_hero_image(&collect_image_candidates(html, page_url)) {
        Some(url) if url.starts_with("https://") => url,
        _ => hero_image_fallback(id).to_string(),
    }
}

/// Fetches `website` and selects its hero image; any failure yields the fallback.
pub fn fetch_hero_image<F: Fetch>(fetcher: &F, request: Request, id: &str) -> String {
    if request.url.trim().is_empty() {
        return hero_image_fallback(id).to_string();
    }
    match fetcher.fetch(&request) {
        Ok(html) => select_hero_image(&html, &request.url, id),
        Err(err) => {
            debug!(id, url = %request.url, error = %err, "hero page unavailable; using fallback image");
            hero_image_fallback(id).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head>
          <meta property="og:image" content="/img/og-preview.jpg">
        </head><body>
          <div style="background-image: url('/img/main_visual.png')"></div>
          <img src="/img/icon_home.png">
          <img src="https://cdn.example.org/logo.svg">
          <img src="/img/course-map.jpg">
          <img src="/script.php?x=1">
        </body></html>"#;

    #[test]
    fn candidates_are_resolved_and_decorative_assets_skipped() {
        let candidates = collect_image_candidates(PAGE, "https://race.example.org/index.html");
        assert_eq!(
            candidates,
            vec![
                "https://race.example.org/img/og-preview.jpg",
                "https://race.example.org/img/main_visual.png",
                "https://cdn.example.org/logo.svg",
                "https://race.example.org/img/course-map.jpg",
                "https://race.example.org/script.php?x=1",
            ]
        );
    }

    #[test]
    fn keyword_precedence_then_document_order() {
        let pick = pick_hero_image(&collect_image_candidates(
            PAGE,
            "https://race.example.org/index.html",
        ));
        assert_eq!(pick.as_deref(), Some("https://race.example.org/img/main_visual.png"));

        let plain = vec!["https://a.example/x.php".to_string(), "https://a.example/b.jpg".to_string()];
        assert_eq!(pick_hero_image(&plain).as_deref(), Some("https://a.example/b.jpg"));

        let ranked = vec![
            "https://a.example/logo.png".to_string(),
            "https://a.example/top_banner.jpg".to_string(),
        ];
        assert_eq!(pick_hero_image(&ranked).as_deref(), Some("https://a.example/top_banner.jpg"));
    }

    #[test]
    fn insecure_or_missing_images_fall_back_deterministically() {
        let insecure = select_hero_image(PAGE, "http://race.example.org/", "1234");
        assert_eq!(insecure, hero_image_fallback("1234"));
        assert!(FALLBACK_IMAGES.contains(&insecure.as_str()));

        let empty = select_hero_image("<html></html>", "https://race.example.org/", "1234");
        assert_eq!(empty, insecure);
    }

    #[test]
    fn fallback_is_stable_per_id() {
        for id in ["1", "2", "41833", "spring-run"] {
            assert_eq!(hero_image_fallback(id), hero_image_fallback(id));
        }
        let distinct: std::collections::HashSet<_> =
            (0..200).map(|i| hero_image_fallback(&i.to_string())).collect();
        assert!(distinct.len() > 1, "fallback should spread over the pool");
    }
}
