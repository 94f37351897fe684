use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

/// Lazily parsed selector stored in `slot`.
pub(crate) fn cached(slot: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    slot.get_or_init(|| Selector::parse(css).expect("valid CSS selector"))
}

/// Text nodes trimmed and concatenated without a separator.
pub(crate) fn compact_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Non-empty trimmed text nodes joined with single spaces.
pub(crate) fn spaced_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_helpers_differ_only_in_separator() {
        let fragment = Html::parse_fragment("<p> 서울 <b>육상연맹</b>\n ☎02-1234 </p>");
        let selector = Selector::parse("p").expect("selector");
        let paragraph = fragment.select(&selector).next().expect("paragraph");
        assert_eq!(compact_text(paragraph), "서울육상연맹☎02-1234");
        assert_eq!(spaced_text(paragraph), "서울 육상연맹 ☎02-1234");
    }
}
