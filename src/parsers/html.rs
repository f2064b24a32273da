use crate::tags::TagMap;
use scraper::{ElementRef, Html, Selector};

/// Meta `name` values copied into the tag map as-is
const NAMED_META: &[&str] = &["description", "robots", "keywords", "viewport", "author"];

/// Social prefixes whose meta tags are copied under their full key
const SOCIAL_PREFIXES: &[&str] = &["og:", "twitter:"];

/// Extracts SEO-relevant tags from an HTML document.
///
/// The first occurrence of each tag wins. Meta names and properties are matched
/// case-insensitively and stored lower-cased; values are trimmed.
pub fn extract_tags(html: &str) -> TagMap {
    let doc = Html::parse_document(html);
    let mut tags = TagMap::new();

    if let Some(title) = first_title(&doc) {
        tags.insert("title", title);
    }

    let meta_selector = selector("meta[content]");
    for meta in doc.select(&meta_selector) {
        let Some(key) = meta_key(&meta) else {
            continue;
        };
        if tags.contains_key(&key) {
            continue;
        }
        let content = meta.value().attr("content").unwrap_or_default().trim();
        tags.insert(key, content);
    }

    let link_selector = selector("link[rel][href]");
    let canonical = doc
        .select(&link_selector)
        .filter(|link| is_canonical(link))
        .filter_map(|link| link.value().attr("href"))
        .map(str::trim)
        .next();
    if let Some(href) = canonical {
        tags.insert("canonical", href);
    }

    ::log::debug!("HTML parser found {} tags", tags.len());
    tags
}

/// Whitespace-collapsed text of the first `<title>` element
fn first_title(doc: &Html) -> Option<String> {
    let title_selector = selector("title");
    doc.select(&title_selector).next().map(|el| {
        el.text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Tag map key for a meta element, if it is one we track
fn meta_key(meta: &ElementRef) -> Option<String> {
    let el = meta.value();
    let name = el
        .attr("name")
        .or_else(|| el.attr("property"))?
        .trim()
        .to_ascii_lowercase();

    let tracked = NAMED_META.contains(&name.as_str())
        || SOCIAL_PREFIXES.iter().any(|p| name.starts_with(p));
    tracked.then_some(name)
}

fn is_canonical(link: &ElementRef) -> bool {
    link.value()
        .attr("rel")
        .is_some_and(|rel| {
            rel.split_whitespace()
                .any(|r| r.eq_ignore_ascii_case("canonical"))
        })
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}
