use super::ids;
use crate::engine::generate;
use crate::tags::TagMap;

fn well_tagged_long_title(robots: &str) -> TagMap {
    let description = "d".repeat(140);
    let title = "A".repeat(70);
    [
        ("title", title.as_str()),
        ("description", description.as_str()),
        ("og:title", "x"),
        ("og:description", "y"),
        ("og:image", "z"),
        ("twitter:card", "summary"),
        ("twitter:title", "t"),
        ("canonical", "https://example.com"),
        ("robots", robots),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_empty_page() {
    let fixes = generate(&TagMap::new(), "https://example.com", None);
    assert_eq!(
        ids(&fixes),
        vec![
            "title-missing",
            "desc-missing",
            "og-tags-missing",
            "twitter-tags-missing",
            "canonical-missing",
            "structured-data",
        ]
    );
}

#[test]
fn test_long_title_on_otherwise_tagged_page() {
    let fixes = generate(
        &well_tagged_long_title("index, follow"),
        "https://example.com",
        None,
    );
    assert_eq!(ids(&fixes), vec!["title-too-long", "structured-data"]);
    assert_eq!(
        fixes[0].implementation,
        format!("<title>{}...</title>", "A".repeat(57))
    );
}

#[test]
fn test_long_title_with_noindex() {
    let fixes = generate(
        &well_tagged_long_title("noindex, nofollow"),
        "https://example.com",
        None,
    );
    assert_eq!(
        ids(&fixes),
        vec!["title-too-long", "noindex-issue", "structured-data"]
    );
}
