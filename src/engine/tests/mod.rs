mod scenario_tests;

use crate::fixes::FixRecord;
use crate::tags::TagMap;

/// Ids of the generated fixes, in output order
fn ids(fixes: &[FixRecord]) -> Vec<&str> {
    fixes.iter().map(|f| f.id.as_str()).collect()
}

fn count(fixes: &[FixRecord], id: &str) -> usize {
    fixes.iter().filter(|f| f.id == id).count()
}

fn find<'a>(fixes: &'a [FixRecord], id: &str) -> &'a FixRecord {
    fixes
        .iter()
        .find(|f| f.id == id)
        .unwrap_or_else(|| panic!("expected fix {id} in {:?}", ids(fixes)))
}

/// A page that satisfies every tag rule
fn complete_tags() -> TagMap {
    [
        ("title", "Handmade Ceramic Mugs | Clayworks"),
        (
            "description",
            "Browse small-batch ceramic mugs thrown by hand in our Portland studio. Free shipping on orders over $50.",
        ),
        ("og:title", "Handmade Ceramic Mugs"),
        ("og:description", "Small-batch mugs thrown by hand."),
        ("og:image", "https://clayworks.example/og.jpg"),
        ("twitter:card", "summary_large_image"),
        ("twitter:title", "Handmade Ceramic Mugs"),
        ("canonical", "https://clayworks.example/mugs"),
        ("robots", "index, follow"),
    ]
    .into_iter()
    .collect()
}
