use crate::fixes::{Category, Difficulty, FixRecord, Impact, TextType};
use crate::metrics::PerformanceMetrics;
use crate::tags::{TagMap, keys};
use crate::utils::{char_len, truncate_with_ellipsis};

pub const TITLE_MIN_CHARS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 60;
pub const TITLE_KEEP_CHARS: usize = 57;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const DESCRIPTION_KEEP_CHARS: usize = 157;

const PLACEHOLDER_TITLE: &str = "Your Page Title";
const PLACEHOLDER_DESCRIPTION: &str = "A concise, compelling summary of what this page offers.";
const PLACEHOLDER_IMAGE: &str = "https://your-site.com/images/social-share.jpg";

/// Everything a rule may look at during one evaluation
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub tags: &'a TagMap,
    pub url: &'a str,
    pub metrics: Option<&'a PerformanceMetrics>,
}

impl Snapshot<'_> {
    fn title(&self) -> Option<&str> {
        self.tags.value(keys::TITLE)
    }

    fn description(&self) -> Option<&str> {
        self.tags.value(keys::DESCRIPTION)
    }

    fn title_len(&self) -> usize {
        self.title().map(char_len).unwrap_or(0)
    }

    /// Page title, or a placeholder when the page has none
    fn title_or_placeholder(&self) -> &str {
        self.title().unwrap_or(PLACEHOLDER_TITLE)
    }

    fn description_or_placeholder(&self) -> &str {
        self.description().unwrap_or(PLACEHOLDER_DESCRIPTION)
    }
}

/// A declarative rule: when `applies` holds, `build` contributes one fix
pub struct Rule {
    pub id: &'static str,
    pub applies: fn(&Snapshot) -> bool,
    pub build: fn(&Snapshot) -> FixRecord,
}

/// The rule table, in evaluation (and output) order
pub static RULES: &[Rule] = &[
    Rule {
        id: "title-missing",
        applies: title_missing,
        build: build_title_missing,
    },
    Rule {
        id: "title-too-long",
        applies: title_too_long,
        build: build_title_too_long,
    },
    Rule {
        id: "desc-missing",
        applies: description_missing,
        build: build_description_missing,
    },
    Rule {
        id: "desc-too-long",
        applies: description_too_long,
        build: build_description_too_long,
    },
    Rule {
        id: "og-tags-missing",
        applies: og_tags_missing,
        build: build_og_tags,
    },
    Rule {
        id: "twitter-tags-missing",
        applies: twitter_tags_missing,
        build: build_twitter_tags,
    },
    Rule {
        id: "lcp-improvement",
        applies: lcp_needs_work,
        build: build_lcp_improvement,
    },
    Rule {
        id: "cls-improvement",
        applies: cls_needs_work,
        build: build_cls_improvement,
    },
    Rule {
        id: "canonical-missing",
        applies: canonical_missing,
        build: build_canonical,
    },
    Rule {
        id: "noindex-issue",
        applies: has_noindex,
        build: build_noindex,
    },
    Rule {
        id: "structured-data",
        applies: always,
        build: build_structured_data,
    },
];

//
// Predicates
//

fn title_missing(s: &Snapshot) -> bool {
    s.title_len() < TITLE_MIN_CHARS
}

fn title_too_long(s: &Snapshot) -> bool {
    !title_missing(s) && s.title_len() > TITLE_MAX_CHARS
}

fn description_missing(s: &Snapshot) -> bool {
    s.description().is_none()
}

fn description_too_long(s: &Snapshot) -> bool {
    s.description()
        .is_some_and(|d| char_len(d) > DESCRIPTION_MAX_CHARS)
}

fn og_tags_missing(s: &Snapshot) -> bool {
    [keys::OG_TITLE, keys::OG_DESCRIPTION, keys::OG_IMAGE]
        .iter()
        .any(|k| !s.tags.has(k))
}

fn twitter_tags_missing(s: &Snapshot) -> bool {
    !s.tags.has(keys::TWITTER_CARD) || !s.tags.has(keys::TWITTER_TITLE)
}

fn lcp_needs_work(s: &Snapshot) -> bool {
    s.metrics.is_some_and(|m| !m.lcp.status.is_good())
}

fn cls_needs_work(s: &Snapshot) -> bool {
    s.metrics.is_some_and(|m| !m.cls.status.is_good())
}

fn canonical_missing(s: &Snapshot) -> bool {
    !s.tags.has(keys::CANONICAL)
}

fn has_noindex(s: &Snapshot) -> bool {
    s.tags
        .value(keys::ROBOTS)
        .is_some_and(|r| r.contains("noindex"))
}

fn always(_: &Snapshot) -> bool {
    true
}

//
// Builders
//

fn build_title_missing(_: &Snapshot) -> FixRecord {
    FixRecord::new(
        "title-missing",
        "Add an SEO-friendly title",
        "The page title is missing or too short. Search engines show it as the headline of your result, so aim for 50-60 characters that lead with your main keyword.",
        "<title>Primary Keyword - Secondary Keyword | Brand Name</title>".to_string(),
        Category::MetaTags,
        Difficulty::Easy,
        Impact::High,
    )
    .editable_as(TextType::MetaTitle)
}

fn build_title_too_long(s: &Snapshot) -> FixRecord {
    let title = s.title().unwrap_or_default();
    FixRecord::new(
        "title-too-long",
        "Optimize title length",
        "The title is longer than 60 characters and will be cut off in search results. Keep the most important words at the start.",
        format!(
            "<title>{}</title>",
            truncate_with_ellipsis(title, TITLE_KEEP_CHARS)
        ),
        Category::MetaTags,
        Difficulty::Easy,
        Impact::Medium,
    )
    .editable_as(TextType::MetaTitle)
}

fn build_description_missing(_: &Snapshot) -> FixRecord {
    FixRecord::new(
        "desc-missing",
        "Add a meta description",
        "The page has no meta description. Search engines often use it as the snippet under your title; 150-160 characters is the target length.",
        r#"<meta name="description" content="Describe this page in 150-160 characters. Mention your primary keyword and give readers a clear reason to click.">"#.to_string(),
        Category::MetaTags,
        Difficulty::Easy,
        Impact::High,
    )
    .editable_as(TextType::MetaDescription)
}

fn build_description_too_long(s: &Snapshot) -> FixRecord {
    let description = s.description().unwrap_or_default();
    FixRecord::new(
        "desc-too-long",
        "Shorten the meta description",
        "The meta description is longer than 160 characters and will be truncated in search results.",
        format!(
            r#"<meta name="description" content="{}">"#,
            truncate_with_ellipsis(description, DESCRIPTION_KEEP_CHARS)
        ),
        Category::MetaTags,
        Difficulty::Easy,
        Impact::Medium,
    )
    .editable_as(TextType::MetaDescription)
}

fn build_og_tags(s: &Snapshot) -> FixRecord {
    let implementation = [
        meta_property(keys::OG_TITLE, s.title_or_placeholder()),
        meta_property(keys::OG_DESCRIPTION, s.description_or_placeholder()),
        meta_property(keys::OG_IMAGE, PLACEHOLDER_IMAGE),
        meta_property(keys::OG_URL, s.url),
    ]
    .join("\n");

    FixRecord::new(
        "og-tags-missing",
        "Add Open Graph tags",
        "Open Graph tags control how the page looks when shared on Facebook, LinkedIn and most chat apps. Some of the core tags are missing.",
        implementation,
        Category::MetaTags,
        Difficulty::Easy,
        Impact::Medium,
    )
}

fn build_twitter_tags(s: &Snapshot) -> FixRecord {
    let implementation = [
        meta_name(keys::TWITTER_CARD, "summary_large_image"),
        meta_name(keys::TWITTER_TITLE, s.title_or_placeholder()),
        meta_name(keys::TWITTER_DESCRIPTION, s.description_or_placeholder()),
        meta_name(keys::TWITTER_IMAGE, PLACEHOLDER_IMAGE),
    ]
    .join("\n");

    FixRecord::new(
        "twitter-tags-missing",
        "Add Twitter Card tags",
        "Twitter Card tags give the page a rich preview when it is shared on X/Twitter.",
        implementation,
        Category::MetaTags,
        Difficulty::Easy,
        Impact::Low,
    )
}

fn build_lcp_improvement(_: &Snapshot) -> FixRecord {
    FixRecord::new(
        "lcp-improvement",
        "Improve Largest Contentful Paint",
        "The largest element on the page renders slowly. Load the hero image early, give it explicit dimensions and defer anything below the fold.",
        r#"<!-- Preload the hero image so the browser fetches it first -->
<link rel="preload" as="image" href="/images/hero.webp">

<!-- Explicit dimensions let the browser lay out before the image arrives -->
<img src="/images/hero.webp" width="1200" height="630" alt="Hero image" fetchpriority="high">

<!-- Lazy-load images below the fold -->
<img src="/images/gallery-1.webp" width="600" height="400" alt="Gallery image" loading="lazy">"#
            .to_string(),
        Category::Performance,
        Difficulty::Medium,
        Impact::High,
    )
}

fn build_cls_improvement(_: &Snapshot) -> FixRecord {
    FixRecord::new(
        "cls-improvement",
        "Fix layout shifts",
        "Content moves around while the page loads. Reserve space for images, embeds and anything injected after load.",
        r#"<!-- Always set width and height on media -->
<img src="/images/product.webp" width="800" height="600" alt="Product photo">
<video src="/media/intro.mp4" width="1280" height="720" controls></video>

<style>
  /* Reserve the box before responsive media loads */
  .media-frame {
    aspect-ratio: 16 / 9;
    width: 100%;
  }

  /* Hold space for banners, ads and other late content */
  .dynamic-slot {
    min-height: 250px;
  }
</style>"#
            .to_string(),
        Category::Performance,
        Difficulty::Medium,
        Impact::High,
    )
}

fn build_canonical(s: &Snapshot) -> FixRecord {
    FixRecord::new(
        "canonical-missing",
        "Add a canonical URL",
        "Without a canonical link, search engines may treat variants of this URL as duplicate content.",
        format!(r#"<link rel="canonical" href="{}">"#, s.url),
        Category::MetaTags,
        Difficulty::Easy,
        Impact::Medium,
    )
}

fn build_noindex(_: &Snapshot) -> FixRecord {
    FixRecord::new(
        "noindex-issue",
        "Remove the noindex directive",
        "The robots meta tag tells search engines not to index this page, so it will not appear in search results.",
        r#"<meta name="robots" content="index, follow">"#.to_string(),
        Category::MetaTags,
        Difficulty::Easy,
        Impact::High,
    )
}

fn build_structured_data(s: &Snapshot) -> FixRecord {
    let schema = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": s.title_or_placeholder(),
        "description": s.description_or_placeholder(),
        "url": s.url,
    });
    let body = serde_json::to_string_pretty(&schema).unwrap_or_default();

    FixRecord::new(
        "structured-data",
        "Add structured data",
        "JSON-LD structured data helps search engines understand the page and can unlock rich results.",
        format!(
            "<script type=\"application/ld+json\">\n{}\n</script>",
            body.replace("</", "<\\/")
        ),
        Category::Content,
        Difficulty::Medium,
        Impact::Medium,
    )
}

//
// Markup helpers
//

fn meta_property(property: &str, content: &str) -> String {
    format!(r#"<meta property="{}" content="{}">"#, property, content)
}

fn meta_name(name: &str, content: &str) -> String {
    format!(r#"<meta name="{}" content="{}">"#, name, content)
}
