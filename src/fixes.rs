use serde::{Deserialize, Serialize};

/// Area of the page a fix touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MetaTags,
    Performance,
    Content,
    Accessibility,
    Images,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }
}

/// Which piece of page text an editable fix rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextType {
    MetaTitle,
    MetaDescription,
    OgTitle,
    OgDescription,
    TwitterTitle,
    TwitterDescription,
}

/// One actionable recommendation with a paste-ready snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRecord {
    /// Stable identifier, unique within one evaluation
    pub id: String,

    pub title: String,

    pub description: String,

    /// Markup or code the user can paste as-is
    pub implementation: String,

    pub category: Category,

    pub difficulty: Difficulty,

    pub impact: Impact,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<TextType>,
}

impl FixRecord {
    /// Create a non-editable fix record
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        implementation: String,
        category: Category,
        difficulty: Difficulty,
        impact: Impact,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            implementation,
            category,
            difficulty,
            impact,
            editable: None,
            text_type: None,
        }
    }

    /// Mark the fix as hand-editable before it is applied
    pub fn editable_as(mut self, text_type: TextType) -> Self {
        self.editable = Some(true);
        self.text_type = Some(text_type);
        self
    }

    pub fn is_editable(&self) -> bool {
        self.editable.unwrap_or(false)
    }
}
