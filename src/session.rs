//! Caller-side state for working through a list of fixes.
//!
//! The engine never sees this: it only tracks which fixes a user has applied during
//! one page view and the single fix currently being hand-edited.

use crate::fixes::{FixRecord, TextType};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no fix with id {0}")]
    UnknownFix(String),

    #[error("fix {0} has already been applied")]
    AlreadyApplied(String),

    #[error("fix {0} cannot be edited")]
    NotEditable(String),

    #[error("no edit in progress")]
    NoEdit,
}

/// An in-progress edit of one editable fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub id: String,
    pub text_type: Option<TextType>,
    pub text: String,
}

/// Applied fixes and the current edit for one page view
#[derive(Debug, Clone)]
pub struct FixSession {
    fixes: Vec<FixRecord>,
    applied: HashSet<String>,
    edited_text: BTreeMap<String, String>,
    editing: Option<PendingEdit>,
}

impl FixSession {
    pub fn new(fixes: &[FixRecord]) -> Self {
        Self {
            fixes: fixes.to_vec(),
            applied: HashSet::new(),
            edited_text: BTreeMap::new(),
            editing: None,
        }
    }

    fn find(&self, id: &str) -> Result<&FixRecord, SessionError> {
        self.fixes
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| SessionError::UnknownFix(id.to_string()))
    }

    /// Mark a fix applied, optionally with hand-edited text.
    ///
    /// Applying the same id twice is refused.
    pub fn apply(&mut self, id: &str, edited: Option<String>) -> Result<(), SessionError> {
        let fix = self.find(id)?;
        if edited.is_some() && !fix.is_editable() {
            return Err(SessionError::NotEditable(id.to_string()));
        }
        if self.applied.contains(id) {
            return Err(SessionError::AlreadyApplied(id.to_string()));
        }

        self.applied.insert(id.to_string());
        if let Some(text) = edited {
            self.edited_text.insert(id.to_string(), text);
        }
        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            self.editing = None;
        }
        ::log::debug!("Applied fix {}", id);
        Ok(())
    }

    /// Start editing a fix; replaces any edit already in progress
    pub fn begin_edit(&mut self, id: &str) -> Result<&PendingEdit, SessionError> {
        let fix = self.find(id)?;
        if !fix.is_editable() {
            return Err(SessionError::NotEditable(id.to_string()));
        }
        if self.applied.contains(id) {
            return Err(SessionError::AlreadyApplied(id.to_string()));
        }

        let edit = PendingEdit {
            id: fix.id.clone(),
            text_type: fix.text_type,
            text: fix.implementation.clone(),
        };
        Ok(&*self.editing.insert(edit))
    }

    pub fn update_edit(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let edit = self.editing.as_mut().ok_or(SessionError::NoEdit)?;
        edit.text = text.into();
        Ok(())
    }

    pub fn cancel_edit(&mut self) -> Option<PendingEdit> {
        self.editing.take()
    }

    /// Apply the in-progress edit
    pub fn commit_edit(&mut self) -> Result<(), SessionError> {
        let edit = self.editing.take().ok_or(SessionError::NoEdit)?;
        self.apply(&edit.id, Some(edit.text))
    }

    pub fn editing(&self) -> Option<&PendingEdit> {
        self.editing.as_ref()
    }

    pub fn is_applied(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    /// Applied ids in original fix order
    pub fn applied_ids(&self) -> Vec<&str> {
        self.fixes
            .iter()
            .filter(|f| self.applied.contains(&f.id))
            .map(|f| f.id.as_str())
            .collect()
    }

    /// Text a fix was applied with, if it was edited
    pub fn edited_text(&self, id: &str) -> Option<&str> {
        self.edited_text.get(id).map(String::as_str)
    }

    /// Fixes not yet applied, in original order
    pub fn pending(&self) -> impl Iterator<Item = &FixRecord> {
        self.fixes.iter().filter(|f| !self.applied.contains(&f.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::tags::TagMap;

    fn session() -> FixSession {
        FixSession::new(&generate(&TagMap::new(), "https://example.com", None))
    }

    #[test]
    fn test_apply_once() {
        let mut s = session();
        s.apply("canonical-missing", None).unwrap();

        assert!(s.is_applied("canonical-missing"));
        assert_eq!(
            s.apply("canonical-missing", None),
            Err(SessionError::AlreadyApplied("canonical-missing".into()))
        );
        assert_eq!(s.pending().count(), 5);
    }

    #[test]
    fn test_unknown_and_non_editable() {
        let mut s = session();
        assert_eq!(
            s.apply("lcp-improvement", None),
            Err(SessionError::UnknownFix("lcp-improvement".into()))
        );
        assert_eq!(
            s.apply("canonical-missing", Some("<link>".into())),
            Err(SessionError::NotEditable("canonical-missing".into()))
        );
        assert!(matches!(
            s.begin_edit("structured-data"),
            Err(SessionError::NotEditable(_))
        ));
    }

    #[test]
    fn test_edit_flow() {
        let mut s = session();

        let edit = s.begin_edit("title-missing").unwrap();
        assert_eq!(edit.text_type, Some(TextType::MetaTitle));
        assert!(edit.text.starts_with("<title>"));

        s.update_edit("<title>Clayworks Mugs - Handmade Ceramics</title>")
            .unwrap();
        s.commit_edit().unwrap();

        assert!(s.editing().is_none());
        assert!(s.is_applied("title-missing"));
        assert_eq!(
            s.edited_text("title-missing"),
            Some("<title>Clayworks Mugs - Handmade Ceramics</title>")
        );
        assert!(matches!(
            s.begin_edit("title-missing"),
            Err(SessionError::AlreadyApplied(_))
        ));
    }

    #[test]
    fn test_single_edit_at_a_time() {
        let mut s = session();
        s.begin_edit("title-missing").unwrap();
        s.begin_edit("desc-missing").unwrap();

        assert_eq!(s.editing().unwrap().id, "desc-missing");
        assert_eq!(s.cancel_edit().unwrap().id, "desc-missing");
        assert_eq!(s.update_edit("x"), Err(SessionError::NoEdit));
        assert_eq!(s.commit_edit(), Err(SessionError::NoEdit));
    }

    #[test]
    fn test_applied_ids_follow_fix_order() {
        let mut s = session();
        s.apply("structured-data", None).unwrap();
        s.apply("title-missing", None).unwrap();
        assert_eq!(s.applied_ids(), vec!["title-missing", "structured-data"]);
    }
}
