// src/session.rs
//! Session-scoped state handed from the resume step to the match step.
//!
//! Lives exactly as long as its owner (one workflow controller, i.e. one
//! interactive session); nothing is written to disk.

pub const RESUME_TEXT_KEY: &str = "resumeText";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStore {
    resume_text: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously extracted text
    pub fn store_resume_text(&mut self, text: String) {
        self.resume_text = Some(text);
    }

    /// Cached text, if a non-empty one was stored
    pub fn resume_text(&self) -> Option<&str> {
        self.resume_text.as_deref().filter(|text| !text.is_empty())
    }

    /// Key/value view for code that addresses the store by name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            RESUME_TEXT_KEY => self.resume_text(),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.resume_text = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_on_each_store() {
        let mut session = SessionStore::new();
        assert_eq!(session.resume_text(), None);

        session.store_resume_text("first".to_string());
        session.store_resume_text("second".to_string());
        assert_eq!(session.get(RESUME_TEXT_KEY), Some("second"));
        assert_eq!(session.get("somethingElse"), None);

        session.clear();
        assert_eq!(session.resume_text(), None);
    }

    #[test]
    fn test_empty_text_counts_as_absent() {
        let mut session = SessionStore::new();
        session.store_resume_text(String::new());
        assert_eq!(session.resume_text(), None);
    }
}
