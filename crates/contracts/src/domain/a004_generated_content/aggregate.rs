use serde::{Deserialize, Serialize};

use crate::domain::a001_person::aggregate::PersonId;
use crate::shared::markup::sanitize_markup;
use crate::shared::view_state::{KeyedView, ViewStatus};

/// Field of the `generate-recipe` response holding the markup
pub const RECIPE_FIELD: &str = "recipe";

/// Recipe markup generated for one person, already passed through the sanitizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    person_id: u8,
    markup: String,
}

impl GeneratedContent {
    pub fn new(person_id: PersonId, raw_markup: &str) -> Self {
        Self {
            person_id: person_id.value(),
            markup: sanitize_markup(raw_markup),
        }
    }

    pub fn person_id(&self) -> u8 {
        self.person_id
    }

    /// Safe to inject as inner HTML
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

pub type ContentStatus = ViewStatus<GeneratedContent>;

/// Recipe page: `Loading -> Ready | Failed`, once per identifier
pub type ContentViewState = KeyedView<GeneratedContent>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::CatalogError;

    #[test]
    fn test_content_is_sanitized_on_construction() {
        let id = PersonId::validate("3").unwrap();
        let content = GeneratedContent::new(id, "<h1>Tocana</h1><script>x()</script>");
        assert_eq!(content.markup(), "<h1>Tocana</h1>");
        assert_eq!(content.person_id(), 3);
    }

    #[test]
    fn test_failure_is_terminal_for_identifier() {
        let mut view = ContentViewState::new();
        let ticket = view.activate(Some("9")).unwrap();
        assert!(view.status().is_loading());

        view.resolve(
            &ticket,
            Err(CatalogError::RemoteService {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }),
        );
        assert!(matches!(view.status(), ContentStatus::Failed(_)));

        // Re-reading the same identifier does not go back to Loading
        assert!(view.activate(Some("9")).is_none());
        assert!(!view.status().is_loading());
        assert!(matches!(view.status(), ContentStatus::Failed(_)));

        // A different identifier does
        let next = view.activate(Some("10")).unwrap();
        assert!(view.status().is_loading());
        let id = next.person_id;
        assert!(view.resolve(&next, Ok(GeneratedContent::new(id, "<p>ok</p>"))));
        assert_eq!(view.status().ready().map(|c| c.markup()), Some("<p>ok</p>"));
    }

    #[test]
    fn test_invalid_identifier_skips_loading() {
        let mut view = ContentViewState::new();
        assert!(view.activate(Some("abc")).is_none());
        assert!(matches!(view.status(), ContentStatus::Invalid(_)));
    }
}
