use crate::domain::a001_person::aggregate::{PersonId, PERSON_ID_QUERY_KEY};

/// Navigable pages of the app. Every page except the search carries the
/// person identifier as the `id` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Search,
    PurchaseHistory,
    Magazine,
    Recipe,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "/",
            Self::PurchaseHistory => "/data",
            Self::Magazine => "/products",
            Self::Recipe => "/llm",
        }
    }

    pub fn href(&self, person_id: PersonId) -> String {
        self.href_raw(&person_id.to_string())
    }

    /// Link built from an identifier that was not range-checked (subscription footer)
    pub fn href_raw(&self, raw_id: &str) -> String {
        format!(
            "{}?{}={}",
            self.path(),
            PERSON_ID_QUERY_KEY,
            urlencoding::encode(raw_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_carry_identifier() {
        let id = PersonId::validate("5").unwrap();
        assert_eq!(AppRoute::PurchaseHistory.href(id), "/data?id=5");
        assert_eq!(AppRoute::Magazine.href(id), "/products?id=5");
        assert_eq!(AppRoute::Recipe.href(id), "/llm?id=5");
        assert_eq!(AppRoute::Search.path(), "/");
    }

    #[test]
    fn test_raw_identifier_is_encoded() {
        assert_eq!(AppRoute::Magazine.href_raw("7 8"), "/products?id=7%208");
    }
}
