//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_purchase_history--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads to `domain/a002_purchase_history/`.

/// Entry page with the identifier search box.
pub const PAGE_CAT_ENTRY: &str = "entry";

/// Table of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Paginated card carousel.
pub const PAGE_CAT_GALLERY: &str = "gallery";

/// Externally generated content.
pub const PAGE_CAT_CONTENT: &str = "content";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// CSS class of the page root for a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_ENTRY => "page page--entry",
        PAGE_CAT_GALLERY => "page page--gallery",
        PAGE_CAT_CONTENT => "page page--content",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a003_recommendation--gallery"));
        assert!(!is_valid_page_id("a003_recommendation"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_purchase_history--"));
    }

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_GALLERY), "page page--gallery");
        assert_eq!(page_class("unknown"), "page");
    }
}
