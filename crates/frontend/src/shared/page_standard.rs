//! Page category constants.
//!
//! Every section page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a002_business--list"`) and a `data-page-category` attribute with one
//! of the constants below. The entity part matches the module directory, so
//! an id copied from the DOM inspector leads straight to the source.

/// Searchable record list with stats, optional detail panel and create dialog.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only overview.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Pages outside the admin shell, such as sign-in.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a002_business--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a002_business"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_business--detail"));
    }
}
