//! Page category constants for page standardization.
//!
//! Every routed page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"permits--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! page's module directory.

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Analytical dashboard view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_page_ids() {
        assert!(is_valid_page_id("permits--list"));
        assert!(is_valid_page_id("sys_users--system"));
        assert!(!is_valid_page_id("permits"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("permits--"));
    }

    #[test]
    fn known_categories() {
        assert!(is_known_category("list"));
        assert!(is_known_category("dashboard"));
        assert!(!is_known_category("legacy"));
    }
}
