// src/utils/validation.rs
use regex::Regex;

use crate::models::MAX_SEARCH_QUERY_LEN;

lazy_static::lazy_static! {
    static ref COMPLAINT_ID_REGEX: Regex = Regex::new(r"^CU-\d{4}-\d{3}$").unwrap();
}

/// Validates complaint id format (`CU-YYYY-NNN`)
pub fn is_complaint_id(id: &str) -> bool {
    COMPLAINT_ID_REGEX.is_match(id)
}

/// Trims a search query and caps it at `MAX_SEARCH_QUERY_LEN` characters.
pub fn normalize_search_query(query: &str) -> String {
    query
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_SEARCH_QUERY_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_id_validation() {
        assert!(is_complaint_id("CU-2024-001"));
        assert!(is_complaint_id("CU-1999-999"));
        assert!(!is_complaint_id("CU-24-001"));
        assert!(!is_complaint_id("cu-2024-001"));
        assert!(!is_complaint_id("CU-2024-0001"));
        assert!(!is_complaint_id(" CU-2024-001"));
    }

    #[test]
    fn test_search_query_normalization() {
        assert_eq!(normalize_search_query("  CU-2024-002 "), "CU-2024-002");
        assert_eq!(normalize_search_query("a\r\nb"), "ab");

        let long = "x".repeat(MAX_SEARCH_QUERY_LEN + 50);
        assert_eq!(normalize_search_query(&long).len(), MAX_SEARCH_QUERY_LEN);
    }

    #[test]
    fn test_search_query_truncates_on_char_boundary() {
        let telugu = "తె".repeat(MAX_SEARCH_QUERY_LEN);
        assert_eq!(
            normalize_search_query(&telugu).chars().count(),
            MAX_SEARCH_QUERY_LEN
        );
    }
}
