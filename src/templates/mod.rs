// src/templates/mod.rs
pub mod awareness;
pub mod home;
pub mod icons;
pub mod not_found;
pub mod report;
pub mod track;
pub mod water_quality;

mod layout;

pub use layout::render_page;

use chrono::NaiveDate;

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Formats an ISO date as `M/D/YYYY`; anything unparsable is shown as-is.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => html_escape(iso),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-10"), "1/10/2024");
        assert_eq!(format_date("2024-12-05"), "12/5/2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
