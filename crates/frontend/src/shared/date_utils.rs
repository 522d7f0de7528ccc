/// Date formatting helpers for table cells.
///
/// The backend sends ISO timestamps as strings; no parsing library is needed
/// for display-only formatting.

/// Format an ISO date or datetime string as DD/MM/YYYY.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Same as [`format_date`] for optional timestamps, with "-" for absent ones.
pub fn format_date_opt(date_str: &Option<String>) -> String {
    date_str
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_and_datetime() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn passes_through_unrecognized_input() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn optional_dates_render_a_dash() {
        assert_eq!(format_date_opt(&None), "-");
        assert_eq!(
            format_date_opt(&Some("2024-12-31T23:59:59Z".to_string())),
            "31/12/2024"
        );
    }
}
