/// Normalize free-text search input: trimmed and lowercased.
/// Returns `None` when nothing searchable remains.
pub fn normalize_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Zero-pad an id to at least three digits ("#025" style, without the hash).
pub fn format_display_id(id: u32) -> String {
    format!("{:03}", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pikachu", Some("pikachu"))]
    #[case("  MEW  ", Some("mew"))]
    #[case("25", Some("25"))]
    #[case("mr-mime", Some("mr-mime"))]
    #[case("", None)]
    #[case("   \t", None)]
    fn normalizes_queries(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_query(input).as_deref(), expected);
    }

    #[rstest]
    #[case(1, "001")]
    #[case(25, "025")]
    #[case(151, "151")]
    #[case(1025, "1025")]
    fn pads_display_ids(#[case] id: u32, #[case] expected: &str) {
        assert_eq!(format_display_id(id), expected);
    }
}
