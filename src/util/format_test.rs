use super::*;

#[test]
fn capitalize_normalizes_mixed_case_words() {
    assert_eq!(capitalize("ada"), "Ada");
    assert_eq!(capitalize("LOVELACE"), "Lovelace");
    assert_eq!(capitalize("mIxEd"), "Mixed");
    assert_eq!(capitalize(""), "");
}

#[test]
fn capitalize_first_leaves_interior_casing_alone() {
    assert_eq!(capitalize_first("velvet Sofa XL"), "Velvet Sofa XL");
    assert_eq!(capitalize_first("Chair"), "Chair");
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn capitalize_words_handles_each_word() {
    assert_eq!(capitalize_words("jane van doe"), "Jane Van Doe");
    assert_eq!(capitalize_words("  spaced   out "), "Spaced Out");
}

#[test]
fn phone_groups_three_four_rest() {
    assert_eq!(format_phone("5551234567"), "555-1234-567");
    assert_eq!(format_phone("04412345678"), "044-1234-5678");
    assert_eq!(format_phone("555-123-4567"), "555-1234-567");
}

#[test]
fn short_or_odd_phone_numbers_pass_through() {
    assert_eq!(format_phone("12345"), "12345");
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("ext. 12345678x"), "ext. 12345678x");
}

#[test]
fn date_renders_day_month_year() {
    assert_eq!(format_date("2024-03-07T12:34:56.000Z"), "07 Mar 2024");
    assert_eq!(format_date("2023-12-31T00:00:00Z"), "31 Dec 2023");
}

#[test]
fn date_time_appends_hours_and_minutes() {
    assert_eq!(format_date_time("2024-03-07T12:34:56.000Z"), "07 Mar 2024, 12:34");
    assert_eq!(format_date_time("2024-03-07"), "07 Mar 2024");
}

#[test]
fn malformed_timestamps_are_shown_as_stored() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2024-13-07T00:00:00Z"), "2024-13-07T00:00:00Z");
    assert_eq!(format_date_time("yesterday"), "yesterday");
}

#[test]
fn garbled_time_segment_renders_the_date_alone() {
    // Multibyte characters after `T` must not panic the truncation.
    assert_eq!(format_date_time("2024-03-07Tééé"), "07 Mar 2024");
    assert_eq!(format_date_time("2024-03-07Txx:yy:zz"), "07 Mar 2024");
}

#[test]
fn plain_number_drops_trailing_zero_fraction() {
    assert_eq!(plain_number(100.0), "100");
    assert_eq!(plain_number(899.5), "899.5");
    assert_eq!(plain_number(0.0), "0");
}

#[test]
fn preview_truncates_on_character_boundaries() {
    assert_eq!(preview("short note", 45), "short note");
    let long = "a".repeat(50);
    assert_eq!(preview(&long, 45), format!("{}...", "a".repeat(45)));
    assert_eq!(preview("héllo wörld", 5), "héllo...");
}
