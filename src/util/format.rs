//! Display formatting for table cells and detail pages.
//!
//! Timestamps arrive as ISO-8601 strings (`2024-03-07T12:34:56.000Z`) and
//! are reshaped by string slicing rather than a datetime library; the
//! server already normalizes to UTC and the UI only needs a readable date.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Uppercase the first letter and lowercase the rest, for single words
/// stored in mixed case (user names, categories).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Uppercase only the first letter, leaving the rest as typed. Used for
/// product titles, which keep their interior casing.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize each whitespace-separated word.
pub fn capitalize_words(value: &str) -> String {
    value.split_whitespace().map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Group a phone number as `3-4-rest` for readability.
///
/// Numbers with fewer than eight digits (or with non-digit characters
/// beyond common separators) are shown as stored.
pub fn format_phone(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let separators_only = number.chars().all(|c| c.is_ascii_digit() || " -()+.".contains(c));
    if digits.len() < 8 || !separators_only {
        return number.to_owned();
    }
    format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..])
}

/// `07 Mar 2024` from an ISO timestamp; malformed input is shown as-is.
pub fn format_date(timestamp: &str) -> String {
    match split_date(timestamp) {
        Some((year, month, day)) => format!("{day} {} {year}", MONTHS[month - 1]),
        None => timestamp.to_owned(),
    }
}

/// `07 Mar 2024, 12:34` from an ISO timestamp; malformed input is shown
/// as-is. A well-formed date with a garbled time segment renders the date
/// alone.
pub fn format_date_time(timestamp: &str) -> String {
    let Some((year, month, day)) = split_date(timestamp) else {
        return timestamp.to_owned();
    };
    let time: String = timestamp
        .split('T')
        .nth(1)
        .map(|t| t.chars().take(5).collect())
        .unwrap_or_default();
    if is_clock(&time) {
        format!("{day} {} {year}, {time}", MONTHS[month - 1])
    } else {
        format!("{day} {} {year}", MONTHS[month - 1])
    }
}

/// First `max_chars` characters of `text` with a trailing ellipsis when
/// truncated. Counts characters, not bytes, so multi-byte text is safe.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Render a float the way the inputs and tables show it: integral values
/// without a trailing `.0`.
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn is_clock(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b':'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

fn split_date(timestamp: &str) -> Option<(&str, usize, &str)> {
    let date = timestamp.split('T').next()?;
    let mut parts = date.splitn(3, '-');
    let year = parts.next()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day = parts.next()?;
    if year.len() != 4 || day.len() != 2 || !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month, day))
}
