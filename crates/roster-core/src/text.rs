//! Small text helpers shared by the roster and the file codec

/// Compare two names ignoring letter case
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Split on a separator, dropping trailing empty segments.
///
/// `"S1|Alice|"` yields `["S1", "Alice"]` and `""` yields `[""]`, so a line
/// with an empty grades blob looks the same as one with no grades field.
pub fn split_fields(line: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(separator).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
