//! Field separator detection from a file's header line.

use std::fmt;

use super::split_line;

/// A field separator the parsers recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

impl Delimiter {
    /// Candidates in priority order. The first entry is the default.
    pub const CANDIDATES: [Delimiter; 2] = [Delimiter::Comma, Delimiter::Semicolon];

    /// Minimum field count a candidate must produce on the header to be chosen.
    pub const MIN_HEADER_FIELDS: usize = 2;

    /// Returns the separator character.
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::CANDIDATES[0]
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Chooses the delimiter from the first line of `text`.
///
/// The header is tokenized with each candidate; the candidate producing the
/// strictly greatest field count wins, provided it yields at least
/// [`Delimiter::MIN_HEADER_FIELDS`] fields. Ties keep the earlier candidate.
/// When no candidate qualifies, or the text is empty, the default (comma)
/// is returned. Body lines are assumed to share the header's delimiter.
///
/// # Examples
///
/// ```
/// use overtime_dashboard::parsing::{detect_delimiter, Delimiter};
///
/// assert_eq!(detect_delimiter("a;b;c\n1;2;3"), Delimiter::Semicolon);
/// assert_eq!(detect_delimiter("a,b,c;d"), Delimiter::Comma);
/// assert_eq!(detect_delimiter(""), Delimiter::Comma);
/// ```
pub fn detect_delimiter(text: &str) -> Delimiter {
    let header = text.split('\n').next().unwrap_or_default();
    if header.is_empty() {
        return Delimiter::default();
    }

    let mut best = Delimiter::default();
    let mut max_fields = 0;

    for candidate in Delimiter::CANDIDATES {
        let field_count = split_line(header, candidate.as_char()).len();
        if field_count >= Delimiter::MIN_HEADER_FIELDS && field_count > max_fields {
            max_fields = field_count;
            best = candidate;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_wins_when_it_yields_more_fields() {
        assert_eq!(detect_delimiter("a,b,c;d"), Delimiter::Comma);
    }

    #[test]
    fn test_semicolon_detected() {
        assert_eq!(detect_delimiter("a;b;c"), Delimiter::Semicolon);
    }

    #[test]
    fn test_tie_keeps_comma() {
        assert_eq!(detect_delimiter("a,b;c"), Delimiter::Comma);
    }

    #[test]
    fn test_single_column_header_falls_back_to_comma() {
        assert_eq!(detect_delimiter("header_only\n1;2;3"), Delimiter::Comma);
    }

    #[test]
    fn test_only_first_line_is_inspected() {
        assert_eq!(detect_delimiter("a;b\n1,2,3,4,5"), Delimiter::Semicolon);
    }

    #[test]
    fn test_leading_blank_line_falls_back_to_comma() {
        assert_eq!(detect_delimiter("\na;b;c"), Delimiter::Comma);
    }

    #[test]
    fn test_quoted_separators_do_not_count() {
        assert_eq!(detect_delimiter(r#""a,b,c";d;e"#), Delimiter::Semicolon);
    }
}
