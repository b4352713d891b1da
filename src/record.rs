use crate::error::ParseError;

/// One access-log line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub page: &'a str,
    pub client: &'a str,
}

/// Separators are the ASCII whitespace set including vertical tab. Other
/// Unicode spaces such as U+00A0 belong to the token they appear in.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Splits a line on whitespace into exactly a page and a client identifier.
///
/// Runs of whitespace count as a single separator, so `"/home   1.2.3.4"`
/// parses, while a third token anywhere on the line is rejected rather than
/// silently dropped.
pub fn parse_record(line: &str) -> Result<Record<'_>, ParseError> {
    let mut tokens = line.split(is_separator).filter(|token| !token.is_empty());

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(page), Some(client), None) => Ok(Record { page, client }),
        (None, _, _) => Err(ParseError::TokenCount { found: 0 }),
        (Some(_), None, _) => Err(ParseError::TokenCount { found: 1 }),
        (Some(_), Some(_), Some(_)) => Err(ParseError::TokenCount {
            found: 3 + tokens.count(),
        }),
    }
}
