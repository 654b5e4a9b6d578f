use regex::Regex;
use std::sync::OnceLock;

/// Bracketed `[Type:Subtype]` prefix split out of a commit header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub r#type: String,
    pub subtype: String,
    pub remainder: String,
}

fn header_regex() -> Option<&'static Regex> {
    static HEADER: OnceLock<Option<Regex>> = OnceLock::new();
    HEADER
        .get_or_init(|| Regex::new(r"^\[([a-zA-Z0-9/ ]+):?([a-zA-Z0-9/ ]*)\](.*)$").ok())
        .as_ref()
}

impl ParsedTag {
    /// Parse a trimmed header line.
    ///
    /// Returns `None` when the line does not start with a bracket tag.
    /// Spaces inside the type and subtype tokens are dropped and the
    /// remainder is trimmed.
    pub fn parse(header: &str) -> Option<Self> {
        let captures = header_regex()?.captures(header)?;
        let token = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str().replace(' ', ""))
                .unwrap_or_default()
        };

        Some(ParsedTag {
            r#type: token(1),
            subtype: token(2),
            remainder: captures
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        })
    }
}

/// First line of a commit message, trimmed.
pub fn header_line(message: &str) -> &str {
    message
        .split(['\n', '\r'])
        .next()
        .unwrap_or_default()
        .trim()
}
