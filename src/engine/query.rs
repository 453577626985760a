// src/engine/query.rs
//! Raw query parsing: exact-phrase mode vs boolean term mode.

/// Boolean connective for term-mode queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// At least one term must match (the default).
    #[default]
    Any,
    /// Every term must match.
    All,
}

/// A parsed query, ready for evaluation against keyword sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// Case-sensitive whole-keyword match on the inner text.
    Phrase(String),
    /// Lowercased terms plus the boolean mode they selected.
    Terms { terms: Vec<String>, mode: QueryMode },
}

/// Parses a raw query string.
///
/// A leading `"` selects phrase mode: the quote and the final character of
/// the remainder are dropped (unconditionally, closing quote or not) and
/// the inner text matches verbatim. Anything else is term mode: the query
/// is lowercased and split on every single space, so consecutive spaces
/// produce empty terms. `and` switches the mode to [`QueryMode::All`],
/// `or` to [`QueryMode::Any`]; the last connective wins, and connectives
/// stay in the term list as ordinary literal terms.
#[must_use]
pub fn parse(raw: &str) -> ParsedQuery {
    if let Some(rest) = raw.strip_prefix('"') {
        return ParsedQuery::Phrase(strip_last_char(rest).to_string());
    }

    let lowered = raw.to_lowercase();
    let terms: Vec<String> = lowered.split(' ').map(str::to_string).collect();

    let mut mode = QueryMode::Any;
    for term in &terms {
        match term.as_str() {
            "and" => mode = QueryMode::All,
            "or" => mode = QueryMode::Any,
            _ => {}
        }
    }

    ParsedQuery::Terms { terms, mode }
}

fn strip_last_char(s: &str) -> &str {
    match s.char_indices().last() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
