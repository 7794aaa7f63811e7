//! Query string parsing
//!
//! Turns what the user typed into a list of clauses. Syntax per
//! whitespace-separated fragment:
//!
//! | Form          | Meaning                                   |
//! |---------------|-------------------------------------------|
//! | `term`        | optional: contributes score if present    |
//! | `+term`       | required: every hit must contain it       |
//! | `-term`       | prohibited: no hit may contain it         |
//! | `title:term`  | match only in the named field             |
//! | `dep*`        | prefix wildcard (not stemmed)             |
//! | `term^10`     | multiply this clause's score by 10        |
//!
//! Parsing never fails. The widget re-queries on every keystroke, so half
//! typed input like `+` or `title:` must degrade to "fewer clauses" rather
//! than an error.

use crate::tokenizer::{normalize_prefix, tokenize};

/// How a clause constrains the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Adds score when present (default)
    #[default]
    Optional,
    /// Document must match this clause
    Required,
    /// Document must not match this clause
    Prohibited,
}

/// One analyzed term with its modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Analyzed term (stemmed), or raw lowercase prefix when `prefix` is set
    pub term: String,
    /// Restrict to this field; `None` means every field
    pub field: Option<String>,
    /// Presence constraint
    pub presence: Presence,
    /// Match every indexed term starting with `term`
    pub prefix: bool,
    /// Score multiplier
    pub boost: f32,
}

/// Parsed query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// Clauses in the order they were typed
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Whether parsing produced no clauses at all
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether some clause can add a document to the result set
    pub fn has_positive_clause(&self) -> bool {
        self.clauses
            .iter()
            .any(|c| c.presence != Presence::Prohibited)
    }
}

/// Parse a query string against the given field names
///
/// # Example
///
/// ```
/// use docsearch_search::query::{parse, Presence};
///
/// let query = parse("+helm title:chart*", &["title", "content"]);
/// assert_eq!(query.clauses.len(), 2);
/// assert_eq!(query.clauses[0].presence, Presence::Required);
/// assert_eq!(query.clauses[1].field.as_deref(), Some("title"));
/// assert!(query.clauses[1].prefix);
/// ```
pub fn parse(input: &str, fields: &[&str]) -> Query {
    let mut clauses = Vec::new();
    for fragment in input.split_whitespace() {
        parse_fragment(fragment, fields, &mut clauses);
    }
    Query { clauses }
}

fn parse_fragment(fragment: &str, fields: &[&str], out: &mut Vec<Clause>) {
    let (presence, rest) = if let Some(rest) = fragment.strip_prefix('+') {
        (Presence::Required, rest)
    } else if let Some(rest) = fragment.strip_prefix('-') {
        (Presence::Prohibited, rest)
    } else {
        (Presence::Optional, fragment)
    };

    let (field, rest) = split_field(rest, fields);
    let (rest, boost) = split_boost(rest);

    let prefix = rest.ends_with('*');
    let text = rest.trim_matches('*');

    if prefix {
        if let Some(term) = normalize_prefix(text) {
            out.push(Clause {
                term,
                field,
                presence,
                prefix: true,
                boost,
            });
        }
        return;
    }

    for term in tokenize(text) {
        out.push(Clause {
            term,
            field: field.clone(),
            presence,
            prefix: false,
            boost,
        });
    }
}

/// Split `field:term` when `field` names a known field.
fn split_field<'a>(text: &'a str, fields: &[&str]) -> (Option<String>, &'a str) {
    if let Some((name, rest)) = text.split_once(':') {
        let name = name.to_lowercase();
        if fields.iter().any(|f| *f == name) {
            return (Some(name), rest);
        }
    }
    (None, text)
}

/// Split `term^N`. Unparseable or non-positive boosts fall back to 1.0.
fn split_boost(text: &str) -> (&str, f32) {
    match text.rsplit_once('^') {
        Some((term, boost)) => {
            let boost = boost
                .parse::<f32>()
                .ok()
                .filter(|b| b.is_finite() && *b > 0.0)
                .unwrap_or(1.0);
            (term, boost)
        }
        None => (text, 1.0),
    }
}
