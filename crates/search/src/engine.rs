//! BM25 text-search engine
//!
//! This module provides:
//! - TextIndex trait: the contract consumers rank through
//! - IndexBuilder: declares fields and adds documents
//! - Bm25Index: the built, read-only index
//!
//! # Matching
//!
//! A document is a hit when it matches no prohibited clause and either
//! matches every required clause or, when there are none, at least one
//! optional clause. Its score is the sum over matched clause/field pairs of
//! `bm25 * field_boost * clause_boost`.
//!
//! # Ordering
//!
//! Score descending, ties broken by insertion order. Identical queries
//! against the same index always return identical hit lists.

use crate::index::{DocId, InvertedIndex};
use crate::query::{self, Clause, Presence};
use crate::scorer::{Bm25Scorer, Scorer, ScorerContext, TermStats};
use docsearch_core::SearchHit;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::sync::Arc;

// ============================================================================
// TextIndex
// ============================================================================

/// A built full-text index
///
/// Consumers treat implementations as a ranking oracle: the order of the
/// returned hits is authoritative.
pub trait TextIndex: Send + Sync {
    /// Ranked hits for a query string, most relevant first
    fn search(&self, query: &str) -> Vec<SearchHit>;

    /// Number of indexed documents
    fn len(&self) -> usize;

    /// Whether no documents are indexed
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// IndexBuilder
// ============================================================================

struct Field {
    name: String,
    boost: f32,
    index: InvertedIndex,
}

/// Builder for [`Bm25Index`]
///
/// # Example
///
/// ```
/// use docsearch_search::{IndexBuilder, TextIndex};
///
/// let mut builder = IndexBuilder::new()
///     .field("title", 5.0)
///     .field("content", 1.0);
/// builder.add("Helm Support", &[("title", "Helm Support"), ("content", "chart values")]);
/// let index = builder.build();
///
/// let hits = index.search("helm");
/// assert_eq!(hits[0].doc_ref, "Helm Support");
/// ```
pub struct IndexBuilder {
    fields: Vec<Field>,
    refs: Vec<String>,
    scorer: Arc<dyn Scorer>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    /// Create a builder with no fields and the default BM25 scorer
    pub fn new() -> Self {
        IndexBuilder {
            fields: Vec::new(),
            refs: Vec::new(),
            scorer: Arc::new(Bm25Scorer::default()),
        }
    }

    /// Builder: declare a searchable field with its score multiplier
    ///
    /// Fields must be declared before the first document is added.
    pub fn field(mut self, name: impl Into<String>, boost: f32) -> Self {
        debug_assert!(self.refs.is_empty(), "fields declared after documents");
        self.fields.push(Field {
            name: name.into().to_lowercase(),
            boost,
            index: InvertedIndex::new(),
        });
        self
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Add a document under `doc_ref`
    ///
    /// `values` pairs field names with text. Declared fields missing from
    /// `values` are indexed as empty; names that were never declared are
    /// ignored.
    pub fn add(&mut self, doc_ref: impl Into<String>, values: &[(&str, &str)]) {
        let id = self.refs.len() as DocId;
        self.refs.push(doc_ref.into());
        for field in &mut self.fields {
            let text = values
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&field.name))
                .map(|(_, text)| *text)
                .unwrap_or("");
            field.index.index_document(id, text);
        }
    }

    /// Freeze into a searchable index
    pub fn build(self) -> Bm25Index {
        Bm25Index {
            fields: self.fields,
            refs: self.refs,
            scorer: self.scorer,
        }
    }
}

// ============================================================================
// Bm25Index
// ============================================================================

/// Read-only BM25 index over named fields
pub struct Bm25Index {
    fields: Vec<Field>,
    refs: Vec<String>,
    scorer: Arc<dyn Scorer>,
}

impl Bm25Index {
    /// Names of the indexed fields, in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Name of the scorer in use
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Per-document score contribution of one clause
    fn score_clause(&self, clause: &Clause) -> FxHashMap<DocId, f32> {
        let mut scores: FxHashMap<DocId, f32> = FxHashMap::default();

        for field in &self.fields {
            if let Some(only) = &clause.field {
                if *only != field.name {
                    continue;
                }
            }

            let ctx = ScorerContext::new(field.index.total_docs(), field.index.avg_doc_len());
            let terms: Vec<&str> = if clause.prefix {
                field.index.expand_prefix(&clause.term).collect()
            } else {
                vec![clause.term.as_str()]
            };

            for term in terms {
                let Some(postings) = field.index.lookup(term) else {
                    continue;
                };
                let doc_freq = postings.len();
                for entry in &postings.entries {
                    let stats = TermStats {
                        tf: entry.tf,
                        doc_len: entry.doc_len,
                        doc_freq,
                    };
                    let score = self.scorer.score(&stats, &ctx) * field.boost * clause.boost;
                    *scores.entry(entry.doc).or_insert(0.0) += score;
                }
            }
        }

        scores
    }
}

impl TextIndex for Bm25Index {
    fn search(&self, query: &str) -> Vec<SearchHit> {
        let names = self.field_names();
        let parsed = query::parse(query, &names);
        if !parsed.has_positive_clause() {
            return vec![];
        }

        let mut totals: FxHashMap<DocId, f32> = FxHashMap::default();
        let mut required: Vec<FxHashMap<DocId, f32>> = Vec::new();
        let mut excluded: Vec<DocId> = Vec::new();

        for clause in &parsed.clauses {
            let scores = self.score_clause(clause);
            match clause.presence {
                Presence::Prohibited => excluded.extend(scores.keys().copied()),
                Presence::Required => {
                    for (doc, score) in &scores {
                        *totals.entry(*doc).or_insert(0.0) += score;
                    }
                    required.push(scores);
                }
                Presence::Optional => {
                    for (doc, score) in scores {
                        *totals.entry(doc).or_insert(0.0) += score;
                    }
                }
            }
        }

        let mut hits: Vec<(DocId, f32)> = totals
            .into_iter()
            .filter(|(doc, _)| required.iter().all(|r| r.contains_key(doc)))
            .filter(|(doc, _)| !excluded.contains(doc))
            .collect();

        hits.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        tracing::trace!(
            target: "docsearch::search",
            query,
            clauses = parsed.clauses.len(),
            hits = hits.len(),
            "query evaluated"
        );

        hits.into_iter()
            .map(|(doc, score)| SearchHit::new(self.refs[doc as usize].clone(), score))
            .collect()
    }

    fn len(&self) -> usize {
        self.refs.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
