//! Scoring infrastructure
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - ScorerContext for field-level corpus statistics
//! - TermStats for one term in one document
//! - Bm25Scorer default implementation

// ============================================================================
// ScorerContext
// ============================================================================

/// Corpus-level statistics for one field
#[derive(Debug, Clone, Copy, Default)]
pub struct ScorerContext {
    /// Total documents in corpus (for IDF calculation)
    pub total_docs: usize,

    /// Average field length in tokens (for length normalization)
    pub avg_doc_len: f32,
}

impl ScorerContext {
    /// Create a new ScorerContext
    pub fn new(total_docs: usize, avg_doc_len: f32) -> Self {
        ScorerContext {
            total_docs,
            avg_doc_len,
        }
    }

    /// Compute IDF for a term with the given document frequency
    ///
    /// Uses standard IDF formula with smoothing:
    /// IDF(t) = ln((N - df + 0.5) / (df + 0.5) + 1)
    pub fn idf(&self, doc_freq: usize) -> f32 {
        let n = self.total_docs as f32;
        let df = doc_freq as f32;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }
}

// ============================================================================
// TermStats
// ============================================================================

/// Statistics for one term occurring in one document's field
#[derive(Debug, Clone, Copy)]
pub struct TermStats {
    /// Term frequency in the field
    pub tf: u32,
    /// Field length in tokens
    pub doc_len: u32,
    /// Number of documents whose field contains the term
    pub doc_freq: usize,
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take the statistics of one matched term and return a relevance
/// contribution. Higher scores indicate more relevant documents. Field and
/// clause boosts are applied by the caller.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so a built index can be shared.
pub trait Scorer: Send + Sync {
    /// Score a single term match
    fn score(&self, stats: &TermStats, ctx: &ScorerContext) -> f32;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// Bm25Scorer
// ============================================================================

/// Okapi BM25
///
/// # BM25 Formula
///
/// For each query term t:
/// score += IDF(t) * (tf * (k1 + 1)) / (tf + k1 * (1 - b + b * dl/avgdl))
///
/// Where:
/// - tf = term frequency in document
/// - dl = document length
/// - avgdl = average document length
/// - k1 = term saturation parameter (default 1.2)
/// - b = length normalization parameter (default 0.75)
#[derive(Debug, Clone)]
pub struct Bm25Scorer {
    /// k1 parameter: term frequency saturation (default 1.2)
    k1: f32,
    /// b parameter: length normalization (default 0.75)
    b: f32,
}

impl Default for Bm25Scorer {
    fn default() -> Self {
        Bm25Scorer { k1: 1.2, b: 0.75 }
    }
}

impl Bm25Scorer {
    /// Create a new Bm25Scorer with custom parameters
    pub fn new(k1: f32, b: f32) -> Self {
        Bm25Scorer { k1, b }
    }

    /// Term saturation parameter
    pub fn k1(&self) -> f32 {
        self.k1
    }

    /// Length normalization parameter
    pub fn b(&self) -> f32 {
        self.b
    }
}

impl Scorer for Bm25Scorer {
    fn score(&self, stats: &TermStats, ctx: &ScorerContext) -> f32 {
        if stats.tf == 0 {
            return 0.0;
        }

        let tf = stats.tf as f32;
        let doc_len = stats.doc_len as f32;
        let avg_len = ctx.avg_doc_len.max(1.0);
        let tf_component =
            (tf * (self.k1 + 1.0)) / (tf + self.k1 * (1.0 - self.b + self.b * doc_len / avg_len));

        ctx.idf(stats.doc_freq) * tf_component
    }

    fn name(&self) -> &str {
        "bm25"
    }
}

// ============================================================================
// Tests
// ============================================================================
