//! Hand-rolled BM25 implementation

use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// BM25 tuning constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term frequency saturation
    pub k1: f64,
    /// Length normalization, in [0, 1]
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// In-memory BM25 index over a list of text documents.
///
/// Documents are identified by their position in the list handed to
/// [`Bm25::build`]. Every call to `build` throws away the previous corpus.
#[derive(Debug, Clone, Default)]
pub struct Bm25 {
    params: Bm25Params,
    corpus: Vec<Vec<String>>,
    doc_lens: Vec<usize>,
    avg_doc_len: f64,
    idf: HashMap<String, f64>,
}

impl Bm25 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: Bm25Params) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> Bm25Params {
        self.params
    }

    /// Number of documents in the current corpus
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    /// Token count of document `idx`, if it exists
    pub fn doc_len(&self, idx: usize) -> Option<usize> {
        self.doc_lens.get(idx).copied()
    }

    /// IDF weight of `term`; `None` when the term never occurs in the corpus
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Index `documents`, replacing any previously built state.
    pub fn build<I, S>(&mut self, documents: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.corpus = documents
            .into_iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();
        self.doc_lens.clear();
        self.idf.clear();
        self.avg_doc_len = 0.0;

        let doc_count = self.corpus.len();
        if doc_count == 0 {
            tracing::debug!("built empty BM25 index");
            return;
        }

        self.doc_lens = self.corpus.iter().map(Vec::len).collect();
        let total_len: usize = self.doc_lens.iter().sum();
        self.avg_doc_len = total_len as f64 / doc_count as f64;

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &self.corpus {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        let n = doc_count as f64;
        self.idf = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let df = df as f64;
                let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
                (term.to_string(), idf)
            })
            .collect();

        tracing::debug!(
            documents = doc_count,
            terms = self.idf.len(),
            avg_doc_len = self.avg_doc_len,
            "built BM25 index"
        );
    }

    /// Score every document against `query`.
    ///
    /// Returns one `(doc index, score)` pair per document, highest score
    /// first. Ties keep corpus order. An empty corpus yields an empty list.
    pub fn score(&self, query: &str) -> Vec<(usize, f64)> {
        let query_tokens = tokenize(query);
        if self.corpus.is_empty() {
            return Vec::new();
        }

        let mut scores: Vec<(usize, f64)> = (0..self.corpus.len())
            .map(|idx| (idx, self.compute_score(idx, &query_tokens)))
            .collect();

        // sort_by is stable, equal scores stay in corpus order
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }

    // Repeated query tokens are summed once per occurrence, not deduplicated.
    fn compute_score(&self, doc_idx: usize, query_tokens: &[String]) -> f64 {
        let Bm25Params { k1, b } = self.params;
        let doc = &self.corpus[doc_idx];
        let doc_len = self.doc_lens[doc_idx] as f64;
        let mut score = 0.0;

        for term in query_tokens {
            let Some(&idf) = self.idf.get(term) else {
                continue;
            };
            let tf = doc.iter().filter(|t| *t == term).count() as f64;
            if tf == 0.0 {
                continue;
            }
            let norm = tf + k1 * (1.0 - b + b * doc_len / self.avg_doc_len);
            score += idf * tf * (k1 + 1.0) / norm;
        }

        score
    }
}
