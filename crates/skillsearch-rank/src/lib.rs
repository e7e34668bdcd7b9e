//! BM25 ranking over small in-memory text corpora

mod bm25;
mod tokenizer;

pub use bm25::{Bm25, Bm25Params};
pub use tokenizer::{tokenize, MIN_TOKEN_CHARS};
