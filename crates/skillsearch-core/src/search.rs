//! Domain search: load rows, rank them, project the winners

use crate::config::Config;
use crate::error::{Error, Result};
use crate::router::Router;
use crate::source::load_rows;
use crate::types::{SearchHit, SearchResult};
use skillsearch_rank::Bm25;
use std::path::{Path, PathBuf};

/// Keep positive scores only, at most `max_results` of them.
pub fn top_hits(ranking: Vec<(usize, f64)>, max_results: usize) -> Vec<(usize, f64)> {
    ranking
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .take(max_results)
        .collect()
}

#[derive(Debug, Clone)]
pub struct Searcher {
    config: Config,
    router: Router,
    data_dir: PathBuf,
}

impl Searcher {
    pub fn new(config: Config, data_dir: impl Into<PathBuf>) -> Self {
        let router = Router::new(&config);
        Self {
            config,
            router,
            data_dir: data_dir.into(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Search one domain, routing by keywords when `domain` is `None`.
    ///
    /// The index is built fresh on every call so edits to the CSV files are
    /// picked up without any invalidation.
    pub fn search(
        &self,
        query: &str,
        domain: Option<&str>,
        max_results: Option<usize>,
    ) -> Result<SearchResult> {
        let name = domain.unwrap_or_else(|| self.router.detect_domain(query));
        let domain = self
            .config
            .domain(name)
            .ok_or_else(|| Error::UnknownDomain(name.to_string()))?;
        let max_results = max_results.unwrap_or(self.config.max_results);

        let rows = load_rows(&self.data_dir.join(&domain.file))?;
        let documents = rows.iter().map(|row| row.document(&domain.search_columns));

        let mut bm25 = Bm25::with_params(self.config.bm25);
        bm25.build(documents);

        let hits: Vec<SearchHit> = top_hits(bm25.score(query), max_results)
            .into_iter()
            .map(|(index, score)| SearchHit {
                index,
                score,
                fields: rows[index].project(&domain.output_columns),
            })
            .collect();

        tracing::debug!(domain = %domain.name, query, hits = hits.len(), "domain search");

        Ok(SearchResult {
            domain: domain.name.clone(),
            query: query.to_string(),
            file: domain.file.clone(),
            hits,
        })
    }

    /// Search several domains with the same query.
    ///
    /// Only domains with at least one hit are returned, each capped at
    /// `max_per_domain` (config default when `None`). Domains whose data file
    /// is missing are skipped with a warning; any other failure aborts the
    /// whole search.
    pub fn search_many<S: AsRef<str>>(
        &self,
        query: &str,
        domains: &[S],
        max_per_domain: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let max_per_domain = max_per_domain.unwrap_or(self.config.max_per_domain);
        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            match self.search(query, Some(domain.as_ref()), Some(max_per_domain)) {
                Ok(result) if result.is_empty() => {}
                Ok(result) => results.push(result),
                Err(Error::SourceNotFound(path)) => {
                    tracing::warn!(
                        domain = domain.as_ref(),
                        path = %path.display(),
                        "skipping domain without data file"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(results)
    }

    /// Search every configured domain, in declaration order.
    pub fn search_all(
        &self,
        query: &str,
        max_per_domain: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        self.search_many(query, &self.config.domain_names(), max_per_domain)
    }
}
