//! Keyword-overlap domain router

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Router {
    domains: Vec<(String, Vec<String>)>,
    fallback: String,
}

impl Router {
    pub fn new(config: &Config) -> Self {
        let domains = config
            .domains
            .iter()
            .map(|d| {
                let keywords = d.keywords.iter().map(|k| k.to_lowercase()).collect();
                (d.name.clone(), keywords)
            })
            .collect();

        Self {
            domains,
            fallback: config.fallback_domain.clone(),
        }
    }

    /// Pick the domain whose keywords occur most often in `query`.
    ///
    /// Keywords match as substrings of the lower-cased query. The first
    /// declared domain wins a tie; no match at all yields the fallback.
    pub fn detect_domain(&self, query: &str) -> &str {
        let query = query.to_lowercase();
        let mut best: Option<(&str, usize)> = None;

        for (name, keywords) in &self.domains {
            let hits = keywords.iter().filter(|k| query.contains(k.as_str())).count();
            if hits > best.map_or(0, |(_, count)| count) {
                best = Some((name.as_str(), hits));
            }
        }

        best.map_or(self.fallback.as_str(), |(name, _)| name)
    }
}
