pub mod domains;
pub mod multi;
pub mod search;
pub mod version;

use crate::cli::Preset;
use skillsearch_core::{resolve_data_dir, Config, SearchResult, Searcher};
use std::path::{Path, PathBuf};

const MAX_VALUE_CHARS: usize = 300;

pub fn load_config(path: Option<&Path>, preset: Preset) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(Config::load(path)?)
        }
        None => Ok(match preset {
            Preset::AiArtist => Config::ai_artist(),
            Preset::CipDesign => Config::cip_design(),
        }),
    }
}

pub fn searcher(
    config: Option<&Path>,
    preset: Preset,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<Searcher> {
    let config = load_config(config, preset)?;
    let data_dir = resolve_data_dir(data_dir)?;
    Ok(Searcher::new(config, data_dir))
}

/// Markdown rendering of one domain's hits.
pub fn format_result(result: &SearchResult) -> String {
    let mut out = format!(
        "## Search Results\n**Domain:** {} | **Query:** {}\n**Source:** {} | **Found:** {} results\n",
        result.domain,
        result.query,
        result.file,
        result.len()
    );

    for (i, hit) in result.hits.iter().enumerate() {
        out.push_str(&format!("\n### Result {}\n", i + 1));
        for field in &hit.fields {
            out.push_str(&format!(
                "- **{}:** {}\n",
                field.column,
                truncate(&field.value, MAX_VALUE_CHARS)
            ));
        }
    }

    out
}

fn truncate(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &value[..end]),
        None => value.to_string(),
    }
}
