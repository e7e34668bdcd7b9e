use skillsearch_core::{SearchResult, Searcher};

pub fn run(
    searcher: &Searcher,
    query: &str,
    domains: &[String],
    max_results: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let results = if domains.is_empty() {
        searcher.search_all(query, max_results)?
    } else {
        searcher.search_many(query, domains, max_results)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No results found for \"{}\"", query);
    } else {
        print!("{}", format_multi(&results));
    }
    Ok(())
}

/// Compact listing: one header per domain, the first output column per hit.
fn format_multi(results: &[SearchResult]) -> String {
    let mut out = String::from("## Multi-Domain Search\n");
    for result in results {
        out.push_str(&format!("\n### {}\n", result.domain.to_uppercase()));
        for hit in &result.hits {
            let label = hit.fields.first().map_or("Unknown", |f| f.value.as_str());
            out.push_str(&format!("- {}\n", label));
        }
    }
    out
}
