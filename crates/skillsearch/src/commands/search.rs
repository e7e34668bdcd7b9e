use skillsearch_core::Searcher;

pub fn run(
    searcher: &Searcher,
    query: &str,
    domain: Option<&str>,
    max_results: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let result = searcher.search(query, domain, max_results)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_empty() {
        println!("No results found for \"{}\" in {}", query, result.domain);
    } else {
        print!("{}", super::format_result(&result));
    }
    Ok(())
}
