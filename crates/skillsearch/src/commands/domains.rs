use skillsearch_core::Config;

pub fn run(config: &Config) -> anyhow::Result<()> {
    println!("{}", list_domains(config));
    Ok(())
}

fn list_domains(config: &Config) -> String {
    let mut lines = vec!["Domains".to_string(), "=======".to_string()];
    for domain in &config.domains {
        let marker = if domain.name == config.fallback_domain {
            " (fallback)"
        } else {
            ""
        };
        lines.push(format!("  {}{} -> {}", domain.name, marker, domain.file));
        if !domain.keywords.is_empty() {
            lines.push(format!("      keywords: {}", domain.keywords.join(", ")));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_domains_marks_fallback() {
        let out = list_domains(&Config::default());
        assert!(out.contains("  style (fallback) -> image-styles.csv"));
        assert!(out.contains("  platform -> platforms.csv"));
        assert!(out.contains("keywords: midjourney, dall-e, dalle"));

        let out = list_domains(&Config::cip_design());
        assert!(out.contains("  deliverable (fallback) -> deliverables.csv"));
    }
}
