//! Configuration for domain search

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use skillsearch_rank::Bm25Params;
use std::path::Path;

/// One searchable knowledge base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Domain identifier used on the command line
    pub name: String,

    /// CSV file name, relative to the data directory
    pub file: String,

    /// Columns concatenated into the indexed document
    pub search_columns: Vec<String>,

    /// Columns projected from matching rows
    pub output_columns: Vec<String>,

    /// Router keywords (matched as lower-case substrings of the query)
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl DomainConfig {
    fn new(
        name: &str,
        file: &str,
        search_columns: &[&str],
        output_columns: &[&str],
        keywords: &[&str],
    ) -> Self {
        let owned =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            name: name.to_string(),
            file: file.to_string(),
            search_columns: owned(search_columns),
            output_columns: owned(output_columns),
            keywords: owned(keywords),
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Domains in router priority order
    pub domains: Vec<DomainConfig>,

    /// Domain picked when no router keyword matches
    pub fallback_domain: String,

    /// Default number of hits for a single-domain search
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Default number of hits per domain when searching all domains
    #[serde(default = "default_max_per_domain")]
    pub max_per_domain: usize,

    /// Ranking constants
    #[serde(default)]
    pub bm25: Bm25Params,
}

fn default_max_results() -> usize {
    3
}

fn default_max_per_domain() -> usize {
    2
}

impl Config {
    /// The AI artist knowledge bases (image styles, platforms, prompt patterns).
    pub fn ai_artist() -> Self {
        let domains = vec![
            DomainConfig::new(
                "style",
                "image-styles.csv",
                &["Style", "Category", "Prompt Keywords", "Best For"],
                &[
                    "Style",
                    "Category",
                    "Prompt Keywords",
                    "Lighting",
                    "Composition",
                    "Quality Modifiers",
                    "Negative Prompt",
                    "Best For",
                    "Platform Tips",
                ],
                &[
                    "style",
                    "aesthetic",
                    "look",
                    "mood",
                    "cyberpunk",
                    "minimalist",
                    "cinematic",
                    "anime",
                    "watercolor",
                    "oil painting",
                    "retro",
                    "vintage",
                    "photorealistic",
                    "fantasy",
                    "vaporwave",
                    "pop art",
                ],
            ),
            DomainConfig::new(
                "platform",
                "platforms.csv",
                &["Platform", "Type", "Prompt Style", "Strengths"],
                &[
                    "Platform",
                    "Type",
                    "Prompt Style",
                    "Key Parameters",
                    "Syntax Examples",
                    "Strengths",
                    "Limitations",
                    "Best Practices",
                ],
                &[
                    "midjourney",
                    "dall-e",
                    "dalle",
                    "stable diffusion",
                    "flux",
                    "imagen",
                    "veo",
                    "runway",
                    "gemini",
                    "claude",
                    "gpt",
                    "platform",
                    "model",
                    "parameters",
                    "syntax",
                ],
            ),
            DomainConfig::new(
                "subject",
                "subjects.csv",
                &["Subject Type", "Category", "Prompt Modifiers", "Common Issues"],
                &[
                    "Subject Type",
                    "Category",
                    "Prompt Modifiers",
                    "Detail Keywords",
                    "Common Issues",
                    "Tips",
                ],
                &[
                    "portrait",
                    "person",
                    "people",
                    "human",
                    "animal",
                    "creature",
                    "architecture",
                    "building",
                    "interior",
                    "product",
                    "food",
                    "landscape",
                    "cityscape",
                    "abstract",
                    "hands",
                    "group",
                    "text",
                ],
            ),
            DomainConfig::new(
                "llm",
                "llm-patterns.csv",
                &["Pattern Name", "Category", "When to Use", "Template"],
                &["Pattern Name", "Category", "Template", "When to Use", "Example", "Tips"],
                &[
                    "llm",
                    "prompt",
                    "system",
                    "chain of thought",
                    "few-shot",
                    "role",
                    "template",
                    "pattern",
                    "reasoning",
                    "json",
                    "format",
                    "instruction",
                    "constraint",
                ],
            ),
            DomainConfig::new(
                "quality",
                "quality-modifiers.csv",
                &["Modifier", "Category", "Effect", "When to Use"],
                &[
                    "Modifier",
                    "Category",
                    "Effect",
                    "Platform Compatibility",
                    "Example Usage",
                    "When to Use",
                ],
                &[
                    "quality",
                    "resolution",
                    "8k",
                    "4k",
                    "detailed",
                    "sharp",
                    "lighting",
                    "render",
                    "professional",
                    "masterpiece",
                    "hd",
                    "focus",
                ],
            ),
            DomainConfig::new(
                "domain",
                "domains.csv",
                &["Domain", "Description", "Key Considerations", "Common Mistakes"],
                &[
                    "Domain",
                    "Description",
                    "Key Considerations",
                    "Prompt Structure",
                    "Common Mistakes",
                    "Best Platforms",
                ],
                &[
                    "marketing",
                    "social media",
                    "ecommerce",
                    "e-commerce",
                    "brand",
                    "editorial",
                    "gaming",
                    "film",
                    "video",
                    "publishing",
                    "education",
                    "healthcare",
                    "fashion",
                    "technology",
                    "web",
                    "ui",
                ],
            ),
            DomainConfig::new(
                "examples",
                "awesome-prompts.csv",
                &["title", "category", "description", "prompt"],
                &["id", "title", "category", "description", "prompt", "author", "source"],
                &[
                    "example",
                    "sample",
                    "template",
                    "inspiration",
                    "reference",
                    "show me",
                    "like",
                    "similar",
                    "idea",
                    "nano banana",
                    "gemini image",
                    "quote card",
                    "infographic",
                    "thumbnail",
                    "comic",
                    "poster",
                    "avatar",
                    "selfie",
                    "bento",
                ],
            ),
        ];

        Self::with_domains(domains, "style")
    }

    /// The corporate identity program knowledge bases (deliverables, mockups).
    pub fn cip_design() -> Self {
        let domains = vec![
            DomainConfig::new(
                "deliverable",
                "deliverables.csv",
                &["Deliverable", "Category", "Keywords", "Description", "Mockup Context"],
                &[
                    "Deliverable",
                    "Category",
                    "Keywords",
                    "Description",
                    "Dimensions",
                    "File Format",
                    "Logo Placement",
                    "Color Usage",
                    "Typography Notes",
                    "Mockup Context",
                    "Best Practices",
                    "Avoid",
                ],
                &[
                    "card",
                    "letterhead",
                    "envelope",
                    "folder",
                    "shirt",
                    "cap",
                    "badge",
                    "signage",
                    "vehicle",
                    "car",
                    "van",
                    "stationery",
                    "uniform",
                    "merchandise",
                    "packaging",
                    "banner",
                    "booth",
                ],
            ),
            DomainConfig::new(
                "style",
                "styles.csv",
                &["Style Name", "Category", "Keywords", "Description", "Mood"],
                &[
                    "Style Name",
                    "Category",
                    "Keywords",
                    "Description",
                    "Primary Colors",
                    "Secondary Colors",
                    "Typography",
                    "Materials",
                    "Finishes",
                    "Mood",
                    "Best For",
                    "Avoid For",
                ],
                &[
                    "style",
                    "minimal",
                    "modern",
                    "luxury",
                    "vintage",
                    "industrial",
                    "elegant",
                    "bold",
                    "corporate",
                    "organic",
                    "playful",
                ],
            ),
            DomainConfig::new(
                "industry",
                "industries.csv",
                &["Industry", "Keywords", "CIP Style", "Mood"],
                &[
                    "Industry",
                    "Keywords",
                    "CIP Style",
                    "Primary Colors",
                    "Secondary Colors",
                    "Typography",
                    "Key Deliverables",
                    "Mood",
                    "Best Practices",
                    "Avoid",
                ],
                &[
                    "tech",
                    "finance",
                    "legal",
                    "healthcare",
                    "hospitality",
                    "food",
                    "fashion",
                    "retail",
                    "construction",
                    "logistics",
                ],
            ),
            DomainConfig::new(
                "mockup",
                "mockup-contexts.csv",
                &["Context Name", "Category", "Keywords", "Scene Description"],
                &[
                    "Context Name",
                    "Category",
                    "Keywords",
                    "Scene Description",
                    "Lighting",
                    "Environment",
                    "Props",
                    "Camera Angle",
                    "Background",
                    "Style Notes",
                    "Best For",
                    "Prompt Modifiers",
                ],
                &[
                    "mockup",
                    "scene",
                    "context",
                    "photo",
                    "shot",
                    "lighting",
                    "background",
                    "studio",
                    "lifestyle",
                ],
            ),
        ];

        Self::with_domains(domains, "deliverable")
    }

    fn with_domains(domains: Vec<DomainConfig>, fallback: &str) -> Self {
        Self {
            domains,
            fallback_domain: fallback.to_string(),
            max_results: default_max_results(),
            max_per_domain: default_max_per_domain(),
            bm25: Bm25Params::default(),
        }
    }

    /// Load a JSON config file and check that it is self-consistent.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.domain(&self.fallback_domain).is_none() {
            return Err(Error::UnknownDomain(self.fallback_domain.clone()));
        }

        // Outside these ranges BM25 scores can go negative or NaN
        let Bm25Params { k1, b } = self.bm25;
        if !(k1.is_finite() && k1 >= 0.0 && b.is_finite() && (0.0..=1.0).contains(&b)) {
            return Err(Error::InvalidBm25Params { k1, b });
        }
        Ok(())
    }

    pub fn domain(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.iter().map(|d| d.name.as_str()).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::ai_artist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config, Config::ai_artist());
        assert_eq!(config.fallback_domain, "style");
        assert_eq!(config.max_results, 3);
        assert_eq!(config.max_per_domain, 2);
        assert_eq!(config.bm25, Bm25Params::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ai_artist_domains() {
        let config = Config::ai_artist();
        assert_eq!(
            config.domain_names(),
            vec!["style", "platform", "subject", "llm", "quality", "domain", "examples"]
        );
        let examples = config.domain("examples").unwrap();
        assert_eq!(examples.file, "awesome-prompts.csv");
        assert_eq!(examples.output_columns[0], "id");
        assert!(config.domain("missing").is_none());
    }

    #[test]
    fn test_cip_design_domains() {
        let config = Config::cip_design();
        assert_eq!(config.domain_names(), vec!["deliverable", "style", "industry", "mockup"]);
        assert_eq!(config.fallback_domain, "deliverable");
        assert_eq!(config.domain("mockup").unwrap().file, "mockup-contexts.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_minimal_json() {
        let (_dir, path) = write_config(
            r#"{
                "domains": [
                    {
                        "name": "icons",
                        "file": "icons.csv",
                        "search_columns": ["Name", "Tags"],
                        "output_columns": ["Name"]
                    }
                ],
                "fallback_domain": "icons"
            }"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.domain_names(), vec!["icons"]);
        assert!(config.domains[0].keywords.is_empty());
        assert_eq!(config.max_results, 3);
        assert_eq!(config.max_per_domain, 2);
        assert_eq!(config.bm25.k1, 1.5);
    }

    #[test]
    fn test_load_rejects_unknown_fallback() {
        let (_dir, path) = write_config(r#"{"domains": [], "fallback_domain": "style"}"#);

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::UnknownDomain(name) if name == "style"));
    }

    #[test]
    fn test_load_rejects_invalid_bm25() {
        let base = r#""domains": [{"name": "a", "file": "a.csv", "search_columns": [], "output_columns": []}], "fallback_domain": "a""#;

        for (k1, b) in [(1.5, 3.0), (1.5, -0.1), (-1.0, 0.75)] {
            let (_dir, path) =
                write_config(&format!(r#"{{{base}, "bm25": {{"k1": {k1}, "b": {b}}}}}"#));
            let err = Config::load(&path).unwrap_err();
            assert!(
                matches!(err, Error::InvalidBm25Params { .. }),
                "k1={k1} b={b} should be rejected"
            );
        }

        let (_dir, path) = write_config(&format!(r#"{{{base}, "bm25": {{"k1": 0.0, "b": 1.0}}}}"#));
        assert!(Config::load(&path).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_bm25() {
        let mut config = Config::default();
        config.bm25.k1 = f64::INFINITY;
        assert!(matches!(config.validate(), Err(Error::InvalidBm25Params { .. })));
        config.bm25 = Bm25Params { k1: 1.2, b: f64::NAN };
        assert!(matches!(config.validate(), Err(Error::InvalidBm25Params { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let (_dir, path) = write_config("not json");
        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
    }
}
