use skillsearch_core::{Config, DomainConfig};
use std::path::Path;

pub const STYLES_CSV: &str = "\
Style Category,Type,Keywords,Best For
Glassmorphism,General,\"frosted glass, blur, translucent\",Modern SaaS dashboards
Brutalism,General,\"raw, bold, high contrast\",Portfolios and art sites
Neumorphism,General,\"soft shadows, extruded, pastel\",Calm wellness apps
Dark Mode (OLED),General,\"dark, oled, low light, high contrast\",Night-time dashboards
";

pub const COLORS_CSV: &str = "\
Product Type,Keywords,Primary (Hex),Notes
Fintech,\"banking, trust, finance\",#0F172A,Navy conveys trust
Wellness,\"calm, health, soft\",#A7F3D0,Mint is soothing
";

fn domain(
    name: &str,
    file: &str,
    search: &[&str],
    output: &[&str],
    keywords: &[&str],
) -> DomainConfig {
    let owned =
        |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    DomainConfig {
        name: name.to_string(),
        file: file.to_string(),
        search_columns: owned(search),
        output_columns: owned(output),
        keywords: owned(keywords),
    }
}

pub fn sample_config() -> Config {
    Config {
        domains: vec![
            domain(
                "style",
                "styles.csv",
                &["Style Category", "Keywords", "Best For", "Type"],
                &["Style Category", "Keywords", "Best For"],
                &["style", "glass", "brutal"],
            ),
            domain(
                "color",
                "colors.csv",
                &["Product Type", "Keywords", "Notes"],
                &["Product Type", "Primary (Hex)", "Notes"],
                &["color", "palette", "hex"],
            ),
            domain(
                "typography",
                "typography.csv",
                &["Font Pairing Name"],
                &["Font Pairing Name"],
                &["font"],
            ),
        ],
        fallback_domain: "style".to_string(),
        ..Config::default()
    }
}

/// Writes the style and color knowledge bases; typography is left missing.
pub fn write_sample_data(dir: &Path) {
    std::fs::write(dir.join("styles.csv"), STYLES_CSV).unwrap();
    std::fs::write(dir.join("colors.csv"), COLORS_CSV).unwrap();
}
