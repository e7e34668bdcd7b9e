use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillsearch")]
#[command(version)]
#[command(about = "BM25 search over CSV design knowledge bases")]
pub struct Cli {
    /// JSON config file (overrides --preset)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Built-in knowledge base layout
    #[arg(long, global = true, value_enum, default_value_t = Preset::AiArtist)]
    pub preset: Preset,

    /// Directory holding the CSV files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    AiArtist,
    CipDesign,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search one domain (auto-detected from the query if omitted)
    Search {
        /// Free-text query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Domain to search
        #[arg(short, long)]
        domain: Option<String>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Print JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// Search several domains with one query (all domains by default)
    Multi {
        /// Free-text query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Comma-separated domains
        #[arg(long, value_delimiter = ',')]
        domains: Vec<String>,

        /// Maximum number of results per domain
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Print JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// List configured domains
    Domains,

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["skillsearch", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::try_parse_from([
            "skillsearch",
            "search",
            "glass",
            "dashboard",
            "--domain",
            "style",
            "-n",
            "5",
            "--json",
        ])
        .unwrap();

        if let Commands::Search {
            query,
            domain,
            max_results,
            json,
        } = cli.command
        {
            assert_eq!(query, vec!["glass", "dashboard"]);
            assert_eq!(domain, Some("style".to_string()));
            assert_eq!(max_results, Some(5));
            assert!(json);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_cli_search_requires_query() {
        assert!(Cli::try_parse_from(["skillsearch", "search"]).is_err());
    }

    #[test]
    fn test_cli_parse_multi() {
        let cli = Cli::try_parse_from([
            "skillsearch",
            "multi",
            "fintech app",
            "--domains",
            "color,typography",
            "--data-dir",
            "/tmp/kb",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/kb")));
        if let Commands::Multi { domains, .. } = cli.command {
            assert_eq!(domains, vec!["color", "typography"]);
        } else {
            panic!("Expected Multi command");
        }
    }

    #[test]
    fn test_cli_multi_defaults_to_all_domains() {
        let cli = Cli::try_parse_from(["skillsearch", "multi", "fintech"]).unwrap();
        if let Commands::Multi {
            domains,
            max_results,
            ..
        } = cli.command
        {
            assert!(domains.is_empty());
            assert_eq!(max_results, None);
        } else {
            panic!("Expected Multi command");
        }
    }

    #[test]
    fn test_cli_parse_preset() {
        let cli = Cli::try_parse_from(["skillsearch", "domains"]).unwrap();
        assert_eq!(cli.preset, Preset::AiArtist);

        let cli =
            Cli::try_parse_from(["skillsearch", "--preset", "cip-design", "domains"]).unwrap();
        assert_eq!(cli.preset, Preset::CipDesign);
    }
}
