// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipes")]
#[command(about = "Recipe Browser - browse and search a recipe collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Recipe JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Print one page of the recipe list
    List {
        /// Page number (clamped into range)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Recipe JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Print a single recipe
    Show {
        /// Recipe ID (its position in the data file, starting at 0)
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Recipe JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Search recipe names and descriptions
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Recipe JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

impl Commands {
    /// Data file override given on the command line, if any
    pub fn data_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Serve { data, .. }
            | Commands::List { data, .. }
            | Commands::Show { data, .. }
            | Commands::Search { data, .. } => data.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["recipes", "search", "egg", "--limit", "5"]).unwrap();
        match cli.command {
            Commands::Search { query, limit, data } => {
                assert_eq!(query, "egg");
                assert_eq!(limit, Some(5));
                assert!(data.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_page_and_data() {
        let cli =
            Cli::try_parse_from(["recipes", "list", "--page", "-2", "--data", "x.json"]).unwrap();
        assert_eq!(cli.command.data_path(), Some(&PathBuf::from("x.json")));
        match cli.command {
            Commands::List { page, .. } => assert_eq!(page, -2),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
