//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "annuaire")]
#[command(about = "Browse and query an MDX directory site", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Site root (default: $ANNUAIRE_ROOT, or the nearest directory with directory.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create directory.toml and an empty content directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site name written to directory.toml
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List categories
    Categories,

    /// List regions of a category
    Regions { category: String },

    /// List cities of a region
    Cities { category: String, region: String },

    /// List the listings of a city
    Listings {
        category: String,
        region: String,
        city: String,

        /// Only print listing ids
        #[arg(long)]
        ids: bool,
    },

    /// Show one document by path (e.g. restaurants/Ile-de-France/Paris/le-bistro)
    Show {
        path: String,

        /// Print the body as plain text instead of raw markup
        #[arg(long)]
        plain: bool,
    },

    /// Search titles, summaries and tags
    Search { query: String },

    /// List documents carrying a tag
    Tag { tag: String },

    /// List all tags with document counts
    Tags,

    /// Filter and paginate listings like the site's browser
    Browse {
        /// Text matched against name, type, address, services and equipment
        #[arg(short, long, default_value = "")]
        query: String,

        /// Restrict to these listing types (repeatable)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Print every route a static build must generate
    Routes,

    /// Show configuration
    Config {
        /// Config key to print (e.g. items_per_page, features.tags)
        key: Option<String>,
    },
}
