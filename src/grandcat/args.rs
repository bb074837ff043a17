use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grandcat", version)]
#[command(about = "Browse and edit the product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $GRANDCAT_HOME, then the platform data dir)
    #[arg(long, global = true, env = "GRANDCAT_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Filter and sort selection, shared by `list` and `share`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Start from a page URL (query string and #Category fragment)
    #[arg(long)]
    pub url: Option<String>,

    /// Category token (Muffins, BiscuitsAndCookies, Chikkis, Snacks) or "all"
    #[arg(long = "cat")]
    pub category: Option<String>,

    /// Shelf-life bucket: all, ">=30" or "<7"
    #[arg(long)]
    pub shelf: Option<String>,

    /// Case-insensitive search in product names
    #[arg(short = 'q', long = "search")]
    pub search: Option<String>,

    /// relevance, name-asc, name-desc, shelf-desc or shelf-asc
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Relative image path
    #[arg(long)]
    pub image: Option<String>,

    /// Net weight, free text (e.g. "100 g")
    #[arg(long)]
    pub weight: Option<String>,

    /// Shelf life in days
    #[arg(long)]
    pub shelf_life: Option<String>,

    /// Category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching the filters
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Only liked products (filters are ignored)
        #[arg(long)]
        liked: bool,

        /// Also print the shareable link for this view
        #[arg(long)]
        link: bool,
    },

    /// Print the shareable link for a filter selection
    Share {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Add a product
    #[command(alias = "n")]
    Create {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Edit a product (unset fields keep their current value)
    #[command(alias = "e")]
    Edit {
        /// Position, id or name of the product
        selector: String,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete one or more products
    #[command(alias = "rm")]
    Delete {
        /// Positions, ids or names of the products
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Like or unlike a product
    Like {
        /// Position, id or name of the product
        selector: String,
    },

    /// List liked products
    Liked,

    /// Restore the default catalog
    Reset {
        /// Also clear the liked products
        #[arg(long)]
        likes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (share-base-url, image-root)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
