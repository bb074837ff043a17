//! # CLI Layer
//!
//! This module is **one possible UI client** for grandcat, not the
//! application itself. It is the only place that knows about terminal I/O,
//! exit codes and the location of the data directory.
//!
//! Running `grandcat` with no subcommand lists the whole catalog.
//!
//! ## Data directory
//!
//! Resolved in order: `--data-dir`, `$GRANDCAT_HOME`, then the platform data
//! directory. It holds one JSON file per storage key plus `config.json`.
//!
//! ## Filters
//!
//! `list` and `share` build a filter spec from an optional `--url` (query
//! string plus `#Category` fragment) and then apply any explicit flags on
//! top. Unlike URL decoding, an invalid flag value is an error.

mod print;

use crate::args::{Cli, Commands, FilterArgs, ProductFields};
use clap::Parser;
use directories::ProjectDirs;
use grandcat::api::{CatalogApi, ConfigAction, ProductEdit};
use grandcat::config::CatalogConfig;
use grandcat::error::{CatalogError, Result};
use grandcat::model::Category;
use grandcat::query::{CategoryFilter, FilterSpec};
use grandcat::store::fs_backend::FsBackend;
use grandcat::url_state;
use grandcat::validation::ProductForm;
use print::{print_config, print_listing, print_messages, print_share_url};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};
use url::Url;

struct AppContext {
    api: CatalogApi<FsBackend>,
    data_dir: PathBuf,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            filters,
            liked,
            link,
        }) => {
            if liked {
                handle_liked(&ctx)
            } else {
                handle_list(&mut ctx, &filters, link)
            }
        }
        Some(Commands::Share { filters }) => handle_share(&mut ctx, &filters),
        Some(Commands::Create { fields }) => handle_create(&mut ctx, fields),
        Some(Commands::Edit { selector, fields }) => handle_edit(&mut ctx, &selector, fields),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, &selectors),
        Some(Commands::Like { selector }) => handle_like(&mut ctx, &selector),
        Some(Commands::Liked) => handle_liked(&ctx),
        Some(Commands::Reset { likes }) => handle_reset(&mut ctx, likes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, &FilterArgs::default(), false),
    }
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        LevelFilter::DEBUG.into()
    } else {
        LevelFilter::WARN.into()
    };
    let filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("logging already initialized");
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "grandcat", "grandcat")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| CatalogError::Config("Could not determine data dir".into()))?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "opening catalog");

    let config = CatalogConfig::load(&data_dir)?;
    let api = CatalogApi::new(FsBackend::new(data_dir.clone()), config)?;

    Ok(AppContext {
        api,
        data_dir,
        verbose: cli.verbose,
    })
}

fn handle_list(ctx: &mut AppContext, filters: &FilterArgs, link: bool) -> Result<()> {
    let spec = build_spec(filters)?;
    let result = ctx.api.view(spec);
    print_listing(&result, ctx.verbose);

    if link {
        let shared = ctx.api.share()?;
        if let Some(url) = &shared.share_url {
            print_share_url(url);
        }
    }
    Ok(())
}

fn handle_share(ctx: &mut AppContext, filters: &FilterArgs) -> Result<()> {
    let spec = build_spec(filters)?;
    ctx.api.view(spec);
    let result = ctx.api.share()?;
    if let Some(url) = &result.share_url {
        println!("{}", url);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_liked(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.liked();
    print_listing(&result, ctx.verbose);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, fields: ProductFields) -> Result<()> {
    let form = ProductForm {
        name: fields.name.unwrap_or_default(),
        image_path: fields.image.unwrap_or_default(),
        net_weight: fields.weight.unwrap_or_default(),
        shelf_life: fields.shelf_life.unwrap_or_default(),
        category: fields.category.unwrap_or_default(),
    };
    let result = ctx.api.create(&form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: &str, fields: ProductFields) -> Result<()> {
    let edit = ProductEdit {
        name: fields.name,
        image_path: fields.image,
        net_weight: fields.weight,
        shelf_life: fields.shelf_life,
        category: fields.category,
    };
    if edit.is_empty() {
        return Err(CatalogError::Api(
            "Nothing to change: pass at least one of --name, --image, --weight, --shelf-life, --category".into(),
        ));
    }
    let result = ctx.api.update(selector, &edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.delete(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_like(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.toggle_like(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, likes: bool) -> Result<()> {
    let result = ctx.api.reset(likes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let data_dir = ctx.data_dir.clone();
    let result = ctx.api.configure(&data_dir, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn build_spec(filters: &FilterArgs) -> Result<FilterSpec> {
    let mut spec = match &filters.url {
        Some(raw) => {
            let url = Url::parse(raw)
                .map_err(|e| CatalogError::Api(format!("Invalid URL {}: {}", raw, e)))?;
            url_state::from_url(&url)
        }
        None => FilterSpec::default(),
    };

    if let Some(category) = &filters.category {
        spec.category = parse_category(category)?;
    }
    if let Some(shelf) = &filters.shelf {
        spec.shelf = shelf.parse().map_err(CatalogError::Api)?;
    }
    if let Some(search) = &filters.search {
        spec.search = search.clone();
    }
    if let Some(sort) = &filters.sort {
        spec.sort = sort.parse().map_err(CatalogError::Api)?;
    }
    Ok(spec)
}

fn parse_category(input: &str) -> Result<CategoryFilter> {
    if input.trim().eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    Category::parse_loose(input)
        .map(CategoryFilter::Only)
        .ok_or_else(|| {
            let tokens: Vec<&str> = Category::ALL.iter().map(|c| c.token()).collect();
            CatalogError::Api(format!(
                "Unknown category: {} (expected all, {})",
                input,
                tokens.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grandcat::query::{ShelfBucket, SortKey};

    #[test]
    fn flags_override_the_url() {
        let filters = FilterArgs {
            url: Some("http://localhost/products.html?cat=Snacks&q=chips#Chikkis".into()),
            sort: Some("shelf-desc".into()),
            search: Some("nut".into()),
            ..FilterArgs::default()
        };
        let spec = build_spec(&filters).unwrap();
        assert_eq!(spec.category, CategoryFilter::Only(Category::Snacks));
        assert_eq!(spec.search, "nut");
        assert_eq!(spec.sort, SortKey::ShelfDesc);
    }

    #[test]
    fn category_flag_accepts_labels() {
        assert_eq!(
            parse_category("biscuits & cookies").unwrap(),
            CategoryFilter::Only(Category::BiscuitsAndCookies)
        );
        assert_eq!(parse_category("ALL").unwrap(), CategoryFilter::All);
        assert!(parse_category("Cakes").is_err());
    }

    #[test]
    fn invalid_flags_are_errors() {
        let filters = FilterArgs {
            shelf: Some("<30".into()),
            ..FilterArgs::default()
        };
        assert!(build_spec(&filters).is_err());

        let filters = FilterArgs {
            shelf: Some(">=30".into()),
            ..FilterArgs::default()
        };
        assert_eq!(build_spec(&filters).unwrap().shelf, ShelfBucket::AtLeast30);
    }
}
