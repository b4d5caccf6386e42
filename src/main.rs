use annuaire::application::{BrowseRequest, BrowseService, InitService, StaticRoutes, TagIndex};
use annuaire::cli::output::{
    format_browse, format_document, format_document_list, format_names, format_routes,
    format_tag_counts,
};
use annuaire::cli::{Cli, Commands};
use annuaire::domain::{ContentPath, ListingFilter};
use annuaire::error::{AnnuaireError, Result};
use annuaire::infrastructure::{ContentRepository, Site};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        let rendered = text(value);
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn open_site(cli: &Cli) -> Result<Site> {
    match &cli.root {
        Some(root) => Site::open(root.clone()),
        None => Site::discover(),
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { path, name } = &cli.command {
        InitService::execute(path, name.as_deref())?;
        println!("Initialized directory site at {}", path.display());
        return Ok(());
    }

    let site = open_site(&cli)?;
    let repo = site.repository();
    let json = cli.json;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Categories => emit(json, &repo.categories(), |v| {
            format_names(v, "No categories found")
        }),
        Commands::Regions { category } => emit(json, &repo.regions(&category), |v| {
            format_names(v, "No regions found")
        }),
        Commands::Cities { category, region } => {
            emit(json, &repo.cities(&category, &region), |v| {
                format_names(v, "No cities found")
            })
        }
        Commands::Listings {
            category,
            region,
            city,
            ids,
        } => {
            if ids {
                emit(json, &repo.listing_ids(&category, &region, &city), |v| {
                    format_names(v, "No listings found")
                })
            } else {
                emit(json, &repo.listings(&category, &region, &city), |v| {
                    format_document_list(v)
                })
            }
        }
        Commands::Show { path, plain } => {
            let content_path =
                ContentPath::parse(&path).ok_or_else(|| AnnuaireError::InvalidPath(path.clone()))?;
            let document = repo
                .get(&content_path.to_string())
                .ok_or_else(|| AnnuaireError::NotFound(path.clone()))?;
            emit(json, &document, |d| format_document(d, plain))
        }
        Commands::Search { query } => emit(json, &repo.search(&query), |v| {
            format_document_list(v)
        }),
        Commands::Tag { tag } => emit(json, &repo.by_tag(&tag), |v| format_document_list(v)),
        Commands::Tags => emit(json, &TagIndex::build(&repo), format_tag_counts),
        Commands::Browse {
            query,
            types,
            page,
        } => {
            let service = BrowseService::new(repo, site.config.page_size());
            let request = BrowseRequest {
                filter: ListingFilter::new(query).with_types(types),
                page,
            };
            emit(json, &service.execute(&request), format_browse)
        }
        Commands::Routes => {
            let routes = StaticRoutes::new(&repo).all();
            emit(json, &routes, |v| format_routes(v))
        }
        Commands::Config { key } => match key {
            Some(key) => {
                let value = site.config.get(&key)?;
                emit(json, &value, |v| v.clone())
            }
            None => {
                if json {
                    emit(true, &site.config, |_| String::new())
                } else {
                    print!("{}", toml::to_string_pretty(&site.config)?);
                    Ok(())
                }
            }
        },
    }
}
