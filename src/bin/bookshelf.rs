//! Bookshelf CLI
//!
//! Runs one catalog action against a file-backed store and prints the
//! resulting view.

use std::process;

use bookshelf::query::{BookFilter, SortKey};
use bookshelf::storage::FileStorage;
use bookshelf::view::TerminalView;
use bookshelf::{BookForm, BookId, Catalog, Config, FilterMode, Page};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Local book catalog")]
#[command(version)]
struct Args {
    /// Data directory (defaults to ./bookshelf_data)
    #[arg(short, long)]
    data_dir: Option<String>,

    /// How filter fields combine: first-match or all-of
    #[arg(short, long, default_value = "first-match")]
    filter_mode: FilterMode,

    /// Maximum size of a stored blob in bytes
    #[arg(long)]
    quota: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every book in stored order
    List,

    /// Add a book
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        priority: String,
    },

    /// Open the edit page for a location such as `edit#<id>`
    ShowEdit {
        location: String,
    },

    /// Update a book; omitted fields stay unchanged
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },

    /// Delete a book by id
    Delete {
        id: String,
    },

    /// Show books sorted by byCategory, byAuthor or byPriority
    Sort {
        key: String,
    },

    /// Show books matching a case-insensitive substring filter
    Filter {
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        priority: String,
    },

    /// Show the category list
    Categories,

    /// Append a category
    AddCategory {
        name: String,
    },
}

fn main() {
    // Initialize tracing/logging; stdout is reserved for the view
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookshelf=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder().filter_mode(args.filter_mode);
    if let Some(dir) = &args.data_dir {
        builder = builder.data_dir(dir);
    }
    if let Some(bytes) = args.quota {
        builder = builder.storage_quota(bytes);
    }
    let config = builder.build();

    tracing::debug!("Bookshelf v{}", bookshelf::VERSION);
    tracing::debug!("Data directory: {}", config.data_dir.display());

    let storage = match FileStorage::open_with_quota(&config.data_dir, config.storage_quota) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open storage: {}", e);
            process::exit(1);
        }
    };

    let view = TerminalView::new(config.notification_ttl);
    let mut catalog = match Catalog::open(storage, view, &config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            process::exit(1);
        }
    };

    let outcome = run(&mut catalog, args.command);
    print!("{}", catalog.view());

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(catalog: &mut Catalog<FileStorage, TerminalView>, command: Commands) -> bookshelf::Result<()> {
    match command {
        Commands::List | Commands::Categories => {}
        Commands::Add {
            title,
            author,
            category,
            priority,
        } => {
            catalog
                .view_mut()
                .fill_add_form(BookForm::new(title, author, category, priority));
            let book = catalog.submit_add()?;
            println!("{}", book.id);
        }
        Commands::ShowEdit { location } => {
            let page = catalog.load_edit(&location)?;
            if page == Page::Listing {
                tracing::info!("No such book, redirecting to {}", page.route());
            }
        }
        Commands::Edit {
            id,
            title,
            author,
            category,
            priority,
        } => {
            let form = BookForm::new(
                title.unwrap_or_default(),
                author.unwrap_or_default(),
                category.unwrap_or_default(),
                priority.unwrap_or_default(),
            );
            let page = catalog.submit_edit(&BookId::from(id), form)?;
            tracing::info!("Saved, redirecting to {}", page.route());
        }
        Commands::Delete { id } => {
            catalog.delete(&BookId::from(id))?;
        }
        Commands::Sort { key } => catalog.sort(SortKey::from(key.as_str()))?,
        Commands::Filter {
            author,
            category,
            priority,
        } => {
            catalog.filter(&BookFilter::new(author, category, priority))?;
        }
        Commands::AddCategory { name } => {
            catalog.add_category(&name)?;
        }
    }
    Ok(())
}
