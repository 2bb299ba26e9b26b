//! CLI command implementations

use std::collections::BTreeSet;

use chrono::NaiveDate;
use cinemate_core::calendar::{
    CalendarState, ContentType, ContentTypeFilter, DateRange, FilterState, MonthGroup,
    ReleaseCalendar,
};
use cinemate_core::catalog::{
    ApiSession, CatalogProvider, DemoCatalogProvider, HttpCatalogProvider,
};
use cinemate_core::config::CineMateConfig;
use cinemate_core::{CineMateError, Result};
use clap::{Args, Subcommand};

/// Catalog connection options shared by all commands.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Catalog API base URL (overrides CINEMATE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer token for authenticated catalogs
    #[arg(long)]
    token: Option<String>,

    /// Use the built-in demo catalog instead of a remote API
    #[arg(long)]
    demo: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the upcoming release calendar grouped by month
    Calendar {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Restrict the calendar to movies or series
        #[arg(long, value_enum, default_value_t = ContentTypeFilter::All)]
        content_type: ContentTypeFilter,

        /// Keep only items carrying at least one of these genres (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Earliest release day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest release day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Case-insensitive text search across titles and genres
        #[arg(long)]
        search: Option<String>,
    },
    /// List the distinct genres available in the catalog
    Genres {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Calendar {
            connection,
            content_type,
            genres,
            from,
            to,
            search,
        } => {
            let filters = build_filters(content_type, genres, from, to, search);
            show_calendar(&connection, filters).await
        }
        Commands::Genres { connection } => list_genres(&connection).await,
    }
}

/// Show the month-grouped upcoming release calendar
///
/// # Errors
/// - `CineMateError::Catalog` - Provider could not be constructed
/// - `CineMateError::Refresh` - The catalog fetch failed
pub async fn show_calendar(connection: &ConnectionArgs, filters: FilterState) -> Result<()> {
    let mut calendar = ReleaseCalendar::new(build_provider(connection)?);
    calendar.set_filters(filters);
    calendar.refresh().await;

    match calendar.state() {
        CalendarState::Error { message } => Err(CineMateError::Refresh {
            message: message.clone(),
        }),
        _ => {
            render_calendar(calendar.view());
            Ok(())
        }
    }
}

/// List the distinct genres in the catalog
///
/// # Errors
/// - `CineMateError::Catalog` - Provider could not be constructed
/// - `CineMateError::Refresh` - The catalog fetch failed
pub async fn list_genres(connection: &ConnectionArgs) -> Result<()> {
    let mut calendar = ReleaseCalendar::new(build_provider(connection)?);
    calendar.refresh().await;

    match calendar.state() {
        CalendarState::Error { message } => Err(CineMateError::Refresh {
            message: message.clone(),
        }),
        _ => {
            let genres: Vec<&str> = calendar.available_genres().collect();
            if genres.is_empty() {
                println!("No genres found in the catalog.");
            } else {
                for genre in genres {
                    println!("{genre}");
                }
            }
            Ok(())
        }
    }
}

fn build_filters(
    content_type: ContentTypeFilter,
    genres: Vec<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    search: Option<String>,
) -> FilterState {
    FilterState {
        content_type,
        selected_genres: genres.into_iter().collect::<BTreeSet<String>>(),
        date_range: DateRange {
            start: from,
            end: to,
        },
        search_query: search.unwrap_or_default(),
    }
}

fn build_provider(connection: &ConnectionArgs) -> Result<Box<dyn CatalogProvider>> {
    if connection.demo {
        return Ok(Box::new(DemoCatalogProvider::new()));
    }

    let mut config = CineMateConfig::from_env();
    if let Some(api_url) = &connection.api_url {
        config.catalog.base_url = api_url.clone();
    }

    let session = match &connection.token {
        Some(token) => ApiSession::with_token(token.clone()),
        None => ApiSession::anonymous(),
    };

    let provider = HttpCatalogProvider::new(&config.catalog, session)?;
    Ok(Box::new(provider))
}

fn render_calendar(groups: &[MonthGroup]) {
    if groups.is_empty() {
        println!("No matching releases.");
        println!("Try removing some filters (--genre, --search, --from/--to).");
        return;
    }

    for group in groups {
        println!("{}", group.label);
        println!("{:-<60}", "");

        for entry in &group.entries {
            let date = entry
                .effective_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "TBA".to_string());
            let kind = match entry.content_type {
                ContentType::Movie => "movie",
                ContentType::Series => "series",
            };

            if entry.genres.is_empty() {
                println!("  {date}  [{kind:<6}]  {}", entry.title);
            } else {
                println!(
                    "  {date}  [{kind:<6}]  {}  ({})",
                    entry.title,
                    entry.genres.join(", ")
                );
            }
        }

        println!();
    }
}
