use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{FilterCriteria, FilterPipeline};
use std::path::PathBuf;

/// ReelShelf - Movie Catalog Browser
#[derive(Parser)]
#[command(name = "reel-shelf")]
#[command(about = "Browse and filter the movie catalog", long_about = None)]
struct Cli {
    /// Path to the JSON catalog file
    #[arg(short, long, default_value = "movies.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies matching the given filters
    Browse {
        /// Title substring to search for (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// MPAA rating to accept (repeatable)
        #[arg(long = "mpaa-rating")]
        mpaa_ratings: Vec<String>,

        /// Genre to accept (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Minimum IMDB rating (inclusive)
        #[arg(long)]
        imdb_min: Option<f64>,

        /// Maximum IMDB rating (inclusive)
        #[arg(long)]
        imdb_max: Option<f64>,

        /// Minimum Rotten Tomatoes rating (inclusive)
        #[arg(long)]
        rt_min: Option<i64>,

        /// Maximum Rotten Tomatoes rating (inclusive)
        #[arg(long)]
        rt_max: Option<i64>,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the genres present in the catalog
    Genres,

    /// Show catalog statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            search,
            mpaa_ratings,
            genres,
            imdb_min,
            imdb_max,
            rt_min,
            rt_max,
            limit,
        } => {
            let criteria = FilterCriteria {
                search_terms: search,
                mpaa_ratings,
                genres,
                imdb_min,
                imdb_max,
                rt_min,
                rt_max,
            };
            handle_browse(&catalog, &criteria, limit)?
        }
        Commands::Genres => handle_genres(&catalog),
        Commands::Stats => handle_stats(&catalog),
    }

    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(catalog: &Catalog, criteria: &FilterCriteria, limit: Option<usize>) -> Result<()> {
    let pipeline = FilterPipeline::standard();
    let results = pipeline.apply(catalog.all().iter().collect(), criteria)?;

    println!(
        "{}",
        format!("{} of {} movies match", results.len(), catalog.len())
            .bold()
            .blue()
    );

    let shown = limit.unwrap_or(results.len());
    for movie in results.iter().take(shown) {
        let title = movie.title.as_deref().unwrap_or("(untitled)");
        let genre = movie.major_genre.as_deref().unwrap_or("-");
        let rating = movie.mpaa_rating.as_deref().unwrap_or("-");
        let imdb = movie
            .imdb_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());
        let rt = movie
            .rotten_tomatoes_rating
            .map(|r| format!("{r:.0}%"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{} [{}] [{}] imdb {} rt {}",
            title.green(),
            genre,
            rating,
            imdb,
            rt
        );
    }

    if shown < results.len() {
        println!("... and {} more", results.len() - shown);
    }

    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) {
    println!(
        "{}",
        format!("{} genres in catalog:", catalog.genres().len())
            .bold()
            .blue()
    );
    for genre in catalog.genres() {
        println!("{}{}", "• ".green(), genre);
    }
}

/// Handle the 'stats' command
fn handle_stats(catalog: &Catalog) {
    let summary = catalog.summary();

    println!("{}", "Catalog statistics".bold().blue());
    println!("{}Movies: {}", "• ".green(), summary.movie_count);
    println!("{}Distinct genres: {}", "• ".green(), summary.distinct_genres);
    println!("{}With a title: {}", "• ".cyan(), summary.titled);
    println!("{}With an IMDB rating: {}", "• ".cyan(), summary.imdb_rated);
    println!(
        "{}With a Rotten Tomatoes rating: {}",
        "• ".cyan(),
        summary.rt_rated
    );
    match summary.mean_imdb_rating {
        Some(mean) => println!("{}Mean IMDB rating: {:.2}", "• ".cyan(), mean),
        None => println!("{}Mean IMDB rating: n/a", "• ".cyan()),
    }
}
