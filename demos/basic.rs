//! Basic example demonstrating the trakt API client.
//!
//! Run with:
//! ```
//! TRAKT_API_KEY=your-key cargo run --example basic
//! ```
//!
//! Set `TRAKT_USERNAME` and `TRAKT_PASSWORD` to also read your collection.

use chrono::Utc;
use trakt::{ApiVersion, Calendars, Extended, Movies, PaginationParams, SyncResource, Trakt};

#[tokio::main]
async fn main() -> trakt::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create session from environment variables
    println!("Creating trakt session...");
    let mut trakt = Trakt::from_env(ApiVersion::V2)?;
    println!("Connected to: {}", trakt.base_url());

    // Popular movies, first page
    println!("\n--- Popular Movies (first page) ---");
    let page = trakt
        .resource::<Movies>()?
        .popular(PaginationParams::for_page(1, 10), Extended::Min)
        .await?;
    println!("Found {} movies (total: {:?})", page.len(), page.total);
    for movie in &page {
        println!(
            "  - {} ({})",
            movie.title.as_deref().unwrap_or("?"),
            movie.year.map(|y| y.to_string()).unwrap_or_default()
        );
    }

    // Show calendar for the coming week
    println!("\n--- This Week ---");
    let today = Utc::now().date_naive();
    let calendar = trakt.resource::<Calendars>()?.shows(today, 7).await?;
    for (day, entries) in &calendar {
        for entry in entries {
            if let (Some(show), Some(episode)) = (&entry.show, &entry.episode) {
                println!(
                    "  {} {} {}x{:02}",
                    day,
                    show.title.as_deref().unwrap_or("?"),
                    episode.season.unwrap_or_default(),
                    episode.number.unwrap_or_default()
                );
            }
        }
    }

    // Collection, if credentials are available
    if let (Ok(username), Ok(password)) = (
        std::env::var("TRAKT_USERNAME"),
        std::env::var("TRAKT_PASSWORD"),
    ) {
        println!("\n--- Collection ---");
        trakt.set_login(&username, &password).await?;
        let movies = trakt
            .resource::<SyncResource>()?
            .collection_movies(Extended::Min)
            .await?;
        println!("{} movies collected", movies.len());
    }

    println!("\nDone!");
    Ok(())
}
