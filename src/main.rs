use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordsearch::{config, Wordsearch};

fn main() -> miette::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordsearch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting word-search generator");

    // Load configuration
    let app_config = config::load_config()?;
    let partial = app_config.to_partial()?;

    let selector = Wordsearch::with_config(&partial);
    let config = selector.config();
    info!(
        "Generating a {}x{} game with {} words",
        config.size, config.size, config.words_config.amount
    );

    let game = selector.generate()?;

    println!("Words to find ({}):", game.words.len());
    for word in &game.words {
        println!("  {}", word);
    }

    if game.board.is_empty() {
        println!("\nBoard placement is not implemented yet; no grid to print.");
    } else {
        println!();
        for row in &game.board {
            let line: String = row.iter().map(|cell| cell.letter).collect();
            println!("{}", line);
        }
    }

    Ok(())
}
