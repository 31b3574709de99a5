use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playbill_app::App;
use playbill_client::ClientConfig;

/// Demo driver: boot against a running theater API and print what the
/// client sees. Exercises the public flow surface only.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "playbill_app=debug,playbill_client=debug,playbill_store=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loaded client configuration");

    // --- Application ---
    let app = App::new(&config).expect("Failed to build HTTP client");

    // --- Notice printer (the demo's stand-in for a toast rail) ---
    let mut notices = app.notices.subscribe();
    tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            println!("[{:?}] {}", notice.level, notice.message);
        }
    });

    // --- Boot: catalog fetch and session probe, overlapping ---
    let scope = CancellationToken::new();
    app.boot(&scope).await;

    // --- Summary ---
    let productions = app.productions.all().await;
    println!("{} production(s) synchronized", productions.len());
    for production in &productions {
        println!(
            "  #{} {} ({}) directed by {}",
            production.id, production.title, production.genre, production.director
        );
    }

    match app.session.get().await {
        Some(user) => println!("Signed in as {}", user.username),
        None => println!("Browsing anonymously"),
    }
}
