use std::env;
use std::sync::Arc;

use dotenv::dotenv;

use tripdesk::api::{AuthAPI, DynAPI};
use tripdesk::auth::AuthContext;
use tripdesk::client::Client;
use tripdesk::config::Config;
use tripdesk::notify::Notifier;
use tripdesk::views::hotels::HotelSearch;
use tripdesk::views::itineraries::ItineraryPlanner;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().unwrap();
    let api = Arc::new(Client::new(&config).unwrap()) as DynAPI;

    let (notices, notice_feed) = Notifier::new();

    tokio::spawn(async move {
        while let Ok(notice) = notice_feed.recv().await {
            tracing::info!(phase = ?notice.phase, "{}", notice.text);
        }
    });

    let mut auth = AuthContext::new();

    if let (Ok(username), Ok(password)) =
        (env::var("TRIPDESK_USERNAME"), env::var("TRIPDESK_PASSWORD"))
    {
        match api.sign_in(&username, &password).await {
            Ok(session) => {
                tracing::info!("signed in as {}", session.name);
                auth.establish(session);
            }
            Err(err) => tracing::warn!("sign-in failed: {}", err.message),
        }
    }

    let mut search = HotelSearch::new(api.clone(), notices.clone());
    search.load().await;

    for hotel in search.visible() {
        tracing::info!(
            "{} ({})",
            hotel.name,
            hotel.location.as_deref().unwrap_or("unknown")
        );
    }

    // itineraries only load for a signed-in user; otherwise this stays idle
    let mut planner = ItineraryPlanner::new(api, notices);
    planner.load(&auth).await;

    for itinerary in planner.visible() {
        tracing::info!("{}: {} travelers", itinerary.name, itinerary.travelers);
    }
}
