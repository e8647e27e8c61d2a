use relaxgo::{
    providers::table::jamai::{JamAiProvider, DEFAULT_API_URL},
    serialize_preferences, PreferenceSet, RecommendationClientBuilder,
};
use dotenvy::dotenv;
use std::{env, fs, time::Duration};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging and load .env file
    tracing_subscriber::fmt::init();
    dotenv().ok();

    // --- Command-line argument parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <tour_package.txt> '<preferences_json>'", args[0]);
        eprintln!();
        eprintln!("Example: {} package.txt '{{\"destination\": \"Tokyo\", \"travel_dates\": \"Dec 20-25, 2024\", \"requested_budget\": 2000, \"activities\": [\"Sightseeing\"], \"allergies\": \"peanuts\", \"notes\": \"\"}}'", args[0]);
        return Ok(());
    }

    let tour_package = fs::read_to_string(&args[1])?;
    let preferences: PreferenceSet = serde_json::from_str(&args[2])?;

    // --- Configuration from environment variables ---
    let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let provider = JamAiProvider::new(
        api_url,
        env::var("API_KEY").ok(),
        env::var("PROJECT_ID").ok(),
        Duration::from_secs(300),
    )?;

    // --- Build Recommendation Client ---
    let client = RecommendationClientBuilder::new()
        .provider(Box::new(provider))
        .build()?;

    // --- Request the recommendation ---
    match client
        .recommend(&tour_package, &serialize_preferences(&preferences))
        .await
    {
        Ok(result) => {
            for (field, value) in result.sections() {
                println!("--- {} {} ---", field.icon(), field.heading());
                println!("{value}\n");
            }
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}
