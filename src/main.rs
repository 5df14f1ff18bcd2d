use chaosdex::report::species_report;
use chaosdex::{load_dex, search, DataSources, SearchFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "pikachu".to_string());
    let sources = DataSources::default();

    let mut dex = match load_dex(&sources).await {
        Ok(dex) => dex,
        Err(e) => {
            println!("Error loading dex data: {}", e);
            return;
        }
    };

    // Example 1: the full analysis report for the queried name
    match species_report(&dex, &query) {
        Some(report) => println!("{}", report),
        None => println!("No dex entry resolves for '{}'", query),
    }

    // Example 2: how many listable entries share the query's first letters
    let prefix: String = query.chars().take(3).collect();
    let hits = search(
        &mut dex,
        SearchFilter {
            term: &prefix,
            poke_type: None,
            fangame: None,
        },
    );
    println!("{} listable entries start with '{}'", hits.len(), prefix);
    for id in hits.iter().take(10) {
        println!("  {}", id);
    }
}
