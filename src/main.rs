use std::env;

use serde_json::json;

use newsgen::{handler, AppConfig, ArticleGenerator, HttpDocumentStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Topic is required, language code optional
    let args: Vec<String> = env::args().collect();
    let topic = args
        .get(1)
        .ok_or("Please provide a topic as an argument")?;
    let language = args.get(2).map(String::as_str).unwrap_or("en");

    let config = AppConfig::load()?;
    let generator = ArticleGenerator::from_config(&config)?;
    let store = HttpDocumentStore::from_config(&config.store)?;

    let body = json!({"topic": topic, "language": language});
    let response = handler::handle("POST", &body, &generator, &store).await;

    println!("{}", serde_json::to_string_pretty(&response.body)?);

    if response.status >= 400 {
        return Err(format!("generation failed with status {}", response.status).into());
    }
    Ok(())
}
