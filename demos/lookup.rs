//! Looks up queries in a category → names catalog and prints the JSON responses.
//!
//! ```text
//! cargo run --example lookup -- [catalog.json] [query...]
//! RUST_LOG=zoares_search=debug cargo run --example lookup -- "שניצל עיף"
//! ```

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use zoares_search::api::{handle_search, SearchRequest};
use zoares_search::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let mut args: Vec<String> = std::env::args().skip(1).collect();
  let path = if args.first().is_some_and(|a| a.ends_with(".json")) {
    PathBuf::from(args.remove(0))
  } else {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.json")
  };
  if args.is_empty() {
    args = vec!["עוף".to_string(), "שניצל עיף".to_string(), "סלמן".to_string()];
  }

  let catalog = InMemCatalog::from_file(&path)?;
  let engine = CatalogSearchEngine::builder()
    .standard()
    .suggestions(SuggestionRules::hebrew())
    .build();

  for query in args {
    let response = handle_search(&engine, &catalog, &SearchRequest::new(query.as_str()));
    println!("=== {} ===", query);
    println!("{}", serde_json::to_string_pretty(&response)?);
  }

  Ok(())
}
