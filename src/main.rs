use std::sync::Arc;

use clap::Parser;
use uuid::Uuid;

use cat_food_recommend_rs::catalog::{builtin_catalog, load_catalog};
use cat_food_recommend_rs::cli::{Cli, Command, ProfileArgs, SourceKind};
use cat_food_recommend_rs::engine::RecommendationEngine;
use cat_food_recommend_rs::error::{CatFoodError, Result};
use cat_food_recommend_rs::interface::{
    complete_request, display_comparison, display_energy, display_field_errors,
    display_recommendations, pick_item, pick_recommendation, prompt_compare_action,
    prompt_product_link, prompt_update, CompareAction,
};
use cat_food_recommend_rs::logging::init_logging;
use cat_food_recommend_rs::models::{ComparisonCandidate, FoodItem, Recommendation};
use cat_food_recommend_rs::search::NaverShoppingClient;
use cat_food_recommend_rs::state::ComparisonStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(&cli).await {
        match &e {
            CatFoodError::Validation(errors) => display_field_errors(errors),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Recommend {
            profile,
            source,
            json,
            no_input,
        } => cmd_recommend(cli, profile, *source, *json, *no_input).await,
        Command::Compare { profile, source } => cmd_compare(cli, profile, *source).await,
        Command::SearchStatus { json } => cmd_search_status(cli, *json),
    }
}

fn load_items(cli: &Cli) -> Result<Vec<FoodItem>> {
    match &cli.catalog {
        Some(path) => load_catalog(path),
        None => Ok(builtin_catalog()),
    }
}

fn build_engine(cli: &Cli, source: SourceKind) -> Result<RecommendationEngine> {
    match source {
        SourceKind::Catalog => Ok(RecommendationEngine::catalog(load_items(cli)?)),
        SourceKind::Search => {
            let client = NaverShoppingClient::new(cli.search.to_config())?;
            Ok(RecommendationEngine::search(Arc::new(client)))
        }
    }
}

/// Recommend foods and print the result.
async fn cmd_recommend(
    cli: &Cli,
    profile: &ProfileArgs,
    source: SourceKind,
    json: bool,
    no_input: bool,
) -> Result<()> {
    let mut request = profile.to_request();
    if !no_input {
        request = complete_request(request)?;
    }

    let engine = build_engine(cli, source)?;
    tracing::debug!(source = engine.source_name(), json, "Running recommend");
    let response = engine.recommend(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_energy(&response);
        display_recommendations(&response);
    }
    Ok(())
}

/// Errors the comparison session reports and survives.
fn recover(e: CatFoodError) -> Result<()> {
    match e {
        CatFoodError::Validation(errors) => {
            display_field_errors(&errors);
            Ok(())
        }
        CatFoodError::InvalidInput(_)
        | CatFoodError::NotFound { .. }
        | CatFoodError::CapacityExceeded { .. } => {
            println!("{}", e);
            Ok(())
        }
        other => Err(other),
    }
}

fn candidate_from(rec: &Recommendation) -> ComparisonCandidate {
    ComparisonCandidate {
        product_link: rec.product_link.clone().unwrap_or_default(),
        product_name: Some(rec.food_name.clone()),
        brand: rec.brand.clone(),
        image_url: rec.image_url.clone(),
        low_price: rec.product_price,
    }
}

fn add_to_list(store: &ComparisonStore, basket_id: &str, recommendations: &[Recommendation]) -> Result<()> {
    if recommendations.is_empty() {
        println!("There are no recommendations to add.");
        return Ok(());
    }
    let Some(index) = pick_recommendation(recommendations)? else {
        return Ok(());
    };

    let mut candidate = candidate_from(&recommendations[index]);
    if candidate.product_link.is_empty() {
        candidate.product_link = prompt_product_link()?;
    }

    match store.add(basket_id, candidate) {
        Ok(item) => {
            println!("Added: {}", item.display_name());
            Ok(())
        }
        Err(e) => recover(e),
    }
}

fn verify_item(store: &ComparisonStore, basket_id: &str) -> Result<()> {
    let items = store.list(basket_id, None);
    if items.is_empty() {
        println!("The comparison list is empty.");
        return Ok(());
    }
    let Some(item_id) = pick_item(&items)? else {
        return Ok(());
    };
    let Some(item) = items.iter().find(|i| i.id == item_id) else {
        return Ok(());
    };

    let update = match prompt_update(item) {
        Ok(update) => update,
        Err(e) => return recover(e),
    };
    if update.is_empty() {
        println!("Nothing changed.");
        return Ok(());
    }

    match store.update(basket_id, &item_id, &update) {
        Ok(item) => {
            println!("Updated: {}", item.display_name());
            Ok(())
        }
        Err(e) => recover(e),
    }
}

fn remove_item(store: &ComparisonStore, basket_id: &str) -> Result<()> {
    let items = store.list(basket_id, None);
    let Some(item_id) = pick_item(&items)? else {
        println!("Nothing removed.");
        return Ok(());
    };
    match store.remove(basket_id, &item_id) {
        Ok(()) => {
            println!("Removed.");
            Ok(())
        }
        Err(e) => recover(e),
    }
}

/// Interactive comparison session over one basket.
async fn cmd_compare(cli: &Cli, profile: &ProfileArgs, source: SourceKind) -> Result<()> {
    let request = complete_request(profile.to_request())?;
    let engine = build_engine(cli, source)?;
    let response = engine.recommend(&request).await?;

    display_energy(&response);
    display_recommendations(&response);

    let store = ComparisonStore::new();
    let basket_id = Uuid::new_v4().to_string();
    let target = response.daily_energy_target;
    tracing::debug!(%basket_id, "Started comparison session");

    loop {
        match prompt_compare_action()? {
            CompareAction::Add => add_to_list(&store, &basket_id, &response.by_rank)?,
            CompareAction::Verify => verify_item(&store, &basket_id)?,
            CompareAction::Remove => remove_item(&store, &basket_id)?,
            CompareAction::Show => {
                display_comparison(&store.list(&basket_id, Some(target)), store.max_items())
            }
            CompareAction::Quit => break,
        }
    }

    Ok(())
}

/// Report whether shopping search can be used.
fn cmd_search_status(cli: &Cli, json: bool) -> Result<()> {
    let available = cli.search.to_config().is_configured();

    if json {
        println!("{}", serde_json::json!({ "available": available }));
    } else if available {
        println!("Shopping search is configured.");
    } else {
        println!("Shopping search is not configured (set NAVER_CLIENT_ID and NAVER_CLIENT_SECRET).");
    }
    Ok(())
}
