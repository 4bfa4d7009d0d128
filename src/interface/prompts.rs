use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CatFoodError, Result};
use crate::models::{ComparisonItem, ComparisonUpdate, RecommendRequest, Recommendation};

/// Lowest similarity accepted as a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Most fuzzy candidates offered at once.
const MAX_FUZZY_OPTIONS: usize = 5;

fn parse_input<T: FromStr>(input: &str, what: &str) -> Result<T> {
    input
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| CatFoodError::InvalidInput(format!("Invalid {what}: '{}'", input.trim())))
}

pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Body weight (kg)")
        .default("4.0".to_string())
        .interact_text()?;
    parse_input(&input, "weight")
}

pub fn prompt_age() -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Age (months)")
        .default("36".to_string())
        .interact_text()?;
    parse_input(&input, "age")
}

pub fn prompt_sex() -> Result<String> {
    let options = ["MALE", "FEMALE"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(options[selection].to_string())
}

pub fn prompt_budget() -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Monthly food budget (won)")
        .default("50000".to_string())
        .interact_text()?;
    parse_input(&input, "budget")
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill in every missing profile field interactively.
pub fn complete_request(mut request: RecommendRequest) -> Result<RecommendRequest> {
    if request.weight_kg.is_none() {
        request.weight_kg = Some(prompt_weight()?);
    }
    if request.age_months.is_none() {
        request.age_months = Some(prompt_age()?);
    }
    if request.sex.is_none() {
        request.sex = Some(prompt_sex()?);
    }
    if request.neutered.is_none() {
        request.neutered = Some(prompt_yes_no("Neutered?", true)?);
    }
    if request.monthly_budget.is_none() {
        request.monthly_budget = Some(prompt_budget()?);
    }
    Ok(request)
}

/// Actions offered by the comparison session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareAction {
    Add,
    Verify,
    Remove,
    Show,
    Quit,
}

impl CompareAction {
    const ALL: [CompareAction; 5] = [
        CompareAction::Add,
        CompareAction::Verify,
        CompareAction::Remove,
        CompareAction::Show,
        CompareAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            CompareAction::Add => "Add a recommended product",
            CompareAction::Verify => "Enter label values for a product",
            CompareAction::Remove => "Remove a product",
            CompareAction::Show => "Show comparison list",
            CompareAction::Quit => "Quit",
        }
    }
}

pub fn prompt_compare_action() -> Result<CompareAction> {
    let labels: Vec<&str> = CompareAction::ALL.iter().map(CompareAction::label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(CompareAction::ALL[selection])
}

/// Indexes of `names` resembling `query`, best first.
pub fn fuzzy_matches(names: &[&str], query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    let mut scored: Vec<(usize, f64)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (i, jaro_winkler(&name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(i, _)| i).collect()
}

/// Choose a recommendation by typed name (exact, then fuzzy) or from the
/// full list when the name is left blank.
pub fn pick_recommendation(recommendations: &[Recommendation]) -> Result<Option<usize>> {
    if recommendations.is_empty() {
        return Ok(None);
    }
    let names: Vec<&str> = recommendations.iter().map(|r| r.food_name.as_str()).collect();

    let input: String = Input::new()
        .with_prompt("Product name (Enter to choose from the list)")
        .allow_empty(true)
        .interact_text()?;
    let input = input.trim();

    if input.is_empty() {
        return select_from(&names, &(0..names.len()).collect::<Vec<_>>(), "Which product?");
    }

    if let Some(i) = names.iter().position(|n| n.eq_ignore_ascii_case(input)) {
        return Ok(Some(i));
    }

    let candidates = fuzzy_matches(&names, input);
    match candidates.as_slice() {
        [] => {
            println!("No product matching '{}'", input);
            Ok(None)
        }
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", names[*only]), true)?;
            Ok(confirm.then_some(*only))
        }
        many => {
            let shown: Vec<usize> = many.iter().copied().take(MAX_FUZZY_OPTIONS).collect();
            select_from(&names, &shown, "Which did you mean?")
        }
    }
}

fn select_from(names: &[&str], indexes: &[usize], prompt: &str) -> Result<Option<usize>> {
    let mut options: Vec<&str> = indexes.iter().map(|&i| names[i]).collect();
    options.push("None of these");

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;
    Ok(indexes.get(selection).copied())
}

/// Choose an item on the comparison list; returns its id.
pub fn pick_item(items: &[ComparisonItem]) -> Result<Option<String>> {
    if items.is_empty() {
        return Ok(None);
    }
    let names: Vec<&str> = items.iter().map(ComparisonItem::display_name).collect();
    let indexes: Vec<usize> = (0..items.len()).collect();
    Ok(select_from(&names, &indexes, "Which product?")?.map(|i| items[i].id.clone()))
}

pub fn prompt_product_link() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Product link")
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Optional value; blank input means "leave unchanged".
fn prompt_optional<T: FromStr>(prompt: &str, current: Option<String>) -> Result<Option<T>> {
    let prompt = match current {
        Some(value) => format!("{prompt} [{value}]"),
        None => prompt.to_string(),
    };
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_input(&input, "number").map(Some)
}

/// Collect label values for `item`. Blank answers leave fields untouched.
pub fn prompt_update(item: &ComparisonItem) -> Result<ComparisonUpdate> {
    println!("Enter values from the package label; press Enter to skip a field.");
    Ok(ComparisonUpdate {
        protein_percent: prompt_optional("Crude protein (%)", item.protein_percent.map(|v| v.to_string()))?,
        fat_percent: prompt_optional("Crude fat (%)", item.fat_percent.map(|v| v.to_string()))?,
        kcal_per_100g: prompt_optional("Energy (kcal per 100 g)", item.kcal_per_100g.map(|v| v.to_string()))?,
        price: prompt_optional("Package price (won)", item.price.map(|v| v.to_string()))?,
        weight_kg: prompt_optional("Package weight (kg)", item.weight_kg.map(|v| v.to_string()))?,
    })
}
