use crate::error::FieldErrors;
use crate::models::{ComparisonItem, Figure, RecommendResponse, Recommendation};

/// Thousands-separated won amount, e.g. `47,520`.
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `~` marks an estimate, `-` an unknown.
pub fn format_cost(figure: &Figure<u64>) -> String {
    match figure {
        Figure::Verified(v) => format_won(*v),
        Figure::Estimated(v) => format!("~{}", format_won(*v)),
        Figure::Unknown => "-".to_string(),
    }
}

pub fn format_measure(figure: &Figure<f64>, unit: &str) -> String {
    match figure {
        Figure::Verified(v) => format!("{v:.1}{unit}"),
        Figure::Estimated(v) => format!("~{v:.1}{unit}"),
        Figure::Unknown => "-".to_string(),
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Energy needs and how they were derived.
pub fn display_energy(response: &RecommendResponse) {
    println!();
    println!("=== Daily Energy ===");
    println!();
    println!("Life stage: {} ({})", response.stage_description, response.life_stage);
    println!("Resting energy (RER): {:.1} kcal/day", response.basal_energy);
    println!("Life-stage factor: {:.1}", response.life_stage_factor);
    println!("Daily target (MER): {:.1} kcal/day", response.daily_energy_target);
    println!();
    println!("{}", response.formula_trace);
    println!();
}

fn display_view(title: &str, recommendations: &[Recommendation]) {
    println!("--- {} ---", title);

    let max_name_len = recommendations
        .iter()
        .map(|r| r.food_name.chars().count())
        .max()
        .unwrap_or(10)
        .min(48);

    for rec in recommendations {
        let name: String = rec.food_name.chars().take(max_name_len).collect();
        println!(
            "{:>3}. {:<width$} {:>4} | {:>8} g/day | {:>8}/day | {:>9}/month | P {:>6} F {:>6}",
            rec.rank,
            name,
            rec.food_type.as_str(),
            format_measure(&rec.daily_amount_grams, ""),
            format_cost(&rec.daily_cost),
            format_cost(&rec.monthly_cost),
            format_measure(&rec.protein_percent, "%"),
            format_measure(&rec.fat_percent, "%"),
            width = max_name_len
        );
        if let Some(brand) = &rec.brand {
            println!("     {}", brand);
        }
        if let Some(price) = rec.product_price {
            println!("     Listed at {} won", format_won(price));
        }
        if let Some(link) = &rec.product_link {
            println!("     {}", link);
        }
        println!("     {}", rec.reason);
    }
    println!();
}

/// The three views, or the explanation when there is nothing to show.
pub fn display_recommendations(response: &RecommendResponse) {
    if response.is_empty() {
        println!(
            "{}",
            response.message.as_deref().unwrap_or("No recommendations.")
        );
        println!();
        return;
    }

    println!("=== Recommendations ===");
    println!();
    display_view("By relevance", &response.by_rank);
    display_view("By monthly cost", &response.by_price);
    display_view("By review count", &response.by_review_count);
    if let Some(note) = &response.review_note {
        println!("Note: {}", note);
    }
    println!("Values marked ~ are estimates; - means not known until you verify the label.");
    println!();
    println!("{}", response.calculation_source);
    println!();
}

/// Comparison list with derived costs where the data allows.
pub fn display_comparison(items: &[ComparisonItem], max_items: usize) {
    println!();
    println!("=== Comparison List ({}/{}) ===", items.len(), max_items);
    println!();

    if items.is_empty() {
        println!("(empty)");
        println!();
        return;
    }

    for (i, item) in items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.display_name());
        if let Some(brand) = &item.brand {
            println!("     Brand: {}", brand);
        }
        println!(
            "     Protein {}% | Fat {}% | {} kcal/100g | Price {} | {} kg",
            optional(item.protein_percent),
            optional(item.fat_percent),
            optional(item.kcal_per_100g),
            optional(item.price.or(item.low_price).map(format_won)),
            optional(item.weight_kg),
        );
        match &item.derived {
            Some(d) => println!(
                "     {:.1} g/day | {} won/kg | {} won/day | {} won/month",
                d.daily_amount_grams,
                format_won(d.price_per_kg),
                format_won(d.daily_cost),
                format_won(d.monthly_cost)
            ),
            None => println!("     Enter energy density and package weight to see costs."),
        }
    }
    println!();
}

/// One line per invalid field.
pub fn display_field_errors(errors: &FieldErrors) {
    eprintln!("Please fix the following:");
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field, message);
    }
}
