use crate::models::{FoodItem, FoodLifeStage, FoodType};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    brand: &str,
    food_type: FoodType,
    life_stage: FoodLifeStage,
    kcal_per_100g: f64,
    price_per_kg: u64,
    protein_percent: f64,
    fat_percent: f64,
    description: &str,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        food_type,
        life_stage,
        kcal_per_100g,
        price_per_kg,
        protein_percent,
        fat_percent,
        description: description.to_string(),
    }
}

/// Products shipped with the binary. Prices are per kg in won.
pub fn builtin_catalog() -> Vec<FoodItem> {
    use FoodLifeStage::*;
    use FoodType::*;

    vec![
        item("royal-canin-kitten", "Kitten", "Royal Canin", Dry, Kitten,
             406.0, 21_000, 36.0, 16.0, "Growth formula with DHA for kittens up to 12 months"),
        item("orijen-kitten", "Kitten", "Orijen", Dry, Kitten,
             418.0, 38_000, 40.0, 20.0, "Grain-free, high animal protein"),
        item("hills-kitten-pouch", "Science Diet Kitten Tender Chicken", "Hill's", Wet, Kitten,
             96.0, 31_000, 41.0, 22.0, "Minced chicken pouch for weaning kittens"),
        item("royal-canin-indoor", "Indoor 27", "Royal Canin", Dry, Adult,
             362.0, 17_500, 27.0, 13.0, "Lower-energy formula for indoor adults"),
        item("acana-wild-prairie", "Wild Prairie", "Acana", Dry, Adult,
             395.0, 27_000, 37.0, 20.0, "Free-run poultry and whole fish"),
        item("now-fresh-adult", "Grain Free Adult", "Now Fresh", Dry, Adult,
             386.0, 24_000, 34.0, 18.0, "Fresh turkey, salmon and duck"),
        item("purina-one-adult", "Indoor Advantage", "Purina ONE", Dry, Adult,
             375.0, 11_000, 34.0, 13.0, "Budget adult formula with hairball control"),
        item("ziwi-peak-can", "Mackerel & Lamb Can", "Ziwi Peak", Wet, Adult,
             110.0, 56_000, 42.0, 28.0, "Air-dried style canned recipe"),
        item("hills-senior-7", "Science Diet Adult 7+", "Hill's", Dry, Senior,
             377.0, 22_000, 31.0, 18.0, "Kidney and heart support for seniors"),
        item("royal-canin-ageing", "Ageing 12+", "Royal Canin", Dry, Senior,
             390.0, 29_000, 30.0, 19.0, "Softer kibble for older cats"),
        item("orijen-six-fish", "Six Fish", "Orijen", Dry, All,
             410.0, 36_000, 40.0, 20.0, "Whole Atlantic and freshwater fish"),
        item("fancy-feast-pate", "Classic Pate Chicken", "Fancy Feast", Wet, All,
             91.0, 24_000, 45.0, 25.0, "Smooth pate for all ages"),
    ]
}
