pub mod prompts;
pub mod render;

pub use prompts::{
    complete_request, fuzzy_matches, pick_item, pick_recommendation, prompt_compare_action,
    prompt_product_link, prompt_update, prompt_yes_no, CompareAction,
};
pub use render::{
    display_comparison, display_energy, display_field_errors, display_recommendations, format_won,
};
