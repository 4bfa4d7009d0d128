use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{SearchConfig, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_SEARCH_URL};
use crate::models::RecommendRequest;

/// cat-food: sizes daily portions from a cat's energy needs and ranks foods
/// by nutrition and monthly cost.
#[derive(Parser, Debug)]
#[command(name = "cat-food")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Catalog file (JSON array or CSV) replacing the built-in products.
    #[arg(long, env = "CATFOOD_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Shopping search provider settings.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[arg(long, env = "NAVER_CLIENT_ID", hide_env_values = true, global = true)]
    pub client_id: Option<String>,

    #[arg(long, env = "NAVER_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    #[arg(long, env = "CATFOOD_SEARCH_URL", default_value = DEFAULT_SEARCH_URL, global = true)]
    pub search_url: String,

    /// Deadline for one search call, in seconds.
    #[arg(long, env = "CATFOOD_SEARCH_TIMEOUT_SECS", default_value_t = DEFAULT_SEARCH_TIMEOUT_SECS, global = true)]
    pub search_timeout_secs: u64,
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.client_id.as_deref(),
            self.client_secret.as_deref(),
            &self.search_url,
            self.search_timeout_secs,
        )
    }
}

/// Where recommendations come from.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Live shopping search results.
    #[default]
    Search,
    /// Built-in or `--catalog` products with verified nutrition.
    Catalog,
}

/// Cat profile and budget. Missing values are prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Body weight in kg (0.1-20).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Age in months (1-300).
    #[arg(long)]
    pub age: Option<i64>,

    /// MALE or FEMALE.
    #[arg(long)]
    pub sex: Option<String>,

    /// Whether the cat is neutered (true/false).
    #[arg(long)]
    pub neutered: Option<bool>,

    /// Monthly food budget in won (1,000-1,000,000).
    #[arg(long)]
    pub budget: Option<i64>,

    /// Search query overriding the life-stage default.
    #[arg(long)]
    pub query: Option<String>,
}

impl ProfileArgs {
    /// Sex is upper-cased so `male` is accepted on the command line.
    pub fn to_request(&self) -> RecommendRequest {
        RecommendRequest {
            weight_kg: self.weight,
            age_months: self.age,
            sex: self.sex.as_deref().map(|s| s.trim().to_uppercase()),
            neutered: self.neutered,
            monthly_budget: self.budget,
            search_query: self.query.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend foods for a cat.
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_enum, default_value_t = SourceKind::Search)]
        source: SourceKind,

        /// Print the full response as JSON.
        #[arg(long)]
        json: bool,

        /// Never prompt; missing fields fail validation.
        #[arg(long)]
        no_input: bool,
    },

    /// Interactive comparison list built from recommendations.
    Compare {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_enum, default_value_t = SourceKind::Search)]
        source: SourceKind,
    },

    /// Report whether shopping search credentials are configured.
    SearchStatus {
        #[arg(long)]
        json: bool,
    },
}
