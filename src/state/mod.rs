mod store;

pub use store::ComparisonStore;
