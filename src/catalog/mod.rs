mod builtin;
mod persistence;

pub use builtin::builtin_catalog;
pub use persistence::load_catalog;
