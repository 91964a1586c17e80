mod fetch_history;

pub use fetch_history::*;
