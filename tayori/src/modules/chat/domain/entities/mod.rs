mod message;

pub use message::{ChatMessage, HistoryEntry};
