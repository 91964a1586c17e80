mod save_message;

pub use save_message::*;
