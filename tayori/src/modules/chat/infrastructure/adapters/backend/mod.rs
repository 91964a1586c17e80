// Backend Adapters
// 聊天后端的适配器实现

mod http;
mod memory;

pub use http::*;
pub use memory::*;
