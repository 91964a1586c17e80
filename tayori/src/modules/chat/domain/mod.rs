// Chat Domain Layer
// 领域层包含消息实体与历史记录值对象

pub mod entities;

// 重导出常用类型
pub use entities::{ChatMessage, HistoryEntry};
