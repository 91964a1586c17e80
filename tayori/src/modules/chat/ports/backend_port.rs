use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::super::domain::{ChatMessage, HistoryEntry};

/// 后端错误类型
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 后端配置
///
/// 基础路径在构造时注入，实例生命周期内不再变更；
/// 同一进程访问多个后端时，按实例各自配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/chat".to_string(),
            timeout_secs: 30,
        }
    }
}

/// 后端服务端口 - 核心抽象接口
///
/// 所有聊天后端适配器都必须实现此 trait
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// 获取后端标识
    fn backend_id(&self) -> &str;

    /// 保存一条消息
    async fn save_message(&self, message: &ChatMessage) -> Result<(), BackendError>;

    /// 获取完整历史记录
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError>;
}
