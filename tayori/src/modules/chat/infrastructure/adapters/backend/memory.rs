use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::chat::domain::{ChatMessage, HistoryEntry};
use crate::modules::chat::ports::{BackendError, BackendPort};

/// 内存后端适配器
///
/// 模拟远端后端的追加式历史：每条保存的消息成为一条可获取的历史记录。
/// 用于开发和测试，无真实网络 I/O
pub struct MemoryBackendAdapter {
    /// 历史记录（按保存顺序追加）
    entries: RwLock<Vec<HistoryEntry>>,
}

impl MemoryBackendAdapter {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// 获取已保存的记录数量
    pub async fn count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }
}

impl Default for MemoryBackendAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendPort for MemoryBackendAdapter {
    fn backend_id(&self) -> &str {
        "memory"
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), BackendError> {
        let value = serde_json::to_value(message)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        let mut entries = self.entries.write().await;
        entries.push(HistoryEntry::from(value));

        Ok(())
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}
