// Chat Module - 聊天模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含消息实体与历史记录
// - ports: 端口层，定义与后端的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    ApplicationError, CommandHandler, FetchHistoryHandler, FetchHistoryQuery,
    FetchHistoryResponse, QueryHandler, SaveMessageCommand, SaveMessageHandler,
    SaveMessageResponse,
};
pub use domain::{ChatMessage, HistoryEntry};
pub use infrastructure::{HttpBackendAdapter, MemoryBackendAdapter};
pub use ports::{BackendConfig, BackendError, BackendPort};

use std::sync::Arc;
use tracing::error;

use crate::modules::config::BackendProfile;

/// Chat 模块容器
///
/// 管理模块内的依赖注入，并提供对外的两个操作。
/// 两个操作都在内部吸收全部错误：调用方只能拿到退化的返回值，
/// 校验、后端、传输三类失败仅能通过日志区分
pub struct ChatModule {
    backend: Arc<dyn BackendPort>,
    save_message_handler: SaveMessageHandler,
    fetch_history_handler: FetchHistoryHandler,
}

impl ChatModule {
    /// 根据后端配置创建 ChatModule 实例（HTTP 适配器）
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let backend: Arc<dyn BackendPort> = Arc::new(HttpBackendAdapter::new(config)?);
        Ok(Self::with_backend(backend))
    }

    /// 根据后端档案创建 ChatModule 实例
    pub fn with_profile(profile: BackendProfile) -> Result<Self, BackendError> {
        Self::new(profile.into())
    }

    /// 使用自定义后端创建 ChatModule
    pub fn with_backend(backend: Arc<dyn BackendPort>) -> Self {
        let save_message_handler = SaveMessageHandler::new(backend.clone());
        let fetch_history_handler = FetchHistoryHandler::new(backend.clone());

        Self {
            backend,
            save_message_handler,
            fetch_history_handler,
        }
    }

    /// 保存一条消息
    ///
    /// 成功返回 true；校验失败、后端错误、网络错误一律记录日志并返回 false。
    /// 单次调用失败即视为该消息丢失，不做重试
    pub async fn save_message(
        &self,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> bool {
        let command = SaveMessageCommand::new(sender, message);

        match self.save_message_handler.handle(command).await {
            Ok(_) => true,
            Err(e) => {
                error!("{} backend: save message failed: {}", self.backend.backend_id(), e);
                false
            }
        }
    }

    /// 获取完整历史记录
    ///
    /// 成功返回后端给出的记录序列；任何失败记录日志并返回空序列
    pub async fn fetch_history(&self) -> Vec<HistoryEntry> {
        match self.fetch_history_handler.handle(FetchHistoryQuery::new()).await {
            Ok(response) => response.entries,
            Err(e) => {
                error!("{} backend: fetch history failed: {}", self.backend.backend_id(), e);
                Vec::new()
            }
        }
    }

    // Accessors

    /// 获取后端端口
    pub fn backend(&self) -> &Arc<dyn BackendPort> {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// 不可达后端：模拟服务器未启动时的传输失败
    struct UnreachableBackend;

    #[async_trait]
    impl BackendPort for UnreachableBackend {
        fn backend_id(&self) -> &str {
            "unreachable"
        }

        async fn save_message(&self, _message: &ChatMessage) -> Result<(), BackendError> {
            Err(BackendError::NetworkError("connection refused".to_string()))
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError> {
            Err(BackendError::NetworkError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_chat_module_round_trip() {
        let backend = Arc::new(MemoryBackendAdapter::new());
        let module = ChatModule::with_backend(backend.clone());

        // 保存消息
        assert!(module.save_message("user", "hi").await);

        // 新消息出现在随后的历史中
        let history = module.fetch_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sender(), Some("user"));
        assert_eq!(history[0].message(), Some("hi"));

        // 再存一条
        assert!(module.save_message("ai", "hello back").await);
        let history = module.fetch_history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].sender(), Some("ai"));
    }

    #[tokio::test]
    async fn test_invalid_input_returns_false_without_call() {
        let backend = Arc::new(MemoryBackendAdapter::new());
        let module = ChatModule::with_backend(backend.clone());

        assert!(!module.save_message("", "hi").await);
        assert!(!module.save_message("user", "").await);

        // 校验失败时未发起任何后端调用
        assert_eq!(backend.count().await, 0);
    }

    #[tokio::test]
    async fn test_transport_failure_degrades() {
        let module = ChatModule::with_backend(Arc::new(UnreachableBackend));

        // 两个操作都不向调用方抛出错误
        assert!(!module.save_message("user", "hi").await);
        assert!(module.fetch_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_module_from_profile() {
        let module = ChatModule::with_profile(BackendProfile::local()).unwrap();
        assert_eq!(module.backend().backend_id(), "http");
    }
}
