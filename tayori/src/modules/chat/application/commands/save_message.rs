use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::chat::domain::ChatMessage;
use crate::modules::chat::ports::BackendPort;

/// 保存消息命令
#[derive(Debug, Clone)]
pub struct SaveMessageCommand {
    /// 消息来源
    pub sender: String,
    /// 消息内容
    pub message: String,
}

impl SaveMessageCommand {
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
        }
    }
}

/// 保存消息响应
#[derive(Debug, Clone)]
pub struct SaveMessageResponse {
    /// 已提交到后端的消息（含客户端生成的时间戳）
    pub message: ChatMessage,
}

/// 保存消息命令处理器
pub struct SaveMessageHandler {
    backend: Arc<dyn BackendPort>,
}

impl SaveMessageHandler {
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CommandHandler<SaveMessageCommand, SaveMessageResponse> for SaveMessageHandler {
    async fn handle(
        &self,
        command: SaveMessageCommand,
    ) -> Result<SaveMessageResponse, ApplicationError> {
        // 验证输入：校验失败时不发起任何网络请求
        let sender = command.sender.trim();
        let message = command.message.trim();

        if sender.is_empty() || message.is_empty() {
            return Err(ApplicationError::ValidationError(
                "Sender and message are required for saving".to_string(),
            ));
        }

        // 构造消息，时间戳取当前时刻
        let chat_message = ChatMessage::new(sender, message);
        self.backend.save_message(&chat_message).await?;

        Ok(SaveMessageResponse {
            message: chat_message,
        })
    }
}
