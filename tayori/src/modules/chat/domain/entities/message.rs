use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 聊天消息实体
///
/// 发送前由调用方构造，构造后不可变；
/// 持久化完全委托给远端后端，客户端不做本地存储
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 消息来源（如 "user" / "ai"）
    sender: String,
    /// 消息文本内容
    message: String,
    /// 发送时刻（客户端生成，ISO-8601 序列化）
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// 创建消息，时间戳取当前时刻
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    // Getters
    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 历史记录条目
///
/// 后端返回的原始记录，按值透传，不做字段校验或类型转换；
/// 服务端附加的额外字段原样保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(serde_json::Value);

impl HistoryEntry {
    pub fn sender(&self) -> Option<&str> {
        self.0.get("sender").and_then(serde_json::Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(serde_json::Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.0.get("timestamp").and_then(serde_json::Value::as_str)
    }

    /// 取出原始 JSON 值
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for HistoryEntry {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_message() {
        let msg = ChatMessage::new("user", "Hello!");

        assert_eq!(msg.sender(), "user");
        assert_eq!(msg.message(), "Hello!");
        assert!(msg.timestamp() <= Utc::now());
    }

    #[test]
    fn test_message_wire_shape() {
        let msg = ChatMessage::new("ai", "Hi there");
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(value["sender"], "ai");
        assert_eq!(value["message"], "Hi there");
        // 时间戳以 ISO-8601 字符串发送
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(timestamp.parse::<DateTime<Utc>>().is_ok());
    }

    #[test]
    fn test_history_entry_passthrough() {
        let raw = json!({
            "sender": "user",
            "message": "hi",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "app": "extra field from the server"
        });
        let entry: HistoryEntry = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(entry.sender(), Some("user"));
        assert_eq!(entry.message(), Some("hi"));
        assert_eq!(entry.timestamp(), Some("2024-01-01T00:00:00.000Z"));
        // 透传：额外字段原样保留
        assert_eq!(entry.into_inner(), raw);
    }

    #[test]
    fn test_history_entry_missing_fields() {
        let entry = HistoryEntry::from(json!({ "message": "no sender" }));

        assert_eq!(entry.sender(), None);
        assert_eq!(entry.message(), Some("no sender"));
    }
}
