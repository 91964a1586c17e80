// HTTP Backend Adapter
//
// 通过两个 HTTP 端点与远端后端通信：
// POST <base>/save_message 保存消息，GET <base>/history 获取历史

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::modules::chat::domain::{ChatMessage, HistoryEntry};
use crate::modules::chat::ports::{BackendConfig, BackendError, BackendPort};

/// 错误体不可解析时的占位消息
const UNKNOWN_API_ERROR: &str = "Unknown API Error";

/// 后端错误响应格式
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP 后端适配器
pub struct HttpBackendAdapter {
    config: BackendConfig,
    client: Client,
}

impl HttpBackendAdapter {
    /// 创建新的适配器实例
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// 获取配置的只读引用
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// 拼接端点 URL，容忍基础路径末尾的斜杠
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// 从错误响应体提取 `{error}` 字段，不可解析时退回占位消息
    fn extract_error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| UNKNOWN_API_ERROR.to_string())
    }

    /// 将非 2xx 响应转换为 ApiError
    async fn error_from_response(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = Self::extract_error_message(&body);

        error!("Backend API error: {} - {}", status, message);

        BackendError::ApiError {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl BackendPort for HttpBackendAdapter {
    fn backend_id(&self) -> &str {
        "http"
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), BackendError> {
        debug!("Saving message to {}", self.endpoint_url("save_message"));

        let response = self
            .client
            .post(self.endpoint_url("save_message"))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        // 约定成功状态为 201，任何 2xx 都视为保存成功，响应体忽略
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(())
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError> {
        debug!("Fetching history from {}", self.endpoint_url("history"));

        let response = self
            .client
            .get(self.endpoint_url("history"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
