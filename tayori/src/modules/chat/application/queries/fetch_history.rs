use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::chat::domain::HistoryEntry;
use crate::modules::chat::ports::BackendPort;

/// 获取历史查询
///
/// 每次查询都是一次独立的全量获取，无分页、无缓存
#[derive(Debug, Clone, Default)]
pub struct FetchHistoryQuery;

impl FetchHistoryQuery {
    pub fn new() -> Self {
        Self
    }
}

/// 获取历史响应
#[derive(Debug, Clone)]
pub struct FetchHistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

/// 获取历史查询处理器
pub struct FetchHistoryHandler {
    backend: Arc<dyn BackendPort>,
}

impl FetchHistoryHandler {
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl QueryHandler<FetchHistoryQuery, FetchHistoryResponse> for FetchHistoryHandler {
    async fn handle(
        &self,
        _query: FetchHistoryQuery,
    ) -> Result<FetchHistoryResponse, ApplicationError> {
        let entries = self.backend.fetch_history().await?;
        let total = entries.len();

        Ok(FetchHistoryResponse { entries, total })
    }
}
