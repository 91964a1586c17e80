// Config Value Objects
//
// 配置相关的值对象定义

use serde::{Deserialize, Serialize};

/// 后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// 本地开发服务器
    #[default]
    Local,
    /// 无服务器函数部署
    Serverless,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Serverless => "serverless",
        }
    }
}

impl From<&str> for BackendKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "serverless" => BackendKind::Serverless,
            _ => BackendKind::Local,
        }
    }
}

/// 基础路径
///
/// 两个端点（save_message、history）共同的 URL 前缀。
/// 构造时去除末尾斜杠，保证拼接端点时不产生双斜杠
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self(url.trim().trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 验证基础路径是否可用：非空且携带 HTTP scheme
    pub fn is_valid(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl From<&str> for BasePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
