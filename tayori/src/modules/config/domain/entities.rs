// Config Domain Entities
//
// 后端档案定义

use serde::{Deserialize, Serialize};

use super::value_objects::{BackendKind, BasePath};
use crate::modules::chat::ports::BackendConfig;

/// 默认请求超时（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 后端档案
///
/// 本地开发服务器与无服务器部署只在基础路径的字符串值上不同，
/// 共用同一份客户端实现
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendProfile {
    pub kind: BackendKind,
    pub base_path: BasePath,
    pub timeout_secs: u64,
}

impl BackendProfile {
    /// 本地开发服务器档案
    pub fn local() -> Self {
        Self {
            kind: BackendKind::Local,
            base_path: BasePath::new("http://localhost:5000/api/chat"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// 无服务器函数部署档案
    ///
    /// `origin` 为站点源地址，函数挂载在固定的前缀之下
    pub fn serverless(origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            kind: BackendKind::Serverless,
            base_path: BasePath::new(format!(
                "{}/.netlify/functions",
                origin.trim().trim_end_matches('/')
            )),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// 自定义基础路径的档案
    pub fn custom(kind: BackendKind, base_path: impl Into<BasePath>, timeout_secs: u64) -> Self {
        Self {
            kind,
            base_path: base_path.into(),
            timeout_secs,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.base_path.is_valid()
    }
}

impl Default for BackendProfile {
    fn default() -> Self {
        Self::local()
    }
}

impl From<BackendProfile> for BackendConfig {
    fn from(profile: BackendProfile) -> Self {
        Self {
            base_url: profile.base_path.as_str().to_string(),
            timeout_secs: profile.timeout_secs,
        }
    }
}
