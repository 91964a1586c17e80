pub mod modules;

pub use modules::chat::{
    BackendConfig, BackendError, BackendPort, ChatMessage, ChatModule, HistoryEntry,
    HttpBackendAdapter, MemoryBackendAdapter,
};
pub use modules::config::{BackendKind, BackendProfile, BasePath};

/// 初始化日志订阅器
///
/// 由使用方在进程启动时调用一次
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    tracing::info!("Tayori starting...");
}
