/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化控制台日志
///
/// 日志级别由 RUST_LOG 环境变量控制，默认 info。
/// 重复调用（例如测试中）是安全的
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
