use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult, FileError};

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 考场表 CSV 文件路径
    pub rooms_file: String,
    /// 考试时间表 CSV 文件路径
    pub timetable_file: String,
    /// 输出目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否导出 JSON 结果
    pub export_json: bool,
    /// 是否批量生成准考证
    pub generate_hall_tickets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rooms_file: "data/rooms.csv".to_string(),
            timetable_file: "data/timetable.csv".to_string(),
            output_dir: "output".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            export_json: true,
            generate_hall_tickets: true,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，缺失项使用默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            rooms_file: std::env::var("ROOMS_FILE").unwrap_or(default.rooms_file),
            timetable_file: std::env::var("TIMETABLE_FILE").unwrap_or(default.timetable_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            export_json: std::env::var("EXPORT_JSON").ok().and_then(|v| v.parse().ok()).unwrap_or(default.export_json),
            generate_hall_tickets: std::env::var("GENERATE_HALL_TICKETS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.generate_hall_tickets),
        }
    }

    /// 从 TOML 配置文件加载
    pub async fn from_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })
    }

    /// 加载配置：存在 config.toml 时优先使用，否则读取环境变量
    pub async fn load() -> Self {
        let config_path = Path::new("config.toml");
        if config_path.exists() {
            match Self::from_file(config_path).await {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("⚠️ 配置文件加载失败，回退到环境变量: {}", e);
                }
            }
        }
        Self::from_env()
    }
}
