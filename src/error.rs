use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 表格数据错误
    Table(TableError),
    /// 文件操作错误
    File(FileError),
    /// 排座逻辑错误
    Allocation(AllocationError),
    /// 文档渲染错误
    Render(RenderError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Table(e) => write!(f, "表格错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Allocation(e) => write!(f, "排座错误: {}", e),
            AppError::Render(e) => write!(f, "渲染错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Table(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Allocation(e) => Some(e),
            AppError::Render(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 表格数据错误
#[derive(Debug)]
pub enum TableError {
    /// 缺少必需的列
    MissingColumn {
        table: String,
        column: String,
    },
    /// 容量无法解析为整数
    InvalidCapacity {
        room_no: String,
        value: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MissingColumn { table, column } => {
                write!(f, "表格 {} 缺少必需的列: {}", table, column)
            }
            TableError::InvalidCapacity { room_no, value } => {
                write!(f, "考场 {} 的容量无法解析为整数: '{}'", room_no, value)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound {
        path: String,
    },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// CSV 解析失败
    CsvParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::CsvParseFailed { path, source } => {
                write!(f, "CSV解析失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::CsvParseFailed { source, .. }
            | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 排座逻辑错误
#[derive(Debug)]
pub enum AllocationError {
    /// 排座结果为空（无考场、无考生或总容量为零）
    EmptyResult,
    /// 尚未执行排座
    NotAllocated,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::EmptyResult => {
                write!(f, "排座结果为空: 请检查考场容量和考生名单")
            }
            AllocationError::NotAllocated => {
                write!(f, "尚未执行排座: 请先生成座位分配结果")
            }
        }
    }
}

impl std::error::Error for AllocationError {}

/// 文档渲染错误
#[derive(Debug)]
pub enum RenderError {
    /// 学号不在本次排座结果中
    UnknownStudent {
        roll_no: String,
    },
    /// JSON 序列化失败
    JsonSerializeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownStudent { roll_no } => {
                write!(f, "学号 {} 不在本次排座结果中", roll_no)
            }
            RenderError::JsonSerializeFailed { source } => {
                write!(f, "JSON序列化失败: {}", source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::JsonSerializeFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::File(FileError::CsvParseFailed {
            path: String::new(), // CSV错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Render(RenderError::JsonSerializeFailed {
            source: Box::new(err),
        })
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Other(format!("正则表达式错误: {}", err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建缺少列错误
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        AppError::Table(TableError::MissingColumn {
            table: table.into(),
            column: column.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建未知学号错误
    pub fn unknown_student(roll_no: impl Into<String>) -> Self {
        AppError::Render(RenderError::UnknownStudent {
            roll_no: roll_no.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
