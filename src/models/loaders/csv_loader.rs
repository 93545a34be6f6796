use std::path::Path;

use tokio::fs;

use crate::error::{AppError, AppResult, FileError};
use crate::models::table::DataTable;

/// 从 CSV 文件加载数据并转换为 DataTable 对象
///
/// 首行作为表头；短行会补齐空串，保证每行与表头等长
pub async fn load_csv_table(path: &Path) -> AppResult<DataTable> {
    if !path.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: path.display().to_string(),
        }));
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    parse_csv(&content, path)
}

/// 解析 CSV 文本
fn parse_csv(content: &str, path: &Path) -> AppResult<DataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_parse_failed(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_parse_failed(path, e))?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        // 短行补齐到表头长度
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    tracing::debug!("已加载 {} 行: {}", rows.len(), path.display());

    Ok(DataTable::new(headers, rows))
}

fn csv_parse_failed(path: &Path, err: csv::Error) -> AppError {
    AppError::File(FileError::CsvParseFailed {
        path: path.display().to_string(),
        source: Box::new(err),
    })
}
