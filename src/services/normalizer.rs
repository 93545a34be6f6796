//! 表格清洗服务 - 业务能力层
//!
//! 只负责"清洗"能力：列名规范化、去空白、去重

use std::collections::HashSet;

use crate::models::table::DataTable;

/// 表格种类，决定按哪个自然键去重
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// 考场表，按 RoomNo 去重
    Rooms,
    /// 考试时间表，按 RollNo 去重
    Timetable,
}

impl TableKind {
    /// 该表格的自然键列名
    pub fn key_column(self) -> &'static str {
        match self {
            TableKind::Rooms => "RoomNo",
            TableKind::Timetable => "RollNo",
        }
    }

    /// 表格名称（用于日志和错误信息）
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Rooms => "rooms",
            TableKind::Timetable => "timetable",
        }
    }
}

/// 表格清洗服务
///
/// 职责：
/// - 列名去首尾空白并移除内部空格（"Room No" → "RoomNo"）
/// - 单元格去首尾空白
/// - 丢弃全空行、完全重复行
/// - 按自然键去重（保留首次出现）
/// - 不修改输入表格，幂等
pub struct TableNormalizer;

impl TableNormalizer {
    /// 创建新的清洗服务
    pub fn new() -> Self {
        Self
    }

    /// 清洗一张表格，返回新表
    pub fn normalize(&self, table: &DataTable, kind: TableKind) -> DataTable {
        let headers: Vec<String> = table
            .headers
            .iter()
            .map(|h| h.trim().replace(' ', ""))
            .collect();

        let key_index = headers.iter().position(|h| h == kind.key_column());

        let mut seen_rows: HashSet<Vec<String>> = HashSet::new();
        let mut seen_keys: HashSet<String> = HashSet::new();
        let mut rows = Vec::with_capacity(table.rows.len());

        for raw_row in &table.rows {
            let row: Vec<String> = raw_row.iter().map(|c| c.trim().to_string()).collect();

            // 全空行
            if row.iter().all(|c| c.is_empty()) {
                continue;
            }

            // 完全重复行
            if !seen_rows.insert(row.clone()) {
                continue;
            }

            // 自然键重复（保留首次出现）
            if let Some(index) = key_index {
                if let Some(key) = row.get(index) {
                    if !seen_keys.insert(key.clone()) {
                        continue;
                    }
                }
            }

            rows.push(row);
        }

        let dropped = table.rows.len() - rows.len();
        if dropped > 0 {
            tracing::debug!("表格 {} 清洗丢弃 {} 行", kind.name(), dropped);
        }

        DataTable::new(headers, rows)
    }
}

impl Default for TableNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
