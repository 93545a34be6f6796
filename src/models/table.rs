use serde::{Deserialize, Serialize};

/// 原始表格数据
///
/// 表头加字符串单元格的行，由 CSV 加载器产生，
/// 经 `TableNormalizer` 清洗后再转换为类型化记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    /// 列名
    pub headers: Vec<String>,
    /// 数据行（每行与表头等长）
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// 创建新表格
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// 查找列的下标
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 获取单元格内容（越界时返回空串）
    pub fn cell<'a>(&'a self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 是否没有数据行
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
