use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::table::DataTable;

/// 考生记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Examinee {
    /// 学号（花名册内唯一键）
    pub roll_no: String,
    /// 姓名
    pub student_name: String,
    /// 院系
    pub department: String,
    /// 科目
    pub subject: String,
    /// 考试日期
    pub exam_date: String,
    /// 考试时段
    pub exam_session: String,
}

/// 考试时间表的必需列
const REQUIRED_COLUMNS: [&str; 6] = [
    "RollNo",
    "StudentName",
    "Department",
    "Subject",
    "ExamDate",
    "ExamSession",
];

impl Examinee {
    /// 从清洗后的考试时间表转换为类型化记录
    ///
    /// 缺少任何必需列直接返回类型化错误；学号统一去除首尾空白
    pub fn from_table(table: &DataTable) -> AppResult<Vec<Examinee>> {
        let mut indices = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = table
                .column_index(column)
                .ok_or_else(|| AppError::missing_column("timetable", column))?;
        }
        let [roll_idx, name_idx, dept_idx, subject_idx, date_idx, session_idx] = indices;

        let mut examinees = Vec::with_capacity(table.len());
        for row in &table.rows {
            examinees.push(Examinee {
                roll_no: table.cell(row, roll_idx).trim().to_string(),
                student_name: table.cell(row, name_idx).to_string(),
                department: table.cell(row, dept_idx).to_string(),
                subject: table.cell(row, subject_idx).to_string(),
                exam_date: table.cell(row, date_idx).to_string(),
                exam_session: table.cell(row, session_idx).to_string(),
            });
        }

        Ok(examinees)
    }

    /// 场次分组键：(考试日期, 考试时段)
    pub fn group_key(&self) -> (String, String) {
        (self.exam_date.clone(), self.exam_session.clone())
    }
}
