use serde::{Deserialize, Serialize};

use crate::models::examinee::Examinee;

/// 座位分配记录
///
/// 排座结果表的一行。序列化时列名使用下游约定的
/// 标准模式（`RollNo`、`StudentName`、……、`SeatNo`），大小写敏感
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeatAssignment {
    pub roll_no: String,
    pub student_name: String,
    pub department: String,
    pub subject: String,
    pub exam_date: String,
    pub exam_session: String,
    /// 考场编号
    pub room_no: String,
    /// 座位号（从 1 开始）
    pub seat_no: u32,
}

impl SeatAssignment {
    /// 将考生绑定到一个 (考场, 座位)
    pub fn new(examinee: &Examinee, room_no: &str, seat_no: u32) -> Self {
        Self {
            roll_no: examinee.roll_no.clone(),
            student_name: examinee.student_name.clone(),
            department: examinee.department.clone(),
            subject: examinee.subject.clone(),
            exam_date: examinee.exam_date.clone(),
            exam_session: examinee.exam_session.clone(),
            room_no: room_no.to_string(),
            seat_no,
        }
    }
}

/// 场次元信息（取自结果表首行），供渲染层在页眉显示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExamMeta {
    pub exam_date: String,
    pub exam_session: String,
}
