//! 排座运行结果
//!
//! 一次排座调用的显式结果对象：由分配流程创建，调用方持有，
//! 渲染调用按引用传入；新一轮数据加载时整体失效替换

use crate::models::seat::{ExamMeta, SeatAssignment};

/// 排座运行结果
///
/// 持有一次排座的全部座位分配记录（按场次、考场、座位号有序）。
/// 记录一经创建不再修改；独立的两次排座调用互不共享记录
#[derive(Debug, Clone)]
pub struct AllocationRun {
    records: Vec<SeatAssignment>,
}

impl AllocationRun {
    /// 由分配流程创建
    pub fn new(records: Vec<SeatAssignment>) -> Self {
        Self { records }
    }

    /// 全部座位分配记录（输出顺序）
    pub fn records(&self) -> &[SeatAssignment] {
        &self.records
    }

    /// 场次元信息（取自首行）
    pub fn meta(&self) -> Option<ExamMeta> {
        self.records.first().map(|r| ExamMeta {
            exam_date: r.exam_date.clone(),
            exam_session: r.exam_session.clone(),
        })
    }

    /// 按学号查找考生的座位分配
    pub fn find_examinee(&self, roll_no: &str) -> Option<&SeatAssignment> {
        let roll_no = roll_no.trim();
        self.records.iter().find(|r| r.roll_no == roll_no)
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否没有任何记录
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
