//! 场次处理上下文
//!
//! 封装"我正在处理哪一天哪个时段"这一信息

use std::fmt::Display;

/// 场次处理上下文
///
/// 包含处理单个场次所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct GroupCtx {
    /// 考试日期
    pub exam_date: String,

    /// 考试时段
    pub exam_session: String,

    /// 场次序号（从1开始，仅用于日志显示）
    pub group_index: usize,
}

impl GroupCtx {
    /// 创建新的场次上下文
    pub fn new(exam_date: String, exam_session: String, group_index: usize) -> Self {
        Self {
            exam_date,
            exam_session,
            group_index,
        }
    }
}

impl Display for GroupCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[场次#{} 日期#{} 时段#{}]",
            self.group_index, self.exam_date, self.exam_session
        )
    }
}
