//! 准考证写入服务 - 业务能力层
//!
//! 只负责"生成准考证文档"能力，不关心排座流程

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::seat::SeatAssignment;
use crate::workflow::allocation_run::AllocationRun;

/// 准考证写入服务
///
/// 职责：
/// - 为单个考生渲染准考证文本
/// - 按学号批量写出 `hall_ticket_<学号>.txt`（空格替换为下划线）
/// - 学号不在结果中时返回"未找到"，而不是崩溃
pub struct HallTicketWriter;

impl HallTicketWriter {
    /// 创建新的准考证写入服务
    pub fn new() -> Self {
        Self
    }

    /// 渲染单个考生的准考证文本
    pub fn render_ticket(&self, assignment: &SeatAssignment) -> String {
        let mut ticket = String::new();
        ticket.push_str(&format!("{}\n", "=".repeat(50)));
        ticket.push_str(&format!("{:^46}\n", "考试准考证"));
        ticket.push_str(&format!("{}\n\n", "=".repeat(50)));

        let details = [
            ("姓名", assignment.student_name.as_str()),
            ("学号", assignment.roll_no.as_str()),
            ("院系", assignment.department.as_str()),
            ("科目", assignment.subject.as_str()),
            ("考试日期", assignment.exam_date.as_str()),
            ("考试时段", assignment.exam_session.as_str()),
            ("考场", assignment.room_no.as_str()),
        ];
        for (key, value) in details {
            ticket.push_str(&format!("  {:<10} {}\n", key, value));
        }
        ticket.push_str(&format!("  {:<10} {}\n", "座位号", assignment.seat_no));

        ticket.push_str(&format!("\n{}\n", "─".repeat(50)));
        ticket.push_str("请携带本准考证和有效证件进入考场。\n");
        ticket.push_str("请至少提前 15 分钟到达指定考场。\n");
        ticket.push_str(&format!("{}\n", "─".repeat(50)));
        ticket.push_str(&format!("{:>48}\n", "考务签章"));

        ticket
    }

    /// 为单个学号写出准考证
    ///
    /// # 参数
    /// - `run`: 本次排座结果
    /// - `roll_no`: 学号
    /// - `output_dir`: 输出目录
    ///
    /// # 返回
    /// 返回写出的文件路径；学号不在结果中时返回 `UnknownStudent`
    pub async fn write_one(
        &self,
        run: &AllocationRun,
        roll_no: &str,
        output_dir: &Path,
    ) -> AppResult<PathBuf> {
        let assignment = run
            .find_examinee(roll_no)
            .ok_or_else(|| AppError::unknown_student(roll_no))?;

        self.write_ticket(assignment, output_dir).await
    }

    /// 为全部考生批量写出准考证
    ///
    /// # 返回
    /// 返回写出的准考证数量
    pub async fn write_all(&self, run: &AllocationRun, output_dir: &Path) -> AppResult<usize> {
        let mut count = 0;
        for assignment in run.records() {
            self.write_ticket(assignment, output_dir).await?;
            count += 1;
        }

        info!("🎫 已写出 {} 张准考证: {}", count, output_dir.display());
        Ok(count)
    }

    /// 写出单张准考证文件
    async fn write_ticket(
        &self,
        assignment: &SeatAssignment,
        output_dir: &Path,
    ) -> AppResult<PathBuf> {
        let safe_roll = assignment.roll_no.trim().replace(' ', "_");
        let path = output_dir.join(format!("hall_ticket_{}.txt", safe_roll));

        fs::write(&path, self.render_ticket(assignment))
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}

impl Default for HallTicketWriter {
    fn default() -> Self {
        Self::new()
    }
}
