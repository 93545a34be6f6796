//! 座位表报告写入服务 - 业务能力层
//!
//! 只负责"把排座结果写成文档"能力，不关心排座流程

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::seat::SeatAssignment;
use crate::utils::logging::truncate_text;
use crate::workflow::allocation_run::AllocationRun;

/// 座位表报告写入服务
///
/// 职责：
/// - 按 (日期, 时段, 考场) 分节输出考场座位表文本报告
/// - 导出完整分配结果表为 CSV / JSON（列名为标准模式）
/// - 只消费 `AllocationRun`，不修改它
pub struct ReportWriter;

impl ReportWriter {
    /// 创建新的报告写入服务
    pub fn new() -> Self {
        Self
    }

    /// 写入考场座位表文本报告
    ///
    /// # 参数
    /// - `run`: 本次排座结果
    /// - `path`: 输出文件路径
    pub async fn write_room_report(&self, run: &AllocationRun, path: &Path) -> AppResult<()> {
        let mut report = String::new();
        report.push_str(&format!("{}\n考场座位安排表\n{}\n", "=".repeat(60), "=".repeat(60)));

        for section in sections(run) {
            let first = section[0];
            report.push_str(&format!(
                "\n考场: {} | 日期: {} | 时段: {}\n{}\n",
                first.room_no,
                first.exam_date,
                first.exam_session,
                "─".repeat(60)
            ));
            report.push_str(&format!(
                "{:<6} {:<14} {:<16} {:<12} {}\n",
                "座位", "学号", "姓名", "院系", "科目"
            ));
            for record in section {
                report.push_str(&format!(
                    "{:<6} {:<14} {:<16} {:<12} {}\n",
                    record.seat_no,
                    record.roll_no,
                    truncate_text(&record.student_name, 14),
                    truncate_text(&record.department, 10),
                    record.subject
                ));
            }
        }

        fs::write(path, report)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        info!("📄 座位表报告已写入: {}", path.display());
        Ok(())
    }

    /// 导出分配结果表为 CSV
    pub async fn write_allocation_csv(&self, run: &AllocationRun, path: &Path) -> AppResult<PathBuf> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in run.records() {
            writer.serialize(record)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Other(format!("CSV缓冲写入失败: {}", e)))?;

        fs::write(path, bytes)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        info!("📄 分配结果CSV已写入: {}", path.display());
        Ok(path.to_path_buf())
    }

    /// 导出分配结果表为 JSON
    pub async fn write_allocation_json(&self, run: &AllocationRun, path: &Path) -> AppResult<PathBuf> {
        let json = serde_json::to_string_pretty(run.records())?;

        fs::write(path, json)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        info!("📄 分配结果JSON已写入: {}", path.display());
        Ok(path.to_path_buf())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// 把输出顺序的记录切成 (日期, 时段, 考场) 连续段
///
/// 分配结果本身按场次、考场、座位号有序，顺序扫描即可分节
fn sections(run: &AllocationRun) -> Vec<Vec<&SeatAssignment>> {
    let mut sections: Vec<Vec<&SeatAssignment>> = Vec::new();
    for record in run.records() {
        let continues_last = sections
            .last()
            .and_then(|section| section.first())
            .is_some_and(|first| {
                first.exam_date == record.exam_date
                    && first.exam_session == record.exam_session
                    && first.room_no == record.room_no
            });

        if continues_last {
            if let Some(section) = sections.last_mut() {
                section.push(record);
            }
        } else {
            sections.push(vec![record]);
        }
    }
    sections
}
