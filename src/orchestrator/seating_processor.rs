//! 排座处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整排座的编排和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、准备输出目录
//! 2. **数据加载**：读取考场表和考试时间表（CSV）
//! 3. **数据清洗**：调用 `TableNormalizer`，在边界处转换为类型化记录
//! 4. **排座执行**：委托 `AllocationFlow` 生成座位分配
//! 5. **会话管理**：排座结果安装进 `SeatingSession`，新数据加载时失效
//! 6. **文档渲染**：座位表报告、CSV/JSON 导出、准考证批量写出
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个场次的细节
//! - **状态所有者**：唯一持有 `SeatingSession` 的模块
//! - **向下委托**：排座细节委托 workflow，文档细节委托 services

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::models::examinee::Examinee;
use crate::models::loaders::load_csv_table;
use crate::models::room::Room;
use crate::models::table::DataTable;
use crate::orchestrator::session::SeatingSession;
use crate::services::hall_ticket::HallTicketWriter;
use crate::services::normalizer::{TableKind, TableNormalizer};
use crate::services::report_writer::ReportWriter;
use crate::workflow::allocation_flow::AllocationFlow;

/// 应用主结构
pub struct App {
    config: Config,
    session: SeatingSession,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 准备输出目录
        fs::create_dir_all(&config.output_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", config.output_dir))?;

        Ok(Self {
            config,
            session: SeatingSession::new(),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<()> {
        // 加载原始表格
        let (rooms_table, timetable) = self.load_tables().await?;

        // 新数据加载后，旧的排座结果随之失效
        self.session.invalidate();

        // 清洗两张表
        let normalizer = TableNormalizer::new();
        let rooms_table = normalizer.normalize(&rooms_table, TableKind::Rooms);
        let timetable = normalizer.normalize(&timetable, TableKind::Timetable);

        log_tables_loaded(&rooms_table, &timetable);

        // 统一模式边界：转换为类型化记录
        let rooms = Room::from_table(&rooms_table).context("考场表转换失败")?;
        let roster = Examinee::from_table(&timetable).context("考试时间表转换失败")?;

        // 执行排座
        let flow = AllocationFlow::new(&self.config);
        let run = flow.run(&roster, &rooms).context("排座失败")?;
        self.session.install(run);

        // 渲染文档
        let stats = self.render_documents().await?;

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 当前排座会话
    pub fn session(&self) -> &SeatingSession {
        &self.session
    }

    /// 加载考场表和考试时间表
    async fn load_tables(&self) -> Result<(DataTable, DataTable)> {
        info!("\n📁 正在加载考场表和考试时间表...");

        let rooms = load_csv_table(Path::new(&self.config.rooms_file))
            .await
            .context("加载考场表失败")?;
        let timetable = load_csv_table(Path::new(&self.config.timetable_file))
            .await
            .context("加载考试时间表失败")?;

        Ok((rooms, timetable))
    }

    /// 渲染全部输出文档
    async fn render_documents(&self) -> Result<RenderStats> {
        let run = self.session.current()?;
        let output_dir = Path::new(&self.config.output_dir);

        let report_writer = ReportWriter::new();
        report_writer
            .write_room_report(run, &output_dir.join("room_seating.txt"))
            .await?;
        report_writer
            .write_allocation_csv(run, &output_dir.join("seating.csv"))
            .await?;

        let mut stats = RenderStats {
            assignments: run.len(),
            hall_tickets: 0,
        };

        if self.config.export_json {
            report_writer
                .write_allocation_json(run, &output_dir.join("seating.json"))
                .await?;
        }

        if self.config.generate_hall_tickets {
            let writer = HallTicketWriter::new();
            stats.hall_tickets = writer.write_all(run, output_dir).await?;
        }

        Ok(stats)
    }
}

/// 渲染统计
#[derive(Debug, Default)]
struct RenderStats {
    assignments: usize,
    hall_tickets: usize,
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n排座处理日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    std::fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 考试排座模式");
    info!("📋 考场表: {}", config.rooms_file);
    info!("📋 考试时间表: {}", config.timetable_file);
    info!("📂 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

fn log_tables_loaded(rooms: &DataTable, timetable: &DataTable) {
    info!("✓ 考场表清洗后 {} 行", rooms.len());
    info!("✓ 考试时间表清洗后 {} 行", timetable.len());
}

fn print_final_stats(stats: &RenderStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 座位分配: {} 条", stats.assignments);
    info!("🎫 准考证: {} 张", stats.hall_tickets);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
