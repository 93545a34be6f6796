//! # Exam Seat Allocation
//!
//! 一个用于考试自动排座的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 表格与领域记录，只描述数据
//! - `DataTable` - 原始表格（表头 + 字符串行）
//! - `Room` / `Examinee` / `SeatAssignment` - 类型化记录
//! - `loaders/` - CSV 文件到 `DataTable` 的加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单项能力
//! - `TableNormalizer` - 表格清洗能力
//! - `CohortInterleaver` - 前缀分桶交错能力
//! - `ReportWriter` / `HallTicketWriter` - 文档写出能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次排座"的完整处理流程
//! - `GroupCtx` - 场次上下文封装（日期 + 时段）
//! - `AllocationFlow` - 流程编排（分组 → 打散 → 交错 → 落座）
//! - `AllocationRun` - 一次排座的结果对象
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/seating_processor` - 排座处理器，管理加载、清洗和渲染
//! - `orchestrator/session` - 排座会话，当前结果的显式持有者
//!
//! ## 模块结构

pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{DataTable, Examinee, ExamMeta, Room, SeatAssignment};
pub use orchestrator::{App, SeatingSession};
pub use services::{CohortInterleaver, HallTicketWriter, ReportWriter, TableKind, TableNormalizer};
pub use workflow::{AllocationFlow, AllocationRun, GroupCtx};
