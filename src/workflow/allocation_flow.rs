//! 座位分配流程 - 流程层
//!
//! 核心职责：定义"一次排座"的完整处理流程
//!
//! 流程顺序：
//! 1. 按 (考试日期, 考试时段) 分组，按键的自然顺序逐场次处理
//! 2. 场次内整体打散 → 按前缀分桶交错
//! 3. 按固定顺序遍历考场和座位号，依次落座

use std::collections::{BTreeMap, HashMap, HashSet};

use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AllocationError, AppError, AppResult};
use crate::models::examinee::Examinee;
use crate::models::room::Room;
use crate::models::seat::SeatAssignment;
use crate::services::interleave::CohortInterleaver;
use crate::workflow::allocation_run::AllocationRun;
use crate::workflow::group_ctx::GroupCtx;

/// 座位分配流程
///
/// - 编排完整的排座流程
/// - 决定分组顺序、落座顺序和溢出处理
/// - 不持有任何资源，不修改输入
/// - 只依赖业务能力（services）
pub struct AllocationFlow {
    interleaver: CohortInterleaver,
    verbose_logging: bool,
}

impl AllocationFlow {
    /// 创建新的座位分配流程
    pub fn new(config: &Config) -> Self {
        Self {
            interleaver: CohortInterleaver::new(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 执行一次排座
    ///
    /// # 参数
    /// - `roster`: 清洗后的考生名单
    /// - `rooms`: 清洗后的考场列表
    ///
    /// # 返回
    /// 返回本次排座的全部座位分配记录；结果为空时返回 `EmptyResult`
    ///
    /// 每个场次的考场遍历都从第一个考场的 1 号座位重新开始，
    /// 同一 (考场, 座位) 在不同场次可复用，场次内绝不重复
    pub fn run(&self, roster: &[Examinee], rooms: &[Room]) -> AppResult<AllocationRun> {
        // 考场列表按首次出现顺序去重
        let mut seen_rooms = HashSet::new();
        let room_list: Vec<&Room> = rooms
            .iter()
            .filter(|r| seen_rooms.insert(r.room_no.clone()))
            .collect();
        let total_capacity: usize = room_list.iter().map(|r| r.capacity as usize).sum();

        // 按 (考试日期, 考试时段) 分组，BTreeMap 保证按键的自然顺序迭代
        let mut groups: BTreeMap<(String, String), Vec<&Examinee>> = BTreeMap::new();
        for examinee in roster {
            groups.entry(examinee.group_key()).or_default().push(examinee);
        }

        info!(
            "🪑 开始排座: {} 个场次, {} 个考场, 总容量 {}",
            groups.len(),
            room_list.len(),
            total_capacity
        );

        let mut records = Vec::new();
        for (group_index, ((exam_date, exam_session), members)) in groups.into_iter().enumerate() {
            let ctx = GroupCtx::new(exam_date, exam_session, group_index + 1);
            let assigned = self.allocate_group(&ctx, members, &room_list, &mut records)?;

            log_group_complete(&ctx, assigned);
        }

        if records.is_empty() {
            warn!("⚠️ 排座结果为空");
            return Err(AppError::Allocation(AllocationError::EmptyResult));
        }

        info!("✅ 排座完成: 共 {} 条座位分配记录", records.len());

        Ok(AllocationRun::new(records))
    }

    /// 处理单个场次
    ///
    /// # 返回
    /// 返回本场次成功落座的人数
    fn allocate_group(
        &self,
        ctx: &GroupCtx,
        mut members: Vec<&Examinee>,
        room_list: &[&Room],
        records: &mut Vec<SeatAssignment>,
    ) -> AppResult<usize> {
        log_group_start(ctx, members.len());

        // 场次内整体打散
        members.shuffle(&mut rand::rng());

        // 按前缀分桶交错
        let rolls: Vec<String> = members.iter().map(|e| e.roll_no.clone()).collect();
        let separated = self.interleaver.interleave(&rolls)?;

        if self.verbose_logging {
            self.log_seating_order(ctx, &separated);
        }

        let by_roll: HashMap<&str, &Examinee> = members
            .iter()
            .map(|e| (e.roll_no.as_str(), *e))
            .collect();

        // 考场遍历：每个场次从第一个考场的 1 号座位重新开始
        let mut seats = room_list
            .iter()
            .flat_map(|room| (1..=room.capacity).map(move |seat_no| (room.room_no.as_str(), seat_no)));

        let mut assigned = 0;
        for roll in &separated {
            let Some(examinee) = by_roll.get(roll.as_str()).copied() else {
                continue;
            };
            match seats.next() {
                Some((room_no, seat_no)) => {
                    records.push(SeatAssignment::new(examinee, room_no, seat_no));
                    assigned += 1;
                }
                None => break,
            }
        }

        // 容量溢出：多出的考生不获得座位，记录警告但不视为错误
        let overflow = separated.len() - assigned;
        if overflow > 0 {
            warn!(
                "[场次 {}] ⚠️ 考场容量不足, {} 名考生未获得座位",
                ctx.group_index, overflow
            );
        }

        Ok(assigned)
    }

    // ========== 日志辅助方法 ==========

    /// 显示交错后的落座顺序预览
    fn log_seating_order(&self, ctx: &GroupCtx, separated: &[String]) {
        for (i, roll) in separated.iter().take(5).enumerate() {
            info!("[场次 {}]   {}. {}", ctx.group_index, i + 1, roll);
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_group_start(ctx: &GroupCtx, member_count: usize) {
    info!("\n[场次 {}] {}", ctx.group_index, "─".repeat(30));
    info!(
        "[场次 {}] 日期: {} | 时段: {} | 考生: {} 人",
        ctx.group_index, ctx.exam_date, ctx.exam_session, member_count
    );
}

fn log_group_complete(ctx: &GroupCtx, assigned: usize) {
    info!("[场次 {}] ✓ 落座 {} 人", ctx.group_index, assigned);
}
