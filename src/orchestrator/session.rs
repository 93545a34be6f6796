//! 排座会话 - 编排层
//!
//! 当前排座结果的显式持有者：排座成功时安装结果，
//! 重新加载数据时失效，渲染前未排座则返回前置条件错误

use crate::error::{AllocationError, AppError, AppResult};
use crate::workflow::allocation_run::AllocationRun;

/// 排座会话
///
/// 持有当前这一轮数据对应的排座结果。生命周期清晰：
/// 排座成功 → `install`；加载新数据 → `invalidate`；
/// 未排座就请求渲染 → `NotAllocated`
#[derive(Debug, Default)]
pub struct SeatingSession {
    run: Option<AllocationRun>,
}

impl SeatingSession {
    /// 创建空会话
    pub fn new() -> Self {
        Self { run: None }
    }

    /// 安装新的排座结果（替换旧结果）
    pub fn install(&mut self, run: AllocationRun) {
        self.run = Some(run);
    }

    /// 使当前结果失效（加载新数据时调用）
    pub fn invalidate(&mut self) {
        self.run = None;
    }

    /// 获取当前排座结果
    ///
    /// # 返回
    /// 尚未排座时返回 `NotAllocated`
    pub fn current(&self) -> AppResult<&AllocationRun> {
        self.run
            .as_ref()
            .ok_or(AppError::Allocation(AllocationError::NotAllocated))
    }

    /// 是否已有排座结果
    pub fn is_allocated(&self) -> bool {
        self.run.is_some()
    }
}
