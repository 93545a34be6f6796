pub mod allocation_flow;
pub mod allocation_run;
pub mod group_ctx;

pub use allocation_flow::AllocationFlow;
pub use allocation_run::AllocationRun;
pub use group_ctx::GroupCtx;
