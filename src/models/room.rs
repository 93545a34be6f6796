use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, TableError};
use crate::models::table::DataTable;

/// 考场
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// 考场编号（唯一键）
    pub room_no: String,
    /// 座位容量
    pub capacity: u32,
}

impl Room {
    /// 从清洗后的考场表转换为类型化记录
    ///
    /// 统一模式在此边界强制执行：缺少 `RoomNo` 或 `Capacity` 列
    /// 直接返回类型化错误，容量必须能解析为非负整数
    pub fn from_table(table: &DataTable) -> AppResult<Vec<Room>> {
        let room_no_idx = table
            .column_index("RoomNo")
            .ok_or_else(|| AppError::missing_column("rooms", "RoomNo"))?;
        let capacity_idx = table
            .column_index("Capacity")
            .ok_or_else(|| AppError::missing_column("rooms", "Capacity"))?;

        let mut rooms = Vec::with_capacity(table.len());
        for row in &table.rows {
            let room_no = table.cell(row, room_no_idx).trim().to_string();
            let raw_capacity = table.cell(row, capacity_idx).trim();
            let capacity: u32 = raw_capacity.parse().map_err(|_| {
                AppError::Table(TableError::InvalidCapacity {
                    room_no: room_no.clone(),
                    value: raw_capacity.to_string(),
                })
            })?;
            rooms.push(Room { room_no, capacity });
        }

        Ok(rooms)
    }
}
