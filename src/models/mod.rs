pub mod examinee;
pub mod loaders;
pub mod room;
pub mod seat;
pub mod table;

pub use examinee::Examinee;
pub use loaders::load_csv_table;
pub use room::Room;
pub use seat::{ExamMeta, SeatAssignment};
pub use table::DataTable;
