pub mod hall_ticket;
pub mod interleave;
pub mod normalizer;
pub mod report_writer;

pub use hall_ticket::HallTicketWriter;
pub use interleave::CohortInterleaver;
pub use normalizer::{TableKind, TableNormalizer};
pub use report_writer::ReportWriter;
