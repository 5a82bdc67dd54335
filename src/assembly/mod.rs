//! Month assembly around the calculation engine.
//!
//! This module reads raw records through an [`AttendanceSource`], resolves a
//! [`ContractBaseline`](crate::models::ContractBaseline) per day and collects
//! the engine's results into a [`MonthlyAttendance`](crate::models::MonthlyAttendance).

mod assembler;
mod baseline;
mod month;
mod source;

pub use assembler::DayRecordAssembler;
pub use baseline::{ResolvedContract, resolve_baseline};
pub use month::month_range;
pub use source::{AttendanceSource, InMemoryAttendanceSource};
