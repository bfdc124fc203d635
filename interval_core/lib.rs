pub mod interval;
pub mod interval_set;
pub mod merge;
pub mod process;
pub mod serde;
pub mod subtract;

pub use crate::interval::Interval;
pub use crate::interval_set::IntervalSet;
pub use crate::merge::merge;
pub use crate::process::process_intervals;
pub use crate::subtract::{Carve, Overlap, subtract};
