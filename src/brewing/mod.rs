pub mod calculator;
pub mod grind;
pub mod table;

pub use calculator::*;
pub use grind::*;
pub use table::*;
