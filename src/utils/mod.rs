pub mod colors;
pub mod date;
pub mod formatting;
pub mod hours;
pub mod table;

pub use formatting::{bold, pad_left, pad_right};
pub use hours::{format_hours, parse_hours};
