pub mod block;
pub mod hour_entry;
pub mod mode;
pub mod write_request;

pub use block::Block;
pub use hour_entry::{HourEntry, HourPair, HourRow};
pub use mode::{HourField, Mode};
pub use write_request::WriteRequest;
