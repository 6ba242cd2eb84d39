/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Cell color in the week grid:
/// inside a block → magenta, plain non-zero → green, zero → grey.
pub fn color_for_cell(value: f64, in_block: bool) -> &'static str {
    if value <= 0.0 {
        GREY
    } else if in_block {
        MAGENTA
    } else {
        GREEN
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
