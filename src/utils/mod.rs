mod maths_utils;
mod perf;
mod time_utils;

pub type AppInstant = std::time::Instant;

pub use maths_utils::{pct_change, round_half_up, round_to_decimals};
pub use time_utils::{TimeUtils, format_timestamp, parse_timestamp};
