//! BuildHost Implementations

mod memory;
mod stats_file;
mod stats_json;

pub use memory::InMemoryHost;
pub use stats_file::StatsFileHost;
pub use stats_json::parse_stats;
