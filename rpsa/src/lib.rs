use std::sync::LazyLock;
use std::time::Instant;

/// Generic simulated annealing engine
pub mod anneal;
pub mod config;
pub mod io;
/// Rectangle packing on top of the annealing engine
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
