pub mod init;
pub mod packing_model;
pub mod solver;

pub use packing_model::{HARD_RETRY_LIMIT, PackingModel, PackingState, Strategy};
pub use solver::{RunReport, SolveReport, Solver};
