mod cancel;
mod engine;
mod model;
mod schedule;

pub use cancel::CancelToken;
pub use engine::{AnnealConfig, AnnealResult, Annealer};
pub use model::AnnealModel;
pub use schedule::Schedule;

pub use schedule::{FALLBACK_TEMPERATURE, MAX_PROBE_ROUNDS, TARGET_ACCEPTANCE, TEMPERATURE_STEP};

#[cfg(test)]
mod toy;
