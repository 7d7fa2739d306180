use crate::anneal::schedule::metropolis_rejects;
use crate::anneal::{AnnealModel, CancelToken, Schedule};
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};
use thousands::Separable;

/// Budget of a single annealing run, the run stops at whichever limit is hit first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealConfig {
    pub max_steps: usize,
    pub max_duration: Duration,
    /// Moves sampled per temperature probe during calibration
    pub n_calibration_steps: usize,
}

#[derive(Debug, Clone)]
pub struct AnnealResult<S> {
    /// Lowest-energy state encountered during the run
    pub best_state: S,
    pub best_energy: f64,
    /// Number of steps of the main loop that were executed
    pub steps: usize,
    /// Whether the run was stopped through its [`CancelToken`]
    pub cancelled: bool,
    /// Schedule used, `None` if the run was stopped before calibration completed
    pub schedule: Option<Schedule>,
}

/// Simulated annealing driver, generic over the [`AnnealModel`].
pub struct Annealer {
    pub config: AnnealConfig,
    cancel_token: Option<CancelToken>,
}

impl Annealer {
    pub fn new(config: AnnealConfig) -> Self {
        Self {
            config,
            cancel_token: None,
        }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_token
            .as_ref()
            .is_some_and(|t| t.is_cancelled())
    }

    /// Minimizes the energy of `model`, starting from its current state.
    ///
    /// `observer` is called after every step with `(step, max_steps)`.
    /// Errors raised by the model are returned unchanged, leaving the model in an unspecified state.
    /// On return, the model holds the last visited state, not necessarily the best one.
    pub fn anneal<M: AnnealModel>(
        &self,
        model: &mut M,
        rng: &mut impl Rng,
        mut observer: impl FnMut(usize, usize),
    ) -> Result<AnnealResult<M::State>, M::Error> {
        let start = Instant::now();
        let max_steps = self.config.max_steps;

        if self.is_cancelled() {
            debug!("[SA] cancelled before start");
            return Ok(AnnealResult {
                best_state: model.state(),
                best_energy: model.energy(),
                steps: 0,
                cancelled: true,
                schedule: None,
            });
        }

        let out_of_budget = || self.is_cancelled() || start.elapsed() >= self.config.max_duration;
        let calibrated = Schedule::calibrate(
            model,
            rng,
            self.config.n_calibration_steps,
            max_steps,
            out_of_budget,
        )?;
        let Some(schedule) = calibrated else {
            let cancelled = self.is_cancelled();
            debug!(
                "[SA] {} during calibration after {:.3}ms",
                if cancelled { "cancelled" } else { "time limit reached" },
                start.elapsed().as_secs_f64() * 1000.0
            );
            return Ok(AnnealResult {
                best_state: model.state(),
                best_energy: model.energy(),
                steps: 0,
                cancelled,
                schedule: None,
            });
        };
        debug!(
            "[SA] calibrated schedule ({schedule}) in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        let mut best_state = model.state();
        let mut best_energy = model.energy();
        let mut n_accepted = 0;
        let mut step = 0;
        let mut cancelled = false;

        while step < max_steps {
            if self.is_cancelled() {
                cancelled = true;
                debug!("[SA] cancelled at step {}", step.separate_with_commas());
                break;
            }
            if start.elapsed() >= self.config.max_duration {
                debug!("[SA] time limit reached at step {}", step.separate_with_commas());
                break;
            }

            let t = schedule.temperature(step);
            let delta = model.propose_move(rng)?;
            step += 1;

            if metropolis_rejects(delta, t, rng) {
                model.rollback();
            } else {
                n_accepted += 1;
                let energy = model.energy();
                if energy < best_energy {
                    best_energy = energy;
                    best_state = model.state();
                }
            }
            observer(step, max_steps);
        }

        info!(
            "[SA] annealing finished in {:.3}ms ({} steps, {} accepted), best energy: {:.3}",
            start.elapsed().as_secs_f64() * 1000.0,
            step.separate_with_commas(),
            n_accepted.separate_with_commas(),
            best_energy
        );

        Ok(AnnealResult {
            best_state,
            best_energy,
            steps: step,
            cancelled,
            schedule: Some(schedule),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anneal::toy::Parabola;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    fn config(max_steps: usize) -> AnnealConfig {
        AnnealConfig {
            max_steps,
            max_duration: Duration::from_secs(600),
            n_calibration_steps: 200,
        }
    }

    #[test]
    fn finds_the_minimum() {
        let mut model = Parabola::new(-40, 17);
        let mut rng = SmallRng::seed_from_u64(0);
        let result = Annealer::new(config(20_000))
            .anneal(&mut model, &mut rng, |_, _| {})
            .unwrap();

        assert_eq!(result.best_state, 17);
        assert_eq!(result.best_energy, 0.0);
        assert_eq!(result.steps, 20_000);
        assert!(!result.cancelled);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = |seed| {
            let mut model = Parabola::new(-40, 17);
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = Annealer::new(config(500))
                .anneal(&mut model, &mut rng, |_, _| {})
                .unwrap();
            (result.best_state, result.best_energy, model.x)
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn observer_sees_every_step() {
        let mut model = Parabola::new(5, 0);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut seen = vec![];
        Annealer::new(config(100))
            .anneal(&mut model, &mut rng, |step, total| seen.push((step, total)))
            .unwrap();

        assert_eq!(seen.len(), 100);
        assert_eq!(seen.first(), Some(&(1, 100)));
        assert_eq!(seen.last(), Some(&(100, 100)));
    }

    #[test]
    fn cancelled_run_returns_best_so_far() {
        let token = CancelToken::new();
        let annealer = Annealer::new(config(10_000)).with_cancel_token(token.clone());
        let mut model = Parabola::new(-40, 17);
        let mut rng = SmallRng::seed_from_u64(0);

        let result = annealer
            .anneal(&mut model, &mut rng, |step, _| {
                if step == 50 {
                    token.cancel()
                }
            })
            .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.steps, 50);
        assert!(result.best_energy <= Parabola::new(-40, 17).energy());
    }

    #[test]
    fn cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let mut model = Parabola::new(3, 0);
        let mut rng = SmallRng::seed_from_u64(0);
        let result = Annealer::new(config(100))
            .with_cancel_token(token)
            .anneal(&mut model, &mut rng, |_, _| {})
            .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.steps, 0);
        assert_eq!(result.best_state, 3);
        assert!(result.schedule.is_none());
    }

    #[test]
    fn zero_duration_stops_immediately() {
        let mut model = Parabola::new(3, 0);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut cfg = config(1000);
        cfg.max_duration = Duration::ZERO;
        let result = Annealer::new(cfg)
            .anneal(&mut model, &mut rng, |_, _| {})
            .unwrap();
        assert_eq!(result.steps, 0);
        assert!(!result.cancelled);
        assert!(result.schedule.is_none());
        assert_eq!(model.n_moves, 0);
    }

    #[test]
    fn time_limit_applies_during_calibration() {
        let mut model = Parabola::new(-40, 17);
        model.move_delay = Some(Duration::from_millis(1));
        let mut rng = SmallRng::seed_from_u64(0);
        // a full calibration would take several seconds at this pace
        let cfg = AnnealConfig {
            max_steps: 10_000,
            max_duration: Duration::from_millis(30),
            n_calibration_steps: 2000,
        };
        let start = Instant::now();
        let result = Annealer::new(cfg)
            .anneal(&mut model, &mut rng, |_, _| {})
            .unwrap();

        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(result.steps, 0);
        assert!(!result.cancelled);
        assert!(result.schedule.is_none());
        assert_eq!(result.best_state, -40);
        assert_eq!(model.x, -40);
    }

    #[test]
    fn cancellation_applies_during_calibration() {
        let token = CancelToken::new();
        let mut model = Parabola::new(-40, 17);
        model.cancel_after = Some((100, token.clone()));
        let mut rng = SmallRng::seed_from_u64(0);
        let result = Annealer::new(config(10_000))
            .with_cancel_token(token)
            .anneal(&mut model, &mut rng, |_, _| panic!("main loop was entered"))
            .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.steps, 0);
        assert!(result.schedule.is_none());
        assert_eq!(model.n_moves, 100);
        assert_eq!(result.best_state, -40);
    }

    #[test]
    fn model_errors_propagate() {
        let mut model = Parabola::new(0, 10);
        // enough moves for calibration, not for the main loop
        model.fail_after = Some(100_000);
        let mut rng = SmallRng::seed_from_u64(0);
        let result = Annealer::new(config(1_000_000)).anneal(&mut model, &mut rng, |_, _| {});
        assert_eq!(result.unwrap_err(), "no moves left");
    }
}
