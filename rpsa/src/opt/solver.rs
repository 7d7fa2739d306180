use crate::anneal::{Annealer, AnnealConfig, CancelToken};
use crate::config::SAConfig;
use crate::opt::init::initial_state;
use crate::opt::{PackingModel, PackingState, Strategy};
use itertools::Itertools;
use log::{info, warn};
use ordered_float::OrderedFloat;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rectpack::entities::{Floorplan, RPInstance, SizeLimits, Solution};
use rectpack::seq_pair::SequencePair;
use rectpack::{RPError, Result};
use std::fmt::{Display, Formatter};
use std::time::Instant;
use thousands::Separable;

/// Outcome of a single annealing run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub steps: usize,
    pub best_energy: f64,
    /// Whether the best floorplan of the run respects the size limits
    pub feasible: bool,
    pub cancelled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Strategy of the run the returned solution stems from
    pub selected: Strategy,
    pub runs: Vec<RunReport>,
    /// Whether the hard strategy ran out of feasible moves
    pub hard_exhausted: bool,
    pub elapsed_ms: f64,
}

impl Display for SolveReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let runs = self
            .runs
            .iter()
            .map(|r| {
                format!(
                    "{}: {} steps, energy {:.3}{}{}",
                    r.strategy,
                    r.steps.separate_with_commas(),
                    r.best_energy,
                    if r.feasible { "" } else { " (infeasible)" },
                    if r.cancelled { " (cancelled)" } else { "" },
                )
            })
            .join(", ");
        write!(
            f,
            "selected {} result in {:.3}ms [{}]{}",
            self.selected,
            self.elapsed_ms,
            runs,
            if self.hard_exhausted {
                ", hard strategy exhausted"
            } else {
                ""
            }
        )
    }
}

/// Finds a compact floorplan for an instance, optionally within size limits.
///
/// Without limits, a single soft-strategy run is performed.
/// With limits, a soft run is followed by a hard run, and the best of both is returned:
/// a result within the limits beats one outside of them, ties are broken by area.
/// If the hard run finds no feasible move, the soft result is used.
pub struct Solver<'a> {
    pub config: SAConfig,
    limits: SizeLimits,
    cancel_token: Option<CancelToken>,
    /// Called after every step of every run with `(step, max_steps)`
    observer: Option<Box<dyn FnMut(usize, usize) + 'a>>,
}

impl<'a> Solver<'a> {
    pub fn new(config: SAConfig) -> Self {
        Self {
            config,
            limits: SizeLimits::NONE,
            cancel_token: None,
            observer: None,
        }
    }

    pub fn with_limits(mut self, width_limit: Option<f64>, height_limit: Option<f64>) -> Self {
        self.limits = SizeLimits::new(width_limit, height_limit);
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    pub fn with_progress_observer(mut self, observer: impl FnMut(usize, usize) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    pub fn solve(&mut self, instance: &RPInstance) -> Result<Solution> {
        self.solve_with_report(instance).map(|(solution, _)| solution)
    }

    pub fn solve_with_report(&mut self, instance: &RPInstance) -> Result<(Solution, SolveReport)> {
        let start = Instant::now();
        instance.check_limits(self.limits.width, self.limits.height)?;
        let anneal_config = self.config.anneal_config()?;

        let mut master_rng = match self.config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let strategies = match self.limits.is_unbounded() {
            true => vec![Strategy::Soft],
            false => vec![Strategy::Soft, Strategy::Hard],
        };

        let mut candidates: Vec<(Strategy, PackingState, Floorplan)> = vec![];
        let mut runs = vec![];
        let mut hard_exhausted = false;

        for strategy in strategies {
            let seed = master_rng.random::<u64>();
            if self.is_cancelled() && !candidates.is_empty() {
                info!("[SOLVER] cancelled, skipping {strategy} strategy");
                break;
            }
            match self.run(instance, strategy, seed, anneal_config) {
                Ok((state, floorplan, report)) => {
                    runs.push(report);
                    candidates.push((strategy, state, floorplan));
                }
                Err(err) if err.is_infeasible() && strategy == Strategy::Hard => {
                    warn!("[SOLVER] {err}, falling back to the soft result");
                    hard_exhausted = true;
                }
                Err(err) => return Err(err),
            }
        }

        let limits = self.limits;
        let (selected, state, floorplan) = select(candidates, &limits)
            .ok_or(RPError::InfeasibleNeighborhood {
                attempts: crate::opt::HARD_RETRY_LIMIT,
            })?;

        let PackingState { a, b, rotations } = state;
        let solution = Solution::new(SequencePair::new(a, b)?, rotations, floorplan);

        let report = SolveReport {
            selected,
            runs,
            hard_exhausted,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        info!("[SOLVER] {report}");
        info!(
            "[SOLVER] bounding box: {:.3} x {:.3}, area: {:.3}, density: {:.3}%",
            solution.floorplan.width(),
            solution.floorplan.height(),
            solution.floorplan.area,
            solution.floorplan.density(instance) * 100.0
        );
        if !solution.floorplan.fits(&limits) {
            warn!("[SOLVER] no solution within the size limits was found");
        }

        Ok((solution, report))
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_token
            .as_ref()
            .is_some_and(|t| t.is_cancelled())
    }

    fn run(
        &mut self,
        instance: &RPInstance,
        strategy: Strategy,
        seed: u64,
        anneal_config: AnnealConfig,
    ) -> Result<(PackingState, Floorplan, RunReport)> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let start_state = initial_state(instance, self.limits, &mut rng);
        let mut model = PackingModel::new(instance, self.limits, strategy, start_state)?;

        let mut annealer = Annealer::new(anneal_config);
        if let Some(token) = &self.cancel_token {
            annealer = annealer.with_cancel_token(token.clone());
        }

        info!(
            "[SOLVER] starting {strategy} strategy run ({} rectangles, max {} steps)",
            instance.n(),
            anneal_config.max_steps.separate_with_commas()
        );
        let observer = &mut self.observer;
        let result = annealer.anneal(&mut model, &mut rng, |step, total| {
            if let Some(observer) = observer.as_mut() {
                observer(step, total)
            }
        })?;

        let floorplan = model.decode(&result.best_state)?;
        let report = RunReport {
            strategy,
            steps: result.steps,
            best_energy: result.best_energy,
            feasible: floorplan.fits(&self.limits),
            cancelled: result.cancelled,
        };
        Ok((result.best_state, floorplan, report))
    }
}

/// A candidate within the limits beats one outside of them, then the smaller area wins.
/// Ties go to the earliest candidate.
fn select(
    candidates: Vec<(Strategy, PackingState, Floorplan)>,
    limits: &SizeLimits,
) -> Option<(Strategy, PackingState, Floorplan)> {
    candidates
        .into_iter()
        .min_by_key(|(_, _, fp)| (!fp.fits(limits), OrderedFloat(fp.area)))
}
