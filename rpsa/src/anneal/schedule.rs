use crate::anneal::AnnealModel;
use log::trace;
use rand::Rng;
use std::fmt::{Display, Formatter};

/// Acceptance rate at the maximum temperature
pub const TARGET_ACCEPTANCE: f64 = 0.98;
/// Factor by which the temperature is scaled between calibration probes
pub const TEMPERATURE_STEP: f64 = 1.5;
/// Maximum number of probes in each phase of the calibration
pub const MAX_PROBE_ROUNDS: usize = 50;
/// Maximum number of moves sampled to find a non-zero energy delta
pub const MAX_INITIAL_GUESS_TRIES: usize = 1000;
/// Starting temperature when no move changes the energy
pub const FALLBACK_TEMPERATURE: f64 = 1.0;

/// Geometric cooling from `t_max` to `t_min` over `steps` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    pub t_max: f64,
    pub t_min: f64,
    pub steps: usize,
}

impl Schedule {
    pub fn new(t_max: f64, t_min: f64, steps: usize) -> Self {
        assert!(t_max > 0.0 && t_max.is_finite(), "invalid maximum temperature: {t_max}");
        assert!(t_min > 0.0, "invalid minimum temperature: {t_min}");
        Self {
            t_max,
            t_min: t_min.min(t_max),
            steps,
        }
    }

    /// Temperature at `step`
    pub fn temperature(&self, step: usize) -> f64 {
        if self.steps == 0 {
            return self.t_max;
        }
        let t_factor = -(self.t_max / self.t_min).ln();
        self.t_max * (t_factor * step as f64 / self.steps as f64).exp()
    }

    /// Derives a schedule from the energy landscape around the model's current state.
    ///
    /// Probes of `n_probe_steps` Metropolis steps are run at fixed temperatures.
    /// The maximum temperature is the one at which [`TARGET_ACCEPTANCE`] of the moves are accepted,
    /// the minimum temperature is the one at which no more moves improve the energy.
    /// `should_stop` is polled before every move, once it returns `true` calibration is abandoned
    /// and `None` is returned.
    /// The model's state is restored afterwards in both cases.
    pub fn calibrate<M: AnnealModel>(
        model: &mut M,
        rng: &mut impl Rng,
        n_probe_steps: usize,
        steps: usize,
        should_stop: impl Fn() -> bool,
    ) -> Result<Option<Self>, M::Error> {
        let initial_state = model.state();
        let schedule = search(model, rng, n_probe_steps.max(1), steps, &should_stop)?;
        model.set_state(initial_state)?;
        Ok(schedule)
    }
}

fn search<M: AnnealModel>(
    model: &mut M,
    rng: &mut impl Rng,
    n_probe_steps: usize,
    steps: usize,
    should_stop: &impl Fn() -> bool,
) -> Result<Option<Schedule>, M::Error> {
    let Some(mut t) = initial_temperature(model, rng, should_stop)? else {
        return Ok(None);
    };
    let Some((mut acceptance, mut improvement)) = probe(model, rng, t, n_probe_steps, should_stop)?
    else {
        return Ok(None);
    };

    for _ in 0..MAX_PROBE_ROUNDS {
        if acceptance <= TARGET_ACCEPTANCE {
            break;
        }
        t /= TEMPERATURE_STEP;
        match probe(model, rng, t, n_probe_steps, should_stop)? {
            Some(rates) => (acceptance, improvement) = rates,
            None => return Ok(None),
        }
    }
    for _ in 0..MAX_PROBE_ROUNDS {
        if acceptance >= TARGET_ACCEPTANCE {
            break;
        }
        t *= TEMPERATURE_STEP;
        match probe(model, rng, t, n_probe_steps, should_stop)? {
            Some(rates) => (acceptance, improvement) = rates,
            None => return Ok(None),
        }
    }
    let t_max = t;

    for _ in 0..MAX_PROBE_ROUNDS {
        if improvement <= 0.0 {
            break;
        }
        t /= TEMPERATURE_STEP;
        match probe(model, rng, t, n_probe_steps, should_stop)? {
            Some((_, i)) => improvement = i,
            None => return Ok(None),
        }
    }
    let t_min = t;

    Ok(Some(Schedule::new(t_max, t_min, steps)))
}

impl Display for Schedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "t_max: {:.3e}, t_min: {:.3e}, steps: {}",
            self.t_max, self.t_min, self.steps
        )
    }
}

/// Magnitude of the first non-zero energy delta, moves are rolled back.
fn initial_temperature<M: AnnealModel>(
    model: &mut M,
    rng: &mut impl Rng,
    should_stop: &impl Fn() -> bool,
) -> Result<Option<f64>, M::Error> {
    for _ in 0..MAX_INITIAL_GUESS_TRIES {
        if should_stop() {
            return Ok(None);
        }
        let delta = model.propose_move(rng)?;
        model.rollback();
        if delta != 0.0 && delta.is_finite() {
            return Ok(Some(delta.abs()));
        }
    }
    Ok(Some(FALLBACK_TEMPERATURE))
}

/// Runs `n_steps` Metropolis steps at temperature `t`.
/// Returns the fraction of accepted and of improving moves, `None` if interrupted.
fn probe<M: AnnealModel>(
    model: &mut M,
    rng: &mut impl Rng,
    t: f64,
    n_steps: usize,
    should_stop: &impl Fn() -> bool,
) -> Result<Option<(f64, f64)>, M::Error> {
    let mut accepts = 0;
    let mut improves = 0;
    for _ in 0..n_steps {
        if should_stop() {
            return Ok(None);
        }
        let delta = model.propose_move(rng)?;
        if metropolis_rejects(delta, t, rng) {
            model.rollback();
        } else {
            accepts += 1;
            if delta < 0.0 {
                improves += 1;
            }
        }
    }
    let (acceptance, improvement) = (
        accepts as f64 / n_steps as f64,
        improves as f64 / n_steps as f64,
    );
    trace!("[SA] probe at T={t:.3e}: acceptance {acceptance:.3}, improvement {improvement:.3}");
    Ok(Some((acceptance, improvement)))
}

/// Worsening moves are accepted with probability `exp(-delta / t)`
pub(crate) fn metropolis_rejects(delta: f64, t: f64, rng: &mut impl Rng) -> bool {
    delta > 0.0 && (-delta / t).exp() < rng.random::<f64>()
}
