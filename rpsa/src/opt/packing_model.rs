use crate::anneal::AnnealModel;
use rand::Rng;
use rectpack::entities::{Floorplan, RPInstance, SizeLimits};
use rectpack::seq_pair::decode;
use rectpack::util::assertions;
use rectpack::{RPError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of perturbations the hard strategy tries before giving up on a move
pub const HARD_RETRY_LIMIT: usize = 1000;

/// How states violating the size limits are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Infeasible states are allowed, but penalized
    Soft,
    /// Infeasible states are never visited
    Hard,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Soft => write!(f, "soft"),
            Strategy::Hard => write!(f, "hard"),
        }
    }
}

/// Search state: a sequence-pair and a rotation flag per rectangle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingState {
    pub a: Vec<usize>,
    pub b: Vec<usize>,
    pub rotations: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Seq {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Move {
    /// Sequence and positions swapped
    swap: Option<(Seq, usize, usize)>,
    /// Rectangle whose rotation flag was incremented
    rotate: Option<usize>,
}

/// Binds the rectangle packing problem to the annealing engine.
///
/// The energy of a state is the area of its bounding box.
/// States violating the size limits get `max_possible_area` added on top,
/// which ranks them behind every feasible state.
pub struct PackingModel<'a> {
    instance: &'a RPInstance,
    limits: SizeLimits,
    strategy: Strategy,
    max_possible_area: f64,
    state: PackingState,
    energy: f64,
    /// Last applied move and the energy before it
    last_move: Option<(Move, f64)>,
}

impl<'a> PackingModel<'a> {
    pub fn new(
        instance: &'a RPInstance,
        limits: SizeLimits,
        strategy: Strategy,
        state: PackingState,
    ) -> Result<Self> {
        let mut model = Self {
            instance,
            limits,
            strategy,
            max_possible_area: instance.max_possible_area(),
            state,
            energy: 0.0,
            last_move: None,
        };
        model.energy = model.evaluate()?.0;
        Ok(model)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    pub fn current(&self) -> &PackingState {
        &self.state
    }

    pub fn decode(&self, state: &PackingState) -> Result<Floorplan> {
        decode(&state.a, &state.b, self.instance, Some(&state.rotations))
    }

    /// Energy of a floorplan under the size limits, and whether it respects them
    pub fn energy_of(&self, floorplan: &Floorplan) -> (f64, bool) {
        match floorplan.fits(&self.limits) {
            true => (floorplan.area, true),
            false => (self.max_possible_area + floorplan.area, false),
        }
    }

    fn evaluate(&self) -> Result<(f64, bool)> {
        let floorplan = self.decode(&self.state)?;
        Ok(self.energy_of(&floorplan))
    }

    fn random_move(&self, rng: &mut impl Rng) -> Option<Move> {
        let n = self.instance.n();
        if n == 0 {
            return None;
        }
        let (i, swap) = match n {
            1 => (0, None),
            _ => {
                let i = rng.random_range(0..n);
                let mut j = rng.random_range(0..n - 1);
                if j >= i {
                    j += 1;
                }
                let seq = match rng.random_bool(0.5) {
                    true => Seq::A,
                    false => Seq::B,
                };
                (i, Some((seq, i, j)))
            }
        };
        let rotate = match rng.random_bool(0.5) && self.instance.rectangle(i).rotatable {
            true => Some(i),
            false => None,
        };
        Some(Move { swap, rotate })
    }

    fn seq_mut(&mut self, seq: Seq) -> &mut Vec<usize> {
        match seq {
            Seq::A => &mut self.state.a,
            Seq::B => &mut self.state.b,
        }
    }

    fn apply(&mut self, mv: Move) {
        if let Some((seq, i, j)) = mv.swap {
            self.seq_mut(seq).swap(i, j);
        }
        if let Some(id) = mv.rotate {
            self.state.rotations[id] += 1;
        }
    }

    fn revert(&mut self, mv: Move) {
        if let Some(id) = mv.rotate {
            self.state.rotations[id] -= 1;
        }
        if let Some((seq, i, j)) = mv.swap {
            self.seq_mut(seq).swap(i, j);
        }
    }
}

impl AnnealModel for PackingModel<'_> {
    type State = PackingState;
    type Error = RPError;

    fn state(&self) -> PackingState {
        self.state.clone()
    }

    fn set_state(&mut self, state: PackingState) -> Result<()> {
        self.state = state;
        self.last_move = None;
        self.energy = self.evaluate()?.0;
        Ok(())
    }

    fn energy(&self) -> f64 {
        self.energy
    }

    fn propose_move(&mut self, rng: &mut impl Rng) -> Result<f64> {
        let old_energy = self.energy;
        let attempts = match self.strategy {
            Strategy::Soft => 1,
            Strategy::Hard => HARD_RETRY_LIMIT,
        };

        for _ in 0..attempts {
            let Some(mv) = self.random_move(rng) else {
                self.last_move = None;
                return Ok(0.0);
            };
            self.apply(mv);
            let (energy, feasible) = self.evaluate()?;
            if feasible || self.strategy == Strategy::Soft {
                self.energy = energy;
                self.last_move = Some((mv, old_energy));
                return Ok(energy - old_energy);
            }
            // retry from the pre-move state
            self.revert(mv);
        }

        self.last_move = None;
        Err(RPError::InfeasibleNeighborhood { attempts })
    }

    fn rollback(&mut self) {
        if let Some((mv, energy)) = self.last_move.take() {
            self.revert(mv);
            self.energy = energy;
        }
        debug_assert!(assertions::is_permutation(&self.state.a));
        debug_assert!(assertions::is_permutation(&self.state.b));
    }
}
