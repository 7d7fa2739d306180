use crate::anneal::{AnnealModel, CancelToken};
use rand::Rng;
use std::time::Duration;

/// Integer walk on a parabola with its minimum at `target`
pub struct Parabola {
    pub x: i64,
    pub target: i64,
    /// Number of moves after which every move fails
    pub fail_after: Option<usize>,
    pub n_moves: usize,
    /// Token cancelled once this many moves have been made
    pub cancel_after: Option<(usize, CancelToken)>,
    pub move_delay: Option<Duration>,
    last_dx: i64,
}

impl Parabola {
    pub fn new(x: i64, target: i64) -> Self {
        Self {
            x,
            target,
            fail_after: None,
            n_moves: 0,
            cancel_after: None,
            move_delay: None,
            last_dx: 0,
        }
    }

    fn energy_at(&self, x: i64) -> f64 {
        ((x - self.target) * (x - self.target)) as f64
    }
}

impl AnnealModel for Parabola {
    type State = i64;
    type Error = String;

    fn state(&self) -> i64 {
        self.x
    }

    fn set_state(&mut self, state: i64) -> Result<(), String> {
        self.x = state;
        self.last_dx = 0;
        Ok(())
    }

    fn energy(&self) -> f64 {
        self.energy_at(self.x)
    }

    fn propose_move(&mut self, rng: &mut impl Rng) -> Result<f64, String> {
        if self.fail_after.is_some_and(|n| self.n_moves >= n) {
            return Err("no moves left".to_string());
        }
        self.n_moves += 1;
        if let Some((n, token)) = &self.cancel_after {
            if self.n_moves >= *n {
                token.cancel();
            }
        }
        if let Some(delay) = self.move_delay {
            std::thread::sleep(delay);
        }
        let old = self.energy();
        self.last_dx = match rng.random_bool(0.5) {
            true => 1,
            false => -1,
        };
        self.x += self.last_dx;
        Ok(self.energy() - old)
    }

    fn rollback(&mut self) {
        self.x -= self.last_dx;
        self.last_dx = 0;
    }
}
