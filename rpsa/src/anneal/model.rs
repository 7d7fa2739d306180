use rand::Rng;

/// State, move and energy of an optimization problem, as seen by the [`Annealer`](crate::anneal::Annealer).
///
/// The model owns its current state and mutates it in place.
/// Every call to [`propose_move`](AnnealModel::propose_move) can be undone by a single
/// call to [`rollback`](AnnealModel::rollback).
pub trait AnnealModel {
    type State: Clone;
    type Error;

    /// Snapshot of the current state
    fn state(&self) -> Self::State;

    /// Replaces the current state, discards any pending move
    fn set_state(&mut self, state: Self::State) -> Result<(), Self::Error>;

    /// Energy of the current state, lower is better
    fn energy(&self) -> f64;

    /// Perturbs the current state and returns the resulting energy delta (new - old).
    /// An error is terminal for the run.
    fn propose_move(&mut self, rng: &mut impl Rng) -> Result<f64, Self::Error>;

    /// Undoes the last proposed move
    fn rollback(&mut self);
}
