// src/systems/advance.rs
use super::{growth, outputs, scheduler};
use crate::core::{PlannerError, PlannerResult, PlanetSnapshot};

/// The pure turn advancer (spec §4.5): executes activation, progress,
/// completion, outputs, growth, and the turn counter in exactly this
/// order, then sweeps invariants. `state` is never mutated in place — the
/// caller owns cloning (see `Timeline::simulate_turns`).
pub fn advance(mut state: PlanetSnapshot) -> PlannerResult<PlanetSnapshot> {
    let new_turn = state.current_turn + 1;

    let activated_this_turn = scheduler::activate_phase(&mut state, new_turn);
    scheduler::progress_phase(&mut state, &activated_this_turn);
    scheduler::completion_phase(&mut state);

    let deltas = outputs::net_outputs(&state);
    state.stocks.add_assign(&deltas);
    if state.stocks.energy < 0.0 {
        state.stocks.energy = 0.0;
    }

    let growth = growth::projected_growth(&state);
    state.population.workers_total += growth;
    state.population.workers_idle += growth;

    state.current_turn = new_turn;

    if let Err(PlannerError::Invariant(msg)) = state.check_invariants() {
        eprintln!("invariant sweep failed at turn {}: {}", state.current_turn, msg);
        return Err(PlannerError::Invariant(msg));
    }

    Ok(state)
}
