// src/timeline.rs
use crate::core::{PlannerResult, PlanetSnapshot, WorkItemId};
use crate::systems::advance;

/// An ordered history of snapshots such that `snapshots[i].current_turn ==
/// i`, plus the turn the caller is currently viewing. The monotonic
/// work-item id counter lives here rather than on `PlanetSnapshot`: only
/// commands mint new ids, never `advance`, which keeps `advance` a pure
/// function of its input snapshot.
#[derive(Debug, Clone)]
pub struct Timeline {
    snapshots: Vec<PlanetSnapshot>,
    view_index: usize,
    next_work_item_id: WorkItemId,
}

impl Timeline {
    /// Starts a fresh timeline with `state` as turn 0.
    pub fn new(state: PlanetSnapshot) -> Timeline {
        Timeline {
            snapshots: vec![state],
            view_index: 0,
            next_work_item_id: 1,
        }
    }

    pub fn get_state_at(&self, t: usize) -> Option<&PlanetSnapshot> {
        self.snapshots.get(t)
    }

    pub fn latest_turn(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub fn view_index(&self) -> usize {
        self.view_index
    }

    pub fn current_view(&self) -> &PlanetSnapshot {
        &self.snapshots[self.view_index]
    }

    /// Updates `viewIndex`, clamped to `[0, N-1]`.
    pub fn set_view(&mut self, t: usize) {
        self.view_index = t.min(self.snapshots.len() - 1);
    }

    /// Mints a fresh work-item id, unique for the lifetime of this timeline.
    pub fn next_id(&mut self) -> WorkItemId {
        let id = self.next_work_item_id;
        self.next_work_item_id += 1;
        id
    }

    /// While the last snapshot's turn is below the target, clones the tail
    /// and runs `advance`, appending the result. Deterministic: calling
    /// this twice with the same `k` from the same state yields identical
    /// snapshots.
    pub fn simulate_turns(&mut self, k: usize) -> PlannerResult<()> {
        let target = self.latest_turn() + k;
        while self.latest_turn() < target {
            let tail = self.snapshots.last().expect("timeline is never empty").clone();
            let next = advance(tail)?;
            self.snapshots.push(next);
        }
        Ok(())
    }

    /// Applies `f` in place to `snapshots[t]`, then truncates the list to
    /// length `t+1` — discarding every future snapshot. The caller is
    /// responsible for calling `simulate_turns` afterward to restore the
    /// view range. If `viewIndex > t`, it is reset to `t`.
    pub fn mutate_at<F>(&mut self, t: usize, f: F)
    where
        F: FnOnce(&mut PlanetSnapshot),
    {
        debug_assert!(t < self.snapshots.len());
        f(&mut self.snapshots[t]);
        self.snapshots.truncate(t + 1);
        if self.view_index > t {
            self.view_index = t;
        }
    }

    /// Replaces the timeline with a single snapshot at turn 0.
    pub fn reset(&mut self, state: PlanetSnapshot) {
        self.snapshots = vec![state];
        self.view_index = 0;
        self.next_work_item_id = 1;
    }
}
