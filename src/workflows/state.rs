use std::sync::Arc;

use parking_lot::Mutex;

/// Lifecycle of one asynchronous user action. Exactly one variant is active per workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState<T, F> {
    Idle,
    InFlight,
    Succeeded(T),
    Failed(F),
}

impl<T, F> Default for WorkflowState<T, F> {
    fn default() -> Self {
        WorkflowState::Idle
    }
}

impl<T, F> WorkflowState<T, F> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, WorkflowState::InFlight)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, WorkflowState::Succeeded(_))
    }
}

/// Local guard that stopped a submission before it reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankText,
    BlankEmail,
    AlreadyInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The request ran and the workflow reached a terminal state.
    Settled,
    Skipped(SkipReason),
}

/// Holds a workflow in `InFlight` for the duration of one submission.
///
/// If the submitting future is dropped before `finish` (a timeout or `select!`
/// around it, an aborted task), the state falls back to `Idle` so later
/// submissions are not locked out.
pub(crate) struct InFlightGuard<T, F> {
    state: Arc<Mutex<WorkflowState<T, F>>>,
    settled: bool,
}

impl<T, F> InFlightGuard<T, F> {
    /// Enters `InFlight`, or returns `None` when a submission is already running.
    pub(crate) fn enter(state: &Arc<Mutex<WorkflowState<T, F>>>) -> Option<Self> {
        let mut current = state.lock();
        if current.is_in_flight() {
            return None;
        }
        *current = WorkflowState::InFlight;
        Some(Self {
            state: Arc::clone(state),
            settled: false,
        })
    }

    pub(crate) fn finish(mut self, next: WorkflowState<T, F>) {
        *self.state.lock() = next;
        self.settled = true;
    }
}

impl<T, F> Drop for InFlightGuard<T, F> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut current = self.state.lock();
        if current.is_in_flight() {
            tracing::debug!("Submission abandoned before completion, resetting to idle");
            *current = WorkflowState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = WorkflowState<u8, ()>;

    #[test]
    fn guard_refuses_a_second_entry() {
        let state = Arc::new(Mutex::new(State::Idle));
        let guard = InFlightGuard::enter(&state).unwrap();
        assert!(InFlightGuard::enter(&state).is_none());

        guard.finish(WorkflowState::Succeeded(7));
        assert_eq!(*state.lock(), WorkflowState::Succeeded(7));
        assert!(InFlightGuard::enter(&state).is_some());
    }

    #[test]
    fn dropped_guard_returns_to_idle() {
        let state = Arc::new(Mutex::new(State::Failed(())));
        drop(InFlightGuard::enter(&state).unwrap());
        assert_eq!(*state.lock(), WorkflowState::Idle);
    }
}
