use std::fmt;

use super::unload::{UNSAVED_CHANGES_MESSAGE, UnloadEvent};

/// Anything that can report unsaved work.
pub trait DirtySource {
    fn is_dirty(&self) -> bool;
}

impl DirtySource for bool {
    fn is_dirty(&self) -> bool {
        *self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome<R> {
    /// Nothing to lose; the caller commits the transition now.
    Proceed(R),
    /// The transition is held until [`NavigationGuard::discard`] or
    /// [`NavigationGuard::cancel`] resolves it.
    Held,
}

/// Gates route transitions and environment unload on unsaved work.
///
/// A held transition keeps its target; the current route is unchanged until
/// `discard` hands the target back. `cancel` and `discard` are no-ops when
/// nothing is held.
#[derive(Debug)]
pub struct NavigationGuard<R> {
    pending: Option<R>,
}

impl<R> Default for NavigationGuard<R> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<R: fmt::Debug> NavigationGuard<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_transition<S>(&mut self, source: &S, target: R) -> TransitionOutcome<R>
    where
        S: DirtySource + ?Sized,
    {
        if !source.is_dirty() {
            if let Some(stale) = self.pending.take() {
                tracing::debug!(route = ?stale, "dropping held transition, document is clean");
            }
            return TransitionOutcome::Proceed(target);
        }

        tracing::debug!(route = ?target, "holding transition, document has unsaved changes");
        if let Some(previous) = self.pending.replace(target) {
            tracing::debug!(route = ?previous, "superseded held transition");
        }
        TransitionOutcome::Held
    }

    /// True while a held transition waits for the user.
    pub fn is_prompting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_target(&self) -> Option<&R> {
        self.pending.as_ref()
    }

    /// Drops the held transition and returns its target so the caller can
    /// release whatever it prepared for it.
    ///
    /// The returned target is the reset handle: a host that armed a reset
    /// hook for the transition must release it when it receives `Some`.
    pub fn cancel(&mut self) -> Option<R> {
        let abandoned = self.pending.take();
        if let Some(target) = &abandoned {
            tracing::debug!(route = ?target, "held transition cancelled");
        }
        abandoned
    }

    /// Releases the held transition. The caller must commit the returned
    /// target; a second call returns `None`.
    pub fn discard(&mut self) -> Option<R> {
        let target = self.pending.take();
        if let Some(target) = &target {
            tracing::debug!(route = ?target, "discarding changes and resuming transition");
        }
        target
    }

    /// Checks `source` at the moment of unload. When dirty, marks `event` so
    /// the host shows its own confirmation; the prompt state is untouched.
    pub fn on_unload<S>(&self, source: &S, event: &mut UnloadEvent) -> bool
    where
        S: DirtySource + ?Sized,
    {
        if !source.is_dirty() {
            return false;
        }
        tracing::info!("unload intercepted, document has unsaved changes");
        event.prevent_default();
        event.set_return_value(UNSAVED_CHANGES_MESSAGE);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::guard::UnloadEvent;

    use super::{DirtySource, NavigationGuard, TransitionOutcome};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Route {
        Home,
        Songs,
    }

    struct Editor {
        dirty: Cell<bool>,
        checks: Cell<usize>,
    }

    impl Editor {
        fn new(dirty: bool) -> Self {
            Self {
                dirty: Cell::new(dirty),
                checks: Cell::new(0),
            }
        }
    }

    impl DirtySource for Editor {
        fn is_dirty(&self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.dirty.get()
        }
    }

    #[test]
    fn clean_transitions_proceed_immediately() {
        let mut guard = NavigationGuard::new();
        assert_eq!(
            guard.request_transition(&false, Route::Songs),
            TransitionOutcome::Proceed(Route::Songs)
        );
        assert!(!guard.is_prompting());
    }

    #[test]
    fn dirty_transition_is_held_until_discard() {
        let mut guard = NavigationGuard::new();
        assert_eq!(
            guard.request_transition(&true, Route::Songs),
            TransitionOutcome::Held
        );
        assert!(guard.is_prompting());
        assert_eq!(guard.pending_target(), Some(&Route::Songs));

        assert_eq!(guard.discard(), Some(Route::Songs));
        assert!(!guard.is_prompting());
    }

    #[test]
    fn discard_twice_resumes_exactly_once() {
        let mut guard = NavigationGuard::new();
        guard.request_transition(&true, Route::Home);

        let mut navigations = 0;
        for _ in 0..2 {
            if guard.discard().is_some() {
                navigations += 1;
            }
        }
        assert_eq!(navigations, 1);
    }

    #[test]
    fn cancel_drops_transition_and_is_idempotent() {
        let mut guard = NavigationGuard::new();
        guard.request_transition(&true, Route::Songs);

        assert_eq!(guard.cancel(), Some(Route::Songs));
        assert!(!guard.is_prompting());
        assert_eq!(guard.cancel(), None);
        assert_eq!(guard.discard(), None);
    }

    #[test]
    fn newer_request_supersedes_held_transition() {
        let mut guard = NavigationGuard::new();
        guard.request_transition(&true, Route::Songs);
        guard.request_transition(&true, Route::Home);

        assert_eq!(guard.discard(), Some(Route::Home));
        assert_eq!(guard.discard(), None);
    }

    #[test]
    fn clean_request_clears_stale_held_transition() {
        let mut guard = NavigationGuard::new();
        let editor = Editor::new(true);
        guard.request_transition(&editor, Route::Songs);

        editor.dirty.set(false);
        assert_eq!(
            guard.request_transition(&editor, Route::Home),
            TransitionOutcome::Proceed(Route::Home)
        );
        assert!(!guard.is_prompting());
    }

    #[test]
    fn unload_checks_dirty_state_at_unload_time() {
        let guard: NavigationGuard<Route> = NavigationGuard::new();
        let editor = Editor::new(false);

        let mut event = UnloadEvent::new();
        assert!(!guard.on_unload(&editor, &mut event));
        assert!(!event.default_prevented());

        editor.dirty.set(true);
        let mut event = UnloadEvent::new();
        assert!(guard.on_unload(&editor, &mut event));
        assert!(event.default_prevented());
        assert!(event.return_value().is_some());
        assert_eq!(editor.checks.get(), 2);
        assert!(!guard.is_prompting());
    }
}
