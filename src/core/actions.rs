// Header actions.
//
// The dashboard never owns behavior for its buttons. Whoever mounts it
// supplies a `DashboardActions` impl; `TraceActions` only logs.

/// Handlers for the two header controls
pub trait DashboardActions {
    fn mark_all_read(&self);
    fn open_settings(&self);
}

/// One activation of a header control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    MarkAllRead,
    OpenSettings,
}

impl DashboardAction {
    /// Call the matching handler once
    pub fn dispatch(self, actions: &dyn DashboardActions) {
        match self {
            Self::MarkAllRead => actions.mark_all_read(),
            Self::OpenSettings => actions.open_settings(),
        }
    }
}

/// Default handlers: a debug trace and nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceActions;

impl DashboardActions for TraceActions {
    fn mark_all_read(&self) {
        log::debug!("Mark all read clicked");
    }

    fn open_settings(&self) {
        log::debug!("Open settings clicked");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;

    use super::DashboardActions;

    /// Counts handler calls
    #[derive(Default)]
    pub struct CountingActions {
        pub mark_all_read: Cell<u32>,
        pub open_settings: Cell<u32>,
    }

    impl DashboardActions for CountingActions {
        fn mark_all_read(&self) {
            self.mark_all_read.set(self.mark_all_read.get() + 1);
        }

        fn open_settings(&self) {
            self.open_settings.set(self.open_settings.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingActions;
    use super::*;

    #[test]
    fn test_mark_all_read_dispatches_once() {
        let actions = CountingActions::default();
        DashboardAction::MarkAllRead.dispatch(&actions);
        assert_eq!(actions.mark_all_read.get(), 1);
        assert_eq!(actions.open_settings.get(), 0);
    }

    #[test]
    fn test_open_settings_dispatches_once() {
        let actions = CountingActions::default();
        DashboardAction::OpenSettings.dispatch(&actions);
        assert_eq!(actions.open_settings.get(), 1);
        assert_eq!(actions.mark_all_read.get(), 0);
    }

    #[test]
    fn test_trace_actions_do_not_panic() {
        DashboardAction::MarkAllRead.dispatch(&TraceActions);
        DashboardAction::OpenSettings.dispatch(&TraceActions);
    }
}
