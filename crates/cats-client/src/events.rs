//! Fetch lifecycle phases and the per-client listener registry.

use crate::error::CatsError;

/// Phases of a single cat list fetch, in the order they can fire.
///
/// Every fetch broadcasts `Start` first, then exactly one of `Success`
/// or `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchPhase {
    /// The request is about to be issued.
    Start,
    /// The response arrived and decoded into a cat list.
    Success,
    /// The request failed or the response could not be decoded.
    Error,
}

impl FetchPhase {
    /// Stable name for logs and diagnostics.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Start => "cats:start",
            Self::Success => "cats:success",
            Self::Error => "cats:error",
        }
    }
}

/// Boxed handler invoked when a fetch begins.
pub(crate) type StartHandler = Box<dyn Fn() + Send + Sync>;
/// Boxed handler invoked with the fetched cat names.
pub(crate) type SuccessHandler = Box<dyn Fn(&[String]) + Send + Sync>;
/// Boxed handler invoked with the fetch error.
pub(crate) type ErrorHandler = Box<dyn Fn(&CatsError) + Send + Sync>;

/// Listener registry with one slot per fetch phase.
///
/// Slots start empty and only allocate once the first handler for a
/// phase is registered. Broadcasts run synchronously on the calling
/// task, in registration order; a handler that panics aborts the
/// broadcast and surfaces the panic to the caller.
#[derive(Default)]
pub(crate) struct FetchListeners {
    start: Vec<StartHandler>,
    success: Vec<SuccessHandler>,
    error: Vec<ErrorHandler>,
}

impl FetchListeners {
    pub(crate) fn push_start(&mut self, handler: StartHandler) {
        self.start.push(handler);
    }

    pub(crate) fn push_success(&mut self, handler: SuccessHandler) {
        self.success.push(handler);
    }

    pub(crate) fn push_error(&mut self, handler: ErrorHandler) {
        self.error.push(handler);
    }

    /// Number of handlers registered for a phase.
    pub(crate) fn registered(&self, phase: FetchPhase) -> usize {
        match phase {
            FetchPhase::Start => self.start.len(),
            FetchPhase::Success => self.success.len(),
            FetchPhase::Error => self.error.len(),
        }
    }

    pub(crate) fn notify_start(&self) {
        tracing::debug!(
            event = FetchPhase::Start.event_name(),
            listeners = self.registered(FetchPhase::Start),
            "Broadcasting fetch start"
        );
        for handler in &self.start {
            handler();
        }
    }

    pub(crate) fn notify_success(&self, cats: &[String]) {
        tracing::debug!(
            event = FetchPhase::Success.event_name(),
            listeners = self.registered(FetchPhase::Success),
            count = cats.len(),
            "Broadcasting fetch success"
        );
        for handler in &self.success {
            handler(cats);
        }
    }

    pub(crate) fn notify_error(&self, error: &CatsError) {
        tracing::debug!(
            event = FetchPhase::Error.event_name(),
            listeners = self.registered(FetchPhase::Error),
            error = %error,
            "Broadcasting fetch error"
        );
        for handler in &self.error {
            handler(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Event names are logged and must not drift.
    #[test]
    fn test_event_names_are_stable() {
        assert_eq!(FetchPhase::Start.event_name(), "cats:start");
        assert_eq!(FetchPhase::Success.event_name(), "cats:success");
        assert_eq!(FetchPhase::Error.event_name(), "cats:error");
    }

    #[test]
    fn test_registry_starts_empty() {
        let listeners = FetchListeners::default();
        assert_eq!(listeners.registered(FetchPhase::Start), 0);
        assert_eq!(listeners.registered(FetchPhase::Success), 0);
        assert_eq!(listeners.registered(FetchPhase::Error), 0);
    }

    #[test]
    fn test_notify_on_empty_registry_is_a_no_op() {
        let listeners = FetchListeners::default();
        listeners.notify_start();
        listeners.notify_success(&["beefcake".to_string()]);
        listeners.notify_error(&CatsError::InvalidResponse {
            message: "test".to_string(),
        });
    }

    #[test]
    fn test_start_handlers_run_in_registration_order() {
        let calls: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = FetchListeners::default();
        for tag in 1..=3u8 {
            let calls = Arc::clone(&calls);
            listeners.push_start(Box::new(move || calls.lock().unwrap().push(tag)));
        }

        listeners.notify_start();

        assert_eq!(*calls.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(listeners.registered(FetchPhase::Start), 3);
    }

    #[test]
    fn test_success_handlers_see_the_cat_names() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let mut listeners = FetchListeners::default();
        listeners.push_success(Box::new(move |cats| {
            captured.lock().unwrap().extend(cats.iter().cloned());
        }));

        listeners.notify_success(&["beefcake".to_string(), "muscle-cat".to_string()]);

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["beefcake".to_string(), "muscle-cat".to_string()]
        );
    }

    #[test]
    fn test_error_handlers_see_the_failure() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let mut listeners = FetchListeners::default();
        listeners.push_error(Box::new(move |error| {
            captured.lock().unwrap().push(error.to_string());
        }));

        listeners.notify_error(&CatsError::NotFound {
            url: "http://localhost:3000/cats".to_string(),
        });

        let messages = seen.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("No cats found"));
    }

    #[test]
    fn test_phases_are_notified_independently() {
        let start_calls = Arc::new(Mutex::new(0u32));
        let error_calls = Arc::new(Mutex::new(0u32));
        let mut listeners = FetchListeners::default();
        {
            let start_calls = Arc::clone(&start_calls);
            listeners.push_start(Box::new(move || *start_calls.lock().unwrap() += 1));
        }
        {
            let error_calls = Arc::clone(&error_calls);
            listeners.push_error(Box::new(move |_| *error_calls.lock().unwrap() += 1));
        }

        listeners.notify_start();

        assert_eq!(*start_calls.lock().unwrap(), 1);
        assert_eq!(*error_calls.lock().unwrap(), 0);
    }
}
