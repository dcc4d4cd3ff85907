//! Per-session re-entrancy guard.
//!
//! A session runs at most one generation at a time. A second request made
//! while the first is still running is rejected with
//! [`Error::ConcurrentInvocation`]; it is never queued.

use acal_core::errors::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// One logical user session.
#[derive(Debug, Default)]
pub struct Session {
    busy: AtomicBool,
}

/// Releases the session when dropped, including on panic.
#[derive(Debug)]
pub struct SessionGuard<'a> {
    session: &'a Session,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.session.busy.store(false, Ordering::Release);
    }
}

impl Session {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` while a generation is running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Mark the session busy until the returned guard is dropped.
    pub fn begin(&self) -> Result<SessionGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::ConcurrentInvocation)?;
        Ok(SessionGuard { session: self })
    }

    /// Run `f` while holding the session.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Result<T> {
        let _guard = self.begin()?;
        Ok(f())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn nested_run_is_rejected() {
        let session = Session::new();
        let inner = session.run(|| session.run(|| 1)).unwrap();
        assert_eq!(inner, Err(Error::ConcurrentInvocation));
        assert!(!session.is_busy());
        assert_eq!(session.run(|| 2), Ok(2));
    }

    #[test]
    fn released_after_panic() {
        let session = Session::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            session.run(|| panic!("generation failed")).ok();
        }));
        assert!(result.is_err());
        assert!(!session.is_busy());
    }

    #[test]
    fn second_thread_rejected_while_busy() {
        let session = Session::new();
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let shared = &session;
        thread::scope(|s| {
            s.spawn(move || {
                shared
                    .run(|| {
                        started_tx.send(()).unwrap();
                        release_rx.recv().unwrap();
                    })
                    .unwrap();
            });
            started_rx.recv().unwrap();
            assert_eq!(session.run(|| ()), Err(Error::ConcurrentInvocation));
            release_tx.send(()).unwrap();
        });
        assert!(!session.is_busy());
    }
}
