//! Blocking synchronization of the asynchronous engine handshake.
//!
//! Engine setup is two asynchronous phases: environment creation, then
//! controller creation. Each completion callback arrives as an ordinary
//! native message, so a caller that simply waits would deadlock the very
//! mechanism that delivers the signal. The synchronizer instead alternates
//! between checking the completion slot and pumping exactly one pending
//! native message until the slot fills. That is cooperative suspension
//! on the calling thread: no busy wait and no second thread.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, HandshakePhase};

type Slot<T> = Rc<RefCell<Option<Result<T, i32>>>>;

/// Completion side of one handshake phase. The paired [`Signal`] is moved
/// into the native completion callback.
pub struct Completion<T> {
    slot: Slot<T>,
    phase: HandshakePhase,
}

/// Filled by the completion callback with either the created handle or the
/// failing native status code.
pub struct Signal<T> {
    slot: Slot<T>,
}

impl<T> Signal<T> {
    pub fn complete(&self, outcome: Result<T, i32>) {
        *self.slot.borrow_mut() = Some(outcome);
    }
}

impl<T> Completion<T> {
    pub fn new(phase: HandshakePhase) -> (Self, Signal<T>) {
        let slot: Slot<T> = Rc::new(RefCell::new(None));
        (
            Self {
                slot: Rc::clone(&slot),
                phase,
            },
            Signal { slot },
        )
    }

    /// Pump one native message at a time until the signal fires.
    ///
    /// `pump_one` retrieves and dispatches a single pending native message,
    /// returning `false` when the message source has been closed. A closed
    /// source before the signal is observed terminates the wait with
    /// [`Error::MessageSourceClosed`] rather than hanging; a failing status
    /// surfaces as [`Error::Handshake`] with the originating code.
    pub fn wait(self, mut pump_one: impl FnMut() -> bool) -> Result<T, Error> {
        loop {
            if let Some(outcome) = self.slot.borrow_mut().take() {
                return outcome.map_err(|status| Error::Handshake {
                    phase: self.phase,
                    status,
                });
            }
            if !pump_one() {
                return Err(Error::MessageSourceClosed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_before_wait_returns_immediately() {
        let (completion, signal) = Completion::new(HandshakePhase::Environment);
        signal.complete(Ok(7u32));
        let value = completion.wait(|| panic!("no pump needed")).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_pumps_until_signal_observed() {
        let (completion, signal) = Completion::new(HandshakePhase::Environment);
        let mut pumped = 0;
        let value = completion
            .wait(|| {
                pumped += 1;
                if pumped == 3 {
                    // The third dispatched message carries the callback.
                    signal.complete(Ok("ready"));
                }
                true
            })
            .unwrap();
        assert_eq!(value, "ready");
        assert_eq!(pumped, 3);
    }

    #[test]
    fn test_closed_source_terminates_instead_of_hanging() {
        let (completion, _signal) = Completion::<()>::new(HandshakePhase::Controller);
        let err = completion.wait(|| false).unwrap_err();
        assert!(matches!(err, Error::MessageSourceClosed));
    }

    #[test]
    fn test_failing_status_surfaces_phase_and_code() {
        let (completion, signal) = Completion::<()>::new(HandshakePhase::Environment);
        signal.complete(Err(-2147024894)); // 0x80070002
        match completion.wait(|| true).unwrap_err() {
            Error::Handshake { phase, status } => {
                assert_eq!(phase, HandshakePhase::Environment);
                assert_eq!(status, -2147024894);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_phase_one_failure_prevents_phase_two() {
        // Construction sequences the phases: a failing first wait must
        // return before the second request is ever issued.
        let (env, env_signal) = Completion::<()>::new(HandshakePhase::Environment);
        env_signal.complete(Err(-1));
        let mut phase_two_issued = false;
        let result = env.wait(|| true).and_then(|_| {
            phase_two_issued = true;
            let (ctrl, ctrl_signal) = Completion::new(HandshakePhase::Controller);
            ctrl_signal.complete(Ok(()));
            ctrl.wait(|| true)
        });
        assert!(result.is_err());
        assert!(!phase_two_issued);
    }
}
