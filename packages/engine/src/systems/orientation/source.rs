use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::orientation::OrientationReading;

use super::error::OrientationError;
use super::platform::{PermissionState, ReadingSink, SensorPlatform};

#[derive(Default)]
pub(super) struct SourceState {
    pub(super) last_reading: Option<OrientationReading>,
    pub(super) last_error: Option<OrientationError>,
    pub(super) subscribed: bool,
}

/// Latest device orientation, once the user allowed it.
///
/// Failures never escape `request_access`: they are recorded in `error()` and
/// reported as `false`.
pub struct OrientationSource<P: SensorPlatform> {
    platform: P,
    state: Rc<RefCell<SourceState>>,
}

impl<P: SensorPlatform> OrientationSource<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            state: Rc::new(RefCell::new(SourceState::default())),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Latest reading; `None` before the first event or after revoking
    pub fn orientation(&self) -> Option<OrientationReading> {
        self.state.borrow().last_reading
    }

    pub fn error(&self) -> Option<OrientationError> {
        self.state.borrow().last_error.clone()
    }

    /// Listening for orientation events right now
    pub fn is_granted(&self) -> bool {
        self.state.borrow().subscribed
    }

    /// Ask for access and start listening. Resolves `true` once listening.
    ///
    /// Already listening: resolves `true` without prompting again.
    pub async fn request_access(&self) -> bool {
        if self.is_granted() {
            return true;
        }

        if !self.platform.is_supported() {
            self.fail(OrientationError::UnsupportedPlatform);
            return false;
        }

        if self.platform.requires_permission() {
            match self.platform.request_permission().await {
                Ok(PermissionState::Granted) => {}
                Ok(PermissionState::Denied) => {
                    self.fail(OrientationError::PermissionDenied);
                    return false;
                }
                Err(err) => {
                    self.fail(err);
                    return false;
                }
            }
        }

        // Another request may have finished while this one awaited the prompt.
        if self.is_granted() {
            return true;
        }

        let sink = ReadingSink::new(Rc::clone(&self.state));
        if let Err(err) = self.platform.subscribe(sink) {
            self.fail(err);
            return false;
        }

        let mut state = self.state.borrow_mut();
        state.subscribed = true;
        state.last_error = None;
        true
    }

    /// Stop listening and forget the last reading. Safe to call repeatedly.
    pub fn revoke_access(&self) {
        let was_subscribed = {
            let mut state = self.state.borrow_mut();
            let was = state.subscribed;
            state.subscribed = false;
            state.last_reading = None;
            was
        };
        if was_subscribed {
            self.platform.unsubscribe();
        }
    }

    fn fail(&self, err: OrientationError) {
        self.state.borrow_mut().last_error = Some(err);
    }
}
