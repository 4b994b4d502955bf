use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::domain::orientation::OrientationReading;

use super::error::OrientationError;
use super::source::SourceState;

/// Answer of a permission prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

/// Where the platform delivers readings.
///
/// Writes only land while the owning source is subscribed, so a callback
/// that fires after `revoke_access` cannot resurrect a reading.
#[derive(Clone)]
pub struct ReadingSink {
    state: Rc<RefCell<SourceState>>,
}

impl ReadingSink {
    pub(super) fn new(state: Rc<RefCell<SourceState>>) -> Self {
        Self { state }
    }

    pub fn push(&self, reading: OrientationReading) {
        let mut state = self.state.borrow_mut();
        if state.subscribed {
            state.last_reading = Some(reading);
        }
    }
}

/// Host capabilities needed by `OrientationSource`
pub trait SensorPlatform {
    /// The orientation event exists at all
    fn is_supported(&self) -> bool;

    /// The platform wants an explicit prompt before delivering events
    fn requires_permission(&self) -> bool;

    fn request_permission(&self) -> LocalBoxFuture<'static, Result<PermissionState, OrientationError>>;

    /// Start delivering readings to `sink`. Called at most once between unsubscribes.
    fn subscribe(&self, sink: ReadingSink) -> Result<(), OrientationError>;

    fn unsubscribe(&self);
}
