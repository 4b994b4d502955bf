use thiserror::Error;

/// Why orientation access is unavailable
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrientationError {
    #[error("Device orientation event is not supported by your browser")]
    UnsupportedPlatform,
    #[error("Request to access the device orientation was rejected")]
    PermissionDenied,
    #[error("Device orientation permission request failed: {0}")]
    PermissionRequestFailed(String),
    #[error("Could not listen for device orientation events: {0}")]
    SubscribeFailed(String),
}
