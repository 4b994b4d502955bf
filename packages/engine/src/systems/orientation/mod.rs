//! Orientation Source - device tilt behind a permission gate
//!
//! `OrientationSource` owns the state (latest reading, last error, whether a
//! listener is attached). Everything host specific sits behind
//! `SensorPlatform`, implemented for the browser in `api::sensor`.

mod error;
mod platform;
mod source;

pub use error::OrientationError;
pub use platform::{PermissionState, ReadingSink, SensorPlatform};
pub use source::OrientationSource;
