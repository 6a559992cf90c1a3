//! Hardware audio devices.

mod device;
pub use device::{RawDevice,InitRequest,InitError,DeviceWriteError};

pub mod dummy;

#[cfg(all(unix, feature = "oss"))]
pub mod oss;
