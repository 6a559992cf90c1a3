//! Driver registration.
//!
//! A host application that can output through more than one
//! backend picks among them here: each compiled-in backend
//! registers a tag name, a human-readable label, a cheap
//! availability probe and a constructor. The table is fixed
//! at compile time and resolved by name at startup.

//---------------------------------------------------------------------------------------------------- use
use crate::device::RawDevice;
use crate::output::AudioBackend;

//---------------------------------------------------------------------------------------------------- Driver
/// One registered output backend.
#[derive(Copy, Clone)]
pub struct Driver {
	/// Short tag the host selects this backend by, e.g. `oss`.
	pub name: &'static str,
	/// Human-readable label for listings.
	pub label: &'static str,
	/// Does the device open at all right now?
	///
	/// Opens and immediately closes the device channel.
	pub available: fn() -> bool,
	/// Construct an unopened backend instance.
	pub construct: fn() -> Box<dyn AudioBackend>,
}

impl std::fmt::Debug for Driver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Driver")
			.field("name", &self.name)
			.field("label", &self.label)
			.finish_non_exhaustive()
	}
}

//---------------------------------------------------------------------------------------------------- Registry
#[cfg(all(unix, feature = "oss"))]
const OSS: Driver = Driver {
	name: "oss",
	label: "OSS /dev/dsp audio",
	available: || crate::device::oss::OssDevice::available(),
	construct: || Box::new(crate::output::Oss::new()),
};

#[cfg(any(test, feature = "dummy"))]
const DUMMY: Driver = Driver {
	name: "dummy",
	label: "No-hardware dummy audio",
	available: || crate::device::dummy::DummyDevice::available(),
	construct: || Box::new(crate::output::Dummy::new()),
};

/// Every backend compiled into this build, in preference order.
pub const ALL: &[Driver] = &[
	#[cfg(all(unix, feature = "oss"))]
	OSS,
	#[cfg(any(test, feature = "dummy"))]
	DUMMY,
];

/// Look a driver up by its tag name.
pub fn find(name: &str) -> Option<&'static Driver> {
	ALL.iter().find(|driver| driver.name == name)
}
