//! Audio output backends.

mod constants;
mod flow;
mod sink;

mod backend;
pub use backend::{Backend,State};

mod output;
pub use output::AudioBackend;

//---------------------------------------------------------------------------------------------------- Backend aliases
/// A backend driving an OSS `/dev/dsp` character device.
#[cfg(all(unix, feature = "oss"))]
pub type Oss = Backend<crate::device::oss::OssDevice>;

/// A backend driving the no-hardware dummy device.
pub type Dummy = Backend<crate::device::dummy::DummyDevice>;

// Use OSS if:
// - it is compiled in
// - we are not under test (tests always drive the dummy)
cfg_if::cfg_if! {
	if #[cfg(test)] {
		/// The backend picked for this build.
		pub type DefaultBackend = Dummy;
	} else if #[cfg(all(unix, feature = "oss"))] {
		/// The backend picked for this build.
		pub type DefaultBackend = Oss;
	} else {
		/// The backend picked for this build.
		pub type DefaultBackend = Dummy;
	}
}
