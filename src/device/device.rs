//! The device abstraction implemented by every hardware adapter.

//---------------------------------------------------------------------------------------------------- use
use crate::error::{OpenError,RejectReason,WriteError};
use crate::format::SampleFormat;

//---------------------------------------------------------------------------------------------------- RawDevice
/// One opened hardware/device output channel.
///
/// Implementors wrap whatever the platform audio subsystem
/// hands out (a character device, an audio object, ...) and
/// translate its raw return codes into the shared error set
/// at this boundary.
///
/// # Invariants
/// 1. `init` may be called repeatedly during negotiation,
///    once per candidate encoding, until it accepts one.
/// 2. `write` may perform a partial write; the sink loops.
/// 3. `stop` is close-path only and must not panic or block
///    on a dead device.
pub trait RawDevice: Sized {
	/// Open the underlying device channel.
	fn acquire() -> Result<Self, OpenError>;

	/// Does the device open at all?
	///
	/// Opens and immediately drops the channel.
	fn available() -> bool {
		Self::acquire().is_ok()
	}

	/// Offer the device one candidate encoding plus stream parameters.
	///
	/// `Unsupported` sends negotiation to the next candidate;
	/// a structured rejection aborts it.
	fn init(&mut self, request: &InitRequest) -> Result<(), InitError>;

	/// Fire-and-forget side configuration (volume, output routing).
	///
	/// Failures are logged internally, never returned.
	fn configure(&mut self) {}

	/// Write raw audio bytes. Returns how many were written,
	/// which may be fewer than offered.
	fn write(&mut self, buf: &[u8]) -> Result<usize, DeviceWriteError>;

	/// How much already-submitted audio remains unplayed, in
	/// milliseconds. `None` if the device cannot report it —
	/// flow control then never waits on this device.
	fn buffered_ms(&mut self) -> Option<u64>;

	/// Tell the device to start consuming writes.
	fn start(&mut self) -> Result<(), OpenError>;

	/// Tell the device to stop. Best-effort; close path only.
	fn stop(&mut self);
}

//---------------------------------------------------------------------------------------------------- InitRequest
/// Stream parameters offered to a device during negotiation.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub struct InitRequest {
	/// The candidate sample encoding.
	pub format: SampleFormat,
	/// Sample rate in Hz.
	pub rate: u32,
	/// Channel count, already collapsed to 1 or 2.
	pub channels: u8,
	/// Block size hint, in bytes, for devices that want one.
	///
	/// Sized at sample bits times channel count, the sizing
	/// observed to keep CPU usage and stutter lowest.
	pub block_size: u32,
}

//---------------------------------------------------------------------------------------------------- InitError
/// Why a device refused an [`InitRequest`].
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum InitError {
	/// The candidate encoding has no native mapping on this
	/// device; negotiation moves on to the next candidate.
	Unsupported,
	/// The device understood the request and refused it;
	/// negotiation aborts and the open fails.
	Rejected(RejectReason),
}

//---------------------------------------------------------------------------------------------------- DeviceWriteError
/// A failed device write, classified for the retry loop.
#[derive(Debug)]
pub enum DeviceWriteError {
	/// Device temporarily busy; retried after a short sleep.
	Busy,
	/// Interrupted by a signal; retried immediately.
	Interrupted,
	/// Anything else; the sink disables itself.
	Fatal(WriteError),
}
