//! The abstract audio output surface.
//!
//! This file defines the trait every output backend
//! implements. The trait `AudioBackend` is the ideal
//! abstract simplification of what this part of the
//! system should do: one device, one chunk-sized raw
//! mixing buffer, five operations.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	error::OpenError,
	spec::AudioSpec,
};

//---------------------------------------------------------------------------------------------------- AudioBackend Trait
/// An opened (or openable) audio output device.
///
/// The expected calling cycle, from a single producer thread:
///
/// 1. `open` once
/// 2. `wait` → `buffer` (fill in place) → `play`, repeatedly
/// 3. `close` once
///
/// # Invariants
/// 1. `wait` and `play` are allowed to block (sleep); this is
///    how flow control and busy-device retries are expressed.
/// 2. The slice from `buffer` is only yours between `wait`
///    and the next `play`; `play` is never re-entered while a
///    previous `play` of the same buffer is outstanding.
/// 3. After a fatal device error mid-playback, `buffer` and
///    `play` remain callable but writes are suppressed; call
///    `close` to tear down.
pub trait AudioBackend {
	/// Open the device, negotiating the closest hardware
	/// match to `spec`.
	///
	/// Returns the spec the hardware actually accepted; its
	/// `format` and `channels` may differ from the request.
	fn open(&mut self, spec: &AudioSpec) -> Result<AudioSpec, OpenError>;

	/// Block until the device has drained enough queued audio
	/// that another chunk stays under the latency ceiling.
	///
	/// Devices that cannot report their buffered duration
	/// never block here.
	fn wait(&mut self);

	/// The raw mixing buffer, to fill in place.
	///
	/// Pre-filled with silence on open. Empty when closed.
	fn buffer(&mut self) -> &mut [u8];

	/// Submit the mixing buffer's contents to the device.
	///
	/// Retries transient busy/interrupt conditions internally;
	/// a fatal error disables further writes instead of
	/// surfacing through this call.
	fn play(&mut self);

	/// Stop the device and release the mixing buffer.
	///
	/// Safe to call from any state, any number of times.
	fn close(&mut self);

	/// The negotiated spec, while open.
	fn spec(&self) -> Option<&AudioSpec>;
}
