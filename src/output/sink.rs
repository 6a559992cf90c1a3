//! The device write endpoint.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	device::{RawDevice,DeviceWriteError},
	error::WriteError,
	macros::{error2,trace2},
	output::constants::RETRY_DELAY,
};

//---------------------------------------------------------------------------------------------------- DeviceSink
/// Wraps the acquired device with blocking
/// write-with-retry semantics.
///
/// A fatal write error flips the sink to disabled; that is a
/// one-way transition, and a disabled sink swallows every
/// later submit so the producer can keep cycling until it
/// gets around to closing.
#[derive(Debug)]
pub(crate) struct DeviceSink<D: RawDevice> {
	device: D,
	enabled: bool,
}

impl<D: RawDevice> DeviceSink<D> {
	pub(crate) const fn new(device: D) -> Self {
		Self { device, enabled: true }
	}

	pub(crate) const fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub(crate) fn device_mut(&mut self) -> &mut D {
		&mut self.device
	}

	/// Write the whole of `buf` to the device.
	///
	/// Loops over partial writes, sleeps briefly on a busy
	/// device, retries immediately on an interrupted call.
	/// Only those two conditions re-enter the loop; any other
	/// failure disables the sink and returns the one fatal
	/// error this sink will ever surface.
	pub(crate) fn submit(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
		if !self.enabled {
			trace2!("DeviceSink - disabled, dropping {} bytes", buf.len());
			return Ok(0);
		}

		let mut written = 0;
		while written < buf.len() {
			match self.device.write(&buf[written..]) {
				Ok(n) => written += n,
				Err(DeviceWriteError::Busy) => {
					// Let a little CPU time go by.
					std::thread::sleep(RETRY_DELAY);
				},
				Err(DeviceWriteError::Interrupted) => {},
				Err(DeviceWriteError::Fatal(e)) => {
					error2!("DeviceSink - fatal write error, disabling output: {e}");
					self.enabled = false;
					return Err(e);
				},
			}
		}

		trace2!("DeviceSink - wrote {written} bytes of audio data");
		Ok(written)
	}

	/// Best-effort device stop, for the close path.
	pub(crate) fn stop(&mut self) {
		self.device.stop();
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::device::dummy::{DummyDevice,ScriptedWrite};
	use pretty_assertions::assert_eq;

	#[test]
	fn busy_device_retried_without_loss() {
		let device = DummyDevice::new()
			.with_write(ScriptedWrite::Busy)
			.with_write(ScriptedWrite::Busy);
		let mut sink = DeviceSink::new(device);

		let written = sink.submit(b"abcd").unwrap();

		assert_eq!(written, 4);
		// Two busy attempts, then the one that stuck.
		assert_eq!(sink.device_mut().write_calls(), 3);
		assert_eq!(sink.device_mut().written(), b"abcd".as_slice());
	}

	#[test]
	fn interrupted_write_retried_immediately() {
		let device = DummyDevice::new().with_write(ScriptedWrite::Interrupted);
		let mut sink = DeviceSink::new(device);

		assert_eq!(sink.submit(b"abcd").unwrap(), 4);
		assert_eq!(sink.device_mut().written(), b"abcd".as_slice());
	}

	#[test]
	fn partial_writes_accumulate() {
		let device = DummyDevice::new()
			.with_write(ScriptedWrite::Bytes(3))
			.with_write(ScriptedWrite::Bytes(1));
		let mut sink = DeviceSink::new(device);

		let written = sink.submit(b"abcde").unwrap();

		assert_eq!(written, 5);
		assert_eq!(sink.device_mut().write_calls(), 3);
		// No byte lost, none duplicated.
		assert_eq!(sink.device_mut().written(), b"abcde".as_slice());
	}

	#[test]
	fn fatal_error_disables_sink_once() {
		let device = DummyDevice::new().with_write(ScriptedWrite::Fatal);
		let mut sink = DeviceSink::new(device);

		// Surfaced exactly once...
		assert!(sink.submit(b"abcd").is_err());
		assert!(!sink.is_enabled());

		// ...then silence: no error, no device call.
		assert_eq!(sink.submit(b"abcd").unwrap(), 0);
		assert_eq!(sink.device_mut().write_calls(), 1);
		assert!(sink.device_mut().written().is_empty());
	}
}
