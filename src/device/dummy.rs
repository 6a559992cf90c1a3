//! Dummy audio device.
//!
//! Behaves like a real output device but connects to
//! nothing: every write is swallowed, negotiation accepts
//! whatever it is configured to accept.
//!
//! Functionally it should act the same as a hardware
//! adapter, which makes it the device used for testing and
//! the fallback when no hardware backend is compiled in.

//---------------------------------------------------------------------------------------------------- use
use std::collections::VecDeque;

use crate::{
	device::{RawDevice,InitRequest,InitError,DeviceWriteError},
	error::{OpenError,RejectReason,WriteError},
	format::SampleFormat,
	macros::trace2,
};

//---------------------------------------------------------------------------------------------------- ScriptedWrite
/// What the fake hardware does on one `write` call.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum ScriptedWrite {
	/// Accept at most this many bytes (a partial write).
	Bytes(usize),
	/// Report the device as temporarily busy.
	Busy,
	/// Report an interrupted call.
	Interrupted,
	/// Fail fatally.
	Fatal,
}

//---------------------------------------------------------------------------------------------------- DummyDevice
/// A scriptable in-memory stand-in for an output device.
///
/// Fresh off [`RawDevice::acquire`] it accepts every
/// encoding, swallows every write whole and reports no
/// buffered audio. The builder methods below bend each of
/// those behaviors.
#[derive(Debug, Default)]
pub struct DummyDevice {
	accepted: Option<Vec<SampleFormat>>,
	rejection: Option<RejectReason>,
	write_script: VecDeque<ScriptedWrite>,
	buffered_script: VecDeque<u64>,
	fail_start: bool,

	written: Vec<u8>,
	init_calls: usize,
	write_calls: usize,
	polls: usize,
	started: bool,
	configured: bool,
}

impl DummyDevice {
	/// A device that accepts everything and swallows everything.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restrict the encodings the fake hardware accepts.
	#[must_use]
	pub fn with_accepted(mut self, formats: &[SampleFormat]) -> Self {
		self.accepted = Some(formats.to_vec());
		self
	}

	/// Make every `init` call fail with a structured rejection.
	#[must_use]
	pub fn with_rejection(mut self, reason: RejectReason) -> Self {
		self.rejection = Some(reason);
		self
	}

	/// Queue an outcome for an upcoming `write` call.
	///
	/// Once the queue runs dry, writes are swallowed whole.
	#[must_use]
	pub fn with_write(mut self, outcome: ScriptedWrite) -> Self {
		self.write_script.push_back(outcome);
		self
	}

	/// Queue a buffered-duration report for an upcoming poll.
	///
	/// Once the queue runs dry, the device reports `None`
	/// (no buffered-duration capability).
	#[must_use]
	pub fn with_buffered_ms(mut self, ms: u64) -> Self {
		self.buffered_script.push_back(ms);
		self
	}

	/// Make the start command fail.
	#[must_use]
	pub fn with_failed_start(mut self) -> Self {
		self.fail_start = true;
		self
	}

	/// Every byte the device has accepted so far, in order.
	pub fn written(&self) -> &[u8] {
		&self.written
	}

	/// How many times `init` was called.
	pub fn init_calls(&self) -> usize {
		self.init_calls
	}

	/// How many times `write` was called.
	pub fn write_calls(&self) -> usize {
		self.write_calls
	}

	/// How many times the buffered duration was polled.
	pub fn polls(&self) -> usize {
		self.polls
	}

	/// Has the device been told to start (and not stopped since)?
	pub fn is_started(&self) -> bool {
		self.started
	}

	/// Has side configuration run?
	pub fn is_configured(&self) -> bool {
		self.configured
	}
}

//---------------------------------------------------------------------------------------------------- `RawDevice` Impl
impl RawDevice for DummyDevice {
	fn acquire() -> Result<Self, OpenError> {
		Ok(Self::new())
	}

	fn init(&mut self, request: &InitRequest) -> Result<(), InitError> {
		self.init_calls += 1;

		if let Some(reason) = self.rejection {
			return Err(InitError::Rejected(reason));
		}

		match &self.accepted {
			None => Ok(()),
			Some(formats) if formats.contains(&request.format) => Ok(()),
			Some(_) => Err(InitError::Unsupported),
		}
	}

	fn configure(&mut self) {
		self.configured = true;
	}

	fn write(&mut self, buf: &[u8]) -> Result<usize, DeviceWriteError> {
		self.write_calls += 1;

		match self.write_script.pop_front() {
			None => {
				self.written.extend_from_slice(buf);
				Ok(buf.len())
			},
			Some(ScriptedWrite::Bytes(n)) => {
				let n = n.min(buf.len());
				self.written.extend_from_slice(&buf[..n]);
				Ok(n)
			},
			Some(ScriptedWrite::Busy) => Err(DeviceWriteError::Busy),
			Some(ScriptedWrite::Interrupted) => Err(DeviceWriteError::Interrupted),
			Some(ScriptedWrite::Fatal) => Err(DeviceWriteError::Fatal(WriteError::ReturnCode)),
		}
	}

	fn buffered_ms(&mut self) -> Option<u64> {
		self.polls += 1;
		self.buffered_script.pop_front()
	}

	fn start(&mut self) -> Result<(), OpenError> {
		if self.fail_start {
			return Err(OpenError::Start);
		}
		trace2!("DummyDevice - started");
		self.started = true;
		Ok(())
	}

	fn stop(&mut self) {
		trace2!("DummyDevice - stopped");
		self.started = false;
	}
}
