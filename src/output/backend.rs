//! Backend lifecycle.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	device::RawDevice,
	error::OpenError,
	format::negotiate,
	macros::{debug2,error2,warn2},
	mix::MixBuffer,
	output::constants::MAX_LATENCY,
	output::flow::wait_until_ready,
	output::output::AudioBackend,
	output::sink::DeviceSink,
	spec::AudioSpec,
};

//---------------------------------------------------------------------------------------------------- State
/// Where a backend is in its lifecycle.
///
/// There is no separate "playing" state: the wait/buffer/play
/// cycle runs entirely within [`State::Ready`].
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum State {
	/// No device held, no buffer allocated.
	Closed,
	/// Open and accepting the wait/buffer/play cycle.
	Ready,
	/// A fatal error occurred; writes are suppressed until
	/// [`AudioBackend::close`] is called.
	Error,
}

//---------------------------------------------------------------------------------------------------- Backend
/// The generic output backend: lifecycle, negotiation and
/// flow control over any [`RawDevice`].
///
/// All per-instance state lives here, exclusively owned;
/// nothing is shared across backend instances.
#[derive(Debug)]
pub struct Backend<D: RawDevice> {
	sink: Option<DeviceSink<D>>,
	mix: MixBuffer,
	spec: Option<AudioSpec>,
	state: State,
}

impl<D: RawDevice> Backend<D> {
	/// A closed backend. Holds nothing until opened.
	pub const fn new() -> Self {
		Self {
			sink: None,
			mix: MixBuffer::RELEASED,
			spec: None,
			state: State::Closed,
		}
	}

	/// Where this backend is in its lifecycle.
	pub const fn state(&self) -> State {
		self.state
	}

	/// Open with an already-acquired device.
	///
	/// Everything after device acquisition happens here:
	/// negotiation, side configuration, buffer allocation,
	/// device start. Any failure releases whatever was
	/// acquired up to that point and lands in [`State::Error`].
	pub(crate) fn open_device(&mut self, device: D, requested: &AudioSpec) -> Result<AudioSpec, OpenError> {
		// A still-open session is torn down first.
		self.close();

		let mut device = device;
		let mut spec = *requested;

		// Reduce to mono or stereo.
		spec.channels = if spec.channels > 1 { 2 } else { 1 };

		// Try for a closest match on audio format.
		let format = match negotiate(&mut device, spec.rate, spec.channels, spec.format) {
			Ok(format) => format,
			Err(e) => {
				// Device handle dropped here.
				self.state = State::Error;
				return Err(e);
			},
		};
		spec.format = format;
		spec.calculate();

		// Volume and output routing; never fatal.
		device.configure();

		// Allocate mixing buffer.
		let mix = match MixBuffer::allocate(spec.size, spec.silence) {
			Ok(mix) => mix,
			Err(e) => {
				error2!("Backend - couldn't allocate {} byte mixing buffer", spec.size);
				self.state = State::Error;
				return Err(e);
			},
		};

		// Tell the device to expect data.
		if let Err(e) = device.start() {
			self.state = State::Error;
			return Err(e);
		}

		debug2!(
			"Backend - open: {} Hz, {} channels, {} byte chunks",
			spec.rate,
			spec.channels,
			spec.size,
		);

		self.sink = Some(DeviceSink::new(device));
		self.mix = mix;
		self.spec = Some(spec);
		self.state = State::Ready;

		Ok(spec)
	}
}

impl<D: RawDevice> Default for Backend<D> {
	fn default() -> Self {
		Self::new()
	}
}

//---------------------------------------------------------------------------------------------------- `AudioBackend` Impl
impl<D: RawDevice> AudioBackend for Backend<D> {
	fn open(&mut self, spec: &AudioSpec) -> Result<AudioSpec, OpenError> {
		let device = match D::acquire() {
			Ok(device) => device,
			Err(e) => {
				self.state = State::Error;
				return Err(e);
			},
		};

		self.open_device(device, spec)
	}

	fn wait(&mut self) {
		if let Some(sink) = &mut self.sink {
			if sink.is_enabled() {
				wait_until_ready(sink.device_mut(), MAX_LATENCY);
			}
		}
	}

	fn buffer(&mut self) -> &mut [u8] {
		self.mix.bytes_mut()
	}

	fn play(&mut self) {
		if let Some(sink) = &mut self.sink {
			if sink.submit(self.mix.bytes()).is_err() {
				self.state = State::Error;
			}
		}
	}

	fn close(&mut self) {
		if let Some(mut sink) = self.sink.take() {
			debug2!("Backend - close");
			// Best-effort stop; the handle is
			// invalidated regardless.
			sink.stop();
		} else if self.state == State::Error {
			warn2!("Backend - closing errored backend with no device");
		}

		self.mix.release();
		self.spec = None;
		self.state = State::Closed;
	}

	fn spec(&self) -> Option<&AudioSpec> {
		self.spec.as_ref()
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::device::dummy::{DummyDevice,ScriptedWrite};
	use crate::error::RejectReason;
	use crate::format::SampleFormat;
	use pretty_assertions::assert_eq;

	fn requested() -> AudioSpec {
		AudioSpec::new(SampleFormat::U16Be, 2, 44_100, 512)
	}

	#[test]
	fn open_reports_what_the_hardware_accepted() {
		let device = DummyDevice::new().with_accepted(&[SampleFormat::S16Le]);
		let mut backend = Backend::new();

		let accepted = backend.open_device(device, &requested()).unwrap();

		assert_eq!(accepted.format, SampleFormat::S16Le);
		assert_eq!(accepted.channels, 2);
		assert_eq!(accepted.size, 2 * 2 * 512);
		assert_eq!(backend.state(), State::Ready);
		assert_eq!(backend.spec(), Some(&accepted));
	}

	#[test]
	fn open_prefills_buffer_with_silence() {
		let device = DummyDevice::new().with_accepted(&[SampleFormat::U8]);
		let mut backend = Backend::new();

		let accepted = backend.open_device(device, &requested()).unwrap();

		assert_eq!(accepted.silence, 0x80);
		assert_eq!(backend.buffer().len(), accepted.size);
		assert!(backend.buffer().iter().all(|b| *b == 0x80));
	}

	#[test]
	fn open_collapses_channels() {
		let mut backend = Backend::new();
		let mut spec = requested();

		spec.channels = 6;
		assert_eq!(backend.open_device(DummyDevice::new(), &spec).unwrap().channels, 2);

		spec.channels = 1;
		assert_eq!(backend.open_device(DummyDevice::new(), &spec).unwrap().channels, 1);
	}

	#[test]
	fn rejected_open_allocates_nothing() {
		let device = DummyDevice::new().with_rejection(RejectReason::ResourceExhausted);
		let mut backend = Backend::new();

		let err = backend.open_device(device, &requested()).unwrap_err();

		assert!(matches!(err, OpenError::Rejected(RejectReason::ResourceExhausted)));
		assert_eq!(backend.state(), State::Error);
		assert!(backend.buffer().is_empty());
		assert_eq!(backend.spec(), None);
	}

	#[test]
	fn failed_start_releases_buffer() {
		let device = DummyDevice::new().with_failed_start();
		let mut backend = Backend::new();

		let err = backend.open_device(device, &requested()).unwrap_err();

		assert!(matches!(err, OpenError::Start));
		assert_eq!(backend.state(), State::Error);
		assert!(backend.buffer().is_empty());
	}

	#[test]
	fn play_submits_the_chunk() {
		let mut backend = Backend::new();
		let accepted = backend.open_device(DummyDevice::new(), &requested()).unwrap();

		backend.buffer().fill(0xAA);
		backend.wait();
		backend.play();

		assert_eq!(backend.state(), State::Ready);
		// Still the same in-place buffer afterwards.
		assert_eq!(backend.buffer().len(), accepted.size);
	}

	#[test]
	fn fatal_write_degrades_not_destroys() {
		let device = DummyDevice::new().with_write(ScriptedWrite::Fatal);
		let mut backend = Backend::new();
		backend.open_device(device, &requested()).unwrap();

		backend.play();
		assert_eq!(backend.state(), State::Error);

		// Still callable; writes suppressed, no panic.
		backend.wait();
		backend.buffer().fill(0);
		backend.play();
		assert_eq!(backend.state(), State::Error);

		backend.close();
		assert_eq!(backend.state(), State::Closed);
	}

	#[test]
	fn close_twice_is_idempotent() {
		let mut backend = Backend::new();
		backend.open_device(DummyDevice::new(), &requested()).unwrap();

		backend.close();
		assert_eq!(backend.state(), State::Closed);
		assert!(backend.buffer().is_empty());

		backend.close();
		assert_eq!(backend.state(), State::Closed);
	}

	#[test]
	fn close_without_open_is_a_noop() {
		let mut backend: Backend<DummyDevice> = Backend::new();
		backend.close();
		assert_eq!(backend.state(), State::Closed);
	}

	#[test]
	fn reopen_after_close() {
		let mut backend = Backend::new();
		backend.open_device(DummyDevice::new(), &requested()).unwrap();
		backend.close();

		let accepted = backend.open_device(DummyDevice::new(), &requested()).unwrap();
		assert_eq!(backend.state(), State::Ready);
		assert_eq!(backend.buffer().len(), accepted.size);
	}
}
