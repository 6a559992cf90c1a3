//! Audio stream specification.

//---------------------------------------------------------------------------------------------------- use
use crate::format::SampleFormat;

//---------------------------------------------------------------------------------------------------- AudioSpec
/// Requested (and, after open, negotiated) stream parameters.
///
/// The caller fills in `format`, `channels`, `rate` and
/// `samples`; `size` and `silence` are derived. A successful
/// open returns a copy whose `format` and `channels` reflect
/// what the hardware actually accepted, which may differ from
/// the request. The chunk size is fixed for the lifetime of
/// the open device.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub struct AudioSpec {
	/// Sample encoding.
	pub format: SampleFormat,
	/// Channel count; collapsed to 1 or 2 on open.
	pub channels: u8,
	/// Sample rate in Hz.
	pub rate: u32,
	/// Chunk length in sample frames.
	pub samples: u16,
	/// Chunk length in bytes (derived).
	pub size: usize,
	/// Byte value the mixing buffer is pre-filled with (derived).
	pub silence: u8,
}

impl AudioSpec {
	/// Stereo signed 16-bit little-endian at 44.1kHz,
	/// 1024 frames per chunk.
	pub const DEFAULT: Self = Self {
		format: SampleFormat::S16Le,
		channels: 2,
		rate: 44_100,
		samples: 1024,
		size: 4096,
		silence: 0,
	};

	/// A spec with `size` and `silence` derived from the rest.
	pub fn new(format: SampleFormat, channels: u8, rate: u32, samples: u16) -> Self {
		let mut this = Self {
			format,
			channels,
			rate,
			samples,
			size: 0,
			silence: 0,
		};
		this.calculate();
		this
	}

	/// Re-derive `size` and `silence` from the other fields.
	///
	/// Called after any change to `format` or `channels`,
	/// e.g. when negotiation lands on a different encoding
	/// than the one requested.
	pub fn calculate(&mut self) {
		self.silence = self.format.silence();
		self.size = self.format.bytes_per_sample()
			* usize::from(self.channels)
			* usize::from(self.samples);
	}
}

impl Default for AudioSpec {
	fn default() -> Self {
		Self::DEFAULT
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn default_is_calculated() {
		let mut spec = AudioSpec::DEFAULT;
		spec.calculate();
		assert_eq!(spec, AudioSpec::DEFAULT);
	}

	#[test]
	fn size_derivation() {
		let spec = AudioSpec::new(SampleFormat::S16Le, 2, 44_100, 512);
		assert_eq!(spec.size, 2 * 2 * 512);

		let spec = AudioSpec::new(SampleFormat::U8, 1, 8_000, 256);
		assert_eq!(spec.size, 256);
	}

	#[test]
	fn silence_follows_format() {
		assert_eq!(AudioSpec::new(SampleFormat::U8, 1, 8_000, 256).silence, 0x80);
		assert_eq!(AudioSpec::new(SampleFormat::S16Be, 2, 44_100, 256).silence, 0);
	}
}
