//! The raw mixing buffer.

//---------------------------------------------------------------------------------------------------- use
use crate::error::OpenError;

//---------------------------------------------------------------------------------------------------- MixBuffer
/// One chunk of raw audio, exclusively owned.
///
/// This is the only data handed between the application
/// and the device layer: the application fills it in place,
/// then the sink reads it out to the hardware.
///
/// Allocated once on open, released exactly once on close.
/// Close logic may run on error paths where allocation never
/// happened, so `release` tolerates an already-empty buffer.
#[derive(Debug)]
pub(crate) struct MixBuffer {
	buf: Option<Box<[u8]>>,
}

impl MixBuffer {
	/// An unallocated buffer; what a closed backend holds.
	pub(crate) const RELEASED: Self = Self { buf: None };

	/// Allocate `size` bytes, every one set to `silence`.
	///
	/// The immediate silence fill guarantees that if playback
	/// starts before the application's first fill completes,
	/// silence is emitted rather than garbage.
	pub(crate) fn allocate(size: usize, silence: u8) -> Result<Self, OpenError> {
		let mut buf = Vec::new();
		if buf.try_reserve_exact(size).is_err() {
			return Err(OpenError::Allocation);
		}
		buf.resize(size, silence);

		Ok(Self { buf: Some(buf.into_boxed_slice()) })
	}

	/// The buffer contents; empty once released.
	pub(crate) fn bytes(&self) -> &[u8] {
		match &self.buf {
			Some(buf) => buf,
			None => &[],
		}
	}

	/// The buffer contents, mutable; empty once released.
	pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
		match &mut self.buf {
			Some(buf) => buf,
			None => &mut [],
		}
	}

	/// Free the buffer. No-op if already released.
	pub(crate) fn release(&mut self) {
		self.buf = None;
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn allocate_fills_with_silence() {
		let mix = MixBuffer::allocate(4096, 0x80).unwrap();
		assert_eq!(mix.bytes().len(), 4096);
		assert!(mix.bytes().iter().all(|b| *b == 0x80));
	}

	#[test]
	fn release_twice_is_noop() {
		let mut mix = MixBuffer::allocate(16, 0).unwrap();
		mix.release();
		assert!(mix.bytes().is_empty());
		mix.release();
		assert!(mix.bytes().is_empty());
	}

	#[test]
	fn released_buffer_is_empty() {
		let mut mix = MixBuffer::RELEASED;
		assert!(mix.bytes().is_empty());
		assert!(mix.bytes_mut().is_empty());
	}
}
