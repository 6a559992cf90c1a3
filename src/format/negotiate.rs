//! Closest-match format negotiation.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	device::{RawDevice,InitRequest,InitError},
	error::OpenError,
	format::{Candidates,SampleFormat},
	macros::{debug2,trace2},
};

//---------------------------------------------------------------------------------------------------- negotiate
/// Try for a closest match on audio format.
///
/// Offers the device each candidate encoding in priority
/// order and returns the first one it accepts. The caller
/// mutates its spec only on success.
///
/// A structured rejection aborts the probe immediately:
/// the device understood the request and refused it, so
/// later candidates would fare no better.
pub(crate) fn negotiate<D: RawDevice>(
	device: &mut D,
	rate: u32,
	channels: u8,
	requested: SampleFormat,
) -> Result<SampleFormat, OpenError> {
	for candidate in Candidates::new(requested) {
		trace2!("negotiate - trying format: {candidate}");

		let request = InitRequest {
			format: candidate,
			rate,
			channels,
			block_size: candidate.bytes_per_sample() as u32 * 8 * u32::from(channels),
		};

		match device.init(&request) {
			Ok(()) => {
				debug2!("negotiate - accepted format: {candidate} ({rate} Hz, {channels} channels)");
				return Ok(candidate);
			},
			Err(InitError::Unsupported) => continue,
			Err(InitError::Rejected(reason)) => return Err(OpenError::Rejected(reason)),
		}
	}

	Err(OpenError::NoSupportedFormat)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::device::dummy::DummyDevice;
	use crate::error::RejectReason;
	use pretty_assertions::assert_eq;

	#[test]
	fn no_accepted_candidate_exhausts_list() {
		let mut device = DummyDevice::new().with_accepted(&[]);

		let err = negotiate(&mut device, 44_100, 2, SampleFormat::S16Le).unwrap_err();

		assert!(matches!(err, OpenError::NoSupportedFormat));
		// All 6 candidates were offered before giving up.
		assert_eq!(device.init_calls(), 6);
	}

	#[test]
	fn first_accepted_candidate_wins() {
		// Both 16-bit big-endian encodings work, but `S16Be`
		// sits earlier in `S16Le`'s candidate list.
		let mut device = DummyDevice::new()
			.with_accepted(&[SampleFormat::S16Be, SampleFormat::U16Be]);

		let accepted = negotiate(&mut device, 44_100, 2, SampleFormat::S16Le).unwrap();

		assert_eq!(accepted, SampleFormat::S16Be);
	}

	#[test]
	fn adjacent_format_accepted() {
		let mut device = DummyDevice::new().with_accepted(&[SampleFormat::S16Le]);

		let accepted = negotiate(&mut device, 48_000, 2, SampleFormat::U16Be).unwrap();

		assert_eq!(accepted, SampleFormat::S16Le);
	}

	#[test]
	fn structured_rejection_aborts_probe() {
		let mut device = DummyDevice::new().with_rejection(RejectReason::ResourceExhausted);

		let err = negotiate(&mut device, 44_100, 2, SampleFormat::S16Le).unwrap_err();

		assert!(matches!(err, OpenError::Rejected(RejectReason::ResourceExhausted)));
		// The probe stopped at the first candidate.
		assert_eq!(device.init_calls(), 1);
	}
}
