//! PCM sample encodings.

//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- SampleFormat
/// A PCM sample encoding.
///
/// The closed set of encodings an output device can be
/// asked for. Multi-byte encodings exist in both byte
/// orders since the hardware, not the host, decides.
#[derive(Copy,Clone,Debug,PartialEq,Eq,PartialOrd,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SampleFormat {
	/// Unsigned 8-bit samples.
	U8,
	/// Signed 8-bit samples.
	S8,
	/// Signed 16-bit little-endian samples.
	S16Le,
	/// Signed 16-bit big-endian samples.
	S16Be,
	/// Unsigned 16-bit little-endian samples.
	U16Le,
	/// Unsigned 16-bit big-endian samples.
	U16Be,
}

impl SampleFormat {
	/// How many bytes one sample of this encoding occupies.
	pub const fn bytes_per_sample(self) -> usize {
		match self {
			Self::U8 | Self::S8 => 1,
			Self::S16Le | Self::S16Be | Self::U16Le | Self::U16Be => 2,
		}
	}

	/// Sample width in bits.
	pub const fn bits(self) -> u8 {
		(self.bytes_per_sample() * 8) as u8
	}

	/// Is this a signed encoding?
	pub const fn is_signed(self) -> bool {
		matches!(self, Self::S8 | Self::S16Le | Self::S16Be)
	}

	/// Is this a big-endian encoding?
	pub const fn is_big_endian(self) -> bool {
		matches!(self, Self::S16Be | Self::U16Be)
	}

	/// The byte value that plays back as silence.
	///
	/// Unsigned 8-bit audio centers on `0x80`;
	/// everything else centers on zero.
	pub const fn silence(self) -> u8 {
		match self {
			Self::U8 => 0x80,
			_ => 0,
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use strum::EnumCount;

	#[test]
	fn sample_widths() {
		assert_eq!(SampleFormat::U8.bytes_per_sample(),    1);
		assert_eq!(SampleFormat::S8.bytes_per_sample(),    1);
		assert_eq!(SampleFormat::S16Le.bytes_per_sample(), 2);
		assert_eq!(SampleFormat::S16Be.bytes_per_sample(), 2);
		assert_eq!(SampleFormat::U16Le.bytes_per_sample(), 2);
		assert_eq!(SampleFormat::U16Be.bytes_per_sample(), 2);
		assert_eq!(SampleFormat::COUNT, 6);
	}

	#[test]
	fn silence_centers_unsigned_8bit() {
		assert_eq!(SampleFormat::U8.silence(), 0x80);
		assert_eq!(SampleFormat::S8.silence(), 0);
		assert_eq!(SampleFormat::U16Le.silence(), 0);
	}

	#[test]
	fn endianness_and_sign() {
		assert!(SampleFormat::S16Be.is_big_endian());
		assert!(!SampleFormat::S16Le.is_big_endian());
		assert!(SampleFormat::S16Le.is_signed());
		assert!(!SampleFormat::U16Be.is_signed());
	}
}
