//! Errors that abort opening an audio device.

//----------------------------------------------------------------------------------------------- OpenError
/// Error that occurs when attempting to
/// open an audio output device.
///
/// Any of these aborts the open; partially acquired
/// resources (device handle, mixing buffer) are released
/// before the error is returned.
#[derive(thiserror::Error, Debug)]
pub enum OpenError {
	#[error("couldn't open audio device: {0}")]
	/// The audio device could not be opened at all.
	Unavailable(std::io::Error),

	#[error("couldn't find any hardware audio formats")]
	/// Every candidate sample encoding was refused by the hardware.
	NoSupportedFormat,

	#[error("couldn't set audio format: {0}")]
	/// The device rejected its native initialization
	/// call with a structured reason.
	Rejected(RejectReason),

	#[error("couldn't allocate mixing buffer")]
	/// Allocating the raw mixing buffer failed.
	Allocation,

	#[error("can't start audio play")]
	/// The device refused the start command.
	Start,
}

//----------------------------------------------------------------------------------------------- RejectReason
/// Why a device rejected its native initialization call.
///
/// Each hardware backend translates its own structured
/// return codes into this closed set at the boundary, so
/// everything above the device layer stays backend-agnostic.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
#[derive(thiserror::Error)]
pub enum RejectReason {
	#[error("DSP can't do play requests")]
	/// The device's signal processor cannot play.
	PlayNotSupported,

	#[error("DSP can't do record requests")]
	/// The device's signal processor cannot record.
	RecordNotSupported,

	#[error("request was invalid")]
	/// The initialization request itself was malformed.
	InvalidRequest,

	#[error("conflict with open flags")]
	/// The request conflicted with the flags the
	/// device channel was opened with.
	FlagConflict,

	#[error("out of DSP MIPS or memory")]
	/// The device ran out of processing or memory resources.
	ResourceExhausted,

	#[error("reason not documented by the device")]
	/// The device reported a code outside its documented set.
	Undocumented,
}
