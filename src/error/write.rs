//! Errors that occur while writing audio to a device.

//----------------------------------------------------------------------------------------------- WriteError
/// Error that occurs when a device write fails fatally.
///
/// Transient busy/interrupt conditions are retried inside
/// the sink and never surface here. This error is returned
/// exactly once; afterwards the sink is disabled and all
/// further writes are silent no-ops.
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
	#[error("failed to write to the audio device: {0}")]
	/// The write itself failed with a non-retryable OS error.
	Device(#[from] std::io::Error),

	#[error("audio device reported an unsuccessful write")]
	/// The device accepted the call but reported a
	/// non-success return code mid-write.
	ReturnCode,
}
