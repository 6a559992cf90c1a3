//! OSS character-device output.
//!
//! This file implements the abstract `RawDevice` trait on
//! top of an OSS-style `/dev/dsp` character device: plain
//! blocking `write(2)` for audio data, ioctls for format
//! negotiation, trigger control and the output-delay query.
//!
//! For documentation on `RawDevice`, see `device.rs`.

//---------------------------------------------------------------------------------------------------- use
use std::{
	fs::File,
	io::{ErrorKind,Write},
	os::fd::AsRawFd,
	os::unix::fs::OpenOptionsExt,
};

use nix::libc;

use crate::{
	device::{RawDevice,InitRequest,InitError,DeviceWriteError},
	error::{OpenError,RejectReason,WriteError},
	format::SampleFormat,
	macros::{debug2,error2,warn2,trace2},
};

//---------------------------------------------------------------------------------------------------- Constants
/// The device node written to when `AUDIODEV` is unset.
pub const DSP_PATH: &str = "/dev/dsp";

// Native sample encodings, from <sys/soundcard.h>.
const AFMT_U8:     u32 = 0x0000_0008;
const AFMT_S16_LE: u32 = 0x0000_0010;
const AFMT_S16_BE: u32 = 0x0000_0020;
const AFMT_S8:     u32 = 0x0000_0040;
const AFMT_U16_LE: u32 = 0x0000_0080;
const AFMT_U16_BE: u32 = 0x0000_0100;

const PCM_ENABLE_OUTPUT: i32 = 0x0000_0002;

//---------------------------------------------------------------------------------------------------- ioctls
// Request numbers from <sys/soundcard.h>.
#[allow(unreachable_pub)]
mod ioctl {
	const SNDCTL_DSP_MAGIC: u8 = b'P';
	const SNDCTL_DSP_RESET: u8 = 0;
	const SNDCTL_DSP_SPEED: u8 = 2;
	const SNDCTL_DSP_SETFMT: u8 = 5;
	const SNDCTL_DSP_CHANNELS: u8 = 6;
	const SNDCTL_DSP_SETTRIGGER: u8 = 16;
	const SNDCTL_DSP_GETODELAY: u8 = 23;
	const SNDCTL_DSP_SETPLAYVOL: u8 = 24;

	nix::ioctl_none!(oss_reset, SNDCTL_DSP_MAGIC, SNDCTL_DSP_RESET);
	nix::ioctl_readwrite!(oss_set_speed, SNDCTL_DSP_MAGIC, SNDCTL_DSP_SPEED, i32);
	nix::ioctl_readwrite!(oss_set_format, SNDCTL_DSP_MAGIC, SNDCTL_DSP_SETFMT, u32);
	nix::ioctl_readwrite!(oss_set_channels, SNDCTL_DSP_MAGIC, SNDCTL_DSP_CHANNELS, i32);
	nix::ioctl_write_ptr!(oss_set_trigger, SNDCTL_DSP_MAGIC, SNDCTL_DSP_SETTRIGGER, i32);
	nix::ioctl_read!(oss_output_delay, SNDCTL_DSP_MAGIC, SNDCTL_DSP_GETODELAY, i32);
	nix::ioctl_readwrite!(oss_set_play_volume, SNDCTL_DSP_MAGIC, SNDCTL_DSP_SETPLAYVOL, i32);
}

//---------------------------------------------------------------------------------------------------- device_path
/// Which device node to open: `AUDIODEV` if set, else [`DSP_PATH`].
pub fn device_path() -> String {
	std::env::var("AUDIODEV").unwrap_or_else(|_| DSP_PATH.to_string())
}

//---------------------------------------------------------------------------------------------------- OssDevice
/// An OSS `/dev/dsp` output channel.
#[derive(Debug)]
pub struct OssDevice {
	dsp: File,

	/// Bytes of audio per millisecond at the negotiated
	/// parameters; zero until `init` accepts an encoding.
	bytes_per_ms: u64,
}

impl OssDevice {
	fn fd(&self) -> i32 {
		self.dsp.as_raw_fd()
	}
}

//---------------------------------------------------------------------------------------------------- `RawDevice` Impl
impl RawDevice for OssDevice {
	fn acquire() -> Result<Self, OpenError> {
		let path = device_path();

		// Open the audio device for playback. Blocking mode:
		// broken drivers may still hand back EAGAIN, which the
		// sink's retry loop absorbs.
		let dsp = File::options()
			.read(false)
			.write(true)
			.custom_flags(libc::O_WRONLY)
			.open(&path)
			.map_err(|e| {
				error2!("OssDevice - couldn't open {path}: {e}");
				OpenError::Unavailable(e)
			})?;

		debug2!("OssDevice - opened {path}");
		Ok(Self { dsp, bytes_per_ms: 0 })
	}

	fn init(&mut self, request: &InitRequest) -> Result<(), InitError> {
		let Some(native) = native_format(request.format) else {
			return Err(InitError::Unsupported);
		};

		let fd = self.fd();

		// The device echoes the encoding it actually set; a
		// different echo means this candidate isn't supported.
		let mut format = native;
		if let Err(errno) = unsafe { ioctl::oss_set_format(fd, &mut format) } {
			return Err(InitError::Rejected(reject_reason(errno)));
		}
		if format != native {
			trace2!("OssDevice - format not supported: {}", request.format);
			return Err(InitError::Unsupported);
		}

		let mut channels = i32::from(request.channels);
		if let Err(errno) = unsafe { ioctl::oss_set_channels(fd, &mut channels) } {
			return Err(InitError::Rejected(reject_reason(errno)));
		}
		if channels != i32::from(request.channels) {
			return Err(InitError::Rejected(RejectReason::InvalidRequest));
		}

		let mut speed = request.rate as i32;
		if let Err(errno) = unsafe { ioctl::oss_set_speed(fd, &mut speed) } {
			return Err(InitError::Rejected(reject_reason(errno)));
		}

		debug2!(
			"OssDevice - format: {} Hz, {} bits, {} channels",
			request.rate,
			request.format.bits(),
			request.channels,
		);

		self.bytes_per_ms = u64::from(request.rate)
			* u64::from(request.channels)
			* request.format.bytes_per_sample() as u64
			/ 1000;

		Ok(())
	}

	fn configure(&mut self) {
		// Full volume on both channels, encoded as left | right << 8.
		let mut volume = 100 | (100 << 8);
		if let Err(errno) = unsafe { ioctl::oss_set_play_volume(self.fd(), &mut volume) } {
			debug2!("OssDevice - can't change playback volume: {errno}");
		}
	}

	fn write(&mut self, buf: &[u8]) -> Result<usize, DeviceWriteError> {
		match self.dsp.write(buf) {
			Ok(written) => {
				trace2!("OssDevice - wrote {written} bytes of audio data");
				Ok(written)
			},
			Err(e) => Err(classify(e)),
		}
	}

	fn buffered_ms(&mut self) -> Option<u64> {
		if self.bytes_per_ms == 0 {
			return None;
		}

		let mut bytes: i32 = 0;
		match unsafe { ioctl::oss_output_delay(self.fd(), &mut bytes) } {
			Ok(_) => Some(bytes.max(0) as u64 / self.bytes_per_ms),
			Err(errno) => {
				trace2!("OssDevice - can't read buffer state: {errno}");
				None
			},
		}
	}

	fn start(&mut self) -> Result<(), OpenError> {
		let trigger = PCM_ENABLE_OUTPUT;
		match unsafe { ioctl::oss_set_trigger(self.fd(), &trigger) } {
			Ok(_) => Ok(()),
			Err(errno) => {
				error2!("OssDevice - can't start audio play: {errno}");
				Err(OpenError::Start)
			},
		}
	}

	fn stop(&mut self) {
		// RESET discards queued audio and halts the engine.
		if let Err(errno) = unsafe { ioctl::oss_reset(self.fd()) } {
			warn2!("OssDevice - can't stop audio play: {errno}");
		}
	}
}

//---------------------------------------------------------------------------------------------------- Helpers
/// Static lookup from our encodings to native `AFMT_*` bits.
const fn native_format(format: SampleFormat) -> Option<u32> {
	match format {
		SampleFormat::U8 => Some(AFMT_U8),
		SampleFormat::S8 => Some(AFMT_S8),
		SampleFormat::S16Le => Some(AFMT_S16_LE),
		SampleFormat::S16Be => Some(AFMT_S16_BE),
		SampleFormat::U16Le => Some(AFMT_U16_LE),
		SampleFormat::U16Be => Some(AFMT_U16_BE),
	}
}

/// Translate an ioctl errno into the shared rejection taxonomy.
fn reject_reason(errno: nix::errno::Errno) -> RejectReason {
	use nix::errno::Errno;

	match errno {
		Errno::EINVAL => RejectReason::InvalidRequest,
		Errno::EBUSY | Errno::EACCES => RejectReason::FlagConflict,
		Errno::ENOMEM | Errno::ENOSPC => RejectReason::ResourceExhausted,
		Errno::ENXIO | Errno::ENODEV => RejectReason::PlayNotSupported,
		_ => RejectReason::Undocumented,
	}
}

/// Classify a failed `write(2)` for the retry loop.
///
/// Some drivers report a raw errno of zero on a transient
/// failed write; that is kept equivalent to EAGAIN here to
/// match the write() return convention those drivers use.
fn classify(e: std::io::Error) -> DeviceWriteError {
	if e.raw_os_error() == Some(0) || e.kind() == ErrorKind::WouldBlock {
		DeviceWriteError::Busy
	} else if e.kind() == ErrorKind::Interrupted {
		DeviceWriteError::Interrupted
	} else {
		DeviceWriteError::Fatal(WriteError::Device(e))
	}
}
