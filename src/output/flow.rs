//! Output flow control.

//---------------------------------------------------------------------------------------------------- use
use std::time::Duration;

use crate::{
	device::RawDevice,
	macros::trace2,
};

//---------------------------------------------------------------------------------------------------- wait_until_ready
/// Sleep the calling thread until the device's queue of
/// unplayed audio falls to `ceiling` or below.
///
/// The device's buffered-duration report is re-read on every
/// pass; the sleep quantum is half the ceiling, coarse
/// enough not to busy-spin and fine enough not to overshoot
/// the margin being drained.
///
/// A device that cannot report its buffer state (a failed or
/// unsupported query) never blocks here: there is nothing to
/// wait for, and a backend whose writes already block has
/// its pacing enforced in the sink instead.
pub(crate) fn wait_until_ready<D: RawDevice>(device: &mut D, ceiling: Duration) {
	loop {
		let Some(buffered) = device.buffered_ms() else {
			trace2!("flow - can't read buffer state, not waiting");
			return;
		};

		if buffered <= ceiling.as_millis() as u64 {
			trace2!("flow - ready, {buffered} ms in buffer");
			return;
		}

		trace2!("flow - {buffered} ms in buffer, waiting for drain");
		std::thread::sleep(ceiling / 2);
	}
}
