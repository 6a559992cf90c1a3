//! Priority-ordered format candidates.

//---------------------------------------------------------------------------------------------------- use
use crate::format::SampleFormat;

//---------------------------------------------------------------------------------------------------- Candidate tables
// One fixed fallback list per requested encoding.
//
// The requested encoding always comes first. After that,
// same-width encodings are preferred over narrower ones,
// and within a width the opposite byte order is tried
// before flipping signedness.
const U8_LIST:    [SampleFormat; 6] = [SampleFormat::U8,    SampleFormat::S8,    SampleFormat::S16Le, SampleFormat::S16Be, SampleFormat::U16Le, SampleFormat::U16Be];
const S8_LIST:    [SampleFormat; 6] = [SampleFormat::S8,    SampleFormat::U8,    SampleFormat::S16Le, SampleFormat::S16Be, SampleFormat::U16Le, SampleFormat::U16Be];
const S16LE_LIST: [SampleFormat; 6] = [SampleFormat::S16Le, SampleFormat::S16Be, SampleFormat::U16Le, SampleFormat::U16Be, SampleFormat::S8,    SampleFormat::U8];
const S16BE_LIST: [SampleFormat; 6] = [SampleFormat::S16Be, SampleFormat::S16Le, SampleFormat::U16Be, SampleFormat::U16Le, SampleFormat::S8,    SampleFormat::U8];
const U16LE_LIST: [SampleFormat; 6] = [SampleFormat::U16Le, SampleFormat::U16Be, SampleFormat::S16Le, SampleFormat::S16Be, SampleFormat::U8,    SampleFormat::S8];
const U16BE_LIST: [SampleFormat; 6] = [SampleFormat::U16Be, SampleFormat::U16Le, SampleFormat::S16Be, SampleFormat::S16Le, SampleFormat::U8,    SampleFormat::S8];

//---------------------------------------------------------------------------------------------------- Candidates
/// Iterator over the encodings to offer a device,
/// in priority order, starting from a requested one.
///
/// Every encoding appears exactly once. Negotiation takes
/// the first candidate the device accepts, so earlier
/// entries always win over later ones.
#[derive(Clone, Debug)]
pub struct Candidates {
	list: &'static [SampleFormat; 6],
	index: usize,
}

impl Candidates {
	/// The candidate list for a requested encoding.
	pub const fn new(requested: SampleFormat) -> Self {
		let list = match requested {
			SampleFormat::U8    => &U8_LIST,
			SampleFormat::S8    => &S8_LIST,
			SampleFormat::S16Le => &S16LE_LIST,
			SampleFormat::S16Be => &S16BE_LIST,
			SampleFormat::U16Le => &U16LE_LIST,
			SampleFormat::U16Be => &U16BE_LIST,
		};
		Self { list, index: 0 }
	}
}

impl Iterator for Candidates {
	type Item = SampleFormat;

	fn next(&mut self) -> Option<SampleFormat> {
		let format = self.list.get(self.index).copied();
		self.index += 1;
		format
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let left = self.list.len().saturating_sub(self.index);
		(left, Some(left))
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use strum::IntoEnumIterator;

	#[test]
	fn requested_format_comes_first() {
		for format in SampleFormat::iter() {
			assert_eq!(Candidates::new(format).next(), Some(format));
		}
	}

	#[test]
	fn every_format_listed_exactly_once() {
		for format in SampleFormat::iter() {
			let list: Vec<SampleFormat> = Candidates::new(format).collect();
			assert_eq!(list.len(), 6);
			for other in SampleFormat::iter() {
				assert_eq!(list.iter().filter(|f| **f == other).count(), 1);
			}
		}
	}

	#[test]
	fn same_width_preferred_over_narrower() {
		let list: Vec<SampleFormat> = Candidates::new(SampleFormat::S16Le).collect();
		assert_eq!(
			list,
			vec![
				SampleFormat::S16Le,
				SampleFormat::S16Be,
				SampleFormat::U16Le,
				SampleFormat::U16Be,
				SampleFormat::S8,
				SampleFormat::U8,
			],
		);
	}
}
