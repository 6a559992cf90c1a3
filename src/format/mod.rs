//! PCM sample encodings and format negotiation.

mod format;
pub use format::SampleFormat;

mod candidates;
pub use candidates::Candidates;

mod negotiate;
pub(crate) use negotiate::negotiate;
