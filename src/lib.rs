//! PCM audio output backends.
//!
//! `outback` streams raw PCM audio to a physical sound
//! device while hiding format negotiation, buffering and
//! flow control behind a uniform five-operation lifecycle:
//! open, wait, buffer, play, close.
//!
//! The [`output::AudioBackend`] trait is the caller-visible
//! surface; [`output::Backend`] implements it generically
//! over the [`device::RawDevice`] hardware abstraction, and
//! [`driver`] lets a host pick among compiled-in backends
//! by name.
//!
//! The whole crate is single-threaded and cooperative: it
//! spawns no threads, and blocks the calling thread only
//! inside `wait` and `play`.

//---------------------------------------------------------------------------------------------------- Lints
#![allow(
    clippy::len_zero,
    clippy::type_complexity,
    clippy::module_inception,
)]

#![deny(
    nonstandard_style,
    deprecated,
    missing_docs,
    unreachable_pub,
)]

#![forbid(
    unused_mut,
    future_incompatible,
    break_with_label_and_loop,
    coherence_leak_check,
    duplicate_macro_attributes,
    exported_private_dependencies,
    for_loops_over_fallibles,
    large_assignments,
    overlapping_range_endpoints,
    semicolon_in_expressions_from_macros,
    redundant_semicolons,
    unconditional_recursion,
    unreachable_patterns,
    unused_allocation,
    unused_braces,
    unused_comparisons,
    unused_doc_comments,
    unused_parens,
    unused_labels,
    while_true,
    keyword_idents,
    non_ascii_idents,
    noop_method_call,
    single_use_lifetimes,
)]

//---------------------------------------------------------------------------------------------------- Public API
pub mod error;
pub mod format;
pub mod spec;

pub mod device;
pub mod driver;

pub mod output;
pub use output::AudioBackend;

//---------------------------------------------------------------------------------------------------- Private Usage
mod mix;
mod macros;

//----------------------------------------------------------------------------------------------------
