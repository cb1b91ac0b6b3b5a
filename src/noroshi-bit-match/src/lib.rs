//! Streaming detection of fixed bit patterns in bit streams.
//!
//! Compressed media streams and bit-packed protocols delimit their
//! payloads with sync markers that rarely sit on byte boundaries. The
//! matcher in this crate consumes a stream one bit at a time and
//! reports the exact bit at which a marker completes, while keeping no
//! stream history and doing constant work per bit.
//!
//! # Implementation
//!
//! The matcher is a Knuth-Morris-Pratt automaton specialized to the
//! two-symbol alphabet: the failure table only ever stores states
//! whose needle bit differs from the current one, so a mismatch
//! follows at most one failure link before the next stream bit is
//! consumed.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod matcher;
pub use matcher::{NeedleError, StreamMatcher, NO_BORDER};
