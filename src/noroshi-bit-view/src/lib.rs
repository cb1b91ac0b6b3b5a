//! Provides bit-granular addressing of caller-owned word buffers.
//!
//! Binary formats routinely pack flags and fields without regard for
//! byte boundaries. The views in this crate address single bits inside
//! a borrowed buffer of unsigned words by a global bit position,
//! numbered from the most significant bit of the first word downwards.
//! This is the canonical order in which bits appear in on-wire and
//! on-disk layouts.
//!
//! No copy of the buffer is ever made and no state is kept besides the
//! borrow itself; every access goes straight through to the words.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod view;
pub use view::{BitView, Bits};

mod view_mut;
pub use view_mut::{BitMut, BitViewMut};

mod utils;
