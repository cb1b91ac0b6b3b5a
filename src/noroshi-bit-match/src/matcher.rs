use noroshi_bit_view::BitView;
use thiserror::Error;

/// Failure table entry marking a state without a fallback.
///
/// When a mismatch falls back onto this value, the offending bit is
/// consumed and matching resumes at state 0 with the next stream bit.
pub const NO_BORDER: usize = usize::MAX;

/// Errors that may occur when constructing a [`StreamMatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NeedleError {
    /// The needle contains no bits.
    ///
    /// An empty pattern has no match state to maintain and is not
    /// supported.
    #[error("needle must contain at least one bit")]
    Empty,

    /// The packed needle buffer holds fewer bits than requested.
    #[error("needle of {nbits} bits exceeds the {have} bits provided")]
    TooShort {
        /// The requested needle length in bits.
        nbits: usize,
        /// The number of bits the buffer actually holds.
        have: usize,
    },
}

/// A matcher that looks for a fixed bit string in a bit stream, based
/// on the Knuth-Morris-Pratt algorithm.
///
/// The needle is borrowed as bytes, packed most significant bit first,
/// and addressed through a [`BitView`]. The haystack is never stored:
/// callers push it one bit at a time into
/// [`handle_bit`][Self::handle_bit] and act on the returned match
/// signal. Between calls the matcher remembers nothing but the length
/// of the needle prefix currently matched.
///
/// After construction the matcher never allocates and no operation on
/// it can fail.
#[derive(Clone, Debug)]
pub struct StreamMatcher<'n> {
    // The needle bits, packed MSB-first into whole bytes.
    needle: BitView<'n, u8>,

    // The number of leading needle bits that participate in matching.
    nbits: usize,

    // KMP failure links for the first `nbits - 1` states; the final
    // needle bit is implied by the match test in `handle_bit`.
    table: Vec<usize>,

    // The number of needle bits matched against the stream so far.
    matched: usize,
}

impl<'n> StreamMatcher<'n> {
    /// Creates a new matcher for the first `nbits` bits of `needle`.
    ///
    /// The needle bits are taken most significant bit first from the
    /// packed bytes; surplus bits in the final byte do not participate
    /// in matching.
    ///
    /// Construction precomputes the failure table for the needle. The
    /// table is immutable afterwards, so a matcher can be reused for
    /// any number of streams via [`restart`][Self::restart].
    pub fn new(needle: &'n [u8], nbits: usize) -> Result<Self, NeedleError> {
        if nbits == 0 {
            return Err(NeedleError::Empty);
        }

        let needle = BitView::new(needle);
        if nbits > needle.len() {
            return Err(NeedleError::TooShort {
                nbits,
                have: needle.len(),
            });
        }

        let table = build_failure_table(needle, nbits);
        log::debug!("Prepared failure table for a {nbits}-bit needle");

        Ok(Self {
            needle,
            nbits,
            table,
            matched: 0,
        })
    }

    /// Restarts the search by setting the number of matched bits to
    /// zero.
    ///
    /// Use this to abandon a partial match when the caller decides to
    /// resynchronize; the failure table is untouched.
    #[inline]
    pub fn restart(&mut self) {
        self.matched = 0;
    }

    /// Handles a single bit of the haystack.
    ///
    /// Returns `true` when the needle is fully matched, ending at this
    /// bit. A reported match restarts the automaton, so an occurrence
    /// overlapping the reported one will not be detected.
    #[inline]
    pub fn handle_bit(&mut self, bit: bool) -> bool {
        if self.needle.get(self.matched) != bit {
            self.matched = self.table[self.matched];
        }

        if self.matched == self.nbits - 1 {
            self.matched = 0;
            true
        } else {
            // A fallback onto `NO_BORDER` wraps around to state 0
            // here, consuming the mismatched bit.
            self.matched = self.matched.wrapping_add(1);
            false
        }
    }

    /// Feeds bits from an iterator into the matcher until the first
    /// match.
    ///
    /// Returns the offset within `bits` of the bit that completed the
    /// match. Matching continues from the current state, so partial
    /// progress from an earlier feed carries over; pass the iterator
    /// by `&mut` to resume the same stream after a match.
    pub fn search<I>(&mut self, bits: I) -> Option<usize>
    where
        I: IntoIterator<Item = bool>,
    {
        bits.into_iter().position(|bit| self.handle_bit(bit))
    }

    /// Gets the number of needle bits matched right now.
    #[inline]
    pub fn matched_bits(&self) -> usize {
        self.matched
    }

    /// Gets the needle length in bits.
    #[inline]
    pub fn needle_len(&self) -> usize {
        self.nbits
    }

    /// Gets the precomputed failure table.
    ///
    /// Entry `i` names the state to fall back to when the stream
    /// mismatches after `i` matched bits; entries without a fallback
    /// hold [`NO_BORDER`].
    #[inline]
    pub fn failure_table(&self) -> &[usize] {
        &self.table
    }
}

/// Builds the KMP failure table for the first `nbits` bits of the
/// needle.
///
/// This is the textbook prefix-function construction with one twist
/// for the binary alphabet: a state whose needle bit equals that of
/// its fallback state shares the fallback's own link instead
/// (`table[pos] = table[cnd]`). The resulting table never chains on a
/// mismatch, which is what keeps [`StreamMatcher::handle_bit`] at a
/// single table lookup per stream bit.
fn build_failure_table(needle: BitView<'_, u8>, nbits: usize) -> Vec<usize> {
    let mut table = vec![0; nbits];
    table[0] = NO_BORDER;

    let mut pos = 1;
    let mut cnd = 0;

    while pos < nbits {
        if needle.get(pos) == needle.get(cnd) {
            table[pos] = table[cnd];
        } else {
            table[pos] = cnd;

            cnd = table[cnd];
            while cnd != NO_BORDER && needle.get(pos) != needle.get(cnd) {
                cnd = table[cnd];
            }
        }

        pos += 1;
        // A sentinel wraps around to state 0 here.
        cnd = cnd.wrapping_add(1);
    }

    table
}
