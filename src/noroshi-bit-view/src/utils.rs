use funty::Unsigned;

/// Computes the index of the word that holds the bit at `pos`.
#[inline(always)]
pub fn word_index<T: Unsigned>(pos: usize) -> usize {
    pos / T::BITS as usize
}

/// Computes the shift that moves the bit at `pos` down to the least
/// significant position of its word.
///
/// Bits are numbered from the most significant word bit downwards, so
/// the first position of every word gets the largest shift.
#[inline(always)]
pub fn bit_shift<T: Unsigned>(pos: usize) -> u32 {
    T::BITS - 1 - (pos % T::BITS as usize) as u32
}
