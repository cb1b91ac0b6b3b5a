use std::iter::FusedIterator;

use funty::Unsigned;

use crate::utils::{bit_shift, word_index};

/// A read-only view that addresses single bits in a buffer of words.
///
/// Position 0 is the most significant bit of the first word and
/// position `T::BITS - 1` its least significant bit, after which
/// addressing continues at the most significant bit of the next word.
///
/// The view borrows the words and never copies them; it is [`Copy`]
/// itself and as cheap to pass around as the slice reference it wraps.
#[derive(Clone, Copy, Debug)]
pub struct BitView<'a, T: Unsigned> {
    words: &'a [T],
}

impl<'a, T: Unsigned> BitView<'a, T> {
    /// Creates a new view over the given word buffer.
    pub fn new(words: &'a [T]) -> Self {
        Self { words }
    }

    /// Gets the total number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len() * T::BITS as usize
    }

    /// Indicates whether the view addresses no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Gets the underlying word buffer.
    #[inline]
    pub fn words(&self) -> &'a [T] {
        self.words
    }

    /// Reads the bit at position `pos`.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is past the end of the buffer.
    #[inline]
    pub fn get(&self, pos: usize) -> bool {
        let word = self.words[word_index::<T>(pos)];
        (word >> bit_shift::<T>(pos)) & T::ONE != T::ZERO
    }

    /// Creates an iterator over the bits of this view, starting at
    /// position 0.
    pub fn iter(&self) -> Bits<'a, T> {
        Bits {
            view: *self,
            pos: 0,
        }
    }
}

impl<'a, T: Unsigned> IntoIterator for BitView<'a, T> {
    type Item = bool;
    type IntoIter = Bits<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the bits of a [`BitView`], front to back.
#[derive(Clone, Debug)]
pub struct Bits<'a, T: Unsigned> {
    view: BitView<'a, T>,
    pos: usize,
}

impl<T: Unsigned> Iterator for Bits<'_, T> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.view.len() {
            let bit = self.view.get(self.pos);
            self.pos += 1;

            Some(bit)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Unsigned> ExactSizeIterator for Bits<'_, T> {}

impl<T: Unsigned> FusedIterator for Bits<'_, T> {}
