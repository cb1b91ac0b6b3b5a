use funty::Unsigned;

use crate::{
    utils::{bit_shift, word_index},
    BitView,
};

/// A mutable view that addresses single bits in a buffer of words.
///
/// Addressing follows the same most-significant-bit-first order as
/// [`BitView`]. Writes modify the targeted word in place and leave
/// every other bit of that word unchanged.
#[derive(Debug)]
pub struct BitViewMut<'a, T: Unsigned> {
    words: &'a mut [T],
}

impl<'a, T: Unsigned> BitViewMut<'a, T> {
    /// Creates a new mutable view over the given word buffer.
    pub fn new(words: &'a mut [T]) -> Self {
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
    pub fn words(&self) -> &[T] {
        self.words
    }

    /// Reborrows this view as a read-only [`BitView`].
    #[inline]
    pub fn as_view(&self) -> BitView<'_, T> {
        BitView::new(self.words)
    }

    /// Consumes the view and hands the borrowed words back.
    #[inline]
    pub fn into_inner(self) -> &'a mut [T] {
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

    /// Writes `value` to the bit at position `pos`.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is past the end of the buffer.
    #[inline]
    pub fn set(&mut self, pos: usize, value: bool) {
        let word = &mut self.words[word_index::<T>(pos)];
        let mask = T::ONE << bit_shift::<T>(pos);

        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Inverts the bit at position `pos`.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is past the end of the buffer.
    #[inline]
    pub fn flip(&mut self, pos: usize) {
        self.words[word_index::<T>(pos)] ^= T::ONE << bit_shift::<T>(pos);
    }

    /// Gets a [`BitMut`] handle to the bit at position `pos` for
    /// repeated reads and writes through a single binding.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is past the end of the buffer.
    #[inline]
    pub fn bit_mut(&mut self, pos: usize) -> BitMut<'_, T> {
        BitMut {
            word: &mut self.words[word_index::<T>(pos)],
            mask: T::ONE << bit_shift::<T>(pos),
        }
    }
}

/// A writable handle to a single bit of a [`BitViewMut`].
///
/// The handle pins down the word and the in-word mask of one position;
/// accesses through it go as directly to the buffer as accesses
/// through the originating view.
#[derive(Debug)]
pub struct BitMut<'a, T: Unsigned> {
    word: &'a mut T,
    mask: T,
}

impl<T: Unsigned> BitMut<'_, T> {
    /// Reads the referenced bit.
    #[inline]
    pub fn get(&self) -> bool {
        *self.word & self.mask != T::ZERO
    }

    /// Writes `value` to the referenced bit.
    #[inline]
    pub fn set(&mut self, value: bool) {
        if value {
            *self.word |= self.mask;
        } else {
            *self.word &= !self.mask;
        }
    }

    /// Inverts the referenced bit.
    #[inline]
    pub fn flip(&mut self) {
        *self.word ^= self.mask;
    }
}
