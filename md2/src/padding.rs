//! MD2 padding: `i` bytes of value `i` are appended so that the padded
//! message length is a multiple of the block size. `i` is never zero.

use crate::BLOCK_SIZE;

/// Number of padding bytes for a message of `len` bytes, always in `1..=16`.
#[inline]
pub(crate) const fn pad_len(len: usize) -> u8 {
    (BLOCK_SIZE - len % BLOCK_SIZE) as u8
}

/// Fills a final block which holds `pos` message bytes with padding.
#[inline]
pub(crate) fn pad_block(block: &mut [u8], pos: usize) {
    let v = pad_len(pos);
    block[pos..].iter_mut().for_each(|b| *b = v);
}
