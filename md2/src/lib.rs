//! An implementation of the [MD2][1] cryptographic hash algorithm.
//!
//! MD2 is broken and must not be used where security matters. This crate
//! exists to reproduce its legacy output bit for bit, e.g. to check old
//! signatures or certificates.
//!
//! Unlike most implementations, the MD2 substitution table is not pasted
//! in as a literal: it is derived from the digits of pi at compile time,
//! see the [`sbox`] module.
//!
//! # Usage
//!
//! ```rust
//! use md2::{Md2, Digest};
//! use hex_literal::hex;
//!
//! // create a Md2 hasher instance
//! let mut hasher = Md2::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("d9cce882ee690a5c1ce70beff3a78c77"));
//! ```
//!
//! For one-shot hashing straight to a hex string:
//!
//! ```rust
//! assert_eq!(md2::hex_digest(b"abc"), "da853b0d3f88d99b30283a69e6ded6bb");
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD2_(hash_function)
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;
#[cfg(feature = "oid")]
use digest::const_oid::{AssociatedOid, ObjectIdentifier};
use digest::{
    block_buffer::Eager,
    consts::U16,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    HashMarker, Output,
};

mod consts;
mod padding;
pub mod sbox;

pub use sbox::SeedError;

/// MD2 block size in bytes.
pub(crate) const BLOCK_SIZE: usize = 16;

/// Number of mixing rounds applied to the state per block.
const ROUNDS: u8 = 18;

/// Returns the MD2 substitution table.
///
/// Byte-for-byte the permutation printed in RFC 1319.
pub fn sbox() -> &'static [u8; 256] {
    &consts::S
}

/// Computes the MD2 digest of `message` as 32 lowercase hex characters.
///
/// Text must be encoded to bytes by the caller.
#[cfg(feature = "alloc")]
pub fn hex_digest(message: &[u8]) -> alloc::string::String {
    hex::encode(Md2::digest(message))
}

/// Core MD2 hasher state.
#[derive(Clone)]
pub struct Md2Core {
    x: [u8; 48],
    checksum: Block<Self>,
}

impl Md2Core {
    fn compress(&mut self, block: &Block<Self>) {
        self.mix(block);
        self.update_checksum(block);
    }

    fn mix(&mut self, block: &Block<Self>) {
        for j in 0..BLOCK_SIZE {
            self.x[16 + j] = block[j];
            self.x[32 + j] = self.x[16 + j] ^ self.x[j];
        }

        // `t` starts from zero for every block
        let mut t = 0u8;
        for j in 0..ROUNDS {
            for k in 0..48 {
                self.x[k] ^= consts::S[t as usize];
                t = self.x[k];
            }
            t = t.wrapping_add(j);
        }
    }

    fn update_checksum(&mut self, block: &Block<Self>) {
        // carry over from the previous block
        let mut l = self.checksum[BLOCK_SIZE - 1];
        for j in 0..BLOCK_SIZE {
            self.checksum[j] ^= consts::S[(block[j] ^ l) as usize];
            l = self.checksum[j];
        }
    }
}

impl HashMarker for Md2Core {}

impl BlockSizeUser for Md2Core {
    type BlockSize = U16;
}

impl BufferKindUser for Md2Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md2Core {
    type OutputSize = U16;
}

impl UpdateCore for Md2Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.compress(block)
        }
    }
}

impl FixedOutputCore for Md2Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let pos = buffer.get_pos();
        let block = buffer.pad_with_zeros();
        padding::pad_block(block, pos);
        self.compress(block);

        let checksum = self.checksum;
        self.mix(&checksum);
        out.copy_from_slice(&self.x[0..16]);
    }
}

impl Default for Md2Core {
    #[inline]
    fn default() -> Self {
        Self {
            x: [0; 48],
            checksum: Default::default(),
        }
    }
}

impl Reset for Md2Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Md2Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md2")
    }
}

#[cfg(feature = "oid")]
impl AssociatedOid for Md2Core {
    const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.2.2");
}

opaque_debug::implement!(Md2Core);

/// MD2 hasher state.
pub type Md2 = CoreWrapper<Md2Core>;
