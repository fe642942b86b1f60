//! Derivation of the MD2 substitution table from the digits of pi.
//!
//! RFC 1319 describes `S` as a "random" permutation of `0..=255` built
//! from the digits of pi, but only prints the finished table. This module
//! rebuilds it: starting from the identity permutation, step `i` (for
//! `i` in `1..=255`) swaps `S[i]` with `S[j]`, where `j` is drawn from
//! `0..=i` by reading one, two or three digits at a time and rejecting
//! draws that would bias the modulo reduction.
//!
//! Everything here is `const fn`, so the crate table is computed by the
//! compiler and a bad seed is a build failure rather than a run-time one.

use core::fmt;

/// The first 722 decimal digits of pi as ASCII, leading `3` included.
///
/// This is exactly the number of digits [`derive`] consumes.
pub const PI_DIGITS: &[u8; 722] = b"\
    3141592653589793238462643383279502884197169399375105820974944592\
    3078164062862089986280348253421170679821480865132823066470938446\
    0955058223172535940812848111745028410270193852110555964462294895\
    4930381964428810975665933446128475648233786783165271201909145648\
    5669234603486104543266482133936072602491412737245870066063155881\
    7488152092096282925409171536436789259036001133053054882046652138\
    4146951941511609433057270365759591953092186117381932611793105118\
    5480744623799627495673518857527248912279381830119491298336733624\
    4065664308602139494639522473719070217986094370277053921717629317\
    6752384674818467669405132000568127145263560827785771342757789609\
    1736371787214684409012249534301465495853710507922796892589235420\
    199561121290219608";

/// Error returned when a seed cannot produce a full permutation.
///
/// This signals a broken seed, not bad input to the hash function: with
/// [`PI_DIGITS`] it never happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// The seed ran out of digits before a draw was accepted.
    Exhausted,
    /// The seed contains a byte which is not an ASCII decimal digit.
    InvalidDigit {
        /// Offset of the offending byte in the seed.
        position: usize,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Exhausted => f.write_str("seed exhausted before S-box was complete"),
            SeedError::InvalidDigit { position } => {
                write!(f, "seed byte at offset {} is not a decimal digit", position)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeedError {}

/// Draws a value uniformly from `0..n`, reading digits from `digits[cursor..]`.
///
/// Returns the drawn value and the cursor just past the last digit read.
/// Groups are 1, 2 or 3 digits wide for `n` up to 10, 100 and 1000
/// respectively. A group `x` is accepted only if `x < n * (10^width / n)`,
/// otherwise the next group is read. `n` must be in `1..=1000`.
pub(crate) const fn draw(
    digits: &[u8],
    mut cursor: usize,
    n: usize,
) -> Result<(usize, usize), SeedError> {
    let (width, range) = if n <= 10 {
        (1, 10)
    } else if n <= 100 {
        (2, 100)
    } else {
        (3, 1000)
    };
    let limit = n * (range / n);

    loop {
        if cursor + width > digits.len() {
            return Err(SeedError::Exhausted);
        }

        let mut x = 0;
        let mut k = 0;
        while k < width {
            let d = digits[cursor + k];
            if !d.is_ascii_digit() {
                return Err(SeedError::InvalidDigit {
                    position: cursor + k,
                });
            }
            x = 10 * x + (d - b'0') as usize;
            k += 1;
        }
        cursor += width;

        if x < limit {
            return Ok((x % n, cursor));
        }
    }
}

/// Builds the MD2 substitution table from a string of ASCII decimal digits.
///
/// Usable in `const` context. Digits past the last accepted draw are
/// ignored.
///
/// # Usage
///
/// ```rust
/// use md2::sbox::{derive, PI_DIGITS};
///
/// const S: [u8; 256] = match derive(PI_DIGITS) {
///     Ok(s) => s,
///     Err(_) => panic!("bad seed"),
/// };
/// assert_eq!(&S, md2::sbox());
/// ```
pub const fn derive(digits: &[u8]) -> Result<[u8; 256], SeedError> {
    let mut s = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        s[i] = i as u8;
        i += 1;
    }

    let mut cursor = 0;
    let mut i = 1;
    while i < 256 {
        let j = match draw(digits, cursor, i + 1) {
            Ok((j, next)) => {
                cursor = next;
                j
            }
            Err(e) => return Err(e),
        };
        let t = s[i];
        s[i] = s[j];
        s[j] = t;
        i += 1;
    }

    Ok(s)
}
