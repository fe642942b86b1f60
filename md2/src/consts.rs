use crate::sbox::{derive, PI_DIGITS};

/// MD2 substitution table, built from the digits of pi at compile time.
pub(crate) static S: [u8; 256] = match derive(PI_DIGITS) {
    Ok(s) => s,
    Err(_) => panic!("pi seed is too short to derive the MD2 S-box"),
};
