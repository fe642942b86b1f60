use digest::dev::fixed_reset_test;
use hex_literal::hex;
use md2::{Digest, Md2};

/// Test suite from RFC 1319, appendix A.5.
const RFC1319: &[(&[u8], [u8; 16])] = &[
    (b"", hex!("8350e5a3e24c153df2275c9f80692773")),
    (b"a", hex!("32ec01ec4a6dac72c0ab96fb34c0b5d1")),
    (b"abc", hex!("da853b0d3f88d99b30283a69e6ded6bb")),
    (b"message digest", hex!("ab4f496bfb2a530b219ff33031fe06b0")),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        hex!("4e8ddff3650292ab5a4108c3aa47940b"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex!("da33def2a42df13975352846c30338cd"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex!("d5976f79d83d3a0dc9806c3c66f3efd8"),
    ),
];

#[test]
fn md2_rfc1319() {
    for (input, output) in RFC1319 {
        assert_eq!(Md2::digest(input)[..], output[..]);
    }
}

#[test]
fn md2_fixed_reset() {
    for (input, output) in RFC1319 {
        if let Some(desc) = fixed_reset_test::<Md2>(input, output) {
            panic!("input {:?} failed: {}", input, desc);
        }
    }
}

#[test]
fn md2_block_boundaries() {
    // whole blocks still get a full block of padding
    assert_eq!(
        Md2::digest(b"0123456789abcde")[..],
        hex!("d95629645108a20ab4d70e8545e0723b")
    );
    assert_eq!(
        Md2::digest(b"0123456789abcdef")[..],
        hex!("12c8dfa285f14e1af8c5254e7092d0d3")
    );
    assert_eq!(
        Md2::digest(b"0123456789abcdef0123456789abcdef")[..],
        hex!("47c291dfc979fbae4a75cd477bc96cdd")
    );
    assert_eq!(
        Md2::digest([0u8; 16])[..],
        hex!("3e32fe6c199520c0ca4f0e8c28ef2786")
    );
}

#[test]
fn md2_split_updates() {
    let (msg, expected) = RFC1319[6];
    for i in 0..=msg.len() {
        let mut hasher = Md2::new();
        hasher.update(&msg[..i]);
        hasher.update(&msg[i..]);
        assert_eq!(hasher.finalize()[..], expected[..]);
    }

    let mut hasher = Md2::new();
    for chunk in msg.chunks(3) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize()[..], expected[..]);
}

#[test]
fn md2_finalize_reset() {
    let mut hasher = Md2::new();
    hasher.update(b"abc");
    assert_eq!(
        hasher.finalize_reset()[..],
        hex!("da853b0d3f88d99b30283a69e6ded6bb")
    );
    assert_eq!(hasher.finalize()[..], hex!("8350e5a3e24c153df2275c9f80692773"));
}

#[test]
fn md2_single_bit_changes_digest() {
    let base = *b"message digest";
    let mut seen = vec![Md2::digest(base)];
    for i in 0..base.len() {
        for bit in 0..8 {
            let mut msg = base;
            msg[i] ^= 1 << bit;
            let d = Md2::digest(msg);
            assert!(!seen.contains(&d), "collision at byte {} bit {}", i, bit);
            seen.push(d);
        }
    }
}

#[test]
fn md2_debug_is_opaque() {
    let core = md2::Md2Core::default();
    assert_eq!(format!("{:?}", core), "Md2Core { ... }");
}

#[cfg(feature = "oid")]
#[test]
fn md2_oid() {
    use digest::const_oid::AssociatedOid;
    assert_eq!(Md2::OID.to_string(), "1.2.840.113549.2.2");
}

#[test]
fn md2_core_buffers_eagerly() {
    use digest::block_buffer::Eager;
    use digest::core_api::BufferKindUser;

    fn eager<T: BufferKindUser<BufferKind = Eager>>() {}
    eager::<md2::Md2Core>();

    // a full block is compressed on update, the final block is all padding
    let mut hasher = Md2::new();
    hasher.update(b"0123456789abcdef");
    assert_eq!(
        hasher.finalize()[..],
        hex!("12c8dfa285f14e1af8c5254e7092d0d3")
    );
}
