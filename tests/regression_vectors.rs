//! Frozen regression vectors for every variant.
//!
//! All expected values are frozen snapshots: any change in output indicates
//! a regression. The byte-hex and small-alphabet tables are interoperability
//! vectors shared with the JavaScript SCHA scripts, so they must never be
//! regenerated from this crate.

use scha::{hash, hash_with, SpinHasher, Variant};

/// `hash("Lorem Ipsum Dolor Sit Amet.", 256)`, byte-hex.
const LOREM_BYTE_HEX_256: &str = concat!(
    "953e8cb3c73a8e0ea1476d16611835eab5db3ac9ba3ae0a2f394fe2eb74df760",
    "e030778c6ce76ec92a0aace17da8a42a3cdb1f45e8fb178add4c410f1e632c92",
    "0709ba0cac006b65799658824ace2b9259546bb57f79f6fa41fe08f85ab7f15a",
    "abcf9a6817d7a6932be97099981bb6ee9b60ccdab6c850105a943f841961887d",
    "3b37c630608d7c5dd16ece71d902dcf8bc32e45aceda367b9d78b69d1b6bd8ca",
    "4aae2b0f725b3f7ba1cfa04188652f561a46dad073347f08ee67dd311a49f1c9",
    "34a9cebb7eb5b524afc00f8e7839bae47108210db697e8296875b34cba2f3bee",
    "6a209513cec05a33146531c428ebafe982d732fa2345d2feb3c7ba7d20c3006a",
);

/// `hash_with(SmallAlphabet, "Lorem Ipsum Dolor Sit Amet.", 256)`.
const LOREM_SMALL_ALPHABET_256: &str = concat!(
    "aio  aa i  aiuaui aooa oaa oai ou   iouuiuouoouia ooaoa ioouo io",
    "o uiauoouuau aiuauaoiooouaaaoaaoui  uui aua uoo    oaiao  aauaiu",
    " oaa u iu oaiuua uaoo   i iai oiuuiu uuuooouiuiiouaaiaiaioo o oo",
    "aaiioiooai auooa  iuoiio  oiiu aoi  iiuouuuou uauuuuuau   o i uo",
);

const BYTE_HEX_VECTORS: &[(&str, usize, &str)] = &[
    ("", 1, "fe"),
    ("", 16, "f56750f14426ab14d82ccdc2b6f5464e"),
    ("a", 1, "e5"),
    ("abc", 3, "0e7414"),
    ("abcdef", 4, "44438cb1"),
    ("hello", 16, "3e6adb3387a17b137344517531dc5e6a"),
    ("hello world", 8, "d0a563507160724c"),
    ("Hello world", 8, "40dd339a48dabd55"),
    ("h\u{e9}llo \u{2603} \u{1f63a}", 16, "6be4f4df46155ee10c22bd993c02b2f0"),
    (
        "The quick brown fox jumps over the lazy dog",
        32,
        "84eda34072d16c4b05d4506c884bcce20029101f17a55660f80887f95eead644",
    ),
];

const SMALL_ALPHABET_VECTORS: &[(&str, usize, &str)] = &[
    ("", 1, "u"),
    ("", 16, "iauioaoooouaauu "),
    ("a", 1, " "),
    ("abc", 3, " io"),
    ("abcdef", 4, "uoui"),
    ("hello", 16, "ouauuoi i oi o o"),
    ("hello world", 8, "a  u   o"),
    ("Hello world", 8, " oa aa u"),
    ("h\u{e9}llo \u{2603} \u{1f63a}", 16, "aaoaoo ua aa iiu"),
    ("The quick brown fox jumps over the lazy dog", 32, " ia u auoioao i oooaiuui auaaia "),
];

const WIDE_HEX_VECTORS: &[(&str, usize, &str)] = &[
    ("", 4, "10c2463e787370e8"),
    ("a", 1, "8b41"),
    ("abc", 3, "b8d0b23fd365"),
    ("hello", 8, "ea9b52de09b0bfcae712e471138978f8"),
    ("h\u{e9}llo \u{2603} \u{1f63a}", 5, "ac9068073408234eec3b"),
    (
        "Lorem Ipsum Dolor Sit Amet.",
        16,
        "e60294235436e51aa06d0e1b771fc231b1e05b9281d7efb604567dff878ebc63",
    ),
];

const LOREM: &str = "Lorem Ipsum Dolor Sit Amet.";

// ═══════════════════════════════════════════════════════════════════════
// Reference scenario
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn lorem_ipsum_byte_hex_256() {
    let digest = hash(LOREM, 256).unwrap();
    assert_eq!(digest.len(), 512);
    assert_eq!(digest, LOREM_BYTE_HEX_256);
}

#[test]
fn lorem_ipsum_small_alphabet_256() {
    let digest = hash_with(Variant::SmallAlphabet, LOREM, 256).unwrap();
    assert_eq!(digest.chars().count(), 256);
    assert_eq!(digest, LOREM_SMALL_ALPHABET_256);
}

#[test]
fn lorem_ipsum_is_stable_across_hasher_instances() {
    for _ in 0..3 {
        let hasher = SpinHasher::with_length(256).unwrap();
        assert_eq!(hasher.hash(LOREM), LOREM_BYTE_HEX_256);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Frozen tables
// ═══════════════════════════════════════════════════════════════════════

fn check_table(variant: Variant, table: &[(&str, usize, &str)]) {
    for &(text, length, expected) in table {
        let digest = hash_with(variant, text, length).unwrap();
        assert_eq!(
            digest, expected,
            "{} mismatch for text={:?} length={}",
            variant, text, length
        );
    }
}

#[test]
fn byte_hex_frozen_vectors() {
    check_table(Variant::ByteHex, BYTE_HEX_VECTORS);
}

#[test]
fn small_alphabet_frozen_vectors() {
    check_table(Variant::SmallAlphabet, SMALL_ALPHABET_VECTORS);
}

#[test]
fn wide_hex_frozen_vectors() {
    check_table(Variant::WideHex, WIDE_HEX_VECTORS);
}

/// Long input: the digest exceeds the 2^16 seed modulus, exercising the
/// `digest mod M` branch instead of the subtraction branch.
#[test]
fn long_input_frozen_vectors() {
    let text = "x".repeat(1000);
    assert_eq!(
        hash_with(Variant::ByteHex, &text, 16).unwrap(),
        "f443313722bd5b3b08c23c09c24d7dbb"
    );
    assert_eq!(
        hash_with(Variant::SmallAlphabet, &text, 16).unwrap(),
        " oua uuaa u  aoi"
    );
    assert_eq!(
        hash_with(Variant::WideHex, &text, 16).unwrap(),
        "ad22992168a94b926d09d4603a9703f0ea529592f9a3a3e88a7bcdbefd59cabe"
    );
}
