//! Property tests for share mnemonic encoding/decoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use fourword::codec;
use fourword::domain::{ShareIndex, Threshold};

/// Wrapper for arbitrary byte vectors
#[derive(Clone, Debug)]
struct ByteVec(Vec<u8>);

impl Arbitrary for ByteVec {
    fn arbitrary(g: &mut Gen) -> Self {
        ByteVec(Vec::arbitrary(g))
    }
}

/// Wrapper for byte vectors large enough that the length field's high byte
/// is nonzero
#[derive(Clone, Debug)]
struct LargeByteVec(Vec<u8>);

impl Arbitrary for LargeByteVec {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 768 + 256;
        let mut bytes = vec![0u8; len];
        for byte in &mut bytes {
            *byte = u8::arbitrary(g);
        }
        LargeByteVec(bytes)
    }
}

/// Share data is exactly preserved through an encode/decode cycle, along
/// with its metadata; the length prefix rules out padding drift
#[quickcheck]
fn prop_complete_share_round_trip(data: ByteVec, threshold: u8, index: u8) -> bool {
    let ByteVec(bytes) = data;

    let Ok(threshold_newtype) = Threshold::new(threshold) else {
        return true;
    };
    let Ok(index_newtype) = ShareIndex::new(index) else {
        return true;
    };

    let Ok(mnemonic) = codec::create_share(&bytes, threshold_newtype, index_newtype) else {
        return true;
    };

    if !mnemonic.as_str().starts_with("fourword ") {
        return false;
    }

    let Ok((parsed_threshold, parsed_index, parsed_data)) = codec::parse_share(mnemonic.as_str())
    else {
        return false;
    };

    threshold == *parsed_threshold && index == *parsed_index && bytes == *parsed_data
}

/// Payloads of 256 bytes and up round-trip regardless of how the frame
/// lands on the 10-bit word boundary
#[quickcheck]
fn prop_large_share_round_trip(data: LargeByteVec, index: u8) -> bool {
    let LargeByteVec(bytes) = data;

    let Ok(index_newtype) = ShareIndex::new(index) else {
        return true;
    };
    let threshold_newtype = Threshold::new(2).unwrap();

    let Ok(mnemonic) = codec::create_share(&bytes, threshold_newtype, index_newtype) else {
        return false;
    };

    codec::parse_share(mnemonic.as_str())
        .is_ok_and(|(_, parsed_index, parsed_data)| index == *parsed_index && bytes == *parsed_data)
}

/// A phrase not opening with the version word is always rejected
#[quickcheck]
fn prop_invalid_version_word_rejected(words: Vec<String>) -> bool {
    if words.is_empty() {
        return true;
    }

    let mut invalid_words = words;
    invalid_words[0] = "invalid".to_string();
    let invalid_mnemonic = invalid_words.join(" ");

    codec::parse_share(&invalid_mnemonic).is_err()
}

/// Replacing a data word is caught by the CRC32 trailer (or an earlier
/// structural check)
#[quickcheck]
fn prop_checksum_detects_corruption(data: ByteVec, threshold: u8, index: u8) -> bool {
    let ByteVec(bytes) = data;
    if bytes.is_empty() {
        return true;
    }

    let Ok(threshold_newtype) = Threshold::new(threshold) else {
        return true;
    };
    let Ok(index_newtype) = ShareIndex::new(index) else {
        return true;
    };

    let Ok(mnemonic) = codec::create_share(&bytes, threshold_newtype, index_newtype) else {
        return true;
    };

    let words: Vec<&str> = mnemonic.as_str().split_whitespace().collect();
    if words.len() < 5 {
        return true;
    }

    let mut corrupted_words = words.clone();
    let last = corrupted_words.len() - 1;
    corrupted_words[last] = if corrupted_words[last] == "academic" {
        "zero"
    } else {
        "academic"
    };

    codec::parse_share(&corrupted_words.join(" ")).is_err()
}
