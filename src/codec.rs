//! Share mnemonic encoding.
//!
//! A Shamir share is rendered as a phrase drawn from the bundled 1024-entry
//! share word list, with metadata embedded so a share is self-describing:
//!
//! ```text
//! fourword <threshold word> <index word> <data words...>
//! ```
//!
//! Each word carries 10 bits (the list has 1024 entries). The two header
//! words hold the threshold (M) and the 0-based share index as plain word
//! indices. The data section is `length (2 bytes) || share bytes ||
//! CRC32 (4 bytes)`, left-padded with zero bits to a 10-bit boundary; the
//! length prefix makes decoding exact and the checksum catches transcription
//! errors before the share ever reaches secret recovery.
//!
//! # Examples
//!
//! ```rust
//! use fourword::codec::{create_share, parse_share};
//! use fourword::domain::{ShareIndex, Threshold};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mnemonic = create_share(&[0xDE, 0xAD, 0xBE, 0xEF], Threshold::new(3)?, ShareIndex::new(0)?)?;
//! assert!(mnemonic.as_str().starts_with("fourword "));
//!
//! let (threshold, index, data) = parse_share(mnemonic.as_str())?;
//! assert_eq!(*threshold, 3);
//! assert_eq!(*index, 0);
//! assert_eq!(*data, vec![0xDE, 0xAD, 0xBE, 0xEF]);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, anyhow, bail};
use crc::{CRC_32_ISO_HDLC, Crc};
use zeroize::Zeroizing;

use crate::domain::{ShareIndex, Threshold};
use crate::wordlist::{self, WordList};

/// CRC32 algorithm for share integrity checking
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Version word identifying the share format; deliberately absent from both
/// reference word lists
pub const VERSION_WORD: &str = "fourword";

/// Bits carried by one word of the 1024-entry share list
const WORD_BITS: usize = 10;

/// Header words after the version word: threshold, then share index
const HEADER_WORDS: usize = 2;

/// A validated share mnemonic string
///
/// Wraps the phrase in `Zeroizing` so share material is cleared from memory
/// on drop.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareMnemonic(Zeroizing<String>);

impl ShareMnemonic {
    pub(crate) fn new_unchecked(s: String) -> Self {
        Self(Zeroizing::new(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShareMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

fn word_to_index(list: &WordList, word: &str) -> Result<usize> {
    list.position(word)
        .ok_or_else(|| anyhow!("Word '{word}' not found in the share wordlist"))
}

fn word_from_index(list: &WordList, index: usize) -> Result<String> {
    list.word(index)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Word index {index} out of range (must be 0-{})", list.len() - 1))
}

/// Encodes threshold (M) and share index as the two fixed header words
///
/// Both values fit a single 10-bit word each (u8 range), so no continuation
/// scheme is needed.
fn encode_header(list: &WordList, threshold: Threshold, index: ShareIndex) -> Result<[String; 2]> {
    Ok([
        word_from_index(list, *threshold as usize)?,
        word_from_index(list, *index as usize)?,
    ])
}

/// Decodes threshold and share index from the two header words
fn decode_header(list: &WordList, words: &[String]) -> Result<(Threshold, ShareIndex)> {
    if words.len() != HEADER_WORDS {
        bail!(
            "Expected {HEADER_WORDS} header words, got {}",
            words.len()
        );
    }

    let threshold_value = word_to_index(list, &words[0])?;
    let index_value = word_to_index(list, &words[1])?;

    let threshold_u8 =
        u8::try_from(threshold_value).context("Threshold value exceeds u8::MAX (255)")?;
    let index_u8 = u8::try_from(index_value).context("Share index exceeds u8::MAX (255)")?;

    Ok((Threshold::new(threshold_u8)?, ShareIndex::new(index_u8)?))
}

/// Encodes binary data as share-list words, 10 bits per word
///
/// Data is left-padded with zero bits to align with the 10-bit boundary.
fn encode_data(list: &WordList, data: &[u8]) -> Result<Vec<String>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let bit_count = data.len() * 8;
    let padding = (WORD_BITS - (bit_count % WORD_BITS)) % WORD_BITS;
    let word_count = (bit_count + padding) / WORD_BITS;

    let mut words = Vec::with_capacity(word_count);
    let mut bit_buffer: u16 = 0;
    let mut bits_in_buffer = padding; // leading zero bits

    for &byte in data {
        for bit_pos in (0..8).rev() {
            let bit = (byte >> bit_pos) & 1;
            bit_buffer = (bit_buffer << 1) | u16::from(bit);
            bits_in_buffer += 1;

            if bits_in_buffer == WORD_BITS {
                words.push(word_from_index(list, bit_buffer as usize)?);
                bit_buffer = 0;
                bits_in_buffer = 0;
            }
        }
    }

    Ok(words)
}

/// Decodes share-list words back to binary data, dropping the left padding
fn decode_data(
    list: &WordList,
    words: &[String],
    expected_bytes: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    if words.is_empty() {
        return Ok(Zeroizing::new(Vec::new()));
    }

    let expected_bits = expected_bytes * 8;
    let total_bits = words.len() * WORD_BITS;

    if total_bits < expected_bits {
        bail!("Not enough bits: got {total_bits}, expected at least {expected_bits}");
    }

    let padding = total_bits - expected_bits;

    let mut result = Zeroizing::new(Vec::with_capacity(expected_bytes));
    let mut bit_buffer: u16 = 0;
    let mut bits_in_buffer = 0;
    let mut bits_processed = 0;

    for word in words {
        let index = word_to_index(list, word)?;

        for bit_pos in (0..WORD_BITS).rev() {
            let bit = (index >> bit_pos) & 1;

            if bits_processed < padding {
                bits_processed += 1;
                continue;
            }

            #[allow(
                clippy::cast_possible_truncation,
                reason = "bit is 0 or 1 after masking"
            )]
            let bit_u16 = bit as u16;
            bit_buffer = (bit_buffer << 1) | bit_u16;
            bits_in_buffer += 1;

            if bits_in_buffer == 8 {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "bit_buffer holds exactly 8 bits here"
                )]
                let byte = bit_buffer as u8;
                result.push(byte);
                bit_buffer = 0;
                bits_in_buffer = 0;
            }

            bits_processed += 1;
        }
    }

    Ok(result)
}

/// Checks that the length field accounts for the whole frame:
/// `length (2 bytes) || share bytes || CRC32 (4 bytes)`
fn frame_is_complete(data: &[u8]) -> bool {
    data.len() >= 6 && data.len() == 2 + u16::from_be_bytes([data[0], data[1]]) as usize + 4
}

/// Creates a complete share mnemonic from share bytes and metadata
///
/// # Errors
/// Fails if the share data exceeds 65535 bytes or word encoding fails.
pub fn create_share(
    share_data: &[u8],
    threshold: Threshold,
    index: ShareIndex,
) -> Result<ShareMnemonic> {
    let list = wordlist::slip39();

    if share_data.len() > u16::MAX as usize {
        bail!(
            "Share data too large: {} bytes (max 65535)",
            share_data.len()
        );
    }

    let checksum = CRC32.checksum(share_data);

    // length (2 bytes) || share_data || checksum (4 bytes)
    let mut encoded_data = Zeroizing::new(Vec::with_capacity(2 + share_data.len() + 4));
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length validated against u16::MAX above"
    )]
    let length = share_data.len() as u16;
    encoded_data.extend_from_slice(&length.to_be_bytes());
    encoded_data.extend_from_slice(share_data);
    encoded_data.extend_from_slice(&checksum.to_be_bytes());

    let mut words = vec![VERSION_WORD.to_string()];
    words.extend(encode_header(list, threshold, index)?);
    words.extend(encode_data(list, &encoded_data)?);

    Ok(ShareMnemonic::new_unchecked(words.join(" ")))
}

/// Parses a share mnemonic into threshold, share index and share bytes
///
/// # Errors
/// Fails on a wrong version word, unknown words, a malformed header, a short
/// data section or a checksum mismatch.
pub fn parse_share(mnemonic: &str) -> Result<(Threshold, ShareIndex, Zeroizing<Vec<u8>>)> {
    let list = wordlist::slip39();
    let words: Vec<String> = mnemonic.split_whitespace().map(str::to_lowercase).collect();

    if words.is_empty() {
        bail!("Empty share mnemonic");
    }

    if words[0] != VERSION_WORD {
        bail!(
            "Invalid version word: expected '{}', got '{}'",
            VERSION_WORD,
            words[0]
        );
    }

    if words.len() < 1 + HEADER_WORDS + 1 {
        bail!("Share mnemonic too short: need version, header and data words");
    }

    let (threshold, index) = decode_header(list, &words[1..=HEADER_WORDS])?;

    let data_words = &words[1 + HEADER_WORDS..];

    // Upper bound on payload size from the word count; the embedded length
    // field pins down the exact size below
    let max_bytes = data_words.len() * WORD_BITS / 8;
    let mut encoded_data = decode_data(list, data_words, max_bytes)?;

    // Bit alignment prepends exactly one zero byte when the encoded length
    // is congruent to 4 modulo 5; the length field decides which framing
    // holds
    if !frame_is_complete(&encoded_data) && encoded_data.first() == Some(&0) {
        encoded_data.remove(0);
    }

    if encoded_data.len() < 6 {
        bail!(
            "Encoded data too short: need at least 6 bytes (length + checksum), got {}",
            encoded_data.len()
        );
    }

    let share_data_len = u16::from_be_bytes([encoded_data[0], encoded_data[1]]) as usize;

    let expected_total_len = 2 + share_data_len + 4;
    if encoded_data.len() != expected_total_len {
        bail!(
            "Encoded data size mismatch: expected {} bytes (2 + {} + 4), got {}",
            expected_total_len,
            share_data_len,
            encoded_data.len()
        );
    }

    let share_data = &encoded_data[2..2 + share_data_len];
    let checksum_start = 2 + share_data_len;
    let checksum_bytes = &encoded_data[checksum_start..checksum_start + 4];

    let expected_checksum = CRC32.checksum(share_data);
    let actual_checksum = u32::from_be_bytes([
        checksum_bytes[0],
        checksum_bytes[1],
        checksum_bytes[2],
        checksum_bytes[3],
    ]);

    if expected_checksum != actual_checksum {
        bail!(
            "Checksum verification failed: expected 0x{expected_checksum:08x}, got 0x{actual_checksum:08x}"
        );
    }

    Ok((threshold, index, Zeroizing::new(share_data.to_vec())))
}
