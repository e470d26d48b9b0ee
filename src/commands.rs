//! Split and combine orchestration.
//!
//! Both commands run the prefix-expansion engine over their input before any
//! cryptographic work: `split` expands abbreviated BIP39 words strictly,
//! `combine` resolves abbreviated share words leniently and lets the share
//! codec reject anything that is still wrong.

use anyhow::{Context, Result, anyhow, bail};
use bip39::{Language, Mnemonic};
use blahaj::Sharks;
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::{ShareIndex, SplitConfig};
use crate::expand::{expand_abbreviated, resolve_share_words};
use crate::wordlist;

/// Split a BIP39 mnemonic into Shamir secret shares encoded as share
/// mnemonics
///
/// Input words may be abbreviated to their first four characters; they are
/// expanded against the BIP39 list before parsing.
///
/// # Errors
/// Returns an error if a word cannot be expanded, the expanded mnemonic is
/// invalid, or share creation/encoding fails.
pub fn split_mnemonic(phrase: &str, config: SplitConfig) -> Result<Vec<String>> {
    let full_phrase = Zeroizing::new(
        expand_abbreviated(phrase, wordlist::bip39())
            .context("Failed to expand abbreviated seed words")?,
    );

    let mnemonic = Mnemonic::parse_in(Language::English, full_phrase.as_str())
        .context("Failed to parse input mnemonic")?;
    let entropy = Zeroizing::new(mnemonic.to_entropy());

    let threshold = config.threshold();
    let num_shares = *config.share_count();

    let sharks = Sharks(*threshold);
    let dealer = sharks.dealer(&entropy);
    let share_vec: Vec<_> = dealer.take(num_shares as usize).collect();

    let mut share_mnemonics = Vec::with_capacity(share_vec.len());
    for (idx, share) in share_vec.iter().enumerate() {
        let share_bytes = Zeroizing::new(Vec::from(share));

        // idx < num_shares, which is u8
        let idx_u8 =
            u8::try_from(idx).unwrap_or_else(|_| unreachable!("idx < share count fits in u8"));
        let share_mnemonic =
            codec::create_share(&share_bytes, threshold, ShareIndex::new(idx_u8)?)?;

        share_mnemonics.push(share_mnemonic.to_string());
    }

    Ok(share_mnemonics)
}

/// Combine share mnemonics to reconstruct the original BIP39 mnemonic
///
/// Each share phrase is first run through the dual-list resolver (primary:
/// share list, secondary: BIP39), so abbreviated share words are restored
/// before decoding.
///
/// # Errors
/// Returns an error if a share fails to decode, thresholds disagree across
/// shares, too few shares are provided, or recovery fails.
pub fn combine_shares(share_strings: &[String]) -> Result<String> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let primary = wordlist::slip39();
    let secondary = wordlist::bip39();

    let mut parsed_shares = Vec::new();
    let mut threshold_from_shares = None;

    for (idx, share_str) in share_strings.iter().enumerate() {
        let resolved = Zeroizing::new(resolve_share_words(share_str, primary, secondary));

        let (threshold, _share_index, share_data) = codec::parse_share(&resolved)
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;

        match threshold_from_shares {
            None => {
                threshold_from_shares = Some(threshold);
            }
            Some(t) if t != threshold => {
                bail!(
                    "Share #{} has inconsistent threshold: expected {}, got {}",
                    idx + 1,
                    *t,
                    *threshold
                );
            }
            _ => {}
        }

        let share = blahaj::Share::try_from(share_data.as_slice())
            .map_err(|e| anyhow!("Failed to create share from data: {e:?}"))?;

        parsed_shares.push(share);
    }

    let threshold = threshold_from_shares.ok_or_else(|| anyhow!("No valid shares found"))?;

    let threshold_val = *threshold;
    if parsed_shares.len() < threshold_val as usize {
        bail!(
            "Insufficient shares: need at least {}, but only {} provided",
            threshold_val,
            parsed_shares.len()
        );
    }

    let sharks = Sharks(threshold_val);
    let recovered = Zeroizing::new(
        sharks
            .recover(&parsed_shares)
            .map_err(|e| anyhow!("Failed to recover secret: {e:?}"))?,
    );

    let mnemonic = Mnemonic::from_entropy(&recovered)
        .context("Failed to create mnemonic from recovered entropy")?;

    Ok(mnemonic.to_string())
}
