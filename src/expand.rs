//! Prefix expansion for abbreviated seed and share phrases.
//!
//! Two entry points, both pure functions over immutable word lists passed in
//! by the caller:
//!
//! - [`expand_abbreviated`] expands tokens against a single list (BIP39
//!   phrases). A token that is neither a known prefix nor a full word aborts
//!   the whole phrase with an error, since a wrong seed word is fatal.
//! - [`resolve_share_words`] expands tokens against a primary share list
//!   with a BIP39 fallback (share phrases). It never fails: a token that
//!   cannot be resolved unambiguously passes through unchanged, and the
//!   share decoder downstream rejects bad shares loudly on its own.
//!
//! Both lowercase the input on entry; output is always lowercase.

use anyhow::{Result, bail};

use crate::wordlist::{PREFIX_LEN, WordList};

/// Expands abbreviated tokens against a single word list.
///
/// Tokens longer than four characters are kept as-is (assumed to be full
/// words; the mnemonic parser validates them later). Tokens of four
/// characters or fewer are matched against the list's prefix map first and
/// only then checked for exact membership, so a four-character token that is
/// itself a word never shadows a longer word sharing its spelling as prefix.
///
/// Token count and order are preserved; tokens are rejoined with single
/// spaces.
///
/// # Errors
/// Fails on the first token that is neither a known prefix nor a full word.
/// No partial output is produced.
pub fn expand_abbreviated(phrase: &str, wordlist: &WordList) -> Result<String> {
    let mut expanded = Vec::new();

    for token in phrase.split_whitespace() {
        let token = token.to_lowercase();

        if token.len() > PREFIX_LEN {
            expanded.push(token);
        } else if let Some(word) = wordlist.by_prefix(&token) {
            expanded.push(word.to_string());
        } else if wordlist.contains(&token) {
            // Reachable only if the list violates prefix uniqueness; kept so
            // a full word is never rejected.
            expanded.push(token);
        } else {
            bail!("'{token}' is not a valid word prefix or full word");
        }
    }

    Ok(expanded.join(" "))
}

/// Expands abbreviated tokens against a primary share list, falling back to
/// a secondary BIP39 list for four-character tokens the primary cannot place.
///
/// Per token, in order:
/// 1. an exact primary member is kept untouched;
/// 2. a token of four characters or fewer is scanned against the primary
///    list using the token's own length as the match length. A unique match
///    substitutes; several matches are ambiguous and the token passes
///    through. On zero matches, a token of exactly four characters is looked
///    up in the secondary list's fixed four-character prefix map, and the
///    expansion substitutes only if it is also a primary member;
/// 3. anything else passes through.
///
/// The variable-length primary scan against the fixed-length secondary key
/// is intentional; share recovery parity depends on it.
///
/// This function never fails: every token yields output and the final phrase
/// is validated by whichever codec consumes it.
pub fn resolve_share_words(phrase: &str, primary: &WordList, secondary: &WordList) -> String {
    let mut resolved = Vec::new();

    for token in phrase.split_whitespace() {
        let token = token.to_lowercase();

        if primary.contains(&token) {
            resolved.push(token);
            continue;
        }

        if token.len() > PREFIX_LEN {
            resolved.push(token);
            continue;
        }

        let matches = primary.matching(&token);
        match matches.as_slice() {
            [only] => resolved.push((*only).to_string()),
            [] => {
                let fallback = (token.len() == PREFIX_LEN)
                    .then(|| secondary.by_prefix(&token))
                    .flatten()
                    .filter(|word| primary.contains(word));
                match fallback {
                    Some(word) => resolved.push(word.to_string()),
                    None => resolved.push(token),
                }
            }
            // Ambiguous: do not guess
            _ => resolved.push(token),
        }
    }

    resolved.join(" ")
}
