//! Property tests for the prefix expansion core

use bip39::Mnemonic;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use fourword::expand::{expand_abbreviated, resolve_share_words};
use fourword::wordlist;

/// A single whitespace-free token of printable characters
#[derive(Clone, Debug)]
struct Token(String);

impl Arbitrary for Token {
    fn arbitrary(g: &mut Gen) -> Self {
        let alphabet = [
            'a', 'b', 'c', 'e', 'i', 'o', 's', 't', 'x', 'y', 'z', 'A', 'Z', '0', '9', '-', '?',
        ];
        let len = usize::arbitrary(g) % 10 + 1;
        let s: String = (0..len).map(|_| *g.choose(&alphabet).unwrap()).collect();
        Token(s)
    }
}

/// Wrapper for valid BIP39 mnemonics (12 or 24 words)
#[derive(Clone, Debug)]
struct ValidMnemonic(Mnemonic);

impl Arbitrary for ValidMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        let entropy_size = if bool::arbitrary(g) { 16 } else { 32 };

        let mut entropy = vec![0u8; entropy_size];
        for byte in &mut entropy {
            *byte = u8::arbitrary(g);
        }

        ValidMnemonic(Mnemonic::from_entropy(&entropy).expect("Valid entropy"))
    }
}

fn count_tokens(s: &str) -> usize {
    s.split_whitespace().count()
}

/// The resolver never fails and always yields one output token per input
/// token, whatever the input
#[quickcheck]
fn prop_resolve_preserves_token_count(tokens: Vec<Token>) -> bool {
    let phrase = tokens
        .iter()
        .map(|t| t.0.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let resolved = resolve_share_words(&phrase, wordlist::slip39(), wordlist::bip39());
    count_tokens(&resolved) == count_tokens(&phrase)
}

/// Full share-list words pass through the resolver untouched
#[quickcheck]
fn prop_resolve_idempotent_on_share_words(indices: Vec<u16>) -> bool {
    let list = wordlist::slip39();
    let phrase = indices
        .iter()
        .map(|&idx| list.word(usize::from(idx) % list.len()).unwrap())
        .collect::<Vec<_>>()
        .join(" ");

    resolve_share_words(&phrase, list, wordlist::bip39()) == phrase
}

/// Expanding a full valid mnemonic is the identity
#[quickcheck]
fn prop_expand_idempotent_on_full_words(mnemonic: ValidMnemonic) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let phrase = inner.to_string();

    expand_abbreviated(&phrase, wordlist::bip39()).is_ok_and(|out| out == phrase)
}

/// Abbreviating every word of a valid mnemonic to its first four characters
/// and expanding recovers the original phrase exactly (BIP39 guarantees the
/// first four letters identify a word uniquely)
#[quickcheck]
fn prop_expand_recovers_abbreviated_mnemonic(mnemonic: ValidMnemonic) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let phrase = inner.to_string();

    let abbreviated = phrase
        .split_whitespace()
        .map(|word| &word[..word.len().min(4)])
        .collect::<Vec<_>>()
        .join(" ");

    expand_abbreviated(&abbreviated, wordlist::bip39()).is_ok_and(|out| out == phrase)
}

/// Expansion preserves token count whenever it succeeds
#[quickcheck]
fn prop_expand_preserves_token_count(mnemonic: ValidMnemonic) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let phrase = inner.to_string();

    expand_abbreviated(&phrase, wordlist::bip39())
        .is_ok_and(|out| count_tokens(&out) == count_tokens(&phrase))
}
