//! Split BIP39 seed phrases into Shamir secret shares and recombine them,
//! accepting words abbreviated to their leading characters on input.
//!
//! The interesting part lives in [`expand`]: abbreviated tokens are restored
//! to full words against the reference word lists in [`wordlist`] before any
//! cryptographic processing happens. Entropy decoding and secret sharing are
//! delegated to the `bip39` and `blahaj` crates.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod expand;
pub mod wordlist;
