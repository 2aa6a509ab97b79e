// Tell ECB from CBC by looking at nothing but ciphertext.
//
// ECB encrypts equal plaintext blocks to equal ciphertext blocks, so any
// repeated 16-byte chunk in a ciphertext is a fingerprint of ECB. CBC mixes
// every block with the previous ciphertext block, which makes a repeat as
// unlikely as a random 128-bit collision. The detector is a heuristic: a
// short or high-entropy ECB ciphertext may simply contain no repeats, and
// then it will pass as CBC.

use std::collections::HashMap;

use rand::Rng;

use crate::{cbc_encrypt, ecb_encrypt, Aes128Block, BLOCK_SIZE};

// Bounds for the random byte runs the oracle glues around a message.
const AFFIX_MIN: usize = 5;
const AFFIX_MAX: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
}

/// Classify a ciphertext as ECB or CBC from duplicate-block evidence alone.
pub fn detect_mode(ciphertext: &[u8]) -> Mode {
    if count_duplicate_blocks(ciphertext) > 0 {
        Mode::Ecb
    } else {
        Mode::Cbc
    }
}

/// Count surplus occurrences of repeated 16-byte chunks: a chunk seen n
/// times contributes n - 1. A trailing partial chunk is ignored.
pub fn count_duplicate_blocks(ciphertext: &[u8]) -> usize {
    let mut counts: HashMap<&[u8], usize> = HashMap::new();
    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        *counts.entry(block).or_insert(0) += 1;
    }
    counts.values().filter(|&&count| count > 1).map(|count| count - 1).sum()
}

/// Pick, out of many candidate ciphertexts, the one most likely to be
/// ECB-encrypted: the line with the most duplicate blocks. Ties, including
/// all-zero counts, go to the later line.
pub fn find_ecb_encrypted_line(lines: &[impl AsRef<[u8]>]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (i, line) in lines.iter().enumerate() {
        let duplicates = count_duplicate_blocks(line.as_ref());
        match best {
            Some((_, current)) if duplicates < current => {}
            _ => best = Some((i, duplicates)),
        }
    }
    best
}

/// Encrypt `plaintext` under a freshly random key with a coin-flipped
/// mode, the black box the detector is meant to see through.
///
/// Between 5 and 10 random bytes are glued to each end of the message
/// before encryption; CBC additionally gets a random IV. Returns the
/// ciphertext together with the mode actually used, so a caller can check
/// a detector's verdict against the truth.
pub fn encrypt_with_random_mode<R: Rng>(plaintext: &[u8], rng: &mut R) -> (Vec<u8>, Mode) {
    let prefix_len = rng.gen_range(AFFIX_MIN..=AFFIX_MAX);
    let mut message = random_bytes(rng, prefix_len);
    message.extend_from_slice(plaintext);
    let suffix_len = rng.gen_range(AFFIX_MIN..=AFFIX_MAX);
    message.extend(random_bytes(rng, suffix_len));

    let mut key = [0u8; BLOCK_SIZE];
    rng.fill(&mut key[..]);
    let cipher = Aes128Block::new(&key);

    if rng.gen() {
        (ecb_encrypt(&cipher, &message), Mode::Ecb)
    } else {
        let mut iv = [0u8; BLOCK_SIZE];
        rng.fill(&mut iv[..]);
        (cbc_encrypt(&cipher, &message, &iv), Mode::Cbc)
    }
}

fn random_bytes<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    bytes
}
