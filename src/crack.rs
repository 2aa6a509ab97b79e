// Break single-byte and repeating-key XOR ciphers.
//
// The single-byte breaker tries all 256 keys and keeps the decryption that
// scores most like English. The repeating-key breaker reduces its problem
// to the single-byte one: guess the key length from the ciphertext, regroup
// the bytes so that everything XORed with the same key byte sits together,
// and crack each group independently.

use rayon::prelude::*;

use crate::{estimate_keysize, group_by_key_index, repeating_key_xor, score_english};

// Every candidate single-byte key, in enumeration order. The tie-break in
// crack_single_byte_xor is committed to this order, so the table is pinned
// once instead of being rebuilt at each call site.
const KEY_CANDIDATES: [u8; 256] = {
    let mut keys = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        keys[i] = i as u8;
        i += 1;
    }
    keys
};

pub struct SingleByteCrack {
    pub key: u8,
    pub score: u32,
    pub plaintext: Vec<u8>,
}

/// Find the single-byte XOR key whose decryption of `block` looks most
/// like English.
///
/// All 256 candidates are scored on every call; there is no early exit, so
/// low-entropy inputs cannot skew the search. Candidates are scored in
/// parallel but the winner is picked by a sequential pass in enumeration
/// order, where an equal score replaces the current best (last seen wins).
/// The keysize estimator resolves its ties the other way round; the two
/// rules must not be unified.
pub fn crack_single_byte_xor(block: &[u8]) -> SingleByteCrack {
    let candidates: Vec<(u8, u32, Vec<u8>)> = KEY_CANDIDATES
        .par_iter()
        .map(|&key| {
            let plaintext: Vec<u8> = block.iter().map(|b| b ^ key).collect();
            let score = score_english(&plaintext);
            (key, score, plaintext)
        })
        .collect();

    let mut best = SingleByteCrack {
        key: 0,
        score: 0,
        plaintext: Vec::new(),
    };
    for (key, score, plaintext) in candidates {
        if score >= best.score {
            best = SingleByteCrack { key, score, plaintext };
        }
    }
    best
}

/// Recover a repeating XOR key of known length by cracking each key index
/// as an independent single-byte cipher.
pub fn recover_repeating_key(ciphertext: &[u8], keysize: usize) -> Vec<u8> {
    group_by_key_index(ciphertext, keysize)
        .iter()
        .map(|group| crack_single_byte_xor(group).key)
        .collect()
}

/// Break a repeating-key XOR ciphertext without knowing the key length.
///
/// Returns the recovered key and plaintext, or `None` when the ciphertext
/// is too short to support a keysize estimate.
pub fn crack_repeating_key_xor(ciphertext: &[u8]) -> Option<(Vec<u8>, Vec<u8>)> {
    let guess = estimate_keysize(ciphertext)?;
    let key = recover_repeating_key(ciphertext, guess.keysize);
    let plaintext = repeating_key_xor(ciphertext, &key);
    Some((key, plaintext))
}

/// Pick, out of many candidate ciphertexts, the one most likely to be a
/// single-byte XOR encryption of English text.
///
/// Returns the winning line's index and its crack result. Ties on score go
/// to the later line, the same rule the single-byte breaker uses.
pub fn find_single_byte_xor_line(lines: &[impl AsRef<[u8]>]) -> Option<(usize, SingleByteCrack)> {
    let mut best: Option<(usize, SingleByteCrack)> = None;
    for (i, line) in lines.iter().enumerate() {
        let crack = crack_single_byte_xor(line.as_ref());
        match &best {
            Some((_, current)) if crack.score < current.score => {}
            _ => best = Some((i, crack)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_single_byte_xor_ciphertext() {
        let ciphertext =
            hex::decode("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736")
                .unwrap();

        let crack = crack_single_byte_xor(&ciphertext);

        assert_eq!(crack.key, 88);
        assert_eq!(crack.plaintext, b"Cooking MC's like a pound of bacon");
    }

    #[test]
    fn empty_input_falls_through_to_the_last_candidate() {
        let crack = crack_single_byte_xor(b"");

        assert_eq!(crack.key, 255);
        assert_eq!(crack.score, 0);
        assert!(crack.plaintext.is_empty());
    }

    #[test]
    fn breaks_repeating_key_xor_without_knowing_the_key() {
        let plaintext = std::fs::read("./data/english.txt").unwrap();
        let key = b"Terminator X: Bring the noise";
        let ciphertext = repeating_key_xor(&plaintext, key);

        let (found_key, found_plaintext) = crack_repeating_key_xor(&ciphertext).unwrap();

        assert_eq!(found_key, key);
        assert_eq!(found_plaintext, plaintext);
    }

    #[test]
    fn recovers_key_of_known_length() {
        let plaintext = std::fs::read("./data/english.txt").unwrap();
        let ciphertext = repeating_key_xor(&plaintext, b"VANILLA");

        let key = recover_repeating_key(&ciphertext, 7);

        assert_eq!(key, b"VANILLA");
    }

    #[test]
    fn finds_the_encrypted_line_among_decoys() {
        // The decoys are short enough that even a perfect score over every
        // byte cannot reach the real line's score.
        let encrypted: Vec<u8> = b"Now that the party is jumping with the bass kicked in"
            .iter()
            .map(|b| b ^ 0x35)
            .collect();
        let lines: Vec<Vec<u8>> = vec![
            vec![0x81, 0x9f, 0x03, 0xe2, 0x7b, 0xaa],
            encrypted,
            vec![0xff, 0x10, 0x44, 0x5c, 0x9d, 0x02],
        ];

        let (index, crack) = find_single_byte_xor_line(&lines).unwrap();

        assert_eq!(index, 1);
        assert_eq!(crack.key, 0x35);
        assert_eq!(
            crack.plaintext,
            b"Now that the party is jumping with the bass kicked in"
        );
    }

    #[test]
    fn no_lines_means_no_winner() {
        let lines: Vec<Vec<u8>> = Vec::new();

        assert!(find_single_byte_xor_line(&lines).is_none());
    }
}
