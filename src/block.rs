// ECB and CBC chaining built by hand on top of a single-block cipher.
use crate::{pad, xor_blocks};

pub const BLOCK_SIZE: usize = 16;

/// The single-block primitive the chaining modes are built on.
///
/// Implementations transform exactly one block in place. Key schedules and
/// construction failures are the primitive's concern; the modes only ever
/// see a ready cipher.
pub trait BlockCipher {
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]);
    fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]);
}

/// Encrypt under ECB: pad to the block size, then encrypt every block
/// independently.
pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Vec<u8> {
    let padded = pad(plaintext, BLOCK_SIZE);
    let mut ciphertext = Vec::with_capacity(padded.len());
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block: [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
        cipher.encrypt_block(&mut block);
        ciphertext.extend_from_slice(&block);
    }
    ciphertext
}

/// Decrypt an ECB ciphertext block by block.
///
/// The 0x04 filler from encryption is left in place.
// TODO: strip the 0x04 filler here once the padder records its own length
pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Vec<u8> {
    assert_eq!(
        ciphertext.len() % BLOCK_SIZE,
        0,
        "ciphertext length must be a multiple of the block size"
    );
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block: [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
        cipher.decrypt_block(&mut block);
        plaintext.extend_from_slice(&block);
    }
    plaintext
}

/// Encrypt under CBC: each plaintext block is XORed with the previous
/// ciphertext block (the IV for the first) before it meets the cipher.
pub fn cbc_encrypt<C: BlockCipher>(
    cipher: &C,
    plaintext: &[u8],
    iv: &[u8; BLOCK_SIZE],
) -> Vec<u8> {
    let padded = pad(plaintext, BLOCK_SIZE);
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut previous = *iv;
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block: [u8; BLOCK_SIZE] = xor_blocks(chunk, &previous).try_into().unwrap();
        cipher.encrypt_block(&mut block);
        ciphertext.extend_from_slice(&block);
        previous = block;
    }
    ciphertext
}

/// Decrypt a CBC ciphertext. No authentication happens here: a tampered
/// ciphertext decrypts silently into garbage.
pub fn cbc_decrypt<C: BlockCipher>(
    cipher: &C,
    ciphertext: &[u8],
    iv: &[u8; BLOCK_SIZE],
) -> Vec<u8> {
    assert_eq!(
        ciphertext.len() % BLOCK_SIZE,
        0,
        "ciphertext length must be a multiple of the block size"
    );
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut previous = *iv;
    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block: [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
        cipher.decrypt_block(&mut block);
        plaintext.extend(xor_blocks(&block, &previous));
        // chaining always advances on the raw ciphertext block, never on
        // the decrypted output
        previous = chunk.try_into().unwrap();
    }
    plaintext
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{pad, Aes128Block};

    const KEY: &[u8; 16] = b"YELLOW SUBMARINE";

    #[test]
    fn ecb_round_trip_returns_padded_plaintext() {
        let cipher = Aes128Block::new(KEY);
        let plaintext = b"taco bell is #1 taco bell is #2 oh no";

        let ciphertext = ecb_encrypt(&cipher, plaintext);
        let decrypted = ecb_decrypt(&cipher, &ciphertext);

        assert_eq!(decrypted, pad(plaintext, BLOCK_SIZE));
    }

    #[test]
    fn cbc_round_trip_returns_padded_plaintext() {
        let cipher = Aes128Block::new(KEY);
        let iv = [0u8; BLOCK_SIZE];
        let plaintext = b"taco bell is #1 taco bell is #2 oh no";

        let ciphertext = cbc_encrypt(&cipher, plaintext, &iv);
        let decrypted = cbc_decrypt(&cipher, &ciphertext, &iv);

        assert_eq!(decrypted, pad(plaintext, BLOCK_SIZE));
    }

    #[test]
    fn ecb_repeats_ciphertext_blocks_for_repeated_plaintext_blocks() {
        let cipher = Aes128Block::new(KEY);
        let plaintext = [b'A'; 32];

        let ciphertext = ecb_encrypt(&cipher, &plaintext);

        assert_eq!(ciphertext[..16], ciphertext[16..32]);
    }

    #[test]
    fn cbc_hides_repeated_plaintext_blocks() {
        let cipher = Aes128Block::new(KEY);
        let iv = *b"0123456789abcdef";
        let plaintext = [b'A'; 32];

        let ciphertext = cbc_encrypt(&cipher, &plaintext, &iv);

        assert_ne!(ciphertext[..16], ciphertext[16..32]);
    }

    #[test]
    fn cbc_ciphertext_depends_on_the_iv() {
        let cipher = Aes128Block::new(KEY);
        let plaintext = b"sixteen byte msg";

        let with_zero_iv = cbc_encrypt(&cipher, plaintext, &[0u8; BLOCK_SIZE]);
        let with_other_iv = cbc_encrypt(&cipher, plaintext, b"0123456789abcdef");

        assert_ne!(with_zero_iv, with_other_iv);
    }

    #[test]
    fn encryption_always_emits_whole_blocks() {
        let cipher = Aes128Block::new(KEY);
        for len in 0..=48 {
            let plaintext = vec![0x42u8; len];

            let ciphertext = ecb_encrypt(&cipher, &plaintext);

            assert_eq!(ciphertext.len() % BLOCK_SIZE, 0);
            assert!(ciphertext.len() > len);
        }
    }

    #[test]
    #[should_panic(expected = "multiple of the block size")]
    fn ecb_decrypt_rejects_misaligned_ciphertext() {
        let cipher = Aes128Block::new(KEY);

        ecb_decrypt(&cipher, &[0u8; 17]);
    }

    #[test]
    #[should_panic(expected = "multiple of the block size")]
    fn cbc_decrypt_rejects_misaligned_ciphertext() {
        let cipher = Aes128Block::new(KEY);

        cbc_decrypt(&cipher, &[0u8; 15], &[0u8; BLOCK_SIZE]);
    }
}
