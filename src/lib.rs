mod aes;
mod block;
mod crack;
mod frequency;
mod keysize;
mod oracle;
mod padding;
mod xor;

pub use self::aes::Aes128Block;
pub use block::{cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt, BlockCipher, BLOCK_SIZE};
pub use crack::{
    crack_repeating_key_xor, crack_single_byte_xor, find_single_byte_xor_line,
    recover_repeating_key, SingleByteCrack,
};
pub use frequency::score_english;
pub use keysize::{
    estimate_keysize, group_by_key_index, hamming_distance, KeysizeGuess, MAX_KEYSIZE, MIN_KEYSIZE,
};
pub use oracle::{
    count_duplicate_blocks, detect_mode, encrypt_with_random_mode, find_ecb_encrypted_line, Mode,
};
pub use padding::{pad, PAD_BYTE};
pub use xor::{repeating_key_xor, xor_blocks};
