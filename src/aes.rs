// Adapter putting the AES-128 primitive behind the BlockCipher seam. The
// chaining modes never touch the `aes` crate directly.
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes128;

use crate::{BlockCipher, BLOCK_SIZE};

pub struct Aes128Block {
    cipher: Aes128,
}

impl Aes128Block {
    pub fn new(key: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            cipher: Aes128::new(GenericArray::from_slice(key)),
        }
    }
}

impl BlockCipher for Aes128Block {
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        self.cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        self.cipher.decrypt_block(GenericArray::from_mut_slice(block));
    }
}
