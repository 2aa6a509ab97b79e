/// Filler byte appended to align a message to the cipher block size.
pub const PAD_BYTE: u8 = 0x04;

/// Pad `bytes` with the 0x04 filler until its length is a multiple of
/// `block_size`.
///
/// The filler is a fixed sentinel, not the PKCS#7 count byte, so the
/// padding cannot be validated or stripped without knowing the original
/// length. An already-aligned input gains a whole block of filler, so the
/// output is always strictly longer than the input.
pub fn pad(bytes: &[u8], block_size: usize) -> Vec<u8> {
    assert!(block_size > 0, "block size must be positive");
    let n_pad = block_size - bytes.len() % block_size;
    let mut padded = Vec::with_capacity(bytes.len() + n_pad);
    padded.extend_from_slice(bytes);
    padded.resize(bytes.len() + n_pad, PAD_BYTE);
    padded
}
