/// XOR two equal-length byte sequences position by position.
///
/// Mismatched lengths are a programming error, not a recoverable one.
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert_eq!(a.len(), b.len(), "xor operands must be the same length");
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Encrypt or decrypt a message with a repeating-key XOR stream.
///
/// Byte `i` of the output is byte `i` of the input XORed with
/// `key[i % key.len()]`, so applying the same key twice returns the
/// original input.
pub fn repeating_key_xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    assert!(!key.is_empty(), "repeating-key XOR requires a non-empty key");
    data.iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect()
}
