// Rank how likely a byte string is to be English text.
//
// Each byte is weighted by a fixed table of the most common English
// characters, roughly "etaoin shrdlu": 'e' is worth 13 down to 'u' worth 1,
// with the space character slotted between 'n' and 's'. Every byte outside
// the table, including punctuation, control bytes and anything non-ASCII,
// is worth 0. Uppercase letters are folded to lowercase before the lookup.
// The score of a string is the sum over its bytes.
//
// This is a much blunter instrument than a chi-squared test against real
// letter frequency statistics, but it only has to separate one correct
// decryption from 255 wrong ones, and for that the top of the frequency
// table is plenty.

pub fn score_english(bytes: &[u8]) -> u32 {
    bytes.iter().map(|&b| char_weight(b)).sum()
}

fn char_weight(byte: u8) -> u32 {
    match byte.to_ascii_lowercase() {
        b'e' => 13,
        b't' => 12,
        b'a' => 11,
        b'o' => 10,
        b'i' => 9,
        b'n' => 8,
        b' ' => 7,
        b's' => 6,
        b'h' => 5,
        b'r' => 4,
        b'd' => 3,
        b'l' => 2,
        b'u' => 1,
        _ => 0,
    }
}
