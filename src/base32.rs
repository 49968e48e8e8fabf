// Base32 https://datatracker.ietf.org/doc/html/rfc4648#section-6

// Alphabet index 0-25 -> A-Z, 26-31 -> 2-7, 5 bits per symbol

/// Decode a Base32 string into bytes.
///
/// Permissive on purpose: input is uppercased and every character outside
/// `A-Z2-7` is dropped before decoding, so `=` padding and whitespace never
/// cause an error. Trailing bits that do not fill a whole byte are discarded.
pub fn decode(secret_text: &str) -> Vec<u8> {
    let mut output = Vec::with_capacity(secret_text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for c in secret_text.bytes() {
        let value = match c.to_ascii_uppercase() {
            b @ b'A'..=b'Z' => (b - b'A') as u32,
            b @ b'2'..=b'7' => (b - b'2' + 26) as u32,
            _ => continue,
        };

        buffer = (buffer << 5) | value;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
        }
    }

    output
}
