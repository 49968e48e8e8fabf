use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::RngCore;

// RFC 4226 calls for a shared secret of at least 128 bits, 160 recommended

// Generate a random 20 byte secret, Base32-encoded without padding
pub fn generate_secret() -> String {
    let mut dest = [0u8; 20];
    OsRng.fill_bytes(&mut dest);
    BASE32_NOPAD.encode(&dest)
}

// Validate a key provided in arguments is a valid base32 encoding
pub fn is_base32_key(value: &str) -> Result<(), String> {
    let value = value.to_uppercase();
    match BASE32_NOPAD.decode(value.as_bytes()) {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("the key is not a valid base32 encoding")),
    }
}
