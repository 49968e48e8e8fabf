use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::time::SystemTime;

use crate::base32;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238
// HOTP https://datatracker.ietf.org/doc/html/rfc4226

// time-based moving factor, SHA-1 digest, 6 digit codes

type HmacSha1 = Hmac<Sha1>;

const TIME_STEP: u64 = 30;
const DIGITS: u32 = 6;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Generate the one-time password for a Base32 secret at the current time.
///
/// Always returns exactly 6 ASCII digits, left-padded with zeros.
pub fn generate_totp(secret_text: &str) -> String {
    generate_totp_at(secret_text, &Clock::new())
}

// Same pipeline with the clock injected, for callers that control time
pub fn generate_totp_at(secret_text: &str, clock: &impl GetTime) -> String {
    let key = base32::decode(secret_text);
    let code = get_totp(&key, get_moving_factor(clock));
    format!("{:0>6}", code)
}

pub fn get_totp(key: &[u8], moving_factor: u64) -> u32 {
    let hmac = make_hmac(key, moving_factor);
    truncate(hmac)
}

// Number of whole time steps since the Unix epoch
pub fn get_moving_factor(clock: &impl GetTime) -> u64 {
    let time = clock.get_now().duration_since(SystemTime::UNIX_EPOCH);
    let secs = time.unwrap().as_secs();
    secs / TIME_STEP
}

// HMAC_SHA-1 over the 8-byte big-endian moving factor -> 20 byte string
fn make_hmac(key: &[u8], moving_factor: u64) -> Vec<u8> {
    let mut mac =
        HmacSha1::new_from_slice(key).expect("HMAC-SHA1 unavailable, cannot derive codes");
    mac.update(&moving_factor.to_be_bytes());
    let result = mac.finalize();

    result.into_bytes().to_vec()
}

// reduce to a 31-bit number, then mod 10^Digit
fn truncate(hmac: Vec<u8>) -> u32 {
    let base_code = dynamic_truncation(hmac);

    base_code % u32::pow(10, DIGITS)
}

// RFC 4226 5.3: the low nibble of the last digest byte picks a 4-byte
// window; the top bit of that window is masked off so the result stays
// non-negative even when read as a signed 32-bit integer
fn dynamic_truncation(hmac: Vec<u8>) -> u32 {
    let offset = (hmac[19] & 0xf) as usize;
    let code = (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff);
    code
}
