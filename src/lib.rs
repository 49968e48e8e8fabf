pub mod base32;
pub mod cmd;
pub mod totp;
pub mod utils;
pub mod writer;

#[cfg(test)]
pub mod tests;
