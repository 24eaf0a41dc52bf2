use crate::model::JoinCode;
use rand::Rng;

/// Upper-case letters and digits without the look-alikes `I`, `L`, `O`, `0` and `1`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> JoinCode {
    let code = (0..length)
        .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
        .collect();
    JoinCode::generated(code)
}
