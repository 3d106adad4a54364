//! Secret key generation
//!
//! The application signs sessions with a per-site secret key. The key is
//! generated once on first deploy and never regenerated; existence of the
//! key file on the target is the idempotence guard.

use rand::Rng;

/// Characters a secret key is drawn from: lowercase letters, digits, and a
/// fixed set of symbols.
pub const SECRET_KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

/// Length of a generated secret key
pub const SECRET_KEY_LEN: usize = 50;

/// Generate a secret key from the OS-seeded CSPRNG.
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

/// Generate a secret key from the given RNG.
///
/// Split out so tests can pass a seeded RNG; production callers use
/// [`generate`].
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    (0..SECRET_KEY_LEN)
        .map(|_| SECRET_KEY_CHARS[rng.random_range(0..SECRET_KEY_CHARS.len())] as char)
        .collect()
}

/// Whether `key` has the exact length and alphabet of a generated key.
pub fn is_valid(key: &str) -> bool {
    key.len() == SECRET_KEY_LEN && key.bytes().all(|b| SECRET_KEY_CHARS.contains(&b))
}
