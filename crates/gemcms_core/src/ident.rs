//! Session-unique identifier generation for managed entities.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Generate a 9-character base-36 id.
///
/// Ids only need to be unique within one editing session; they are never
/// persisted and are regenerated every time an article body is decoded.
///
/// # Returns
/// A random lowercase alphanumeric identifier.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generate an id that does not collide according to `exists_check`.
///
/// # Returns
/// A fresh id for which `exists_check` returned `false`.
pub fn generate_unique_id<F>(exists_check: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = generate_id();
        if !exists_check(&id) {
            return id;
        }
    }
}
