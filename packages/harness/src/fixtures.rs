//! Random primitive values that satisfy the API's format constraints.
//!
//! Every call produces a fresh value and never fails. Uniqueness-sensitive
//! values (emails, usernames) embed random entropy so scenarios running in
//! parallel do not collide.

use std::ops::RangeInclusive;

use fake::faker::internet::en::Username;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use uuid::Uuid;

pub const PASSWORD_LEN: usize = 16;
pub const PASSWORD_MIN_LEN: usize = 12;
const PASSWORD_SYMBOLS: &[u8] = b"!@#$%^&*-_+=?";
const USERNAME_STEM_MAX: usize = 12;

pub fn uuid() -> Uuid {
    Uuid::new_v4()
}

pub fn email() -> String {
    format!("e2e-{}@example.com", Uuid::new_v4().simple())
}

/// Lowercase `[a-z0-9_]` handle with a random suffix.
pub fn username() -> String {
    let stem: String = Username()
        .fake::<String>()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(USERNAME_STEM_MAX)
        .collect::<String>()
        .to_lowercase();
    let stem = if stem.is_empty() { "member".to_string() } else { stem };
    format!("{}_{}", stem, alphanumeric(6).to_lowercase())
}

/// Password with at least one upper case letter, lower case letter, digit
/// and symbol.
pub fn password() -> String {
    let mut rng = thread_rng();
    let mut chars = vec![
        char::from(rng.gen_range(b'A'..=b'Z')),
        char::from(rng.gen_range(b'a'..=b'z')),
        char::from(rng.gen_range(b'0'..=b'9')),
        char::from(PASSWORD_SYMBOLS[rng.gen_range(0..PASSWORD_SYMBOLS.len())]),
    ];
    let remaining = PASSWORD_LEN - chars.len();
    chars.extend(
        (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(remaining)
            .map(char::from),
    );
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

pub fn meets_password_policy(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.bytes().any(|b| PASSWORD_SYMBOLS.contains(&b))
}

pub fn alphanumeric(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn sentence() -> String {
    Sentence(4..10).fake()
}

pub fn paragraph() -> String {
    Paragraph(2..5).fake()
}

/// Short sentence without the trailing period.
pub fn title() -> String {
    let title: String = Sentence(3..7).fake();
    title.trim_end_matches('.').to_string()
}

pub fn url() -> String {
    format!(
        "https://cdn.example.com/{}/{}.png",
        alphanumeric(8).to_lowercase(),
        alphanumeric(16).to_lowercase()
    )
}

pub fn integer(range: RangeInclusive<i64>) -> i64 {
    thread_rng().gen_range(range)
}

/// One of `items`, chosen uniformly.
pub fn pick<T: Copy, const N: usize>(items: [T; N]) -> T {
    const { assert!(N > 0, "pick needs at least one item") };
    items[thread_rng().gen_range(0..N)]
}
