//! Identity values: people, accounts, identifiers.

use crate::base::{digits, pick, upper_alphanumeric};
use rand::Rng;

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "company.com",
    "organization.org",
    "business.net",
];

const EMAIL_FIRST_NAMES: &[&str] = &[
    "john", "jane", "alice", "bob", "charlie", "david", "emma", "frank", "grace", "henry",
    "isabel", "jack", "kate", "liam",
];

const EMAIL_LAST_NAMES: &[&str] = &[
    "smith",
    "johnson",
    "williams",
    "brown",
    "jones",
    "garcia",
    "miller",
    "davis",
    "rodriguez",
    "martinez",
    "hernandez",
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Henry",
    "Isabel", "Jack", "Kate", "Liam", "Maria", "Noah", "Olivia", "Peter", "Quinn", "Rachel",
];

const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Wilson",
    "Anderson",
    "Taylor",
    "Thomas",
    "Moore",
];

const USERNAME_ADJECTIVES: &[&str] = &["cool", "fast", "smart", "bright", "bold", "quick"];
const USERNAME_NOUNS: &[&str] = &["tiger", "eagle", "fox", "wolf", "bear", "lion"];

/// Generate an email address. A random corporate domain is used when `domain` is `None`.
pub fn email<R: Rng + ?Sized>(rng: &mut R, domain: Option<&str>) -> String {
    let domain = match domain {
        Some(d) => d.to_string(),
        None => pick(rng, EMAIL_DOMAINS).to_string(),
    };
    let first = pick(rng, EMAIL_FIRST_NAMES);
    let last = pick(rng, EMAIL_LAST_NAMES);

    let local = match rng.random_range(0..4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{last}"),
        2 => format!("{}{last}", &first[..1]),
        _ => format!("{first}.{last}{}", rng.random_range(1..=99)),
    };

    format!("{local}@{domain}")
}

/// Generate a "First Last" display name.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Generate a handle such as `quickfox417`.
pub fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}{}",
        pick(rng, USERNAME_ADJECTIVES),
        pick(rng, USERNAME_NOUNS),
        rng.random_range(1..=999)
    )
}

/// Generate `length` random decimal digits.
pub fn number_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    digits(rng, length)
}

/// Generate `prefix` followed by `length` uppercase alphanumerics.
pub fn custom_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str, length: usize) -> String {
    format!("{prefix}{}", upper_alphanumeric(rng, length))
}
