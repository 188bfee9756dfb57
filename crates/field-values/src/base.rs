//! Primitive value generators shared by every value family.

use chrono::{DateTime, TimeDelta, Utc};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use uuid::Uuid;

/// Timestamp layout used by every generated record: millisecond precision, UTC, `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const DIGITS: &[u8] = b"0123456789";
const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LOWER_HEX: &[u8] = b"0123456789abcdef";

/// Format `base + offset_seconds` as an ISO 8601 timestamp.
///
/// Sub-millisecond precision is truncated, not rounded. Offsets that leave
/// chrono's representable range fall back to `base`.
pub fn datetime_iso8601(base: DateTime<Utc>, offset_seconds: i64) -> String {
    let timestamp = TimeDelta::try_seconds(offset_seconds)
        .and_then(|delta| base.checked_add_signed(delta))
        .unwrap_or(base);
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Offset in whole seconds of record `index` out of `count` spread over
/// `spread_seconds`: `floor(index * spread / count)`.
///
/// Computed in integer arithmetic, so `offset(0) == 0`, offsets never
/// decrease, and the last record stays strictly inside the window.
pub fn time_offset(index: u64, count: u64, spread_seconds: u64) -> i64 {
    if spread_seconds == 0 || count == 0 {
        return 0;
    }
    let offset = u128::from(index) * u128::from(spread_seconds) / u128::from(count);
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// Generate a random UUID v4 from the given RNG.
///
/// Unlike `Uuid::new_v4()` this draws its bytes from `rng`, so seeded
/// generators produce the same UUIDs on every run.
pub fn uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Generate a random integer in `[min, max]`. Reversed bounds are swapped.
pub fn int_in_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(low..=high)
}

/// Generate a random float in `[min, max]`. Reversed bounds are swapped.
///
/// Non-finite bounds yield the lower bound (or `0.0`), as does a range too
/// wide to represent (`-1e308..=1e308`).
pub fn float_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !min.is_finite() || !max.is_finite() {
        return if min.is_finite() { min } else { 0.0 };
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if low == high || !(high - low).is_finite() {
        return low;
    }
    rng.random_range(low..=high)
}

/// Boolean that is `true` with the given probability (clamped to `[0, 1]`).
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    let p = if probability.is_nan() {
        0.5
    } else {
        probability.clamp(0.0, 1.0)
    };
    rng.random_bool(p)
}

/// Pick an index in `0..len` weighted by `weights`.
///
/// Negative and NaN weights count as zero. Returns `None` when no weight is
/// positive.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let sanitized = weights.iter().map(|w| w.max(0.0));
    WeightedIndex::new(sanitized)
        .ok()
        .map(|dist| dist.sample(rng))
}

/// Log-normal sample with parameters `mu` and `sigma` of the underlying normal.
pub fn log_normal<R: Rng + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    // Box-Muller; u1 is kept in (0, 1] so ln(u1) is finite.
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    (mu + sigma * z).exp()
}

/// Round to three decimal places.
pub fn round3(value: f64) -> f64 {
    let scaled = value * 1000.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 1000.0
}

/// Pick one entry from a non-empty static pool.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Build a string of `length` characters drawn from `alphabet`.
pub(crate) fn random_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

/// A string of `length` decimal digits (leading zeros allowed).
pub fn digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    random_string(rng, DIGITS, length)
}

/// A string of `length` uppercase letters and digits.
pub fn upper_alphanumeric<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    random_string(rng, UPPER_ALPHANUMERIC, length)
}

/// A string of `length` lowercase hex digits.
pub fn lower_hex<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    random_string(rng, LOWER_HEX, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_datetime_iso8601_format() {
        let base = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
            + TimeDelta::microseconds(123_987);

        assert_eq!(datetime_iso8601(base, 0), "2024-01-15T10:30:00.123Z");
        assert_eq!(datetime_iso8601(base, 90), "2024-01-15T10:31:30.123Z");
    }

    #[test]
    fn test_datetime_iso8601_out_of_range_offset() {
        let base = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let expected = "2024-01-15T10:30:00.000Z";

        assert_eq!(datetime_iso8601(base, i64::MAX), expected);
        assert_eq!(datetime_iso8601(base, i64::MIN), expected);
        // a valid TimeDelta that lands past the last representable date
        assert_eq!(datetime_iso8601(base, 9_000_000_000_000_000), expected);
    }

    #[test]
    fn test_time_offset_no_spread() {
        assert_eq!(time_offset(5, 10, 0), 0);
        assert_eq!(time_offset(0, 0, 10), 0);
    }

    #[test]
    fn test_time_offset_even_spread() {
        let offsets: Vec<i64> = (0..4).map(|i| time_offset(i, 4, 100)).collect();
        assert_eq!(offsets, vec![0, 25, 50, 75]);
    }

    #[test]
    fn test_time_offset_floor_and_monotonic() {
        let count = 7;
        let spread = 10;
        let offsets: Vec<i64> = (0..count).map(|i| time_offset(i, count, spread)).collect();
        assert_eq!(offsets, vec![0, 1, 2, 4, 5, 7, 8]);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert!(*offsets.last().unwrap() < spread as i64);
    }

    #[test]
    fn test_time_offset_exact_where_float_would_drift() {
        // (1 / 49) * 49 is 0.9999999999999999 in floating point
        assert_eq!(time_offset(1, 49, 49), 1);
    }

    #[test]
    fn test_time_offset_large_values_do_not_overflow() {
        assert_eq!(time_offset(u64::MAX / 2, u64::MAX, 1000), 499);
        assert_eq!(time_offset(u64::MAX - 1, u64::MAX, u64::MAX), i64::MAX);
    }

    #[test]
    fn test_uuid_v4_is_deterministic_and_versioned() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let a = uuid_v4(&mut rng1);
        let b = uuid_v4(&mut rng2);

        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
        assert_eq!(a.to_string().len(), 36);
    }

    #[test]
    fn test_int_in_range_swaps_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = int_in_range(&mut rng, 10, 5);
            assert!((5..=10).contains(&v));
        }
    }

    #[test]
    fn test_float_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = float_in_range(&mut rng, 0.5, 2.5);
            assert!((0.5..=2.5).contains(&v));
        }
        assert_eq!(float_in_range(&mut rng, 3.0, 3.0), 3.0);
        assert_eq!(float_in_range(&mut rng, f64::NAN, 1.0), 0.0);
        assert_eq!(float_in_range(&mut rng, 1e308, -1e308), -1e308);
    }

    #[test]
    fn test_weighted_index() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(weighted_index(&mut rng, &[0.0, 1.0, 0.0]), Some(1));
        }
        assert_eq!(weighted_index(&mut rng, &[0.0, -1.0]), None);
        assert_eq!(weighted_index(&mut rng, &[]), None);
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(bernoulli(&mut rng, 1.0));
            assert!(!bernoulli(&mut rng, 0.0));
            assert!(bernoulli(&mut rng, 7.0));
        }
    }

    #[test]
    fn test_log_normal_is_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let v = log_normal(&mut rng, 0.150_f64.ln(), 1.0);
            assert!(v.is_finite() && v > 0.0);
        }
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(2.0), 2.0);
        assert_eq!(round3(-1e308), -1e308);
    }

    #[test]
    fn test_character_classes() {
        let mut rng = StdRng::seed_from_u64(7);

        let d = digits(&mut rng, 16);
        assert_eq!(d.len(), 16);
        assert!(d.chars().all(|c| c.is_ascii_digit()));

        let h = lower_hex(&mut rng, 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let a = upper_alphanumeric(&mut rng, 8);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
