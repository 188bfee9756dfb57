//! Network values: addresses, HTTP attributes, timings.

use crate::base::{log_normal, pick, round3};
use rand::Rng;

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 13; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
];

const URI_PATHS: &[&str] = &[
    "/",
    "/index.html",
    "/about.html",
    "/api/v1/users",
    "/api/v1/data",
    "/api/v2/search",
    "/static/css/style.css",
    "/static/js/app.js",
    "/images/logo.png",
    "/dashboard",
    "/profile",
    "/settings",
    "/login",
    "/logout",
    "/docs/readme.html",
];

/// HTTP status codes with their relative frequency in typical access logs.
const HTTP_STATUS_WEIGHTS: &[(i64, u32)] = &[
    (200, 75),
    (301, 5),
    (302, 3),
    (304, 4),
    (400, 2),
    (401, 2),
    (403, 2),
    (404, 5),
    (500, 2),
];

const REFERER_DOMAINS: &[&str] = &["example.com", "google.com", "github.com", "stackoverflow.com"];
const REFERER_PATHS: &[&str] = &["/", "/search", "/dashboard", "/docs", "/api"];

const DOMAIN_NAMES: &[&str] = &[
    "example.com",
    "test.com",
    "sample.org",
    "demo.net",
    "google.com",
    "microsoft.com",
    "amazon.com",
    "github.com",
    "api.service.com",
    "cdn.example.net",
    "mail.company.com",
    "update.vendor.com",
    "download.software.org",
];

/// Generate a dotted-quad IPv4 address.
///
/// Public addresses avoid the multicast/reserved space above 223 and the
/// `.0`/`.255` host octets. `internal` selects an RFC 1918 private address.
pub fn ipv4<R: Rng + ?Sized>(rng: &mut R, internal: bool) -> String {
    if !internal {
        return format!(
            "{}.{}.{}.{}",
            rng.random_range(1..=223),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        );
    }

    match rng.random_range(0..3) {
        0 => format!(
            "10.{}.{}.{}",
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        ),
        1 => format!(
            "172.{}.{}.{}",
            rng.random_range(16..=31),
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        ),
        _ => format!(
            "192.168.{}.{}",
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        ),
    }
}

pub fn user_agent<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, USER_AGENTS).to_string()
}

pub fn uri_path<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, URI_PATHS).to_string()
}

/// Generate an HTTP status code, heavily weighted towards 200.
pub fn http_status<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    let total: u32 = HTTP_STATUS_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0..total);
    for (status, weight) in HTTP_STATUS_WEIGHTS {
        if roll < *weight {
            return *status;
        }
        roll -= weight;
    }
    200
}

/// Generate an HTTP referer; roughly 30% of requests carry none (`-`).
pub fn referer<R: Rng + ?Sized>(rng: &mut R) -> String {
    if rng.random::<f64>() < 0.3 {
        return "-".to_string();
    }
    format!(
        "https://{}{}",
        pick(rng, REFERER_DOMAINS),
        pick(rng, REFERER_PATHS)
    )
}

pub fn domain_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, DOMAIN_NAMES).to_string()
}

/// Request processing time in seconds: log-normal around `mean`, clamped to
/// `[min_time, max_time]` and rounded to milliseconds.
pub fn request_time<R: Rng + ?Sized>(rng: &mut R, min_time: f64, max_time: f64, mean: f64) -> f64 {
    let mu = if mean > 0.0 { mean.ln() } else { 0.150_f64.ln() };
    let value = log_normal(rng, mu, 1.0);
    round3(value.min(max_time).max(min_time))
}

/// Response body size in bytes: log-normal skewed towards small payloads.
pub fn body_bytes<R: Rng + ?Sized>(rng: &mut R, min_bytes: i64, max_bytes: i64) -> i64 {
    let value = log_normal(rng, 7.0, 2.0) as i64;
    value.min(max_bytes).max(min_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn octets(ip: &str) -> Vec<u32> {
        ip.split('.').map(|o| o.parse().unwrap()).collect()
    }

    #[test]
    fn test_public_ipv4() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let o = octets(&ipv4(&mut rng, false));
            assert_eq!(o.len(), 4);
            assert!((1..=223).contains(&o[0]));
            assert!((1..=254).contains(&o[3]));
        }
    }

    #[test]
    fn test_internal_ipv4_is_rfc1918() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let o = octets(&ipv4(&mut rng, true));
            let private = o[0] == 10
                || (o[0] == 172 && (16..=31).contains(&o[1]))
                || (o[0] == 192 && o[1] == 168);
            assert!(private, "not private: {o:?}");
        }
    }

    #[test]
    fn test_http_status_is_known() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let s = http_status(&mut rng);
            assert!(HTTP_STATUS_WEIGHTS.iter().any(|(code, _)| *code == s));
        }
    }

    #[test]
    fn test_request_time_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let t = request_time(&mut rng, 0.01, 0.5, 0.150);
            assert!((0.01..=0.5).contains(&t));
        }
    }

    #[test]
    fn test_referer() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let r = referer(&mut rng);
            assert!(r == "-" || r.starts_with("https://"));
        }
    }

    #[test]
    fn test_body_bytes_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let b = body_bytes(&mut rng, 0, 10_000);
            assert!((0..=10_000).contains(&b));
        }
    }
}
