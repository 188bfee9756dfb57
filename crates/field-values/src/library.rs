//! Capability traits consumed by the record generator and the template engine.
//!
//! The generator never calls the free functions in this crate directly; it
//! depends on [`FieldValueLibrary`], the aggregate of the traits below, so a
//! test or an alternative value catalogue can be swapped in without touching
//! generation logic. [`ValueLibrary`] is the stock implementation backed by
//! any [`rand::Rng`].

use crate::{base, cloud, identity, network, system};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Raw sampling primitives.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;
    /// Uniform integer in `[min, max]`.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;
    /// Uniform float in `[min, max]`.
    fn float_in_range(&mut self, min: f64, max: f64) -> f64;
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
    /// Index weighted by `weights`, `None` when no weight is positive.
    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize>;
    fn bernoulli(&mut self, probability: f64) -> bool;
    fn uuid_v4(&mut self) -> Uuid;
}

/// People and account identifiers.
pub trait IdentityValues {
    fn email(&mut self, domain: Option<&str>) -> String;
    fn full_name(&mut self) -> String;
    fn username(&mut self) -> String;
    fn number_string(&mut self, length: usize) -> String;
    fn custom_id(&mut self, prefix: &str, length: usize) -> String;
}

/// Addresses, HTTP attributes and timings.
pub trait NetworkValues {
    fn ipv4(&mut self, internal: bool) -> String;
    fn user_agent(&mut self) -> String;
    fn uri_path(&mut self) -> String;
    fn http_status(&mut self) -> i64;
    fn referer(&mut self) -> String;
    fn domain_name(&mut self) -> String;
    fn request_time(&mut self, min_time: f64, max_time: f64, mean: f64) -> f64;
    fn body_bytes(&mut self, min_bytes: i64, max_bytes: i64) -> i64;
}

/// Cloud provider identifiers.
pub trait CloudValues {
    fn aws_user_agent(&mut self) -> String;
    fn aws_principal_id(&mut self) -> String;
    fn aws_account_id(&mut self) -> String;
    fn aws_arn(&mut self) -> String;
    fn aws_resource_arn(&mut self) -> String;
    fn gcp_project_id(&mut self) -> String;
    fn gcp_resource_name(&mut self) -> String;
}

/// Host, process, file and geography values.
pub trait SystemValues {
    fn process_name(&mut self) -> String;
    fn command_line(&mut self) -> String;
    fn sha256(&mut self) -> String;
    fn md5(&mut self) -> String;
    fn file_path(&mut self) -> String;
    fn detection_name(&mut self) -> String;
    fn registry_key(&mut self) -> String;
    fn sysmon_guid(&mut self) -> String;
    fn windows_image_path(&mut self) -> String;
    fn windows_user(&mut self) -> String;
    fn sysmon_hashes(&mut self) -> String;
    fn device_name(&mut self) -> String;
    fn city(&mut self) -> String;
    fn state(&mut self) -> String;
    fn country_code(&mut self) -> String;
    fn latitude(&mut self) -> f64;
    fn longitude(&mut self) -> f64;
    fn email_subject(&mut self) -> String;
    fn filename(&mut self) -> String;
}

/// Everything the record generator needs from a value catalogue.
pub trait FieldValueLibrary:
    RandomSource + IdentityValues + NetworkValues + CloudValues + SystemValues
{
}

impl<T> FieldValueLibrary for T where
    T: RandomSource + IdentityValues + NetworkValues + CloudValues + SystemValues
{
}

/// Stock value library backed by an explicit random source.
#[derive(Debug, Clone)]
pub struct ValueLibrary<R> {
    rng: R,
}

impl<R: Rng> ValueLibrary<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ValueLibrary<StdRng> {
    /// Library over a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for ValueLibrary<R> {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        base::int_in_range(&mut self.rng, min, max)
    }

    fn float_in_range(&mut self, min: f64, max: f64) -> f64 {
        base::float_in_range(&mut self.rng, min, max)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        base::weighted_index(&mut self.rng, weights)
    }

    fn bernoulli(&mut self, probability: f64) -> bool {
        base::bernoulli(&mut self.rng, probability)
    }

    fn uuid_v4(&mut self) -> Uuid {
        base::uuid_v4(&mut self.rng)
    }
}

impl<R: Rng> IdentityValues for ValueLibrary<R> {
    fn email(&mut self, domain: Option<&str>) -> String {
        identity::email(&mut self.rng, domain)
    }

    fn full_name(&mut self) -> String {
        identity::full_name(&mut self.rng)
    }

    fn username(&mut self) -> String {
        identity::username(&mut self.rng)
    }

    fn number_string(&mut self, length: usize) -> String {
        identity::number_string(&mut self.rng, length)
    }

    fn custom_id(&mut self, prefix: &str, length: usize) -> String {
        identity::custom_id(&mut self.rng, prefix, length)
    }
}

impl<R: Rng> NetworkValues for ValueLibrary<R> {
    fn ipv4(&mut self, internal: bool) -> String {
        network::ipv4(&mut self.rng, internal)
    }

    fn user_agent(&mut self) -> String {
        network::user_agent(&mut self.rng)
    }

    fn uri_path(&mut self) -> String {
        network::uri_path(&mut self.rng)
    }

    fn http_status(&mut self) -> i64 {
        network::http_status(&mut self.rng)
    }

    fn referer(&mut self) -> String {
        network::referer(&mut self.rng)
    }

    fn domain_name(&mut self) -> String {
        network::domain_name(&mut self.rng)
    }

    fn request_time(&mut self, min_time: f64, max_time: f64, mean: f64) -> f64 {
        network::request_time(&mut self.rng, min_time, max_time, mean)
    }

    fn body_bytes(&mut self, min_bytes: i64, max_bytes: i64) -> i64 {
        network::body_bytes(&mut self.rng, min_bytes, max_bytes)
    }
}

impl<R: Rng> CloudValues for ValueLibrary<R> {
    fn aws_user_agent(&mut self) -> String {
        cloud::aws_user_agent(&mut self.rng)
    }

    fn aws_principal_id(&mut self) -> String {
        cloud::aws_principal_id(&mut self.rng)
    }

    fn aws_account_id(&mut self) -> String {
        cloud::aws_account_id(&mut self.rng)
    }

    fn aws_arn(&mut self) -> String {
        cloud::aws_arn(&mut self.rng)
    }

    fn aws_resource_arn(&mut self) -> String {
        cloud::aws_resource_arn(&mut self.rng)
    }

    fn gcp_project_id(&mut self) -> String {
        cloud::gcp_project_id(&mut self.rng)
    }

    fn gcp_resource_name(&mut self) -> String {
        cloud::gcp_resource_name(&mut self.rng)
    }
}

impl<R: Rng> SystemValues for ValueLibrary<R> {
    fn process_name(&mut self) -> String {
        system::process_name(&mut self.rng)
    }

    fn command_line(&mut self) -> String {
        system::command_line(&mut self.rng)
    }

    fn sha256(&mut self) -> String {
        system::sha256(&mut self.rng)
    }

    fn md5(&mut self) -> String {
        system::md5(&mut self.rng)
    }

    fn file_path(&mut self) -> String {
        system::file_path(&mut self.rng)
    }

    fn detection_name(&mut self) -> String {
        system::detection_name(&mut self.rng)
    }

    fn registry_key(&mut self) -> String {
        system::registry_key(&mut self.rng)
    }

    fn sysmon_guid(&mut self) -> String {
        system::sysmon_guid(&mut self.rng)
    }

    fn windows_image_path(&mut self) -> String {
        system::windows_image_path(&mut self.rng)
    }

    fn windows_user(&mut self) -> String {
        system::windows_user(&mut self.rng)
    }

    fn sysmon_hashes(&mut self) -> String {
        system::sysmon_hashes(&mut self.rng)
    }

    fn device_name(&mut self) -> String {
        system::device_name(&mut self.rng)
    }

    fn city(&mut self) -> String {
        system::city(&mut self.rng)
    }

    fn state(&mut self) -> String {
        system::state(&mut self.rng)
    }

    fn country_code(&mut self) -> String {
        system::country_code(&mut self.rng)
    }

    fn latitude(&mut self) -> f64 {
        system::latitude(&mut self.rng)
    }

    fn longitude(&mut self) -> f64 {
        system::longitude(&mut self.rng)
    }

    fn email_subject(&mut self) -> String {
        system::email_subject(&mut self.rng)
    }

    fn filename(&mut self) -> String {
        system::filename(&mut self.rng)
    }
}
