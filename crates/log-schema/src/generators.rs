//! Named value generators for `string`, `integer` and `float` fields.
//!
//! A schema refers to generators by name (`generator: custom_id`). Names are
//! looked up once, when the schema is loaded, in a static registry and bound
//! to a closed enum together with their parameters. Names that are absent
//! or not registered bind to [`StringGenerator::Fallback`].

use crate::field::Params;

/// Default `mean` for `request_time`, in seconds.
pub const DEFAULT_REQUEST_TIME_MEAN: f64 = 0.150;

/// Default `length` for `number_string`.
pub const DEFAULT_NUMBER_STRING_LENGTH: usize = 16;

/// Default `length` for `custom_id`.
pub const DEFAULT_CUSTOM_ID_LENGTH: usize = 8;

/// Default `[min, max]` for integer fields.
pub const DEFAULT_INT_MIN: i64 = 0;
pub const DEFAULT_INT_MAX: i64 = 1000;

/// Default upper bound for `body_bytes`.
pub const DEFAULT_BODY_BYTES_MAX: i64 = 1_000_000;

/// Value-construction rule for a `string` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringGenerator {
    NumberString { length: usize },
    CustomId { prefix: String, length: usize },
    FullName,
    Username,
    UserAgent,
    UriPath,
    City,
    State,
    CountryCode,
    DeviceName,
    DomainName,
    Referer,
    Sha256,
    Md5,
    SysmonHashes,
    AwsArn,
    AwsResourceArn,
    AwsAccountId,
    AwsPrincipalId,
    AwsUserAgent,
    GcpProjectId,
    GcpResourceName,
    ProcessName,
    CommandLine,
    FilePath,
    Filename,
    DetectionName,
    RegistryKey,
    SysmonGuid,
    WindowsImagePath,
    WindowsUser,
    EmailSubject,
    /// No generator matched; the field's `default` (or a marker) is used.
    Fallback,
}

type StringCtor = fn(&Params) -> StringGenerator;

const STRING_GENERATORS: &[(&str, StringCtor)] = &[
    ("number_string", |p: &Params| StringGenerator::NumberString {
        length: p.get_usize("length").unwrap_or(DEFAULT_NUMBER_STRING_LENGTH),
    }),
    ("custom_id", |p: &Params| StringGenerator::CustomId {
        prefix: p.get_str("prefix").unwrap_or_default().to_string(),
        length: p.get_usize("length").unwrap_or(DEFAULT_CUSTOM_ID_LENGTH),
    }),
    ("full_name", |_: &Params| StringGenerator::FullName),
    ("username", |_: &Params| StringGenerator::Username),
    ("user_agent", |_: &Params| StringGenerator::UserAgent),
    ("uri_path", |_: &Params| StringGenerator::UriPath),
    ("city", |_: &Params| StringGenerator::City),
    ("state", |_: &Params| StringGenerator::State),
    ("country_code", |_: &Params| StringGenerator::CountryCode),
    ("device_name", |_: &Params| StringGenerator::DeviceName),
    ("domain_name", |_: &Params| StringGenerator::DomainName),
    ("referer", |_: &Params| StringGenerator::Referer),
    ("sha256", |_: &Params| StringGenerator::Sha256),
    ("md5", |_: &Params| StringGenerator::Md5),
    ("sysmon_hashes", |_: &Params| StringGenerator::SysmonHashes),
    ("aws_arn", |_: &Params| StringGenerator::AwsArn),
    ("aws_resource_arn", |_: &Params| StringGenerator::AwsResourceArn),
    ("aws_account_id", |_: &Params| StringGenerator::AwsAccountId),
    ("aws_principal_id", |_: &Params| StringGenerator::AwsPrincipalId),
    ("aws_user_agent", |_: &Params| StringGenerator::AwsUserAgent),
    ("gcp_project_id", |_: &Params| StringGenerator::GcpProjectId),
    ("gcp_resource_name", |_: &Params| StringGenerator::GcpResourceName),
    ("process_name", |_: &Params| StringGenerator::ProcessName),
    ("command_line", |_: &Params| StringGenerator::CommandLine),
    ("file_path", |_: &Params| StringGenerator::FilePath),
    ("filename", |_: &Params| StringGenerator::Filename),
    ("detection_name", |_: &Params| StringGenerator::DetectionName),
    ("registry_key", |_: &Params| StringGenerator::RegistryKey),
    ("sysmon_guid", |_: &Params| StringGenerator::SysmonGuid),
    ("windows_image_path", |_: &Params| StringGenerator::WindowsImagePath),
    ("windows_user", |_: &Params| StringGenerator::WindowsUser),
    ("email_subject", |_: &Params| StringGenerator::EmailSubject),
];

impl StringGenerator {
    /// Bind a generator name and its parameters.
    pub fn resolve(name: Option<&str>, params: &Params) -> Self {
        name.and_then(|name| {
            STRING_GENERATORS
                .iter()
                .find(|(registered, _)| *registered == name)
        })
        .map(|(_, ctor)| ctor(params))
        .unwrap_or(StringGenerator::Fallback)
    }

    /// Registered generator names, in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        STRING_GENERATORS.iter().map(|(name, _)| *name)
    }

    pub fn is_registered(name: &str) -> bool {
        Self::names().any(|n| n == name)
    }
}

/// Value-construction rule for an `integer` field without a `distribution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerGenerator {
    /// Uniform in `[min, max]`.
    Uniform { min: i64, max: i64 },
    /// HTTP status code weighted towards 200.
    HttpStatus,
    /// Log-normal response size clamped to `[min, max]`.
    BodyBytes { min: i64, max: i64 },
}

impl IntegerGenerator {
    pub fn resolve(name: Option<&str>, params: &Params) -> Self {
        let min = params.get_i64("min").unwrap_or(DEFAULT_INT_MIN);
        match name {
            Some("http_status") => IntegerGenerator::HttpStatus,
            Some("body_bytes") => IntegerGenerator::BodyBytes {
                min,
                max: params.get_i64("max").unwrap_or(DEFAULT_BODY_BYTES_MAX),
            },
            _ => IntegerGenerator::Uniform {
                min,
                max: params.get_i64("max").unwrap_or(DEFAULT_INT_MAX),
            },
        }
    }
}

/// Value-construction rule for a `float` field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatGenerator {
    /// Uniform in `[min, max]`, rounded to 3 decimals.
    Uniform { min: f64, max: f64 },
    /// Log-normal around `mean` (σ = 1), clamped to `[min, max]`.
    RequestTime { mean: f64, min: f64, max: f64 },
    /// Degrees in `[-90, 90]`, 6 decimals.
    Latitude,
    /// Degrees in `[-180, 180]`, 6 decimals.
    Longitude,
}

impl FloatGenerator {
    pub fn resolve(name: Option<&str>, params: &Params) -> Self {
        let min = params.get_f64("min").unwrap_or(0.0);
        let max = params.get_f64("max").unwrap_or(1.0);
        match name {
            Some("request_time") => FloatGenerator::RequestTime {
                mean: params.get_f64("mean").unwrap_or(DEFAULT_REQUEST_TIME_MEAN),
                min,
                max,
            },
            Some("latitude") => FloatGenerator::Latitude,
            Some("longitude") => FloatGenerator::Longitude,
            _ => FloatGenerator::Uniform { min, max },
        }
    }
}
