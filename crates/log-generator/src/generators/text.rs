//! `string` fields.

use field_values::FieldValueLibrary;
use log_schema::{literal_to_string, FieldSpec, StringGenerator};
use serde_json::Value;

/// Marker returned by string fields with no usable generator and no default.
pub const FALLBACK_STRING: &str = "default_value";

pub fn generate_string<L: FieldValueLibrary>(lib: &mut L, spec: &FieldSpec) -> Value {
    let value = match spec.string_generator() {
        StringGenerator::NumberString { length } => lib.number_string(length),
        StringGenerator::CustomId { prefix, length } => lib.custom_id(&prefix, length),
        StringGenerator::FullName => lib.full_name(),
        StringGenerator::Username => lib.username(),
        StringGenerator::UserAgent => lib.user_agent(),
        StringGenerator::UriPath => lib.uri_path(),
        StringGenerator::City => lib.city(),
        StringGenerator::State => lib.state(),
        StringGenerator::CountryCode => lib.country_code(),
        StringGenerator::DeviceName => lib.device_name(),
        StringGenerator::DomainName => lib.domain_name(),
        StringGenerator::Referer => lib.referer(),
        StringGenerator::Sha256 => lib.sha256(),
        StringGenerator::Md5 => lib.md5(),
        StringGenerator::SysmonHashes => lib.sysmon_hashes(),
        StringGenerator::AwsArn => lib.aws_arn(),
        StringGenerator::AwsResourceArn => lib.aws_resource_arn(),
        StringGenerator::AwsAccountId => lib.aws_account_id(),
        StringGenerator::AwsPrincipalId => lib.aws_principal_id(),
        StringGenerator::AwsUserAgent => lib.aws_user_agent(),
        StringGenerator::GcpProjectId => lib.gcp_project_id(),
        StringGenerator::GcpResourceName => lib.gcp_resource_name(),
        StringGenerator::ProcessName => lib.process_name(),
        StringGenerator::CommandLine => lib.command_line(),
        StringGenerator::FilePath => lib.file_path(),
        StringGenerator::Filename => lib.filename(),
        StringGenerator::DetectionName => lib.detection_name(),
        StringGenerator::RegistryKey => lib.registry_key(),
        StringGenerator::SysmonGuid => lib.sysmon_guid(),
        StringGenerator::WindowsImagePath => lib.windows_image_path(),
        StringGenerator::WindowsUser => lib.windows_user(),
        StringGenerator::EmailSubject => lib.email_subject(),
        StringGenerator::Fallback => spec
            .default
            .as_ref()
            .map(literal_to_string)
            .unwrap_or_else(|| FALLBACK_STRING.to_string()),
    };
    Value::String(value)
}
