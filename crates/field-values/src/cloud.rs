//! Cloud provider values: AWS principals and ARNs, GCP resource names.

use crate::base::{digits, lower_hex, pick, upper_alphanumeric};
use rand::Rng;

const AWS_USER_AGENTS: &[&str] = &[
    "aws-cli/2.13.25 Python/3.11.5 Linux/5.15.0 exe/x86_64.ubuntu.22",
    "aws-sdk-go/1.44.327 (go1.20.7; linux; amd64)",
    "Boto3/1.28.55 Python/3.11.5 Linux/5.15.0",
    "aws-sdk-java/2.20.140 Linux/5.15.0",
    "[S3Console/0.4]",
    "console.amazonaws.com",
    "AWS Internal",
];

const AWS_PRINCIPAL_PREFIXES: &[&str] = &["AIDAI", "AROA", "AGPA"];

const GCP_ADJECTIVES: &[&str] = &["bright", "cool", "fast", "smart", "quick"];
const GCP_NOUNS: &[&str] = &["cloud", "data", "app", "service", "platform"];
const GCP_ZONES: &[&str] = &["us-central1-a", "us-east1-b", "europe-west1-c"];

pub fn aws_user_agent<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, AWS_USER_AGENTS).to_string()
}

/// IAM unique identifier: a type prefix followed by 17 uppercase alphanumerics.
pub fn aws_principal_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}",
        pick(rng, AWS_PRINCIPAL_PREFIXES),
        upper_alphanumeric(rng, 17)
    )
}

/// Twelve-digit AWS account number.
pub fn aws_account_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    digits(rng, 12)
}

/// ARN for an IAM user/role, S3 bucket, EC2 instance or Lambda function.
pub fn aws_arn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let account_id = aws_account_id(rng);
    match rng.random_range(0..5) {
        0 => format!(
            "arn:aws:iam::{account_id}:user/username{}",
            rng.random_range(1..=9999)
        ),
        1 => format!(
            "arn:aws:iam::{account_id}:role/rolename{}",
            rng.random_range(1..=9999)
        ),
        2 => format!("arn:aws:s3:::bucket-name{}", rng.random_range(1000..=9999)),
        3 => format!(
            "arn:aws:ec2:us-east-1:{account_id}:instance/i-{}",
            lower_hex(rng, 17)
        ),
        _ => format!(
            "arn:aws:lambda::{account_id}:function/function-name{}",
            rng.random_range(1..=9999)
        ),
    }
}

/// Resource ARN; shares the shape of [`aws_arn`].
pub fn aws_resource_arn<R: Rng + ?Sized>(rng: &mut R) -> String {
    aws_arn(rng)
}

/// Project id such as `bright-data-417`.
pub fn gcp_project_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}-{}-{}",
        pick(rng, GCP_ADJECTIVES),
        pick(rng, GCP_NOUNS),
        rng.random_range(100..=999)
    )
}

/// Fully-qualified resource name for an instance, bucket or service account.
pub fn gcp_resource_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let project_id = gcp_project_id(rng);
    let suffix = rng.random_range(1000..=9999);
    match rng.random_range(0..3) {
        0 => format!(
            "projects/{project_id}/zones/{}/instances/instance-{suffix}",
            pick(rng, GCP_ZONES)
        ),
        1 => format!("projects/{project_id}/buckets/bucket-{suffix}"),
        _ => format!("projects/{project_id}/serviceAccounts/sa-{suffix}"),
    }
}
