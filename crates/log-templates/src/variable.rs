//! Template variables.
//!
//! A variable name is resolved to one closed kind; several names share a
//! kind (`pid` and `process_id` both draw a process id). Every kind renders
//! to a string.

use chrono::{DateTime, Utc};
use field_values::{datetime_iso8601, FieldValueLibrary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateVariable {
    Timestamp,
    Uuid,
    ProcessId,
    ThreadId,
    Ip,
    Port,
    Username,
    Email,
    Filename,
    FilePath,
    ProcessName,
    CommandLine,
    Sha256,
    Md5,
    Hostname,
    Domain,
    /// Any name ending in `_number`
    Number,
    Unknown(String),
}

impl TemplateVariable {
    pub fn from_name(name: &str) -> Self {
        match name {
            "timestamp" | "utc_time" | "event_time" => Self::Timestamp,
            "uuid" | "event_id" | "record_id" | "id" => Self::Uuid,
            "process_id" | "pid" => Self::ProcessId,
            "thread_id" | "tid" => Self::ThreadId,
            "ip" | "source_ip" | "remote_ip" => Self::Ip,
            "port" | "source_port" | "remote_port" => Self::Port,
            "username" | "user" => Self::Username,
            "email" | "user_email" => Self::Email,
            "filename" | "file_name" => Self::Filename,
            "file_path" | "path" => Self::FilePath,
            "process_name" | "image_name" => Self::ProcessName,
            "command_line" | "cmdline" => Self::CommandLine,
            "sha256" | "hash_sha256" => Self::Sha256,
            "md5" | "hash_md5" => Self::Md5,
            "hostname" | "computer_name" => Self::Hostname,
            "domain" | "domain_name" => Self::Domain,
            _ if name.ends_with("_number") => Self::Number,
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Render a value for this variable.
    pub fn render<L: FieldValueLibrary>(
        &self,
        lib: &mut L,
        base_time: DateTime<Utc>,
        offset_seconds: i64,
    ) -> String {
        match self {
            Self::Timestamp => datetime_iso8601(base_time, offset_seconds),
            Self::Uuid => lib.uuid_v4().to_string(),
            Self::ProcessId => lib.int_in_range(100, 65535).to_string(),
            Self::ThreadId => lib.int_in_range(1, 10000).to_string(),
            Self::Ip => lib.ipv4(false),
            Self::Port => lib.int_in_range(1024, 65535).to_string(),
            Self::Username => lib.username(),
            Self::Email => lib.email(None),
            Self::Filename => lib.filename(),
            Self::FilePath => lib.file_path(),
            Self::ProcessName => lib.process_name(),
            Self::CommandLine => lib.command_line(),
            Self::Sha256 => lib.sha256(),
            Self::Md5 => lib.md5(),
            Self::Hostname => lib.device_name(),
            Self::Domain => lib.domain_name(),
            Self::Number => lib.int_in_range(1, 1_000_000).to_string(),
            Self::Unknown(name) => format!("{{{{unknown:{name}}}}}"),
        }
    }
}
