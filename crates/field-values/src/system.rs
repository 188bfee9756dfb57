//! Host and endpoint values: processes, files, hashes, registry, geography.

use crate::base::{lower_hex, pick, uuid_v4};
use rand::Rng;

const PROCESS_NAMES: &[&str] = &[
    "chrome.exe",
    "firefox.exe",
    "msedge.exe",
    "explorer.exe",
    "svchost.exe",
    "System",
    "cmd.exe",
    "powershell.exe",
    "notepad.exe",
    "Teams.exe",
    "Outlook.exe",
    "Excel.exe",
    "Word.exe",
    "java.exe",
    "python.exe",
    "node.exe",
    "code.exe",
    "slack.exe",
    "zoom.exe",
];

const COMMAND_LINES: &[&str] = &[
    r#""C:\Program Files\Google\Chrome\Application\chrome.exe" --type=renderer"#,
    r"C:\Windows\System32\svchost.exe -k NetworkService",
    "powershell.exe -NoProfile -Command Get-Process",
    r#"cmd.exe /c "dir C:\Users""#,
    r#""C:\Program Files\Microsoft Office\Office16\OUTLOOK.EXE""#,
    "python.exe script.py --verbose",
    "node.exe server.js",
    r#""C:\Windows\Explorer.EXE""#,
    r"notepad.exe C:\Users\user\Documents\file.txt",
];

const FILE_PATHS: &[&str] = &[
    r"C:\Users\user\Documents\report.docx",
    r"C:\Users\user\Downloads\setup.exe",
    r"C:\Windows\System32\config\system",
    r"C:\Program Files\Application\app.exe",
    r"C:\Users\Public\Desktop\file.txt",
    r"C:\Temp\output.log",
    r"C:\ProgramData\vendor\data.json",
    r"C:\Users\user\AppData\Local\Temp\tmp.dat",
    r"D:\Projects\source\main.py",
];

const DETECTION_NAMES: &[&str] = &[
    "Suspicious PowerShell Execution",
    "Malicious Process Detected",
    "Credential Dumping Attempt",
    "Lateral Movement Activity",
    "Ransomware Behavior",
    "Privilege Escalation",
    "Malware Communication",
    "Suspicious Network Connection",
    "File Encryption Activity",
    "Registry Persistence",
    "Suspicious Script Execution",
    "Command and Control Traffic",
];

const REGISTRY_KEYS: &[&str] = &[
    r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\Run",
    r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\RunOnce",
    r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run",
    r"HKLM\SYSTEM\CurrentControlSet\Services",
    r"HKLM\SOFTWARE\Policies\Microsoft\Windows",
    r"HKCU\Software\Microsoft\Windows\CurrentVersion\Explorer",
    r"HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion",
];

const WINDOWS_IMAGE_PATHS: &[&str] = &[
    r"C:\Windows\System32\cmd.exe",
    r"C:\Windows\System32\powershell.exe",
    r"C:\Windows\System32\WindowsPowerShell\v1.0\powershell.exe",
    r"C:\Windows\explorer.exe",
    r"C:\Windows\System32\svchost.exe",
    r"C:\Windows\System32\rundll32.exe",
    r"C:\Windows\System32\wscript.exe",
    r"C:\Windows\System32\cscript.exe",
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files\Microsoft Office\Office16\EXCEL.EXE",
    r"C:\Program Files\Microsoft Office\Office16\WINWORD.EXE",
    r"C:\Program Files\Microsoft Office\Office16\OUTLOOK.EXE",
    r"C:\Windows\System32\msiexec.exe",
    r"C:\Windows\System32\reg.exe",
    r"C:\Windows\System32\net.exe",
];

const WINDOWS_DOMAINS: &[&str] = &["WORKSTATION", "CORP", "DOMAIN", "NT AUTHORITY"];
const WINDOWS_USERS: &[&str] = &["user", "admin", "Administrator", "SYSTEM", "service_account"];

const DEVICE_PREFIXES: &[&str] = &["DESKTOP", "LAPTOP", "MOBILE", "WORKSTATION"];

const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "London",
    "Paris",
    "Tokyo",
    "Sydney",
    "Toronto",
    "Berlin",
    "Singapore",
    "Mumbai",
    "Dubai",
    "Amsterdam",
];

const STATES: &[&str] = &[
    "California",
    "Texas",
    "Florida",
    "New York",
    "Pennsylvania",
    "Illinois",
    "Ohio",
    "Georgia",
    "North Carolina",
    "Michigan",
];

const COUNTRY_CODES: &[&str] = &[
    "US", "GB", "CA", "AU", "DE", "FR", "JP", "IN", "BR", "MX", "IT", "ES", "NL", "SE", "SG",
    "AE", "CN", "KR", "RU", "ZA",
];

const EMAIL_SUBJECTS: &[&str] = &[
    "Project Update",
    "Meeting Tomorrow",
    "Q4 Report",
    "Action Required",
    "Weekly Status",
    "Follow Up",
    "Question about the proposal",
    "Budget Review",
    "Team Lunch",
    "Important Announcement",
    "Schedule Change",
    "Document Review",
    "Approval Needed",
    "Thank You",
    "Next Steps",
    "Quarterly Results",
    "Policy Update",
    "Training Session",
    "Feedback Request",
    "System Maintenance",
];

const FILE_STEMS: &[&str] = &[
    "report",
    "document",
    "presentation",
    "spreadsheet",
    "budget",
    "proposal",
    "summary",
    "analysis",
    "data",
    "meeting_notes",
    "project_plan",
    "requirements",
    "spec",
];

const FILE_EXTENSIONS: &[&str] = &[
    ".docx", ".xlsx", ".pptx", ".pdf", ".txt", ".csv", ".json", ".xml", ".zip", ".png",
];

const FILE_SUFFIXES: &[&str] = &["2024", "2025", "Q4", "final", "v2", "draft"];

pub fn process_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, PROCESS_NAMES).to_string()
}

pub fn command_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, COMMAND_LINES).to_string()
}

pub fn sha256<R: Rng + ?Sized>(rng: &mut R) -> String {
    lower_hex(rng, 64)
}

pub fn md5<R: Rng + ?Sized>(rng: &mut R) -> String {
    lower_hex(rng, 32)
}

pub fn file_path<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FILE_PATHS).to_string()
}

pub fn detection_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, DETECTION_NAMES).to_string()
}

pub fn registry_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, REGISTRY_KEYS).to_string()
}

/// Braced uppercase GUID as it appears in Sysmon `ProcessGuid` fields.
pub fn sysmon_guid<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{{{}}}", uuid_v4(rng).to_string().to_uppercase())
}

pub fn windows_image_path<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, WINDOWS_IMAGE_PATHS).to_string()
}

/// Account in `DOMAIN\user` form.
pub fn windows_user<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}\\{}", pick(rng, WINDOWS_DOMAINS), pick(rng, WINDOWS_USERS))
}

/// Sysmon `Hashes` field: `MD5=...,SHA256=...`.
pub fn sysmon_hashes<R: Rng + ?Sized>(rng: &mut R) -> String {
    let md5 = md5(rng);
    let sha256 = sha256(rng);
    format!("MD5={md5},SHA256={sha256}")
}

/// Host name such as `LAPTOP-K4821`.
pub fn device_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, DEVICE_PREFIXES);
    let letter = (b'A' + rng.random_range(0..26u8)) as char;
    format!("{prefix}-{letter}{}", rng.random_range(1000..=9999))
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, STATES).to_string()
}

pub fn country_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, COUNTRY_CODES).to_string()
}

pub fn latitude<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.random_range(-90.0..=90.0_f64) * 1e6).round() / 1e6
}

pub fn longitude<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.random_range(-180.0..=180.0_f64) * 1e6).round() / 1e6
}

pub fn email_subject<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, EMAIL_SUBJECTS).to_string()
}

/// Document file name; about 30% carry a version or date suffix.
pub fn filename<R: Rng + ?Sized>(rng: &mut R) -> String {
    let stem = pick(rng, FILE_STEMS);
    let ext = pick(rng, FILE_EXTENSIONS);
    if rng.random::<f64>() < 0.3 {
        format!("{stem}_{}{ext}", pick(rng, FILE_SUFFIXES))
    } else {
        format!("{stem}{ext}")
    }
}
