//! 分诊模块：提取 + 打标签的完整流程
pub mod global;
pub mod version_triage;

pub use self::global::{global_triage, init_global_triage, label_issue_body};
pub use self::version_triage::{TriageOutcome, VersionTriage};
