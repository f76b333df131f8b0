//! issue-version-triage - 从 issue 正文中的 version 报告提取 Server 版本并生成分诊标签

pub mod config;
pub mod error;
pub mod extractor;
pub mod labeler;
pub mod triage;
pub mod utils;

// 导出全局错误类型
pub use self::error::{TriageError, TriageResult};

// 导出配置模块核心结构体与构建器
pub use self::config::{LabelPolicy, PolicyBuilder};

// 导出提取模块核心接口
pub use self::extractor::{
    extract_version_from_body, OwnedVersionMatch, VersionExtractor, VersionMatch,
};

// 导出标签模块核心接口
pub use self::labeler::{
    label_from_version, Label, LabelBucket, SuffixClassifier, SuffixKind, VersionLabeler,
};

// 导出分诊流程接口
pub use self::triage::{
    global_triage, init_global_triage, label_issue_body, TriageOutcome, VersionTriage,
};
