//! 版本标签生成：把 (版本号, 后缀) 映射为 `version/<bucket>` 标签

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

use super::suffix::{SuffixClassifier, SuffixKind};
use crate::config::LabelPolicy;
use crate::error::{TriageError, TriageResult};

/// 默认策略下的全局标签器，首次使用时编译
static DEFAULT_LABELER: Lazy<VersionLabeler> = Lazy::new(|| {
    VersionLabeler::new(LabelPolicy::default()).unwrap_or_else(|e| {
        panic!("默认标签策略编译失败: {}", e);
    })
});

/// 标签桶
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LabelBucket {
    Unsupported,
    Master,
    /// 主次版本号原样保留（`17.03` 不会被规范成 `17.3`）
    Release { major: String, minor: String },
}

/// 最终标签
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    text: String,
    bucket: LabelBucket,
}

impl Label {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn bucket(&self) -> &LabelBucket {
        &self.bucket
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

// 序列化为纯字符串，与写回 issue 的标签保持一致
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// 版本标签器
#[derive(Debug, Clone)]
pub struct VersionLabeler {
    policy: LabelPolicy,
    classifier: SuffixClassifier,
}

impl VersionLabeler {
    /// 校验并编译标签策略
    pub fn new(policy: LabelPolicy) -> TriageResult<Self> {
        policy.validate()?;
        let classifier = SuffixClassifier::compile(&policy)?;
        Ok(Self { policy, classifier })
    }

    /// 默认策略下的全局实例
    pub fn global() -> &'static VersionLabeler {
        &DEFAULT_LABELER
    }

    pub fn policy(&self) -> &LabelPolicy {
        &self.policy
    }

    pub fn classify_suffix(&self, suffix: &str) -> SuffixKind {
        self.classifier.classify(suffix)
    }

    /// 生成标签
    ///
    /// 规则按顺序匹配，先命中者生效：
    /// 1. 后缀不在认可词表内 → `unsupported`
    /// 2. 后缀首个片段是开发标记 → `master`
    /// 3. 其余（无后缀 / 发行版 / 候选版）→ `<MAJOR>.<MINOR>`
    ///
    /// 版本号少于两段或前两段不是纯数字时返回 `MalformedVersion`
    pub fn label(&self, version: &str, suffix: &str) -> TriageResult<Label> {
        let (major, minor) = split_major_minor(version)?;

        let kind = self.classifier.classify(suffix);
        let bucket = match kind {
            SuffixKind::Unsupported => LabelBucket::Unsupported,
            SuffixKind::Development => LabelBucket::Master,
            SuffixKind::Release | SuffixKind::Edition | SuffixKind::ReleaseCandidate => {
                LabelBucket::Release {
                    major: major.to_string(),
                    minor: minor.to_string(),
                }
            }
        };

        let text = match &bucket {
            LabelBucket::Unsupported => {
                format!("{}{}", self.policy.label_prefix, self.policy.unsupported_bucket)
            }
            LabelBucket::Master => format!("{}{}", self.policy.label_prefix, self.policy.master_bucket),
            LabelBucket::Release { major, minor } => {
                format!("{}{}.{}", self.policy.label_prefix, major, minor)
            }
        };

        log::debug!("Version {} with suffix {:?} ({}) -> {}", version, suffix, kind, text);
        Ok(Label { text, bucket })
    }
}

/// 取版本号前两段，原样返回
fn split_major_minor(version: &str) -> TriageResult<(&str, &str)> {
    let is_numeric = |s: &&str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let mut parts = version.split('.');
    match (parts.next().filter(is_numeric), parts.next().filter(is_numeric)) {
        (Some(major), Some(minor)) => Ok((major, minor)),
        _ => Err(TriageError::MalformedVersion(version.to_string())),
    }
}

/// 函数式入口，使用默认策略
pub fn label_from_version(version: &str, suffix: &str) -> TriageResult<Label> {
    VersionLabeler::global().label(version, suffix)
}
