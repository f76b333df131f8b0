//! 后缀分类：把版本号连字符之后的后缀归类为开发版 / 发行版 / 候选版 / 不受支持
//! 词表只收录明确认可的标记，其余一律落入 Unsupported

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::config::LabelPolicy;
use crate::error::TriageResult;
use crate::utils::safe_lowercase;

/// 后缀类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixKind {
    /// 无后缀，正式版本
    Release,
    /// 开发分支快照，如 `dev`
    Development,
    /// 社区版 / 商业版，如 `ce`、`cs5`
    Edition,
    /// 候选版，如 `rc4`
    ReleaseCandidate,
    /// 第三方重新打包等不受支持的构建，如 `el7.centos`
    Unsupported,
}

impl Display for SuffixKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SuffixKind::Release => write!(f, "release"),
            SuffixKind::Development => write!(f, "development"),
            SuffixKind::Edition => write!(f, "edition"),
            SuffixKind::ReleaseCandidate => write!(f, "release_candidate"),
            SuffixKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// 由标签策略编译出的后缀分类器
#[derive(Debug, Clone)]
pub struct SuffixClassifier {
    development: Option<Regex>,
    edition: Option<Regex>,
    release_candidate: Option<Regex>,
}

impl SuffixClassifier {
    /// 编译策略中的三组标记
    /// 开发标记要求完整匹配，发行版 / 候选版标记允许尾随数字
    pub fn compile(policy: &LabelPolicy) -> TriageResult<Self> {
        Ok(Self {
            development: Self::compile_markers(&policy.development_markers, false)?,
            edition: Self::compile_markers(&policy.edition_markers, true)?,
            release_candidate: Self::compile_markers(&policy.release_candidate_markers, true)?,
        })
    }

    fn compile_markers(markers: &[String], allow_number: bool) -> TriageResult<Option<Regex>> {
        if markers.is_empty() {
            return Ok(None);
        }
        let alternation = markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        let number = if allow_number { "[0-9]*" } else { "" };
        let regex = Regex::new(&format!("^(?:{}){}$", alternation, number))?;
        Ok(Some(regex))
    }

    /// 对整个后缀分类
    /// 每个 `-` 分隔的片段都必须被识别，否则整体视为 Unsupported；类别取首个片段
    pub fn classify(&self, suffix: &str) -> SuffixKind {
        if suffix.is_empty() {
            return SuffixKind::Release;
        }

        let lowered = safe_lowercase(suffix);
        let mut primary: Option<SuffixKind> = None;
        for token in lowered.split('-') {
            match self.classify_token(token) {
                Some(kind) => {
                    primary.get_or_insert(kind);
                }
                None => return SuffixKind::Unsupported,
            }
        }
        primary.unwrap_or(SuffixKind::Unsupported)
    }

    fn classify_token(&self, token: &str) -> Option<SuffixKind> {
        let is_match = |re: &Option<Regex>| re.as_ref().is_some_and(|re| re.is_match(token));

        if is_match(&self.development) {
            Some(SuffixKind::Development)
        } else if is_match(&self.edition) {
            Some(SuffixKind::Edition)
        } else if is_match(&self.release_candidate) {
            Some(SuffixKind::ReleaseCandidate)
        } else {
            None
        }
    }
}
