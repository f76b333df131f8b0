//! 标签策略配置，存储所有可配置项

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{TriageError, TriageResult};

/// 标签策略
/// 后缀词表只收录明确认可的标记，未收录的后缀一律归入 unsupported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPolicy {
    // 标签前缀
    pub label_prefix: String,
    // 开发分支桶名
    pub master_bucket: String,
    // 不受支持构建桶名
    pub unsupported_bucket: String,
    // 开发分支标记（完整匹配）
    pub development_markers: Vec<String>,
    // 发行版标记（允许尾随数字，如 cs5）
    pub edition_markers: Vec<String>,
    // 候选版标记（允许尾随数字，如 rc4）
    pub release_candidate_markers: Vec<String>,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            label_prefix: "version/".to_string(),
            master_bucket: "master".to_string(),
            unsupported_bucket: "unsupported".to_string(),
            development_markers: vec!["dev".to_string()],
            edition_markers: vec!["ce".to_string(), "cs".to_string()],
            release_candidate_markers: vec!["rc".to_string()],
        }
    }
}

impl LabelPolicy {
    /// 自定义策略
    pub fn custom() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// 从 JSON 字符串加载策略，缺省字段取默认值
    pub fn from_json_str(json: &str) -> TriageResult<Self> {
        let policy: LabelPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// 从 JSON 文件加载策略
    pub fn from_json_file(path: impl AsRef<Path>) -> TriageResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        log::debug!("Loading label policy from {}", path.display());
        Self::from_json_str(&content)
    }

    /// 校验策略：前缀与桶名非空，标记只允许小写 ASCII 字母数字
    pub fn validate(&self) -> TriageResult<()> {
        if self.label_prefix.trim().is_empty() {
            return Err(TriageError::PolicyError("label_prefix 不能为空".to_string()));
        }
        for (field, bucket) in [
            ("master_bucket", &self.master_bucket),
            ("unsupported_bucket", &self.unsupported_bucket),
        ] {
            if bucket.trim().is_empty() {
                return Err(TriageError::PolicyError(format!("{} 不能为空", field)));
            }
        }

        let all_markers = self
            .development_markers
            .iter()
            .chain(&self.edition_markers)
            .chain(&self.release_candidate_markers);
        for marker in all_markers {
            let valid = !marker.is_empty()
                && marker
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
            if !valid {
                return Err(TriageError::PolicyError(format!(
                    "非法的后缀标记 {:?}，只允许小写 ASCII 字母数字",
                    marker
                )));
            }
        }
        Ok(())
    }
}

/// 策略构建器（便于自定义策略）
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: LabelPolicy,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            policy: LabelPolicy::default(),
        }
    }

    pub fn label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.policy.label_prefix = prefix.into();
        self
    }

    pub fn master_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.policy.master_bucket = bucket.into();
        self
    }

    pub fn unsupported_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.policy.unsupported_bucket = bucket.into();
        self
    }

    pub fn development_marker(mut self, marker: impl Into<String>) -> Self {
        self.policy.development_markers.push(marker.into());
        self
    }

    pub fn edition_marker(mut self, marker: impl Into<String>) -> Self {
        self.policy.edition_markers.push(marker.into());
        self
    }

    pub fn release_candidate_marker(mut self, marker: impl Into<String>) -> Self {
        self.policy.release_candidate_markers.push(marker.into());
        self
    }

    /// 构建并校验
    pub fn build(self) -> TriageResult<LabelPolicy> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}
