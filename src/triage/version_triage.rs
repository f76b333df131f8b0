use serde::Serialize;

use crate::config::LabelPolicy;
use crate::error::TriageResult;
use crate::extractor::{OwnedVersionMatch, VersionExtractor};
use crate::labeler::{Label, VersionLabeler};

/// 单个 issue 的分诊结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageOutcome {
    pub version_match: OwnedVersionMatch,
    pub label: Label,
}

/// 版本分诊器
/// 调用方传入 issue 正文，拿回标签；标签如何写回 issue 由调用方决定
#[derive(Debug, Clone)]
pub struct VersionTriage {
    labeler: VersionLabeler,
}

impl Default for VersionTriage {
    fn default() -> Self {
        Self {
            labeler: VersionLabeler::global().clone(),
        }
    }
}

impl VersionTriage {
    pub fn new(policy: LabelPolicy) -> TriageResult<Self> {
        Ok(Self {
            labeler: VersionLabeler::new(policy)?,
        })
    }

    pub fn labeler(&self) -> &VersionLabeler {
        &self.labeler
    }

    /// 对 issue 正文分诊
    /// 返回：
    /// - `Ok(Some(outcome))`: 找到 Server 版本并生成标签
    /// - `Ok(None)`: 正文中没有 Server 版本报告
    /// - `Err(_)`: 提取出的版本号无法打标签
    pub fn label_body(&self, body: &str) -> TriageResult<Option<TriageOutcome>> {
        let Some(found) = VersionExtractor::extract(body) else {
            return Ok(None);
        };

        let label = self.labeler.label(found.version, found.suffix)?;
        log::info!("Issue reports server version {} -> {}", found.version, label);

        Ok(Some(TriageOutcome {
            version_match: found.into_owned(),
            label,
        }))
    }
}
