//! 版本提取工具模块
//! 负责从 issue 正文中的 `version` 报告里定位 Server 段的 Version 行
//! 并拆分出数字版本号 MAJOR.MINOR.PATCH 与可选后缀

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::preview::preview_compact;

/// Server 标签行：行首可有空白，冒号后允许附带文字（如 `Server: Docker Engine - Community`）
static SERVER_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(Server:)").expect("server label regex"));

/// 缩进的 Version 键，段内第一条即 Server 自身的版本行
static VERSION_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]+Version:").expect("version key regex"));

/// 缩进的 Version 行：版本号三段纯数字，首个连字符之后为后缀，后缀之后必须是空白或行尾
static VERSION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]+Version:[ \t]+([0-9]+\.[0-9]+\.[0-9]+)(?:-([0-9A-Za-z.\-]+))?(?:[ \t]|$)")
        .expect("version line regex")
});

/// 日志预览长度
const LOG_PREVIEW_LEN: usize = 80;

/// 版本匹配结果，全部字段借用自原始正文（零拷贝）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionMatch<'a> {
    /// 原文中从 `Server:` 到版本号末尾的完整片段，空白原样保留
    /// 嵌套布局（`Server:` → ` Engine:` → `  Version:`）下会包含中间行，不止两行
    pub full_match: &'a str,
    /// 数字版本号，如 `1.8.3`
    pub version: &'a str,
    /// 首个连字符之后的后缀，无后缀时为空串
    pub suffix: &'a str,
}

impl<'a> VersionMatch<'a> {
    /// 按 (完整片段, 版本号, 后缀) 顺序输出
    pub fn to_parts(&self) -> [&'a str; 3] {
        [self.full_match, self.version, self.suffix]
    }

    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    pub fn into_owned(self) -> OwnedVersionMatch {
        OwnedVersionMatch {
            full_match: self.full_match.to_string(),
            version: self.version.to_string(),
            suffix: self.suffix.to_string(),
        }
    }
}

/// 持有所有权的版本匹配结果，供生命周期长于正文的调用方使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedVersionMatch {
    pub full_match: String,
    pub version: String,
    pub suffix: String,
}

impl OwnedVersionMatch {
    pub fn as_match(&self) -> VersionMatch<'_> {
        VersionMatch {
            full_match: &self.full_match,
            version: &self.version,
            suffix: &self.suffix,
        }
    }
}

/// 版本提取工具类
/// 提供静态方法 `extract` 用于版本号提取
pub struct VersionExtractor;

impl VersionExtractor {
    /// 从 issue 正文中提取最后一个 Server 段的版本信息
    ///
    /// # 参数
    /// - `body`: issue 正文，通常内嵌一段 `version` 命令输出（Client 段 + Server 段）
    ///
    /// # 返回值
    /// - `Some(VersionMatch)`: 最后一个带 Version 行的 Server 段
    /// - `None`: 正文中没有 Server 段，或 Server 段中没有合法的 Version 行
    pub fn extract(body: &str) -> Option<VersionMatch<'_>> {
        let label_starts: Vec<usize> = SERVER_LABEL_RE
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.start())
            .collect();

        // 从后往前找，Client 段的 Version 永远不会被选中
        for &label_start in label_starts.iter().rev() {
            if let Some(found) = Self::match_server_block(body, label_start) {
                log::debug!(
                    "Extracted server version {} (suffix {:?})",
                    found.version,
                    found.suffix
                );
                return Some(found);
            }
            log::trace!("Server block at offset {} carries no usable Version line", label_start);
        }

        log::debug!(
            "No server version report found in body: {}",
            preview_compact(body, LOG_PREVIEW_LEN)
        );
        None
    }

    /// 取单个 Server 段内第一条 Version 行
    /// 段范围：标签行之后连续的、非空且带缩进的行
    /// 该行版本号不符合 MAJOR.MINOR.PATCH[-后缀] 时返回 None
    fn match_server_block(body: &str, label_start: usize) -> Option<VersionMatch<'_>> {
        let label_line_len = body[label_start..].find('\n')?;
        let mut line_start = label_start + label_line_len + 1;

        for line in body[line_start..].split('\n') {
            let content = line.strip_suffix('\r').unwrap_or(line);
            if content.trim().is_empty() || !content.starts_with([' ', '\t']) {
                break;
            }

            // 只认段内第一条 Version 行，格式不合法则整段无匹配，不再往下找子组件的版本
            if VERSION_KEY_RE.is_match(content) {
                let caps = VERSION_LINE_RE.captures(content)?;
                let version = caps.get(1)?;
                let suffix = caps.get(2);
                let token_end = suffix.map_or(version.end(), |m| m.end());

                return Some(VersionMatch {
                    full_match: &body[label_start..line_start + token_end],
                    version: version.as_str(),
                    suffix: suffix.map_or("", |m| m.as_str()),
                });
            }

            line_start += line.len() + 1;
        }
        None
    }
}

/// 函数式入口，等价于 `VersionExtractor::extract`
pub fn extract_version_from_body(body: &str) -> Option<VersionMatch<'_>> {
    VersionExtractor::extract(body)
}
