//! 提取模块：从 issue 正文中提取版本报告
pub mod version_extractor;

pub use self::version_extractor::{
    extract_version_from_body, OwnedVersionMatch, VersionExtractor, VersionMatch,
};
