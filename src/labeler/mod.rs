//! 标签模块：版本号 + 后缀 → 分诊标签
pub mod suffix;
pub mod version_labeler;

pub use self::suffix::{SuffixClassifier, SuffixKind};
pub use self::version_labeler::{label_from_version, Label, LabelBucket, VersionLabeler};
