//! 全局分诊器单例管理
//! 1. 维护进程生命周期内唯一的 VersionTriage 实例
//! 2. 支持启动时注入自定义策略，未注入则首次使用时按默认策略初始化

use once_cell::sync::OnceCell;

use super::version_triage::{TriageOutcome, VersionTriage};
use crate::config::LabelPolicy;
use crate::error::{TriageError, TriageResult};

/// 全局分诊器实例 - 线程安全单例
static GLOBAL_TRIAGE: OnceCell<VersionTriage> = OnceCell::new();

/// 使用自定义策略初始化全局分诊器
/// 幂等：已初始化且策略相同则直接返回 Ok(())，策略不同返回错误
pub fn init_global_triage(policy: LabelPolicy) -> TriageResult<()> {
    if let Some(existing) = GLOBAL_TRIAGE.get() {
        if existing.labeler().policy() == &policy {
            log::debug!("Global triage already initialized with the same policy, skip");
            return Ok(());
        }
        return Err(TriageError::PolicyError(
            "全局分诊器已使用其他策略初始化".to_string(),
        ));
    }

    let triage = VersionTriage::new(policy)?;
    GLOBAL_TRIAGE.set(triage).map_err(|_| {
        TriageError::PolicyError("全局分诊器已被其他线程初始化".to_string())
    })?;

    log::info!("Global version triage initialized with custom policy");
    Ok(())
}

/// 获取全局分诊器（未初始化则使用默认策略）
pub fn global_triage() -> &'static VersionTriage {
    GLOBAL_TRIAGE.get_or_init(|| {
        log::debug!("Lazy initializing global version triage with default policy");
        VersionTriage::default()
    })
}

/// 函数式入口：用全局分诊器处理 issue 正文
pub fn label_issue_body(body: &str) -> TriageResult<Option<TriageOutcome>> {
    global_triage().label_body(body)
}
