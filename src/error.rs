//! 全局错误类型定义
use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum TriageError {
    // 版本相关错误
    #[error("版本号格式非法：{0}")]
    MalformedVersion(String),

    // 配置相关错误
    #[error("标签策略配置无效：{0}")]
    PolicyError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type TriageResult<T> = Result<T, TriageError>;
