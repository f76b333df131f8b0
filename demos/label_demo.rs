//! Version triage demonstration for issue-version-triage
//! issue 版本分诊演示程序
//! 功能说明：
//! 1. 从一段内嵌的 `docker version` 报告中提取 Server 版本
//! 2. 生成分诊标签并以 JSON 输出
//!
//! 运行命令：
//! cargo run --example label_demo

use env_logger::{Builder, Env, Target};
use issue_version_triage::{label_issue_body, SuffixKind, VersionLabeler};
use serde_json::to_string_pretty;
use std::error::Error;

const SAMPLE_ISSUE_BODY: &str = r#"
**Description**
Container exits immediately after `docker run`.

**Output of `docker version`:**

```
Client:
 Version:      17.03.0-ce
 API version:  1.26
 Go version:   go1.7.5
 Git commit:   60ccb22
 Built:        Thu Feb 23 10:40:59 2017
 OS/Arch:      windows/amd64

Server:
 Version:      17.03.0-ce
 API version:  1.26 (minimum version 1.12)
 Go version:   go1.7.5
 Git commit:   3a232c8
 Built:        Tue Feb 28 07:52:04 2017
 OS/Arch:      linux/amd64
 Experimental: true
```
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 执行分诊 ==========
    match label_issue_body(SAMPLE_ISSUE_BODY)? {
        Some(outcome) => {
            let kind: SuffixKind =
                VersionLabeler::global().classify_suffix(&outcome.version_match.suffix);
            println!("suffix kind: {}", kind);
            println!("{}", to_string_pretty(&outcome)?);
            println!("label to apply: {}", outcome.label.into_string());
        }
        None => println!("no server version report found"),
    }

    Ok(())
}
