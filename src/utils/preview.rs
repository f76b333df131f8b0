use std::fmt::{self, Write};

// ======================== 日志预览 ========================
/// 空白字符折叠 + 截断，用于把整段 issue 正文压成单行日志
/// 不分配 String，超过最大长度时追加省略号并立即终止遍历
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl<'a> fmt::Display for CompactView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            // 跳过开头空白，正文通常以换行开始
            for ch in self.source.trim_start().chars() {
                if ch.is_whitespace() && last_was_whitespace {
                    continue;
                }
                if char_count >= self.max_length {
                    // 只剩空白时不算截断
                    if ch.is_whitespace() {
                        continue;
                    }
                    f.write_char('…')?;
                    break;
                }

                if ch.is_whitespace() {
                    f.write_char(' ')?;
                    last_was_whitespace = true;
                } else {
                    f.write_char(ch)?;
                    last_was_whitespace = false;
                }
                char_count += 1;
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

/// 安全转小写，仅转换ASCII字符
#[inline(always)]
pub fn safe_lowercase(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}
