// src/feed.rs

use crate::models::Entry;
use chrono::{Local, TimeZone};
use std::io::{self, Write};

pub const EMPTY_TITLE: &str = "등록된 Vibe가 없습니다";
pub const EMPTY_HINT: &str = "'vibeshare create' 명령으로 코딩 결과물을 팀과 공유해보세요.";

/// 卡片上的删除等操作，由 AppShell 处理
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    Delete(String),
}

pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%m월 %d일 %H:%M").to_string(),
        None => "-".to_string(),
    }
}

fn link(label: &str, url: &str) -> String {
    if url.trim().is_empty() {
        format!("{label}: -")
    } else {
        format!("{label}: {url}")
    }
}

pub fn render_card<W: Write>(entry: &Entry, out: &mut W) -> io::Result<()> {
    write_card(entry, true, out)
}

fn write_card<W: Write>(entry: &Entry, with_prompt: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "[{}] {}", entry.id, entry.title)?;
    writeln!(out, "  #{}", entry.tags.join(" #"))?;
    writeln!(out, "  {}", entry.summary)?;
    let author = if entry.author.trim().is_empty() {
        String::new()
    } else {
        format!("{} · ", entry.author)
    };
    writeln!(out, "  {}{}", author, format_timestamp(entry.timestamp))?;
    if with_prompt {
        writeln!(out, "  > {}", entry.prompt.trim_end().replace('\n', "\n  > "))?;
    }
    writeln!(
        out,
        "  {} | {} | {}",
        link("빌더", &entry.builder_url),
        link("리포", &entry.repo_url),
        link("배포", &entry.deploy_url)
    )?;
    writeln!(out, "{}", "─".repeat(40))
}

/// 渲染所有条目，不分页也不过滤
pub fn render_feed<W: Write>(entries: &[Entry], out: &mut W) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "✨ {EMPTY_TITLE}")?;
        return writeln!(out, "{EMPTY_HINT}");
    }
    for entry in entries {
        render_card(entry, out)?;
    }
    Ok(())
}

/// 显示完整提示词，便于复制
pub fn render_entry_detail<W: Write>(entry: &Entry, out: &mut W) -> io::Result<()> {
    write_card(entry, false, out)?;
    writeln!(out, "{}", entry.prompt)
}
