// src/models.rs

use serde::{Deserialize, Serialize};

/// 分析失败时返回的固定结果
pub const ANALYSIS_FALLBACK_TITLE: &str = "제목 없는 Vibe";
pub const ANALYSIS_FALLBACK_SUMMARY: &str = "프롬프트를 자동으로 분석할 수 없습니다.";

/// 未运行分析时提交使用的默认值
pub const SUBMIT_DEFAULT_TITLE: &str = "새로운 Vibe";
pub const SUBMIT_DEFAULT_SUMMARY: &str = "요약 내용이 없습니다.";

pub const DEFAULT_TAG: &str = "Vibe";

/// 一条 vibe 记录，持久化为 camelCase JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub builder_url: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub deploy_url: String,
    #[serde(default)]
    pub author: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub timestamp: i64, // Unix 毫秒
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl AnalysisResult {
    pub fn fallback() -> Self {
        Self {
            title: ANALYSIS_FALLBACK_TITLE.to_string(),
            summary: ANALYSIS_FALLBACK_SUMMARY.to_string(),
            tags: vec![DEFAULT_TAG.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Feed,
    Create,
}

/// 没有持久化数据时使用的种子数据
pub fn seed_entries(now_millis: i64) -> Vec<Entry> {
    vec![Entry {
        id: "1".to_string(),
        title: "이커머스 대시보드".to_string(),
        summary: "판매 분석 차트가 포함된 React 기반 관리자 대시보드입니다.".to_string(),
        prompt: "Create a dark mode dashboard for an e-commerce site using Recharts for sales data, showing daily revenue and user acquisition.".to_string(),
        tags: vec![
            "Dashboard".to_string(),
            "Analytics".to_string(),
            "Dark Mode".to_string(),
        ],
        builder_url: "https://v0.dev/r/example1".to_string(),
        repo_url: "https://github.com/org/repo1".to_string(),
        deploy_url: "https://dashboard-demo.vercel.app".to_string(),
        author: "김개발".to_string(),
        timestamp: now_millis - 10_000_000,
    }]
}
