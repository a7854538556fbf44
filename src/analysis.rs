// src/analysis.rs

use crate::config::AnalysisConfig;
use crate::error::{Result, VibeError};
use crate::models::AnalysisResult;
use log::{debug, error};
use serde_json::{json, Value};

/// 分析结果：要么由模型生成，要么是失败后的固定回退值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Generated(AnalysisResult),
    Fallback {
        result: AnalysisResult,
        reason: String,
    },
}

impl Analysis {
    pub fn fallback(reason: impl Into<String>) -> Self {
        Analysis::Fallback {
            result: AnalysisResult::fallback(),
            reason: reason.into(),
        }
    }

    pub fn result(&self) -> &AnalysisResult {
        match self {
            Analysis::Generated(r) => r,
            Analysis::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            Analysis::Generated(r) => r,
            Analysis::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Analysis::Fallback { .. })
    }
}

/// 从提示词推导标题、摘要和标签。不会返回错误。
pub trait Analyzer {
    fn analyze(&self, prompt: &str) -> Analysis;
}

/// 离线模式：总是返回回退值
pub struct StaticAnalyzer;

impl Analyzer for StaticAnalyzer {
    fn analyze(&self, _prompt: &str) -> Analysis {
        Analysis::fallback("offline")
    }
}

pub struct GeminiClient {
    config: AnalysisConfig,
}

impl GeminiClient {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    fn try_analyze(&self, prompt: &str) -> Result<AnalysisResult> {
        let api_key = self.config.api_key.as_deref().ok_or(VibeError::MissingApiKey)?;
        // 密钥放在请求头里，避免出现在错误信息的 URL 中
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .build()?;
        let response = client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_payload(prompt, &self.config.language))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            let msg = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(VibeError::Api(msg));
        }

        parse_response(&body)
    }
}

impl Analyzer for GeminiClient {
    fn analyze(&self, prompt: &str) -> Analysis {
        if prompt.trim().is_empty() {
            return Analysis::fallback("empty prompt");
        }
        match self.try_analyze(prompt) {
            Ok(result) => {
                debug!("event=analysis status=ok tags={}", result.tags.len());
                Analysis::Generated(result)
            }
            Err(e) => {
                error!("event=analysis status=fallback error={}", e);
                Analysis::fallback(e.to_string())
            }
        }
    }
}

pub fn instruction(prompt: &str, language: &str) -> String {
    format!(
        "Analyze the following coding prompt used to generate a web application or component.\n\
         Extract a concise title (max 5 words) in {language}, a one-sentence summary (max 20 words) in {language}, \
         and up to 3 relevant technical tags (e.g., \"Dashboard\", \"Chart\", \"Login\").\n\n\
         Prompt:\n{prompt}"
    )
}

pub fn request_payload(prompt: &str, language: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": instruction(prompt, language) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "summary": { "type": "STRING" },
                    "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["title", "summary", "tags"]
            }
        }
    })
}

/// 解析 generateContent 的响应体，取出结构化结果
pub fn parse_response(body: &str) -> Result<AnalysisResult> {
    let v: Value = serde_json::from_str(body)?;

    if let Some(err) = v.get("error") {
        let msg = err["message"].as_str().unwrap_or("Unknown error");
        return Err(VibeError::Api(msg.to_string()));
    }

    let text = v["candidates"][0]["content"]["parts"]
        .as_array()
        .and_then(|parts| parts.iter().find_map(|p| p["text"].as_str()))
        .filter(|t| !t.trim().is_empty())
        .ok_or(VibeError::EmptyResponse)?;

    let result: AnalysisResult = serde_json::from_str(text)?;
    if result.tags.is_empty() {
        return Err(VibeError::Api("response contained no tags".to_string()));
    }
    Ok(result)
}
