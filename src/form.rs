// src/form.rs

use crate::analysis::{Analysis, Analyzer};
use crate::error::{Result, VibeError};
use crate::models::{Entry, DEFAULT_TAG, SUBMIT_DEFAULT_SUMMARY, SUBMIT_DEFAULT_TITLE};
use log::{debug, info};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prompt,
    BuilderUrl,
    RepoUrl,
    DeployUrl,
    Author,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub prompt: String,
    pub builder_url: String,
    pub repo_url: String,
    pub deploy_url: String,
    pub author: String,
}

/// 一次分析请求的凭据，只有最新的凭据能写回预览
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

pub struct EntryFormController {
    draft: Draft,
    preview: Option<Analysis>,
    generation: u64,
    analyzing: bool,
    submitting: bool,
    closed: bool,
    submit_delay: Duration,
}

impl EntryFormController {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            draft: Draft::default(),
            preview: None,
            generation: 0,
            analyzing: false,
            submitting: false,
            closed: false,
            submit_delay,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn preview(&self) -> Option<&Analysis> {
        self.preview.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Prompt => self.draft.prompt = value,
            Field::BuilderUrl => self.draft.builder_url = value,
            Field::RepoUrl => self.draft.repo_url = value,
            Field::DeployUrl => self.draft.deploy_url = value,
            Field::Author => self.draft.author = value,
        }
    }

    /// 分析按钮是否可用
    pub fn can_analyze(&self) -> bool {
        !self.closed && !self.analyzing && !self.draft.prompt.trim().is_empty()
    }

    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if !self.can_analyze() {
            return None;
        }
        self.generation += 1;
        self.analyzing = true;
        debug!("event=form_analysis_begin generation={}", self.generation);
        Some(AnalysisTicket {
            generation: self.generation,
        })
    }

    /// 写回分析结果；过期或表单已关闭时丢弃
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket, analysis: Analysis) -> bool {
        if ticket.generation != self.generation || self.closed {
            debug!(
                "event=form_analysis_discard generation={} latest={}",
                ticket.generation, self.generation
            );
            return false;
        }
        self.analyzing = false;
        self.preview = Some(analysis);
        true
    }

    pub fn cancel_analysis(&mut self) {
        self.generation += 1;
        self.analyzing = false;
    }

    pub fn run_analysis(&mut self, analyzer: &dyn Analyzer) -> Option<&Analysis> {
        let ticket = self.begin_analysis()?;
        let analysis = analyzer.analyze(&self.draft.prompt);
        if self.complete_analysis(ticket, analysis) {
            self.preview.as_ref()
        } else {
            None
        }
    }

    /// 生成新条目并关闭表单
    pub fn submit(&mut self, now_millis: i64) -> Result<Entry> {
        if self.closed {
            return Err(VibeError::InvalidInput("form is already closed".to_string()));
        }
        if self.draft.prompt.trim().is_empty() {
            return Err(VibeError::InvalidInput("prompt is required".to_string()));
        }
        self.submitting = true;

        let preview = self.preview.as_ref().map(Analysis::result);
        let title = preview
            .map(|r| r.title.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| SUBMIT_DEFAULT_TITLE.to_string());
        let summary = preview
            .map(|r| r.summary.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SUBMIT_DEFAULT_SUMMARY.to_string());
        let tags = preview
            .map(|r| r.tags.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_TAG.to_string()]);

        let draft = std::mem::take(&mut self.draft);
        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            prompt: draft.prompt,
            builder_url: draft.builder_url,
            repo_url: draft.repo_url,
            deploy_url: draft.deploy_url,
            author: draft.author,
            title,
            summary,
            tags,
            timestamp: now_millis,
        };

        // 仅为交互体验的短暂延迟
        if !self.submit_delay.is_zero() {
            std::thread::sleep(self.submit_delay);
        }

        // 提交后仍在进行的分析结果作废
        self.generation += 1;
        self.analyzing = false;
        self.submitting = false;
        self.closed = true;
        info!("event=form_submit status=ok id={}", entry.id);
        Ok(entry)
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.closed = true;
        self.analyzing = false;
    }
}
