// src/config.rs

use crate::db;
use crate::error::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LANGUAGE: &str = "Korean";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub language: String,
    pub timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub analysis: AnalysisConfig,
    pub submit_delay: Duration,
}

impl Config {
    /// 命令行参数优先，其次是环境变量，最后是默认值
    pub fn resolve(db_flag: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(db_flag, |name| env::var(name).ok())
    }

    pub fn resolve_with<F>(db_flag: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let db_path = match db_flag.or_else(|| non_empty("VIBESHARE_DB").map(PathBuf::from)) {
            Some(p) => p,
            None => db::get_db_path()?,
        };

        let defaults = AnalysisConfig::default();
        let analysis = AnalysisConfig {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("VIBESHARE_MODEL").unwrap_or(defaults.model),
            endpoint: non_empty("VIBESHARE_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            language: non_empty("VIBESHARE_LANGUAGE").unwrap_or(defaults.language),
            timeout: defaults.timeout,
        };

        Ok(Self {
            db_path,
            analysis,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)], db_flag: Option<&str>) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::resolve_with(db_flag.map(PathBuf::from), |name| map.get(name).cloned()).unwrap()
    }

    #[test]
    fn flag_wins_over_env_for_db_path() {
        let cfg = resolve(&[("VIBESHARE_DB", "/tmp/env.db")], Some("/tmp/flag.db"));
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/flag.db"));

        let cfg = resolve(&[("VIBESHARE_DB", "/tmp/env.db")], None);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn api_key_falls_back_to_generic_name() {
        let cfg = resolve(&[("API_KEY", "k2")], Some("/tmp/x.db"));
        assert_eq!(cfg.analysis.api_key.as_deref(), Some("k2"));

        let cfg = resolve(&[("API_KEY", "k2"), ("GEMINI_API_KEY", "k1")], Some("/tmp/x.db"));
        assert_eq!(cfg.analysis.api_key.as_deref(), Some("k1"));

        let cfg = resolve(&[("GEMINI_API_KEY", "  ")], Some("/tmp/x.db"));
        assert_eq!(cfg.analysis.api_key, None);
    }

    #[test]
    fn defaults_apply() {
        let cfg = resolve(&[("VIBESHARE_ENDPOINT", "http://localhost:9/v1/")], Some("/tmp/x.db"));
        assert_eq!(cfg.analysis.model, DEFAULT_MODEL);
        assert_eq!(cfg.analysis.endpoint, "http://localhost:9/v1");
        assert_eq!(cfg.analysis.language, "Korean");
        assert_eq!(cfg.submit_delay, Duration::from_millis(400));
    }
}
