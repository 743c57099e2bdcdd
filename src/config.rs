use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexError, Result};
use crate::matcher::{FieldWeights, OverlapParams};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyze: AnalyzeConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub bulletin: BulletinConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path (argument or `LEXWATCH_CONFIG`) replaces the global
    /// and project files. Environment overrides are applied last.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LEXWATCH_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    pub fn overlap_params(&self) -> OverlapParams {
        OverlapParams {
            min_divisor: self.analyze.min_divisor,
            phrase_boost: self.analyze.phrase_boost,
            threshold: self.analyze.threshold,
        }
    }

    /// Output format requested through the environment. `LEXWATCH_ROBOT`
    /// wins over `LEXWATCH_OUTPUT_FORMAT`.
    pub fn env_output_format() -> Option<String> {
        if env_bool("LEXWATCH_ROBOT").unwrap_or(false) {
            return Some("json".to_string());
        }
        env_string("LEXWATCH_OUTPUT_FORMAT")
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("lexwatch/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(".lexwatch/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LexError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LexError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.analyze {
            self.analyze.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.bulletin {
            self.bulletin.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(format) = Self::env_output_format() {
            self.output.format = format;
        }

        if let Some(value) = env_usize("LEXWATCH_ANALYZE_LIMIT")? {
            self.analyze.limit = value;
        }
        if let Some(value) = env_f64("LEXWATCH_ANALYZE_THRESHOLD")? {
            self.analyze.threshold = value;
        }
        if let Some(value) = env_f64("LEXWATCH_ANALYZE_PHRASE_BOOST")? {
            self.analyze.phrase_boost = value;
        }
        if let Some(value) = env_f64("LEXWATCH_ANALYZE_MIN_DIVISOR")? {
            self.analyze.min_divisor = value;
        }

        if let Some(value) = env_usize("LEXWATCH_SEARCH_LIMIT")? {
            self.search.limit = value;
        }
        if let Some(value) = env_bool("LEXWATCH_SEARCH_RECENCY") {
            self.search.recency = value;
        }

        if let Some(value) = env_string("LEXWATCH_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(value));
        }
        if let Some(values) = env_list("LEXWATCH_CATALOG_EXTRA")? {
            self.catalog.extra = merge_unique(values, &self.catalog.extra);
        }

        if let Some(value) = env_string("LEXWATCH_BULLETIN_CORPUS") {
            self.bulletin.corpus = Some(PathBuf::from(value));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    pub limit: usize,
    pub threshold: f64,
    pub phrase_boost: f64,
    pub min_divisor: f64,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        let params = OverlapParams::default();
        Self {
            limit: crate::analyze::DEFAULT_LIMIT,
            threshold: params.threshold,
            phrase_boost: params.phrase_boost,
            min_divisor: params.min_divisor,
        }
    }
}

impl AnalyzeConfig {
    fn merge(&mut self, patch: AnalyzePatch) {
        if let Some(value) = patch.limit {
            self.limit = value;
        }
        if let Some(value) = patch.threshold {
            self.threshold = value;
        }
        if let Some(value) = patch.phrase_boost {
            self.phrase_boost = value;
        }
        if let Some(value) = patch.min_divisor {
            self.min_divisor = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub limit: usize,
    pub recency: bool,
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: crate::bulletin::DEFAULT_LIMIT,
            recency: true,
            weights: FieldWeights::default(),
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.limit {
            self.limit = value;
        }
        if let Some(value) = patch.recency {
            self.recency = value;
        }
        if let Some(patch) = patch.weights {
            self.weights = patch.apply(self.weights);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Replaces the builtin catalog.
    pub path: Option<PathBuf>,
    /// Appended to the active catalog.
    pub extra: Vec<String>,
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
        if let Some(values) = patch.extra {
            self.extra = merge_unique(values, &self.extra);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletinConfig {
    /// Default corpus when `search` is run without `--corpus`.
    pub corpus: Option<PathBuf>,
}

impl BulletinConfig {
    fn merge(&mut self, patch: BulletinPatch) {
        if let Some(value) = patch.corpus {
            self.corpus = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub analyze: Option<AnalyzePatch>,
    pub search: Option<SearchPatch>,
    pub catalog: Option<CatalogPatch>,
    pub bulletin: Option<BulletinPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AnalyzePatch {
    pub limit: Option<usize>,
    pub threshold: Option<f64>,
    pub phrase_boost: Option<f64>,
    pub min_divisor: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub limit: Option<usize>,
    pub recency: Option<bool>,
    pub weights: Option<WeightsPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WeightsPatch {
    pub exact_title: Option<f64>,
    pub title_phrase: Option<f64>,
    pub summary_phrase: Option<f64>,
    pub title_term: Option<f64>,
    pub summary_term: Option<f64>,
    pub recent_month: Option<f64>,
    pub recent_year: Option<f64>,
}

impl WeightsPatch {
    fn apply(self, base: FieldWeights) -> FieldWeights {
        FieldWeights {
            exact_title: self.exact_title.unwrap_or(base.exact_title),
            title_phrase: self.title_phrase.unwrap_or(base.title_phrase),
            summary_phrase: self.summary_phrase.unwrap_or(base.summary_phrase),
            title_term: self.title_term.unwrap_or(base.title_term),
            summary_term: self.summary_term.unwrap_or(base.summary_term),
            recent_month: self.recent_month.unwrap_or(base.recent_month),
            recent_year: self.recent_year.unwrap_or(base.recent_year),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub path: Option<PathBuf>,
    pub extra: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BulletinPatch {
    pub corpus: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.into_iter().chain(existing.iter().cloned()) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| LexError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|err| LexError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_list(key: &str) -> Result<Option<Vec<String>>> {
    match std::env::var(key) {
        Ok(value) => {
            let list = value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            Ok(Some(list))
        }
        Err(_) => Ok(None),
    }
}
