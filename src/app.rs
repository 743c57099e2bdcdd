use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::corpus;
use crate::error::Result;

pub struct AppContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let output_format = match cli.output_format() {
            Some(format) => format,
            None => config.output.format.parse()?,
        };

        Ok(Self {
            project_root,
            config,
            output_format,
        })
    }

    /// Build the law catalog: `override_path`, else the configured path, else
    /// the builtin one, followed by every configured extra file.
    pub fn catalog(&self, override_path: Option<&Path>) -> Result<Catalog> {
        let base = override_path.or(self.config.catalog.path.as_deref());
        let mut laws = Catalog::load(base.map(|p| self.resolve(p)).as_deref())?
            .laws()
            .to_vec();
        for extra in &self.config.catalog.extra {
            laws.extend(corpus::load(&self.resolve(Path::new(extra)))?);
        }
        debug!(target: "lexwatch::app", laws = laws.len(), "catalog ready");
        Ok(Catalog::new(laws))
    }

    /// Resolve a relative path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    pub const fn is_robot(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }
}
