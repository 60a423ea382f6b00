use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::filter::TaskFilter;
use crate::ids::{
  DEFAULT_ID_PREFIX,
  IdGenerator,
  RandomIds,
  SequentialIds
};
use crate::store::TaskList;
use crate::task::{
  Task,
  default_seed
};
use crate::view::TaskSession;

/// Session settings and seed list, as
/// read from TOML.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct AppConfig {
  #[serde(default = "default_id_prefix")]
  pub id_prefix:      String,
  #[serde(default = "default_filter_name")]
  pub default_filter: String,
  #[serde(default = "default_seed")]
  pub tasks:          Vec<Task>
}

fn default_id_prefix() -> String {
  DEFAULT_ID_PREFIX.to_string()
}

fn default_filter_name() -> String {
  TaskFilter::All.name().to_string()
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      id_prefix:      default_id_prefix(),
      default_filter: default_filter_name(
      ),
      tasks:          default_seed()
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<AppConfig>(raw)
        .context(
          "failed parsing tasklist config"
        )?;
    config.sanitize();
    Ok(config)
  }

  #[tracing::instrument]
  pub fn load(
    path: &Path
  ) -> anyhow::Result<Self> {
    let raw = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read config file {}",
          path.display()
        )
      })?;
    let config = Self::from_toml_str(&raw)
      .with_context(|| {
        format!(
          "invalid config file {}",
          path.display()
        )
      })?;
    info!(
      path = %path.display(),
      tasks = config.tasks.len(),
      "loaded tasklist config"
    );
    Ok(config)
  }

  /// Parses compiled-in TOML, falling
  /// back to defaults when it is broken.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          tasks = config.tasks.len(),
          default_filter = %config.default_filter,
          "loaded tasklist config"
        );
        config
      }
      | Err(error) => {
        error!(
          "failed parsing tasklist config; using defaults: {error:#}"
        );
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.id_prefix.trim().is_empty() {
      warn!(
        "empty id_prefix; using default"
      );
      self.id_prefix = default_id_prefix();
    }
  }

  pub fn initial_filter(
    &self
  ) -> TaskFilter {
    TaskFilter::from_name_or_default(
      &self.default_filter
    )
  }

  pub fn seed(
    &self
  ) -> anyhow::Result<TaskList> {
    TaskList::from_seed(self.tasks.clone())
  }

  pub fn random_ids(&self) -> RandomIds {
    RandomIds::new(self.id_prefix.clone())
  }

  /// Counter ids that start past every
  /// numeric suffix already in the seed.
  pub fn sequential_ids(
    &self
  ) -> SequentialIds {
    let next = self
      .tasks
      .iter()
      .filter_map(|task| {
        task
          .id
          .strip_prefix(&self.id_prefix)
          .and_then(|n| {
            n.parse::<u64>().ok()
          })
      })
      .max()
      .and_then(|max| max.checked_add(1))
      .unwrap_or(0);
    SequentialIds::new(
      self.id_prefix.clone()
    )
    .starting_at(next)
  }

  pub fn session(
    &self,
    ids: impl IdGenerator + 'static
  ) -> anyhow::Result<TaskSession> {
    let tasks = self
      .seed()
      .context("invalid seed tasks")?;
    Ok(
      TaskSession::with_ids(tasks, ids)
        .with_filter(self.initial_filter())
    )
  }
}
