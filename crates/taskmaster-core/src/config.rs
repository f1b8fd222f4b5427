use anyhow::Context;
use percent_encoding::{
  AsciiSet,
  CONTROLS,
  utf8_percent_encode
};
use serde::Deserialize;
use taskmaster_shared::TaskId;
use tracing::{
  debug,
  warn
};

const MIN_NOTICE_TIMEOUT_MS: u32 = 1_000;
const MAX_NOTICE_TIMEOUT_MS: u32 = 60_000;

/// Characters that cannot appear raw inside one URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'%')
  .add(b'/')
  .add(b'<')
  .add(b'>')
  .add(b'?')
  .add(b'\\')
  .add(b'`')
  .add(b'{')
  .add(b'}');

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct ClientConfig {
  /// Prefix for every backend path. Empty means same origin.
  pub api_base:          String,
  pub notice_timeout_ms: u32,
  pub health_check:      bool
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base:          String::new(),
      notice_timeout_ms: 5_000,
      health_check:      true
    }
  }
}

impl ClientConfig {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let parsed: ClientConfig =
      toml::from_str(text).context(
        "failed to parse client config"
      )?;
    Ok(parsed.sanitized())
  }

  /// Parses `text`, falling back to defaults when it is unusable.
  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(config) => {
        debug!(
          api_base = %config.api_base,
          notice_timeout_ms =
            config.notice_timeout_ms,
          health_check = config.health_check,
          "loaded client config"
        );
        config
      }
      | Err(err) => {
        warn!(
          error = %format!("{err:#}"),
          "client config invalid; using \
           defaults"
        );
        Self::default()
      }
    }
  }

  fn sanitized(mut self) -> Self {
    self.api_base = self
      .api_base
      .trim()
      .trim_end_matches('/')
      .to_string();
    self.notice_timeout_ms = self
      .notice_timeout_ms
      .clamp(
        MIN_NOTICE_TIMEOUT_MS,
        MAX_NOTICE_TIMEOUT_MS
      );
    self
  }

  pub fn tasks_url(&self) -> String {
    format!("{}/api/tasks", self.api_base)
  }

  pub fn task_url(
    &self,
    id: &TaskId
  ) -> String {
    format!(
      "{}/api/tasks/{}",
      self.api_base,
      path_segment(id)
    )
  }

  pub fn toggle_url(
    &self,
    id: &TaskId
  ) -> String {
    format!(
      "{}/api/tasks/{}/toggle",
      self.api_base,
      path_segment(id)
    )
  }

  pub fn health_url(&self) -> String {
    format!("{}/health", self.api_base)
  }
}

fn path_segment(id: &TaskId) -> String {
  utf8_percent_encode(
    &id.to_string(),
    PATH_SEGMENT
  )
  .to_string()
}

#[cfg(test)]
mod tests {
  use taskmaster_shared::TaskId;

  use super::ClientConfig;

  #[test]
  fn sanitizes_base_and_timeout() {
    let config = ClientConfig::from_toml_str(
      r#"
        api_base = " https://tasks.example.org/ "
        notice_timeout_ms = 10
      "#
    )
    .expect("config should parse");

    assert_eq!(
      config.api_base,
      "https://tasks.example.org"
    );
    assert_eq!(config.notice_timeout_ms, 1_000);
    assert!(config.health_check);
    assert_eq!(
      config.toggle_url(&TaskId::Number(9)),
      "https://tasks.example.org/api/tasks/9/toggle"
    );
  }

  #[test]
  fn same_origin_urls_by_default() {
    let config = ClientConfig::default();
    assert_eq!(config.tasks_url(), "/api/tasks");
    assert_eq!(
      config.task_url(&TaskId::Text(
        "abc".to_string()
      )),
      "/api/tasks/abc"
    );
    assert_eq!(config.health_url(), "/health");
  }

  #[test]
  fn text_ids_are_escaped_as_one_segment() {
    let config = ClientConfig::default();
    let id = TaskId::Text(
      "a/b?c#d e%".to_string()
    );
    assert_eq!(
      config.task_url(&id),
      "/api/tasks/a%2Fb%3Fc%23d%20e%25"
    );
    assert_eq!(
      config.toggle_url(&id),
      "/api/tasks/a%2Fb%3Fc%23d%20e%25/toggle"
    );
  }

  #[test]
  fn invalid_toml_falls_back_to_defaults() {
    let config = ClientConfig::load_or_default(
      "notice_timeout_ms = \"soon\""
    );
    assert_eq!(config, ClientConfig::default());
    assert!(
      ClientConfig::from_toml_str("[[[")
        .is_err()
    );
  }
}
