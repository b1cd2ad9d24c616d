use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid validator config: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DniValidatorConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,

    /// Strip leading and trailing whitespace from both inputs before validating.
    #[serde(default)]
    pub trim_input: bool,
}

impl DniValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn trim_input(&self, trim_input: bool) -> Self {
        self.mutate_clone(|x| x.trim_input = trim_input)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = DniValidatorConfig::from_json("{}").unwrap();
        assert_eq!(config, DniValidatorConfig::default());
        assert!(!config.trim_input);
        assert!(config.labels.is_empty());
    }

    #[test]
    fn null_labels_are_empty() {
        let config = DniValidatorConfig::from_json(r#"{"labels": null}"#).unwrap();
        assert!(config.labels.is_empty());
    }

    #[test]
    fn full_config() {
        let config = DniValidatorConfig::from_json(
            r#"{"labels": {"source": "front_desk"}, "trim_input": true}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            DniValidatorConfig::new()
                .labels(Labels::new(&[("source", "front_desk")]))
                .trim_input(true)
        );
    }

    #[test]
    fn bad_json_is_rejected() {
        let err = DniValidatorConfig::from_json(r#"{"trim_input": "yes"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid validator config"));
    }
}
