use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static key-value labels attached to every metric a validator emits.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn new(labels: &[(impl AsRef<str>, impl AsRef<str>)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| (key.as_ref().to_owned(), value.as_ref().to_owned()))
                .collect(),
        )
    }

    /// Clone these labels with one more key-value pair. An existing key is overwritten.
    pub fn clone_with_label(&self, key: &str, value: &str) -> Labels {
        let mut labels = self.0.clone();
        labels.insert(key.to_owned(), value.to_owned());
        Labels(labels)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_clone_labels() {
        let labels = Labels::new(&[("key_1", "value_1")]);

        let label_list = labels.clone_with_label("key_2", "value_2").into_labels();
        assert!(label_list.contains(&Label::new("key_1", "value_1")));
        assert!(label_list.contains(&Label::new("key_2", "value_2")));

        let label_list = labels.clone_with_label("key_1", "other").into_labels();
        assert_eq!(label_list, vec![Label::new("key_1", "other")]);

        // The original is untouched
        assert_eq!(labels.into_labels(), vec![Label::new("key_1", "value_1")]);
    }

    #[test]
    fn labels_serialize_as_map() {
        let labels = Labels::new(&[("app", "kiosk"), ("env", "prod")]);
        assert_tokens(
            &labels,
            &[
                Token::Map { len: Some(2) },
                Token::Str("app"),
                Token::Str("kiosk"),
                Token::Str("env"),
                Token::Str("prod"),
                Token::MapEnd,
            ],
        );
    }
}
