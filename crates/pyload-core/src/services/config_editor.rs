//! Staged editing of the server configuration.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{ConfigItem, ConfigScope, FullConfig, ValidationError};
use crate::ports::{ConfigPort, RpcError};

/// Identifies one option across core and plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChangeKey {
    pub scope: ConfigScope,
    pub category: String,
    pub option: String,
}

impl ChangeKey {
    pub fn new(scope: ConfigScope, category: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            scope,
            category: category.into(),
            option: option.into(),
        }
    }
}

impl fmt::Display for ChangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.scope, self.category, self.option)
    }
}

/// Outcome of [`ConfigEditor::apply`].
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub applied: Vec<ChangeKey>,
    pub failed: Vec<(ChangeKey, RpcError)>,
}

impl ApplyReport {
    /// True when every change reached the server.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Holds a configuration snapshot and the changes staged against it.
#[derive(Debug, Clone, Default)]
pub struct ConfigEditor {
    snapshot: FullConfig,
    pending: BTreeMap<ChangeKey, String>,
}

impl ConfigEditor {
    #[must_use]
    pub const fn new(snapshot: FullConfig) -> Self {
        Self {
            snapshot,
            pending: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> &FullConfig {
        &self.snapshot
    }

    /// Pending changes in key order.
    pub fn pending(&self) -> impl Iterator<Item = (&ChangeKey, &str)> {
        self.pending.iter().map(|(k, v)| (k, v.as_str()))
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Record a change. A later change to the same option replaces it.
    pub fn stage(
        &mut self,
        scope: ConfigScope,
        category: &str,
        option: &str,
        value: impl Into<String>,
    ) {
        self.pending
            .insert(ChangeKey::new(scope, category, option), value.into());
    }

    /// Drop a staged change, returning its value.
    pub fn unstage(&mut self, key: &ChangeKey) -> Option<String> {
        self.pending.remove(key)
    }

    pub fn discard(&mut self) {
        self.pending.clear();
    }

    /// Check every staged change against the option's declared type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (key, value) in &self.pending {
            self.check(key, value)?;
        }
        Ok(())
    }

    fn check(&self, key: &ChangeKey, value: &str) -> Result<&ConfigItem, ValidationError> {
        let item = self
            .snapshot
            .item(key.scope, &key.category, &key.option)
            .ok_or_else(|| ValidationError::UnknownOption {
                category: key.category.clone(),
                option: key.option.clone(),
            })?;
        if item.readonly {
            return Err(ValidationError::ReadOnly {
                category: key.category.clone(),
                option: key.option.clone(),
            });
        }
        item.kind.validate(&key.option, value)?;
        Ok(item)
    }

    /// Validate, then send every staged change.
    ///
    /// Nothing is sent if any change is invalid. Otherwise every change is
    /// attempted; failures stay staged and are listed in the report.
    pub async fn apply<P: ConfigPort + ?Sized>(
        &mut self,
        port: &P,
    ) -> Result<ApplyReport, ValidationError> {
        let mut outgoing = Vec::with_capacity(self.pending.len());
        for (key, value) in &self.pending {
            let item = self.check(key, value)?;
            outgoing.push((key.clone(), item.kind.normalize(value)));
        }

        let mut report = ApplyReport::default();
        for (key, value) in outgoing {
            match port
                .set_config_value(&key.category, &key.option, &value, key.scope)
                .await
            {
                Ok(()) => {
                    tracing::debug!(change = %key, value = %value, "Config value applied");
                    if let Some(item) = self
                        .snapshot
                        .tree_mut(key.scope)
                        .get_mut(&key.category)
                        .and_then(|section| section.item_mut(&key.option))
                    {
                        item.value = value;
                    }
                    self.pending.remove(&key);
                    report.applied.push(key);
                }
                Err(err) => {
                    tracing::warn!(change = %key, error = %err, "Failed to apply config value");
                    report.failed.push((key, err));
                }
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigSection, ConfigType};
    use crate::ports::MockConfigPort;

    fn item(name: &str, kind: ConfigType, value: &str) -> ConfigItem {
        ConfigItem {
            name: name.to_string(),
            description: String::new(),
            value: value.to_string(),
            kind,
            readonly: false,
        }
    }

    fn snapshot() -> FullConfig {
        let mut config = FullConfig::default();
        config.core.insert(
            "webui".to_string(),
            ConfigSection {
                name: "Web Interface".to_string(),
                description: String::new(),
                items: vec![
                    item("port", ConfigType::Int, "8000"),
                    item("use_ssl", ConfigType::Bool, "False"),
                ],
            },
        );
        let mut locked = item("version", ConfigType::Str, "1");
        locked.readonly = true;
        config.plugins.insert(
            "UnRar".to_string(),
            ConfigSection {
                name: "UnRar".to_string(),
                description: String::new(),
                items: vec![
                    item("activated", ConfigType::Bool, "True"),
                    locked,
                ],
            },
        );
        config
    }

    #[tokio::test]
    async fn test_invalid_change_sends_nothing() {
        let mut editor = ConfigEditor::new(snapshot());
        editor.stage(ConfigScope::Core, "webui", "use_ssl", "true");
        editor.stage(ConfigScope::Core, "webui", "port", "eighty");

        let mut port = MockConfigPort::new();
        port.expect_set_config_value().never();

        let err = editor.apply(&port).await.unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref option, .. } if option == "port"));
        assert_eq!(editor.pending().count(), 2);
    }

    #[tokio::test]
    async fn test_apply_normalizes_and_updates_snapshot() {
        let mut editor = ConfigEditor::new(snapshot());
        editor.stage(ConfigScope::Core, "webui", "use_ssl", "1");
        editor.stage(ConfigScope::Plugin, "UnRar", "activated", "false");

        let mut port = MockConfigPort::new();
        port.expect_set_config_value()
            .withf(|category, option, value, scope| {
                category == "webui" && option == "use_ssl" && value == "True" && *scope == ConfigScope::Core
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        port.expect_set_config_value()
            .withf(|category, option, value, scope| {
                category == "UnRar" && option == "activated" && value == "False" && *scope == ConfigScope::Plugin
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let report = editor.apply(&port).await.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.applied.len(), 2);
        assert!(!editor.has_pending());
        assert_eq!(
            editor.snapshot().item(ConfigScope::Core, "webui", "use_ssl").unwrap().value,
            "True"
        );
    }

    #[tokio::test]
    async fn test_failed_changes_stay_pending() {
        let mut editor = ConfigEditor::new(snapshot());
        editor.stage(ConfigScope::Core, "webui", "port", "8001");
        editor.stage(ConfigScope::Core, "webui", "use_ssl", "True");

        let mut port = MockConfigPort::new();
        port.expect_set_config_value()
            .withf(|_, option, _, _| option == "port")
            .returning(|_, _, _, _| {
                Err(RpcError::Status {
                    status: 500,
                    url: "http://[::1]:8000/api/set_config_value".to_string(),
                    body: None,
                })
            });
        port.expect_set_config_value()
            .withf(|_, option, _, _| option == "use_ssl")
            .returning(|_, _, _, _| Ok(()));

        let report = editor.apply(&port).await.unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.applied, vec![ChangeKey::new(ConfigScope::Core, "webui", "use_ssl")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0.option, "port");

        let pending: Vec<_> = editor.pending().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].1, "8001");
        assert_eq!(
            editor.snapshot().item(ConfigScope::Core, "webui", "port").unwrap().value,
            "8000"
        );
    }

    #[test]
    fn test_unknown_and_readonly_options() {
        let mut editor = ConfigEditor::new(snapshot());
        editor.stage(ConfigScope::Core, "webui", "nope", "1");
        assert!(matches!(
            editor.validate(),
            Err(ValidationError::UnknownOption { .. })
        ));

        editor.discard();
        editor.stage(ConfigScope::Plugin, "UnRar", "version", "2");
        assert!(matches!(editor.validate(), Err(ValidationError::ReadOnly { .. })));
    }

    #[test]
    fn test_restage_replaces_value() {
        let mut editor = ConfigEditor::new(snapshot());
        editor.stage(ConfigScope::Core, "webui", "port", "1");
        editor.stage(ConfigScope::Core, "webui", "port", "2");
        let pending: Vec<_> = editor.pending().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].1, "2");

        let key = ChangeKey::new(ConfigScope::Core, "webui", "port");
        assert_eq!(editor.unstage(&key).as_deref(), Some("2"));
        assert!(editor.validate().is_ok());
        assert_eq!(key.to_string(), "core:webui.port");
    }
}
