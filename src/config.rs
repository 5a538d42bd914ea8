//! Assembly files and environment overrides.
//!
//! An assembly maps identifiers to loosely typed values: a string names a
//! type in the [`TypeTable`](crate::TypeTable), an object is registered as a
//! ready instance. Shapes are checked when the assembly is applied to a
//! builder, not when it is parsed, so the error names the offending identifier.
//!
//! ```yaml
//! definitions:
//!   IetfExtension: Ietf
//!   locale: Ietf
//!   settings:
//!     region: GB
//! ```

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::ContainerBuilder;
use crate::error::{DiError, DiResult};

/// Parsed assembly: identifier to definition value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    #[serde(default)]
    pub definitions: BTreeMap<String, Value>,
}

impl AssemblyConfig {
    /// The default assembly as configuration, one type reference per capability.
    pub fn defaults() -> Self {
        let definitions = ContainerBuilder::default_extensions()
            .into_iter()
            .map(|(id, type_name)| (id.to_string(), Value::String(type_name.to_string())))
            .collect();
        Self { definitions }
    }

    pub fn from_json_str(content: &str) -> DiResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| DiError::Config(format!("invalid JSON assembly: {e}")))
    }

    pub fn from_yaml_str(content: &str) -> DiResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| DiError::Config(format!("invalid YAML assembly: {e}")))
    }

    /// Reads an assembly file, picking the format from its extension
    /// (`.json`, `.yaml` or `.yml`).
    pub fn from_file(path: impl AsRef<Path>) -> DiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DiError::Config(format!("cannot read {}: {e}", path.display())))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(DiError::Config(format!(
                "unsupported assembly format: {}",
                path.display()
            ))),
        }
    }

    /// Applies `PREFIX_<ID>=<TypeName>` environment variables.
    ///
    /// `<ID>` matches an existing identifier case-insensitively; otherwise it
    /// is added as a new identifier verbatim. Values are always type references.
    pub fn with_env_overrides(self, prefix: &str) -> Self {
        self.with_overrides(prefix, env::vars())
    }

    fn with_overrides(
        mut self,
        prefix: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let prefix = format!("{}_", prefix.to_uppercase());

        for (key, value) in vars {
            let Some(suffix) = key.strip_prefix(&prefix) else {
                continue;
            };
            if suffix.is_empty() {
                continue;
            }
            let id = self
                .definitions
                .keys()
                .find(|id| id.eq_ignore_ascii_case(suffix))
                .cloned()
                .unwrap_or_else(|| suffix.to_string());
            self.definitions.insert(id, Value::String(value));
        }
        self
    }

    /// Applies this assembly to a fresh builder backed by the built-in types.
    pub fn to_builder(&self) -> DiResult<ContainerBuilder> {
        ContainerBuilder::from_config(self, crate::TypeTable::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_mirror_default_extensions() {
        let config = AssemblyConfig::defaults();
        assert_eq!(config.definitions.len(), 9);
        assert_eq!(config.definitions["ColorExtension"], Value::from("Color"));
    }

    #[test]
    fn overrides_match_existing_ids_case_insensitively() {
        let config = AssemblyConfig::defaults().with_overrides(
            "faker",
            vars(&[("FAKER_COLOREXTENSION", "Blood"), ("OTHER_X", "Color")]),
        );
        assert_eq!(config.definitions["ColorExtension"], Value::from("Blood"));
        assert_eq!(config.definitions.len(), 9);
    }

    #[test]
    fn unknown_override_adds_identifier() {
        let config =
            AssemblyConfig::default().with_overrides("app", vars(&[("APP_locale", "Ietf")]));
        assert_eq!(config.definitions["locale"], Value::from("Ietf"));
    }

    #[test]
    fn yaml_and_json_parse_to_same_assembly() {
        let json = AssemblyConfig::from_json_str(r#"{"definitions":{"locale":"Ietf"}}"#).unwrap();
        let yaml = AssemblyConfig::from_yaml_str("definitions:\n  locale: Ietf\n").unwrap();
        assert_eq!(json, yaml);
    }

    #[test]
    fn malformed_input_is_config_error() {
        assert!(matches!(
            AssemblyConfig::from_json_str("{"),
            Err(DiError::Config(_))
        ));
    }
}
