use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::flatmap::FlatMap;

/// Errors raised while parsing a legacy (pre-0.12) Terraform state file.
#[derive(Debug, Error)]
pub enum StateError {
    /// Input was not well-formed JSON
    #[error("invalid JSON in state file: {0}")]
    Json(#[from] serde_json::Error),

    /// Document has no top-level `modules` list
    #[error("state file has no 'modules' list")]
    MissingModules,

    /// `modules` is present but empty
    #[error("state file 'modules' list is empty")]
    EmptyModules,

    /// First module has no `resources` map
    #[error("first module has no 'resources' map")]
    MissingResources,

    /// Resource key does not follow the `<type>.<name>` convention
    #[error("malformed resource key '{key}': expected '<type>.<name>'")]
    MalformedKey { key: String },

    /// Resource record has no `primary.attributes` map
    #[error("resource '{address}' has no 'primary.attributes' map")]
    MissingAttributes { address: String },

    /// Legacy attribute maps are string-to-string; anything else is rejected
    #[error("resource '{address}' attribute '{key}' is not a string")]
    NonStringAttribute { address: String, key: String },
}

#[derive(Debug, Deserialize)]
struct RawState {
    modules: Option<Vec<RawModule>>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    resources: Option<serde_json::Map<String, Value>>,
}

/// The parsed `modules[0].resources` map of a legacy state file, with
/// resource keys already split into type and name. Resources keep the
/// order they appear in the document.
#[derive(Debug)]
pub struct StateFile {
    resources: Vec<StateResource>,
}

impl StateFile {
    pub fn parse(input: &str) -> Result<Self, StateError> {
        let raw: RawState = serde_json::from_str(input)?;
        let module = raw
            .modules
            .ok_or(StateError::MissingModules)?
            .into_iter()
            .next()
            .ok_or(StateError::EmptyModules)?;
        let entries = module.resources.ok_or(StateError::MissingResources)?;

        let mut resources = Vec::with_capacity(entries.len());
        for (key, record) in entries {
            let (resource_type, name) =
                key.split_once('.')
                    .ok_or_else(|| StateError::MalformedKey { key: key.clone() })?;
            resources.push(StateResource {
                resource_type: resource_type.to_string(),
                name: name.to_string(),
                record,
            });
        }
        Ok(Self { resources })
    }

    pub fn resources(&self) -> &[StateResource] {
        &self.resources
    }
}

/// One entry of the resources map. The record body is kept raw so that
/// resources of uninteresting types are never inspected past their key.
#[derive(Debug)]
pub struct StateResource {
    resource_type: String,
    name: String,
    record: Value,
}

impl StateResource {
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `<type>.<name>` address, for diagnostics.
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }

    /// Extract `primary.attributes` into a [`FlatMap`].
    pub fn attributes(&self) -> Result<FlatMap, StateError> {
        let attrs = self
            .record
            .get("primary")
            .and_then(|primary| primary.get("attributes"))
            .and_then(Value::as_object)
            .ok_or_else(|| StateError::MissingAttributes {
                address: self.address(),
            })?;

        attrs
            .iter()
            .map(|(key, value)| {
                let value = value.as_str().ok_or_else(|| StateError::NonStringAttribute {
                    address: self.address(),
                    key: key.clone(),
                })?;
                Ok((key.clone(), value.to_string()))
            })
            .collect()
    }
}
