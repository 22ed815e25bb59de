//! ECS task definitions and their conversion to Terraform `locals`.
//!
//! A task definition (as returned by `aws ecs describe-task-definition`, either
//! the bare object or wrapped in `{"taskDefinition": ...}`) is decoded
//! strictly: any field ECS does not document is an error. The selected
//! container's environment and secrets then become two list-of-object locals:
//!
//! ```text
//! locals {
//!   env_vars = [{
//!     name  = "LOG_LEVEL",
//!     value = "debug"
//!   }]
//!   secret_env_vars = [{
//!     name      = "DB-PASSWORD",
//!     valueFrom = "db_password"
//!   }]
//! }
//! ```
//!
//! ```rust
//! use hcl_tokens::taskdef::{locals_body, TaskDefinition};
//! use hcl_tokens::{FormatOptions, SerializerOptions};
//!
//! let json = r#"{
//!     "family": "web",
//!     "containerDefinitions": [{
//!         "name": "app",
//!         "image": "nginx",
//!         "environment": [{"name": "MODE", "value": "prod"}],
//!         "secrets": []
//!     }]
//! }"#;
//!
//! let task = TaskDefinition::from_json(json).unwrap();
//! let body = locals_body(&task, None, &SerializerOptions::new()).unwrap();
//! let text = body.render(&FormatOptions::default());
//! assert!(text.contains("name  = \"MODE\""));
//! assert!(text.contains("secret_env_vars = []"));
//! ```

use crate::{Body, Error, Result, SerializerOptions, Value, ValueMap};
use serde::Deserialize;
use serde_json::Value as Json;
use std::collections::BTreeMap;
use tracing::debug;

/// An ECS task definition. Every nested shape rejects unknown fields and
/// mistyped values, not only the top level.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TaskDefinition {
    pub family: Option<String>,
    pub task_definition_arn: Option<String>,
    pub revision: Option<i64>,
    #[serde(default)]
    pub container_definitions: Vec<ContainerDefinition>,
    pub compatibilities: Option<Vec<String>>,
    /// CPU units as text, e.g. `"256"` or `"1 vCPU"`.
    pub cpu: Option<String>,
    pub deregistered_at: Option<Timestamp>,
    pub enable_fault_injection: Option<bool>,
    pub ephemeral_storage: Option<EphemeralStorage>,
    pub execution_role_arn: Option<String>,
    pub inference_accelerators: Option<Vec<InferenceAccelerator>>,
    pub ipc_mode: Option<String>,
    /// Memory as text, e.g. `"512"` or `"1 GB"`.
    pub memory: Option<String>,
    pub network_mode: Option<String>,
    pub pid_mode: Option<String>,
    pub placement_constraints: Option<Vec<PlacementConstraint>>,
    pub proxy_configuration: Option<ProxyConfiguration>,
    pub registered_at: Option<Timestamp>,
    pub registered_by: Option<String>,
    pub requires_attributes: Option<Vec<Attribute>>,
    pub requires_compatibilities: Option<Vec<String>>,
    pub runtime_platform: Option<RuntimePlatform>,
    pub status: Option<String>,
    pub task_role_arn: Option<String>,
    pub volumes: Option<Vec<Volume>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ContainerDefinition {
    pub name: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub environment: Vec<KeyValuePair>,
    #[serde(default)]
    pub secrets: Vec<Secret>,
    pub command: Option<Vec<String>>,
    pub cpu: Option<i64>,
    pub credential_specs: Option<Vec<String>>,
    pub depends_on: Option<Vec<ContainerDependency>>,
    pub disable_networking: Option<bool>,
    pub dns_search_domains: Option<Vec<String>>,
    pub dns_servers: Option<Vec<String>>,
    pub docker_labels: Option<BTreeMap<String, String>>,
    pub docker_security_options: Option<Vec<String>>,
    pub entry_point: Option<Vec<String>>,
    pub environment_files: Option<Vec<EnvironmentFile>>,
    pub essential: Option<bool>,
    pub extra_hosts: Option<Vec<HostEntry>>,
    pub firelens_configuration: Option<FirelensConfiguration>,
    pub health_check: Option<HealthCheck>,
    pub hostname: Option<String>,
    pub interactive: Option<bool>,
    pub links: Option<Vec<String>>,
    pub linux_parameters: Option<LinuxParameters>,
    pub log_configuration: Option<LogConfiguration>,
    pub memory: Option<i64>,
    pub memory_reservation: Option<i64>,
    pub mount_points: Option<Vec<MountPoint>>,
    pub port_mappings: Option<Vec<PortMapping>>,
    pub privileged: Option<bool>,
    pub pseudo_terminal: Option<bool>,
    pub readonly_root_filesystem: Option<bool>,
    pub repository_credentials: Option<RepositoryCredentials>,
    pub resource_requirements: Option<Vec<ResourceRequirement>>,
    pub restart_policy: Option<RestartPolicy>,
    pub start_timeout: Option<i64>,
    pub stop_timeout: Option<i64>,
    pub system_controls: Option<Vec<SystemControl>>,
    pub ulimits: Option<Vec<Ulimit>>,
    pub user: Option<String>,
    pub version_consistency: Option<String>,
    pub volumes_from: Option<Vec<VolumeFrom>>,
    pub working_directory: Option<String>,
}

/// An environment variable entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct KeyValuePair {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// A secret reference (Secrets Manager or SSM parameter ARN).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Secret {
    pub name: Option<String>,
    pub value_from: Option<String>,
}

/// `registeredAt`/`deregisteredAt`: epoch seconds from the SDKs, ISO text from the CLI.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(f64),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PortMapping {
    pub container_port: Option<i64>,
    pub host_port: Option<i64>,
    pub protocol: Option<String>,
    pub name: Option<String>,
    pub app_protocol: Option<String>,
    pub container_port_range: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LogConfiguration {
    pub log_driver: Option<String>,
    pub options: Option<BTreeMap<String, String>>,
    pub secret_options: Option<Vec<Secret>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct HealthCheck {
    pub command: Option<Vec<String>>,
    pub interval: Option<i64>,
    pub timeout: Option<i64>,
    pub retries: Option<i64>,
    pub start_period: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MountPoint {
    pub source_volume: Option<String>,
    pub container_path: Option<String>,
    pub read_only: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct VolumeFrom {
    pub source_container: Option<String>,
    pub read_only: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Ulimit {
    pub name: Option<String>,
    pub soft_limit: Option<i64>,
    pub hard_limit: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ContainerDependency {
    pub container_name: Option<String>,
    pub condition: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EnvironmentFile {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct HostEntry {
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FirelensConfiguration {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub options: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LinuxParameters {
    pub capabilities: Option<KernelCapabilities>,
    pub devices: Option<Vec<Device>>,
    pub init_process_enabled: Option<bool>,
    pub max_swap: Option<i64>,
    pub shared_memory_size: Option<i64>,
    pub swappiness: Option<i64>,
    pub tmpfs: Option<Vec<Tmpfs>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct KernelCapabilities {
    pub add: Option<Vec<String>>,
    pub drop: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Device {
    pub host_path: Option<String>,
    pub container_path: Option<String>,
    pub permissions: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Tmpfs {
    pub container_path: Option<String>,
    pub size: Option<i64>,
    pub mount_options: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RepositoryCredentials {
    pub credentials_parameter: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ResourceRequirement {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RestartPolicy {
    pub enabled: Option<bool>,
    pub ignored_exit_codes: Option<Vec<i64>>,
    pub restart_attempt_period: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SystemControl {
    pub namespace: Option<String>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EphemeralStorage {
    #[serde(rename = "sizeInGiB")]
    pub size_in_gib: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct InferenceAccelerator {
    pub device_name: Option<String>,
    pub device_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PlacementConstraint {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub expression: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProxyConfiguration {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub container_name: Option<String>,
    pub properties: Option<Vec<KeyValuePair>>,
}

/// An entry of `requiresAttributes`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Attribute {
    pub name: Option<String>,
    pub value: Option<String>,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RuntimePlatform {
    pub cpu_architecture: Option<String>,
    pub operating_system_family: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Volume {
    pub name: Option<String>,
    pub host: Option<HostVolumeProperties>,
    pub configured_at_launch: Option<bool>,
    pub docker_volume_configuration: Option<DockerVolumeConfiguration>,
    pub efs_volume_configuration: Option<EfsVolumeConfiguration>,
    pub fsx_windows_file_server_volume_configuration: Option<FsxWindowsVolumeConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct HostVolumeProperties {
    pub source_path: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DockerVolumeConfiguration {
    pub scope: Option<String>,
    pub autoprovision: Option<bool>,
    pub driver: Option<String>,
    pub driver_opts: Option<BTreeMap<String, String>>,
    pub labels: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EfsVolumeConfiguration {
    pub file_system_id: Option<String>,
    pub root_directory: Option<String>,
    pub transit_encryption: Option<String>,
    pub transit_encryption_port: Option<i64>,
    pub authorization_config: Option<EfsAuthorizationConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EfsAuthorizationConfig {
    pub access_point_id: Option<String>,
    pub iam: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FsxWindowsVolumeConfiguration {
    pub file_system_id: Option<String>,
    pub root_directory: Option<String>,
    pub authorization_config: Option<FsxWindowsAuthorizationConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FsxWindowsAuthorizationConfig {
    pub credentials_parameter: Option<String>,
    pub domain: Option<String>,
}

impl TaskDefinition {
    /// Decodes a task definition, accepting the `describe-task-definition`
    /// wrapper as well as the bare object.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] on malformed JSON, unknown fields, or wrong field types.
    pub fn from_json(text: &str) -> Result<Self> {
        let mut doc: Json = serde_json::from_str(text)?;
        if let Some(inner) = doc.as_object_mut().and_then(|o| o.remove("taskDefinition")) {
            let rest: Vec<&String> = doc
                .as_object()
                .map(|o| o.keys().filter(|k| k.as_str() != "tags").collect())
                .unwrap_or_default();
            if let Some(key) = rest.first() {
                return Err(Error::Json(format!("unknown field `{}` next to taskDefinition", key)));
            }
            doc = inner;
        }
        Ok(serde_json::from_value(doc)?)
    }

    /// The container named `name`, or the first container when `name` is `None`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTaskDefinition`] if there is no such container.
    pub fn container(&self, name: Option<&str>) -> Result<&ContainerDefinition> {
        match name {
            None => self
                .container_definitions
                .first()
                .ok_or_else(|| Error::invalid_task_definition("no container definitions")),
            Some(wanted) => self
                .container_definitions
                .iter()
                .find(|c| c.name.as_deref() == Some(wanted))
                .ok_or_else(|| {
                    Error::invalid_task_definition(format!("no container named {:?}", wanted))
                }),
        }
    }
}

/// Derives the local secret identifier from a secret's name: lowercase, `-` as `_`.
///
/// ```rust
/// use hcl_tokens::taskdef::secret_value_from;
///
/// assert_eq!(secret_value_from("DB-PASSWORD"), "db_password");
/// ```
#[must_use]
pub fn secret_value_from(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

/// `[{ name, value }, ...]` for the container's environment, in declaration order.
///
/// # Errors
///
/// [`Error::InvalidTaskDefinition`] if an entry has no name.
pub fn env_vars(container: &ContainerDefinition) -> Result<Value> {
    container
        .environment
        .iter()
        .enumerate()
        .map(|(i, kv)| {
            let name = kv.name.as_deref().ok_or_else(|| {
                Error::invalid_task_definition(format!("environment[{}] has no name", i))
            })?;
            let mut pair = ValueMap::with_capacity(2);
            pair.push("name", name);
            pair.push("value", kv.value.as_deref().unwrap_or_default());
            Ok(Value::Map(pair))
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::List)
}

/// `[{ name, valueFrom }, ...]` where `valueFrom` is [`secret_value_from`] of the name.
///
/// # Errors
///
/// [`Error::InvalidTaskDefinition`] if an entry has no name.
pub fn secret_env_vars(container: &ContainerDefinition) -> Result<Value> {
    container
        .secrets
        .iter()
        .enumerate()
        .map(|(i, secret)| {
            let name = secret.name.as_deref().ok_or_else(|| {
                Error::invalid_task_definition(format!("secrets[{}] has no name", i))
            })?;
            let mut pair = ValueMap::with_capacity(2);
            pair.push("name", name);
            pair.push("valueFrom", secret_value_from(name));
            Ok(Value::Map(pair))
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::List)
}

/// Builds a document holding one `locals` block with `env_vars` and
/// `secret_env_vars` for the chosen container.
///
/// # Errors
///
/// Container selection and mapping errors, or serializer errors.
pub fn locals_body(
    task: &TaskDefinition,
    container: Option<&str>,
    options: &SerializerOptions,
) -> Result<Body> {
    let container = task.container(container)?;
    debug!(
        family = task.family.as_deref().unwrap_or("<unnamed>"),
        container = container.name.as_deref().unwrap_or("<unnamed>"),
        environment = container.environment.len(),
        secrets = container.secrets.len(),
        "building locals"
    );

    let env = env_vars(container)?;
    let secrets = secret_env_vars(container)?;

    let mut file = Body::new();
    let locals = file.append_block("locals", &[])?;
    locals.set_attribute_value("env_vars", &env, options)?;
    locals.set_attribute_value("secret_env_vars", &secrets, options)?;
    Ok(file)
}
