//! Stack provisioner trait definition

use crate::error::Result;
use crate::policy::{LogRetention, RemovalPolicy};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stackflow_core::DeploymentConfig;
use std::collections::HashMap;

/// Provisioning backend abstraction
///
/// The derivation core hands a finished [`DeploymentConfig`] to exactly one
/// implementation of this trait. Everything a backend needs — stack name,
/// tags, image reference, environment — is on the record; backends never
/// reach back into raw context.
#[async_trait]
pub trait StackProvisioner: Send + Sync {
    /// Returns the provisioner name (e.g., "aws-cdk")
    fn name(&self) -> &str;

    /// Returns the provisioner display name for UI
    fn display_name(&self) -> &str;

    /// Provision (create or update) the stack described by the config
    async fn provision(&self, config: &DeploymentConfig) -> Result<ProvisionOutcome>;

    /// Tear the named stack down
    async fn destroy(&self, stack_name: &str) -> Result<()>;
}

/// Result of a provisioning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionOutcome {
    /// Name of the provisioned stack
    pub stack_name: String,

    /// Lifecycle policy applied to stack resources
    pub removal_policy: RemovalPolicy,

    /// Retention window applied to the stack's log group
    pub log_retention: LogRetention,

    /// Backend outputs (URLs, ARNs, ...)
    pub outputs: HashMap<String, String>,
}

impl ProvisionOutcome {
    /// Build an outcome for a config, with lifecycle policies derived
    /// from its ephemeral flag
    pub fn for_config(config: &DeploymentConfig) -> Self {
        Self {
            stack_name: config.stack_name(),
            removal_policy: RemovalPolicy::for_deployment(config.is_ephemeral),
            log_retention: LogRetention::for_deployment(config.is_ephemeral),
            outputs: HashMap::new(),
        }
    }

    pub fn with_output(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.outputs.insert(key.into(), value.into());
        self
    }
}
