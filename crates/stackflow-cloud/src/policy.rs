//! Lifecycle policies for provisioned resources
//!
//! Ephemeral stacks are disposable: their resources are destroyed on
//! teardown and their logs kept only briefly. Persistent stacks retain
//! both. Backends read these policies off the deployment config instead
//! of re-deriving them from raw context.

use serde::{Deserialize, Serialize};

/// What happens to a resource when its stack is torn down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Delete the resource together with the stack
    Destroy,
    /// Keep the resource after the stack is gone
    Retain,
}

impl RemovalPolicy {
    /// Select the removal policy for a deployment
    pub fn for_deployment(is_ephemeral: bool) -> Self {
        if is_ephemeral {
            RemovalPolicy::Destroy
        } else {
            RemovalPolicy::Retain
        }
    }
}

impl std::fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalPolicy::Destroy => write!(f, "destroy"),
            RemovalPolicy::Retain => write!(f, "retain"),
        }
    }
}

/// Retention window for the stack's log group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRetention {
    /// One week of logs
    OneWeek,
    /// One month of logs
    OneMonth,
}

impl LogRetention {
    /// Select the log retention window for a deployment
    pub fn for_deployment(is_ephemeral: bool) -> Self {
        if is_ephemeral {
            LogRetention::OneWeek
        } else {
            LogRetention::OneMonth
        }
    }

    /// Retention window in days
    pub fn days(self) -> u32 {
        match self {
            LogRetention::OneWeek => 7,
            LogRetention::OneMonth => 30,
        }
    }
}

impl std::fmt::Display for LogRetention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.days())
    }
}
