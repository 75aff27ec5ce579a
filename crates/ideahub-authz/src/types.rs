use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use ideahub_core::{Resource, Subject};

/// Reason code reported when no policy matched a request.
pub const NO_POLICY_MATCHED: &str = "no_policy_matched";

// ---------------------------------------------------------------------------
// Request — one authorization check
// ---------------------------------------------------------------------------

/// A single authorization check: who (subject) wants to do what (action)
/// on which object (resource).
///
/// `ctx` is free-form audit context (request id and the like). It never
/// affects a predicate outcome; it exists so denials can be traced after
/// the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub subject: Subject,
    pub action: String,
    pub resource: Resource,
    #[serde(default)]
    pub ctx: HashMap<String, String>,
}

impl Request {
    pub fn new(subject: Subject, action: impl Into<String>, resource: Resource) -> Self {
        Self {
            subject,
            action: action.into(),
            resource,
            ctx: HashMap::new(),
        }
    }

    pub fn with_ctx(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ctx.insert(key.into(), value.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Effect — allow or deny
// ---------------------------------------------------------------------------

/// The outcome a policy produces when all of its predicates hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Allow,
    Deny,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Allow => write!(f, "allow"),
            Effect::Deny => write!(f, "deny"),
        }
    }
}

// ---------------------------------------------------------------------------
// Decision — the engine's verdict
// ---------------------------------------------------------------------------

/// The verdict for one authorization check.
///
/// `allow == true` implies `reason` names the allow policy that fired.
/// `allow == false` means either an explicit deny matched (its reason is
/// carried) or nothing matched (`no_policy_matched`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allow: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl Decision {
    /// The default-deny decision returned when no policy matched.
    pub fn no_match() -> Self {
        Self {
            allow: false,
            reason: NO_POLICY_MATCHED.to_string(),
            details: None,
        }
    }

    /// The priority of the policy that produced this decision, if any.
    pub fn policy_priority(&self) -> Option<i64> {
        self.details
            .as_ref()
            .and_then(|d| d.get("policy_priority"))
            .and_then(|p| p.parse().ok())
    }
}
