use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AuthzError, AuthzResult};
use crate::predicate::Predicate;
use crate::types::{Decision, Effect, Request};

// ---------------------------------------------------------------------------
// Policy — an ordered conjunction of predicates with an effect
// ---------------------------------------------------------------------------

/// One authorization rule.
///
/// A policy matches a request when every predicate holds; predicates are
/// checked in order and evaluation stops at the first false one. A policy
/// with no predicates matches every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub effect: Effect,
    pub predicates: Vec<Predicate>,
    pub reason: String,
    pub priority: i64,
}

impl Policy {
    pub fn new(
        effect: Effect,
        predicates: Vec<Predicate>,
        reason: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            effect,
            predicates,
            reason: reason.into(),
            priority,
        }
    }

    /// Evaluate this policy against a request.
    ///
    /// Returns `None` when any predicate is false, otherwise a decision
    /// carrying this policy's effect, reason, and priority.
    pub fn evaluate(&self, req: &Request) -> Option<Decision> {
        if !self.predicates.iter().all(|p| p.evaluate(req)) {
            return None;
        }
        let mut details = HashMap::new();
        details.insert("policy_priority".to_string(), self.priority.to_string());
        Some(Decision {
            allow: self.effect == Effect::Allow,
            reason: self.reason.clone(),
            details: Some(details),
        })
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn is_snake_case_code(reason: &str) -> bool {
    !reason.is_empty()
        && reason
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Check a policy set before it is installed.
///
/// Every reason must be a non-empty lowercase snake_case code, since it is
/// surfaced verbatim to callers in error bodies. All problems are
/// collected into one error rather than stopping at the first.
pub fn validate_policies(policies: &[Policy]) -> AuthzResult<()> {
    let mut problems = Vec::new();
    for (idx, policy) in policies.iter().enumerate() {
        if !is_snake_case_code(&policy.reason) {
            problems.push(format!(
                "policy {} has reason {:?}, expected lowercase snake_case",
                idx, policy.reason
            ));
        }
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AuthzError::InvalidReason(problems.join("; ")))
    }
}
