//! Fluent construction of policies.
//!
//! The builder is consuming: every method takes `self` by value, so a
//! builder describes exactly one policy and cannot be reused after
//! `build`.
//!
//! ```
//! use ideahub_authz::builder::{authenticated, policy, resource_owner};
//!
//! let rule = policy()
//!     .allow()
//!     .when(authenticated())
//!     .when(resource_owner())
//!     .reason("idea_write_owner")
//!     .priority(30)
//!     .build();
//! assert_eq!(rule.priority, 30);
//! ```

use ideahub_core::WorkspaceId;

use crate::policy::Policy;
use crate::predicate::Predicate;
use crate::types::Effect;

/// Start building a policy. Defaults: allow, no predicates, reason
/// `"policy"`, priority 0.
pub fn policy() -> PolicyBuilder {
    PolicyBuilder {
        effect: Effect::Allow,
        predicates: Vec::new(),
        reason: "policy".to_string(),
        priority: 0,
    }
}

#[derive(Debug)]
pub struct PolicyBuilder {
    effect: Effect,
    predicates: Vec<Predicate>,
    reason: String,
    priority: i64,
}

impl PolicyBuilder {
    pub fn allow(mut self) -> Self {
        self.effect = Effect::Allow;
        self
    }

    pub fn deny(mut self) -> Self {
        self.effect = Effect::Deny;
        self
    }

    /// Add one predicate. Predicates are checked in the order they are
    /// added.
    pub fn when(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Policy {
        Policy::new(self.effect, self.predicates, self.reason, self.priority)
    }
}

// ---------------------------------------------------------------------------
// Predicate helpers for readable policy definitions
// ---------------------------------------------------------------------------

pub fn authenticated() -> Predicate {
    Predicate::Authenticated
}

pub fn admin() -> Predicate {
    Predicate::Admin
}

pub fn has_role(role: impl Into<String>) -> Predicate {
    Predicate::HasRole(role.into())
}

pub fn workspace_member(workspace: WorkspaceId) -> Predicate {
    Predicate::WorkspaceMember(workspace)
}

pub fn resource_owner() -> Predicate {
    Predicate::ResourceOwner
}

pub fn public_resource() -> Predicate {
    Predicate::PublicResource
}

pub fn action_is(action: impl Into<String>) -> Predicate {
    Predicate::ActionEquals(action.into())
}

pub fn action_in<I, S>(actions: I) -> Predicate
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Predicate::ActionIn(actions.into_iter().map(Into::into).collect())
}
