use std::cmp::Reverse;

use tracing::{info, warn};

use crate::policy::Policy;
use crate::types::{Decision, Request};

// ---------------------------------------------------------------------------
// Engine — ordered evaluation over an immutable policy list
// ---------------------------------------------------------------------------

/// Evaluates requests against a fixed, ordered policy list.
///
/// The list is sorted once at construction, priority descending with a
/// stable sort, so policies sharing a priority keep their given order.
/// An engine is immutable after construction; swapping policy sets is the
/// registry's job.
#[derive(Debug)]
pub struct Engine {
    policies: Vec<Policy>,
}

impl Engine {
    pub fn new(mut policies: Vec<Policy>) -> Self {
        policies.sort_by_key(|p| Reverse(p.priority));
        Self { policies }
    }

    /// The policies in evaluation order.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Decide one request.
    ///
    /// The first matching allow wins and stops evaluation. Matching denies
    /// do not stop it: each later match replaces the previous one, so the
    /// lowest-priority matching deny is the one reported when no allow
    /// fires. No match at all is a default deny.
    pub fn decide(&self, req: &Request) -> Decision {
        let mut last_deny: Option<Decision> = None;
        for policy in &self.policies {
            if let Some(decision) = policy.evaluate(req) {
                if decision.allow {
                    info!(
                        action = %req.action,
                        reason = %decision.reason,
                        "access granted"
                    );
                    return decision;
                }
                last_deny = Some(decision);
            }
        }
        let decision = last_deny.unwrap_or_else(Decision::no_match);
        warn!(
            action = %req.action,
            reason = %decision.reason,
            "access denied"
        );
        decision
    }

    /// Convenience wrapper: true only when the request is allowed.
    pub fn is_allowed(&self, req: &Request) -> bool {
        self.decide(req).allow
    }
}
