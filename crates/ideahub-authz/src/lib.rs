//! IdeaHub Authorization Engine
//!
//! Every request is evaluated as Subject + Action + Resource = Decision.
//! Policies are ordered conjunctions of predicates with an allow/deny
//! effect, a caller-facing reason code, and a numeric priority.
//!
//! Key properties:
//! - Priority-descending, stable evaluation order (equal priorities keep
//!   insertion order)
//! - First matching allow wins and short-circuits everything below it
//! - Matching denies are remembered; the last one evaluated is reported
//!   when no allow fires
//! - Default-deny: no match at all yields `no_policy_matched`
//! - Fail-closed predicates: absent subject/resource attributes read as
//!   false, never as an error
//! - Atomic policy hot-swap via `registry::reload_policies`

pub mod builder;
pub mod engine;
pub mod error;
pub mod policy;
pub mod predicate;
pub mod registry;
pub mod types;

// Re-export primary types for convenience
pub use builder::{policy, PolicyBuilder};
pub use engine::Engine;
pub use error::{AuthzError, AuthzResult};
pub use policy::{validate_policies, Policy};
pub use predicate::Predicate;
pub use registry::{default_policies, get_engine, reload_policies};
pub use types::{Decision, Effect, Request, NO_POLICY_MATCHED};
