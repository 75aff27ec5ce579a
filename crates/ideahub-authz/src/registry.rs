//! Process-wide policy registry with atomic hot-swap.
//!
//! The active engine lives behind a lock holding an `Arc`. Readers clone
//! the `Arc` and evaluate against a consistent snapshot; a reload builds
//! the replacement engine fully before swapping the pointer, so no caller
//! ever observes a torn policy list.

use std::sync::{Arc, OnceLock, RwLock};

use tracing::info;

use ideahub_core::action::{
    COMMUNITY_READ, IDEA_READ, IDEA_WRITE, SEARCH, UNAUTHENTICATED_DENY_ACTIONS, WORKSPACE_READ,
    WORKSPACE_WRITE,
};

use crate::builder::{
    action_in, action_is, admin, authenticated, policy, public_resource, resource_owner,
};
use crate::engine::Engine;
use crate::error::AuthzResult;
use crate::policy::{validate_policies, Policy};

static ENGINE: OnceLock<RwLock<Arc<Engine>>> = OnceLock::new();

fn engine_slot() -> &'static RwLock<Arc<Engine>> {
    ENGINE.get_or_init(|| RwLock::new(Arc::new(Engine::new(default_policies()))))
}

/// The currently active engine.
///
/// The returned snapshot stays valid across a concurrent reload; callers
/// mid-evaluation keep the set they started with.
pub fn get_engine() -> Arc<Engine> {
    engine_slot()
        .read()
        .expect("policy engine lock poisoned")
        .clone()
}

/// Replace the active policy set.
///
/// The new set is validated and the replacement engine is built before
/// the swap. On validation failure the active engine is untouched.
pub fn reload_policies(policies: Vec<Policy>) -> AuthzResult<()> {
    validate_policies(&policies)?;
    let next = Arc::new(Engine::new(policies));
    let count = next.policies().len();
    *engine_slot().write().expect("policy engine lock poisoned") = next;
    info!(policy_count = count, "authorization policies reloaded");
    Ok(())
}

/// The built-in policy set installed at startup.
///
/// Admins bypass everything at priority 100. Authenticated subjects get
/// read/write access per action; public resources are readable by anyone
/// at a lower priority; the blanket deny at priority 10 catches
/// unauthenticated reads and searches that nothing above allowed.
pub fn default_policies() -> Vec<Policy> {
    vec![
        policy()
            .allow()
            .when(admin())
            .reason("admin_access")
            .priority(100)
            .build(),
        policy()
            .allow()
            .when(authenticated())
            .when(action_is(WORKSPACE_READ))
            .reason("workspace_read_authenticated")
            .priority(50)
            .build(),
        policy()
            .allow()
            .when(authenticated())
            .when(action_is(WORKSPACE_WRITE))
            .reason("workspace_write_authenticated")
            .priority(50)
            .build(),
        policy()
            .allow()
            .when(authenticated())
            .when(action_is(COMMUNITY_READ))
            .reason("community_read_authenticated")
            .priority(40)
            .build(),
        policy()
            .allow()
            .when(public_resource())
            .when(action_is(COMMUNITY_READ))
            .reason("community_read_public")
            .priority(35)
            .build(),
        policy()
            .allow()
            .when(authenticated())
            .when(action_is(IDEA_READ))
            .reason("idea_read_authenticated")
            .priority(30)
            .build(),
        policy()
            .allow()
            .when(authenticated())
            .when(resource_owner())
            .when(action_is(IDEA_WRITE))
            .reason("idea_write_owner")
            .priority(30)
            .build(),
        policy()
            .allow()
            .when(public_resource())
            .when(action_is(IDEA_READ))
            .reason("idea_read_public")
            .priority(25)
            .build(),
        policy()
            .allow()
            .when(authenticated())
            .when(action_is(SEARCH))
            .reason("search_authenticated")
            .priority(20)
            .build(),
        policy()
            .deny()
            .when(action_in(UNAUTHENTICATED_DENY_ACTIONS))
            .reason("access_denied_unauthenticated")
            .priority(10)
            .build(),
    ]
}
