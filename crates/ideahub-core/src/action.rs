//! Action-name constants.
//!
//! Actions are fixed string tokens chosen by the calling handler per
//! endpoint. Matching is exact and case-sensitive.

pub const WORKSPACE_READ: &str = "WORKSPACE_READ";
pub const WORKSPACE_WRITE: &str = "WORKSPACE_WRITE";
pub const COMMUNITY_READ: &str = "COMMUNITY_READ";
pub const IDEA_READ: &str = "IDEA_READ";
pub const IDEA_WRITE: &str = "IDEA_WRITE";
pub const SEARCH: &str = "SEARCH";

/// Actions covered by the registry's blanket unauthenticated-deny rule.
pub const UNAUTHENTICATED_DENY_ACTIONS: [&str; 4] =
    [WORKSPACE_READ, COMMUNITY_READ, IDEA_READ, SEARCH];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tokens_are_uppercase() {
        for action in [
            WORKSPACE_READ,
            WORKSPACE_WRITE,
            COMMUNITY_READ,
            IDEA_READ,
            IDEA_WRITE,
            SEARCH,
        ] {
            assert_eq!(action, action.to_uppercase());
            assert!(!action.contains(' '));
        }
    }

    #[test]
    fn test_deny_list_covers_read_and_search() {
        assert!(UNAUTHENTICATED_DENY_ACTIONS.contains(&WORKSPACE_READ));
        assert!(UNAUTHENTICATED_DENY_ACTIONS.contains(&SEARCH));
        assert!(!UNAUTHENTICATED_DENY_ACTIONS.contains(&WORKSPACE_WRITE));
    }
}
