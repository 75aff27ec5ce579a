use serde::{Deserialize, Serialize};

use ideahub_core::WorkspaceId;

use crate::types::Request;

// ---------------------------------------------------------------------------
// Predicate — one boolean check over a request
// ---------------------------------------------------------------------------

/// A single condition evaluated against a [`Request`].
///
/// Predicates are pure and fail closed: an attribute the request does not
/// carry (no subject id, no resource owner) makes the predicate false,
/// never an error. A policy holds only when all of its predicates do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    /// Subject presented valid credentials.
    Authenticated,
    /// Subject carries the admin flag.
    Admin,
    /// Subject holds the named role.
    HasRole(String),
    /// Subject is a member of the given workspace.
    WorkspaceMember(WorkspaceId),
    /// Subject id equals the resource owner id. False when either side
    /// is absent.
    ResourceOwner,
    /// Resource is flagged public.
    PublicResource,
    /// Action token matches exactly (case-sensitive).
    ActionEquals(String),
    /// Action token is one of the listed values.
    ActionIn(Vec<String>),
}

impl Predicate {
    pub fn evaluate(&self, req: &Request) -> bool {
        match self {
            Predicate::Authenticated => req.subject.is_authenticated,
            Predicate::Admin => req.subject.is_admin,
            Predicate::HasRole(role) => req.subject.roles.contains(role),
            Predicate::WorkspaceMember(ws) => req.subject.workspace_memberships.contains(ws),
            Predicate::ResourceOwner => match (req.subject.id, req.resource.owner_id) {
                (Some(subject_id), Some(owner_id)) => subject_id == owner_id,
                _ => false,
            },
            Predicate::PublicResource => req.resource.public,
            Predicate::ActionEquals(action) => req.action == *action,
            Predicate::ActionIn(actions) => actions.iter().any(|a| *a == req.action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideahub_core::{Resource, Subject, SubjectId};

    fn make_request(subject: Subject, action: &str, resource: Resource) -> Request {
        Request::new(subject, action, resource)
    }

    #[test]
    fn test_authenticated_predicate() {
        let pred = Predicate::Authenticated;
        let authed = make_request(
            Subject::authenticated(SubjectId(1)),
            "IDEA_READ",
            Resource::default(),
        );
        let anon = make_request(Subject::anonymous(), "IDEA_READ", Resource::default());
        assert!(pred.evaluate(&authed));
        assert!(!pred.evaluate(&anon));
    }

    #[test]
    fn test_admin_predicate() {
        let pred = Predicate::Admin;
        let admin = make_request(Subject::admin(SubjectId(1)), "X", Resource::default());
        let user = make_request(
            Subject::authenticated(SubjectId(1)),
            "X",
            Resource::default(),
        );
        assert!(pred.evaluate(&admin));
        assert!(!pred.evaluate(&user));
    }

    #[test]
    fn test_has_role_predicate() {
        let pred = Predicate::HasRole("moderator".into());
        let moderator = make_request(
            Subject::authenticated(SubjectId(1)).with_role("moderator"),
            "X",
            Resource::default(),
        );
        let plain = make_request(
            Subject::authenticated(SubjectId(1)).with_role("user"),
            "X",
            Resource::default(),
        );
        assert!(pred.evaluate(&moderator));
        assert!(!pred.evaluate(&plain));
    }

    #[test]
    fn test_workspace_member_predicate() {
        let pred = Predicate::WorkspaceMember(WorkspaceId(7));
        let member = make_request(
            Subject::authenticated(SubjectId(1)).with_membership(WorkspaceId(7)),
            "X",
            Resource::default(),
        );
        let outsider = make_request(
            Subject::authenticated(SubjectId(1)).with_membership(WorkspaceId(8)),
            "X",
            Resource::default(),
        );
        assert!(pred.evaluate(&member));
        assert!(!pred.evaluate(&outsider));
    }

    #[test]
    fn test_resource_owner_matches_ids() {
        let pred = Predicate::ResourceOwner;
        let owned = make_request(
            Subject::authenticated(SubjectId(1)),
            "IDEA_WRITE",
            Resource::default().owned_by(SubjectId(1)),
        );
        let other = make_request(
            Subject::authenticated(SubjectId(2)),
            "IDEA_WRITE",
            Resource::default().owned_by(SubjectId(1)),
        );
        assert!(pred.evaluate(&owned));
        assert!(!pred.evaluate(&other));
    }

    #[test]
    fn test_resource_owner_fails_closed_on_absent_ids() {
        let pred = Predicate::ResourceOwner;
        // No subject id.
        let no_subject = make_request(
            Subject::anonymous(),
            "IDEA_WRITE",
            Resource::default().owned_by(SubjectId(1)),
        );
        // No owner on the resource.
        let no_owner = make_request(
            Subject::authenticated(SubjectId(1)),
            "IDEA_WRITE",
            Resource::default(),
        );
        assert!(!pred.evaluate(&no_subject));
        assert!(!pred.evaluate(&no_owner));
    }

    #[test]
    fn test_public_resource_predicate() {
        let pred = Predicate::PublicResource;
        let public = make_request(
            Subject::anonymous(),
            "IDEA_READ",
            Resource::default().with_public(true),
        );
        let private = make_request(Subject::anonymous(), "IDEA_READ", Resource::default());
        assert!(pred.evaluate(&public));
        assert!(!pred.evaluate(&private));
    }

    #[test]
    fn test_action_equals_is_case_sensitive() {
        let pred = Predicate::ActionEquals("IDEA_READ".into());
        let exact = make_request(Subject::anonymous(), "IDEA_READ", Resource::default());
        let lower = make_request(Subject::anonymous(), "idea_read", Resource::default());
        assert!(pred.evaluate(&exact));
        assert!(!pred.evaluate(&lower));
    }

    #[test]
    fn test_action_in_membership() {
        let pred = Predicate::ActionIn(vec!["IDEA_READ".into(), "SEARCH".into()]);
        let read = make_request(Subject::anonymous(), "SEARCH", Resource::default());
        let write = make_request(Subject::anonymous(), "IDEA_WRITE", Resource::default());
        assert!(pred.evaluate(&read));
        assert!(!pred.evaluate(&write));
    }

    #[test]
    fn test_predicate_serde_tagged() {
        let json = serde_json::to_string(&Predicate::HasRole("user".into())).unwrap();
        assert!(json.contains("has_role"));
        let restored: Predicate = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Predicate::HasRole("user".into()));
    }
}
