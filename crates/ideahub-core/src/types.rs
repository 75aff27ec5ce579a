use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Identifiers — newtype wrappers over numeric entity ids
// ---------------------------------------------------------------------------

/// Identifier of a subject (user or service account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub u64);

impl SubjectId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a workspace (top-level tenant container).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub u64);

impl WorkspaceId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an arbitrary resource under authorization check
/// (workspace, community, idea).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

impl ResourceId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Subject — capability struct for the requesting principal
// ---------------------------------------------------------------------------

/// The principal making a request.
///
/// Every field not applicable to a caller stays at its zero value /
/// `None`; predicates treat absent data as "no", never as an error.
/// The default value is a fully anonymous subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub roles: HashSet<String>,
    #[serde(default)]
    pub id: Option<SubjectId>,
    #[serde(default)]
    pub workspace_memberships: HashSet<WorkspaceId>,
}

impl Subject {
    /// An unauthenticated subject with no capabilities.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated, non-admin subject.
    pub fn authenticated(id: SubjectId) -> Self {
        Self {
            is_authenticated: true,
            id: Some(id),
            ..Self::default()
        }
    }

    /// An authenticated admin subject.
    pub fn admin(id: SubjectId) -> Self {
        Self {
            is_authenticated: true,
            is_admin: true,
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn with_membership(mut self, workspace: WorkspaceId) -> Self {
        self.workspace_memberships.insert(workspace);
        self
    }
}

// ---------------------------------------------------------------------------
// Resource — capability struct for the object under check
// ---------------------------------------------------------------------------

/// The object an authorization check is about.
///
/// Callers populate only the fields they know; ownership and publicity
/// default to "absent", which predicates read as non-owned/non-public.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub owner_id: Option<SubjectId>,
    #[serde(default)]
    pub public: bool,
}

impl Resource {
    pub fn with_id(id: ResourceId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn owned_by(mut self, owner: SubjectId) -> Self {
        self.owner_id = Some(owner);
        self
    }

    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_anonymous_has_no_capabilities() {
        let subject = Subject::anonymous();
        assert!(!subject.is_authenticated);
        assert!(!subject.is_admin);
        assert!(subject.roles.is_empty());
        assert!(subject.id.is_none());
        assert!(subject.workspace_memberships.is_empty());
    }

    #[test]
    fn test_subject_authenticated() {
        let subject = Subject::authenticated(SubjectId(1));
        assert!(subject.is_authenticated);
        assert!(!subject.is_admin);
        assert_eq!(subject.id, Some(SubjectId(1)));
    }

    #[test]
    fn test_subject_admin_is_authenticated() {
        let subject = Subject::admin(SubjectId(7));
        assert!(subject.is_authenticated);
        assert!(subject.is_admin);
    }

    #[test]
    fn test_subject_builders_accumulate() {
        let subject = Subject::authenticated(SubjectId(1))
            .with_role("user")
            .with_role("moderator")
            .with_membership(WorkspaceId(3));
        assert!(subject.roles.contains("user"));
        assert!(subject.roles.contains("moderator"));
        assert!(subject.workspace_memberships.contains(&WorkspaceId(3)));
    }

    #[test]
    fn test_resource_default_is_absent() {
        let resource = Resource::default();
        assert!(resource.id.is_none());
        assert!(resource.owner_id.is_none());
        assert!(!resource.public);
    }

    #[test]
    fn test_resource_builders() {
        let resource = Resource::with_id(ResourceId(5))
            .owned_by(SubjectId(2))
            .with_public(true);
        assert_eq!(resource.id, Some(ResourceId(5)));
        assert_eq!(resource.owner_id, Some(SubjectId(2)));
        assert!(resource.public);
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(SubjectId(1).to_string(), "1");
        assert_eq!(WorkspaceId(42).to_string(), "42");
        assert_eq!(ResourceId(9).to_string(), "9");
    }

    #[test]
    fn test_subject_serde_defaults_missing_fields() {
        let subject: Subject = serde_json::from_str("{}").unwrap();
        assert_eq!(subject, Subject::anonymous());
    }

    #[test]
    fn test_subject_serde_roundtrip() {
        let subject = Subject::admin(SubjectId(1)).with_role("user");
        let json = serde_json::to_string(&subject).unwrap();
        let restored: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(subject, restored);
    }

    #[test]
    fn test_resource_serde_defaults_missing_fields() {
        let resource: Resource = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(resource.id, Some(ResourceId(3)));
        assert!(resource.owner_id.is_none());
        assert!(!resource.public);
    }
}
