use serde::{Deserialize, Serialize};

use crate::types::{SubjectId, WorkspaceId};

// ---------------------------------------------------------------------------
// Domain records served by the gateway (in-memory, no persistence)
// ---------------------------------------------------------------------------

/// A workspace: the top-level multi-tenant container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub public_default: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A community inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: u64,
    pub name: String,
    pub workspace_id: WorkspaceId,
    pub public: bool,
}

/// An idea posted to a community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: u64,
    pub community_id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub owner_id: Option<SubjectId>,
    #[serde(default)]
    pub public: bool,
}
