//! In-memory repositories for the gateway's domain records.
//!
//! Lookups clone the record out so callers never hold the lock across
//! an authorization check.

use std::collections::HashMap;
use std::sync::Mutex;

use ideahub_core::{Community, Idea, SubjectId, Workspace, WorkspaceId};

/// In-memory store seeded with demo data.
#[derive(Debug)]
pub struct Store {
    workspaces: Mutex<HashMap<u64, Workspace>>,
    communities: Mutex<HashMap<u64, Community>>,
    ideas: Mutex<HashMap<u64, Idea>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            workspaces: Mutex::new(HashMap::new()),
            communities: Mutex::new(HashMap::new()),
            ideas: Mutex::new(HashMap::new()),
        }
    }

    /// A store pre-populated with one public workspace, one public
    /// community, and one idea owned by user 1.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.put_workspace(Workspace {
            id: WorkspaceId(1),
            name: "Public WS".into(),
            public_default: true,
            features: vec!["ideas".into(), "search".into()],
        });
        store.put_community(Community {
            id: 1,
            name: "General".into(),
            workspace_id: WorkspaceId(1),
            public: true,
        });
        store.put_idea(Idea {
            id: 1,
            community_id: 1,
            title: "Hello".into(),
            body: "World".into(),
            owner_id: Some(SubjectId(1)),
            public: true,
        });
        store
    }

    pub fn put_workspace(&self, workspace: Workspace) {
        self.workspaces
            .lock()
            .expect("workspace store lock poisoned")
            .insert(workspace.id.as_u64(), workspace);
    }

    pub fn get_workspace(&self, id: u64) -> Option<Workspace> {
        self.workspaces
            .lock()
            .expect("workspace store lock poisoned")
            .get(&id)
            .cloned()
    }

    pub fn put_community(&self, community: Community) {
        self.communities
            .lock()
            .expect("community store lock poisoned")
            .insert(community.id, community);
    }

    pub fn get_community(&self, id: u64) -> Option<Community> {
        self.communities
            .lock()
            .expect("community store lock poisoned")
            .get(&id)
            .cloned()
    }

    pub fn put_idea(&self, idea: Idea) {
        self.ideas
            .lock()
            .expect("idea store lock poisoned")
            .insert(idea.id, idea);
    }

    pub fn get_idea(&self, id: u64) -> Option<Idea> {
        self.ideas
            .lock()
            .expect("idea store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Case-insensitive substring search over idea titles.
    pub fn search_ideas(&self, query: &str) -> Vec<Idea> {
        let needle = query.to_lowercase();
        let mut hits: Vec<Idea> = self
            .ideas
            .lock()
            .expect("idea store lock poisoned")
            .values()
            .filter(|idea| idea.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by_key(|idea| idea.id);
        hits
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}
