//! IdeaHub Core
//!
//! Shared types for the IdeaHub platform: entity identifiers, the
//! `Subject`/`Resource` capability structs consumed by the authorization
//! engine, action-name constants, and the domain records served by the
//! gateway.

pub mod action;
pub mod domain;
pub mod types;

pub use domain::{Community, Idea, Workspace};
pub use types::{Resource, ResourceId, Subject, SubjectId, WorkspaceId};
