//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (filesystem, git, the hosting API).
//! Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod git;
pub mod hosting;

pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use hosting::{HostingApi, HostingFuture, Issue, PullRequest};

/// Error type returned across every port boundary.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
