pub mod client;
pub mod commits;

pub use client::GitHubArtifactClient;
pub use commits::extract_revision;
