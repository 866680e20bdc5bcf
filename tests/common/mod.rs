//! Shared test utilities for git-upload integration tests,
//! built around real, isolated git repositories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
