//! Policy repository
//!
//! A repository is a directory holding `.policy-console/policy.json`. The
//! file is created on the first signed change; a directory without it is an
//! empty repository.

mod document;
mod json_store;
mod memory_store;
mod signer;

use std::path::{Path, PathBuf};

pub use document::{PolicyDocument, PolicyFile, RootOfTrust, StoredRule};
pub use json_store::JsonRuleStore;
pub use memory_store::InMemoryRuleStore;
pub use signer::{load_signer, Signer};

use crate::error::{StoreError, StoreResult};

/// Directory (inside the repository) holding console-managed files
pub const STATE_DIR: &str = ".policy-console";
/// Policy document file name
pub const POLICY_FILE: &str = "policy.json";

/// Loaded repository handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the policy document
    pub fn policy_file(&self) -> PathBuf {
        self.root.join(STATE_DIR).join(POLICY_FILE)
    }

    /// Open a store over one named policy of this repository
    ///
    /// Without a signer the store rejects every mutation with `StoreError::ReadOnly`.
    pub fn open_store(&self, policy_name: impl Into<String>, signer: Option<Signer>) -> JsonRuleStore {
        JsonRuleStore::new(self.policy_file(), policy_name, signer)
    }
}

/// Load the repository at `path`.
///
/// Fails when the directory does not exist or when an existing policy
/// document cannot be parsed.
pub fn load_repository(path: impl AsRef<Path>) -> StoreResult<Repository> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(StoreError::RepositoryNotFound(path.display().to_string()));
    }

    let repository = Repository {
        root: path.to_path_buf(),
    };

    // Parse once so a corrupt policy file fails at startup
    json_store::read_document(&repository.policy_file())?;
    log::info!("Loaded policy repository at {}", path.display());

    Ok(repository)
}
