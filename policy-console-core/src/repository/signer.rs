//! Signing key loading

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::Repository;
use crate::error::{StoreError, StoreResult};

/// Length of the key id (hex characters of the key fingerprint)
const KEY_ID_LEN: usize = 16;

/// Loaded signing key
///
/// Only the fingerprint is kept; it is stamped into the policy document on
/// every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    key_id: String,
}

impl Signer {
    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

/// Load the signing key referenced by `key_hint`.
///
/// A missing or blank hint yields `StoreError::SigningKeyNotSpecified`, which
/// callers treat as "read-only", not as a failure. Relative paths are resolved
/// against the repository root.
pub fn load_signer(repository: &Repository, key_hint: Option<&str>) -> StoreResult<Signer> {
    let hint = key_hint
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(StoreError::SigningKeyNotSpecified)?;

    let path = Path::new(hint);
    let key_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        repository.root().join(path)
    };

    let bytes = fs::read(&key_path)
        .map_err(|e| StoreError::SigningKey(format!("{}: {e}", key_path.display())))?;
    if bytes.is_empty() {
        return Err(StoreError::SigningKey(format!(
            "{}: key file is empty",
            key_path.display()
        )));
    }

    let fingerprint = hex::encode(Sha256::digest(&bytes));
    let key_id = fingerprint[..KEY_ID_LEN].to_string();
    log::info!("Loaded signing key {key_id} from {}", key_path.display());

    Ok(Signer { key_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> (Repository, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let repo = crate::repository::load_repository(tmp.path()).unwrap();
        (repo, tmp)
    }

    #[test]
    fn missing_hint_means_not_specified() {
        let (repo, _tmp) = repository();
        assert_eq!(
            load_signer(&repo, None),
            Err(StoreError::SigningKeyNotSpecified)
        );
        assert_eq!(
            load_signer(&repo, Some("   ")),
            Err(StoreError::SigningKeyNotSpecified)
        );
    }

    #[test]
    fn unreadable_key_is_an_error() {
        let (repo, _tmp) = repository();
        let result = load_signer(&repo, Some("missing.key"));
        assert!(matches!(result, Err(StoreError::SigningKey(_))));
    }

    #[test]
    fn key_id_is_fingerprint_prefix() {
        let (repo, tmp) = repository();
        fs::write(tmp.path().join("signing.key"), b"secret key material").unwrap();

        let signer = load_signer(&repo, Some("signing.key")).unwrap();
        let expected = hex::encode(Sha256::digest(b"secret key material"));
        assert_eq!(signer.key_id(), &expected[..KEY_ID_LEN]);
    }

    #[test]
    fn empty_key_file_is_rejected() {
        let (repo, tmp) = repository();
        fs::write(tmp.path().join("empty.key"), b"").unwrap();
        assert!(matches!(
            load_signer(&repo, Some("empty.key")),
            Err(StoreError::SigningKey(_))
        ));
    }
}
