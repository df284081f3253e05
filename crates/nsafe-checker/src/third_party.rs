//! Third-party signature registry.
//!
//! The signature database itself (file format, loader) is owned elsewhere;
//! the composer only needs to resolve a callee to the file/line where a
//! missing or wrong nullability signature should be fixed.

use rustc_hash::FxHashMap;

/// Location of a callee's signature inside the third-party repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureLocation {
    pub file: String,
    pub line: u32,
}

/// Resolves callee identities to signature locations.
pub trait ThirdPartyRegistry: Sync {
    fn lookup(&self, callee: &str) -> Option<&SignatureLocation>;

    /// Render a signature file name the way a user should see it in a
    /// remediation hint (typically repository-root relative).
    fn user_facing_path(&self, file: &str) -> String;
}

/// Hash-map backed registry, populated once by the signature database
/// loader before any checking begins.
#[derive(Debug, Clone, Default)]
pub struct ThirdPartyIndex {
    repo_root: String,
    signatures: FxHashMap<String, SignatureLocation>,
}

impl ThirdPartyIndex {
    pub fn new(repo_root: impl Into<String>) -> Self {
        Self {
            repo_root: repo_root.into(),
            signatures: FxHashMap::default(),
        }
    }

    pub fn add(&mut self, callee: impl Into<String>, file: impl Into<String>, line: u32) {
        self.signatures.insert(
            callee.into(),
            SignatureLocation {
                file: file.into(),
                line,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl ThirdPartyRegistry for ThirdPartyIndex {
    fn lookup(&self, callee: &str) -> Option<&SignatureLocation> {
        self.signatures.get(callee)
    }

    fn user_facing_path(&self, file: &str) -> String {
        if self.repo_root.is_empty() {
            file.to_string()
        } else {
            format!("{}/{file}", self.repo_root.trim_end_matches('/'))
        }
    }
}
