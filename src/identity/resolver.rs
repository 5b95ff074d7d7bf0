//! Id and creation-time resolution for `save`

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::DocumentDraft;
use crate::storage::StorageMap;

use super::generator::{Clock, IdGenerator};

/// What to do when a supplied id is already stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Treat the supplied id as a candidate only. If it is taken, draw fresh
    /// random ids until a free one is found.
    #[default]
    RegenerateOnCollision,
    /// Keep the supplied id and replace the stored document. The stored
    /// `created` is kept.
    OverwriteExisting,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPolicy::RegenerateOnCollision => "regenerate_on_collision",
            IdPolicy::OverwriteExisting => "overwrite_existing",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the resolved id was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdOrigin {
    /// No id was supplied; a fresh one was generated
    Generated,
    /// The supplied id was free and is used as-is
    Supplied,
    /// The supplied id was taken and has been replaced
    Regenerated { requested: String },
    /// The supplied id was taken and its document is being replaced
    Overwritten,
}

impl IdOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdOrigin::Generated => "generated",
            IdOrigin::Supplied => "supplied",
            IdOrigin::Regenerated { .. } => "regenerated",
            IdOrigin::Overwritten => "overwritten",
        }
    }
}

/// Outcome of resolving a draft against the current storage contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub id: String,
    pub created: DateTime<Utc>,
    pub origin: IdOrigin,
}

/// Assigns ids and creation times on upsert
pub struct IdentityManager {
    policy: IdPolicy,
    generator: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl IdentityManager {
    pub fn with_sources(
        policy: IdPolicy,
        generator: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            policy,
            generator,
            clock,
        }
    }

    /// Resolve the id and creation time for `draft`.
    ///
    /// Never fails. Under `RegenerateOnCollision` the returned id is never
    /// present in `storage`. Under `OverwriteExisting` a taken id is returned
    /// unchanged together with the stored document's `created`.
    pub fn resolve(&mut self, draft: &DocumentDraft, storage: &StorageMap) -> Resolution {
        let created = draft.created.unwrap_or_else(|| self.clock.now());

        let requested = match &draft.id {
            Some(id) => id.clone(),
            None => {
                return Resolution {
                    id: self.free_id(storage),
                    created,
                    origin: IdOrigin::Generated,
                }
            }
        };

        let existing = match storage.get(&requested) {
            Some(doc) => doc,
            None => {
                return Resolution {
                    id: requested,
                    created,
                    origin: IdOrigin::Supplied,
                }
            }
        };

        match self.policy {
            IdPolicy::OverwriteExisting => Resolution {
                id: requested,
                created: existing.created,
                origin: IdOrigin::Overwritten,
            },
            IdPolicy::RegenerateOnCollision => Resolution {
                id: self.free_id(storage),
                created,
                origin: IdOrigin::Regenerated { requested },
            },
        }
    }

    /// Draw ids until one is not taken
    fn free_id(&mut self, storage: &StorageMap) -> String {
        loop {
            let id = self.generator.next_id();
            if !storage.contains(&id) {
                return id;
            }
        }
    }
}

impl fmt::Debug for IdentityManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityManager")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::generator::{FixedClock, SequenceGenerator};
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn manager(policy: IdPolicy, ids: &[&str]) -> IdentityManager {
        IdentityManager::with_sources(
            policy,
            Box::new(SequenceGenerator::new(ids.iter().copied())),
            Box::new(FixedClock(t0())),
        )
    }

    fn store_with(id: &str, created: DateTime<Utc>) -> StorageMap {
        let mut storage = StorageMap::new();
        let draft = DocumentDraft::with_text("t", "c");
        storage.put(id.to_string(), draft.resolve(id.to_string(), created));
        storage
    }

    #[test]
    fn test_generated_when_absent() {
        let mut mgr = manager(IdPolicy::default(), &["g1"]);
        let res = mgr.resolve(&DocumentDraft::new(), &StorageMap::new());

        assert_eq!(res.id, "g1");
        assert_eq!(res.origin, IdOrigin::Generated);
        assert_eq!(res.created, t0());
    }

    #[test]
    fn test_generated_skips_taken_ids() {
        let storage = store_with("g1", t0());
        let mut mgr = manager(IdPolicy::default(), &["g1", "g1", "g2"]);

        let res = mgr.resolve(&DocumentDraft::new(), &storage);
        assert_eq!(res.id, "g2");
        assert_eq!(res.origin, IdOrigin::Generated);
    }

    #[test]
    fn test_supplied_free_id_kept() {
        let mut mgr = manager(IdPolicy::default(), &[]);
        let draft = DocumentDraft {
            id: Some("mine".into()),
            ..DocumentDraft::new()
        };

        let res = mgr.resolve(&draft, &StorageMap::new());
        assert_eq!(res.id, "mine");
        assert_eq!(res.origin, IdOrigin::Supplied);
    }

    #[test]
    fn test_supplied_taken_id_regenerated() {
        let storage = store_with("x", t0());
        let mut mgr = manager(IdPolicy::RegenerateOnCollision, &["x", "fresh"]);
        let draft = DocumentDraft {
            id: Some("x".into()),
            ..DocumentDraft::new()
        };

        let res = mgr.resolve(&draft, &storage);
        assert_eq!(res.id, "fresh");
        assert_eq!(
            res.origin,
            IdOrigin::Regenerated {
                requested: "x".into()
            }
        );
    }

    #[test]
    fn test_overwrite_keeps_id_and_stored_created() {
        let original = Utc.with_ymd_and_hms(2001, 5, 5, 5, 5, 5).unwrap();
        let storage = store_with("x", original);
        let mut mgr = manager(IdPolicy::OverwriteExisting, &[]);
        let draft = DocumentDraft {
            id: Some("x".into()),
            created: Some(t0()),
            ..DocumentDraft::new()
        };

        let res = mgr.resolve(&draft, &storage);
        assert_eq!(res.id, "x");
        assert_eq!(res.created, original);
        assert_eq!(res.origin, IdOrigin::Overwritten);
    }

    #[test]
    fn test_supplied_created_honored() {
        let supplied = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        let mut mgr = manager(IdPolicy::default(), &["g"]);
        let draft = DocumentDraft {
            created: Some(supplied),
            ..DocumentDraft::new()
        };

        let res = mgr.resolve(&draft, &StorageMap::new());
        assert_eq!(res.created, supplied);
    }

    #[test]
    fn test_policy_serde_names() {
        let p: IdPolicy = serde_json::from_str("\"overwrite_existing\"").unwrap();
        assert_eq!(p, IdPolicy::OverwriteExisting);
        assert_eq!(IdPolicy::default().as_str(), "regenerate_on_collision");
    }
}
