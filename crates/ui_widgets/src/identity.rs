//! Per-instance element ids.
//!
//! Widgets that need ids for ARIA or dismiss wiring mint one when they are constructed and
//! keep it for their whole lifetime, so every render of a value emits the same ids and two
//! values never share one. No process-wide counter or registry is involved, and concurrent
//! renders need no synchronization.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use crate::error::ConstructionError;

/// Mints a fresh id of the form `{prefix}-{16 hex digits}`.
pub(crate) fn mint_instance_id(prefix: &str) -> String {
    // Each RandomState carries fresh SipHash keys; hashing a constant under them yields a
    // token unique to this instance.
    let token = RandomState::new().hash_one(());
    format!("{prefix}-{token:016x}")
}

#[derive(Debug, PartialEq, Eq)]
/// Element id owned by one widget value.
///
/// A generated id is minted again when the value is cloned, so a clone rendered next to its
/// original never repeats its ids. An explicit id is the caller's choice and is kept as is.
pub(crate) struct InstanceId {
    prefix: &'static str,
    value: String,
    generated: bool,
}

impl InstanceId {
    /// Freshly minted id.
    pub(crate) fn generated(prefix: &'static str) -> Self {
        Self {
            prefix,
            value: mint_instance_id(prefix),
            generated: true,
        }
    }

    /// Validated caller-supplied id.
    pub(crate) fn explicit(prefix: &'static str, id: String) -> Result<Self, ConstructionError> {
        validate_element_id(&id)?;
        Ok(Self {
            prefix,
            value: id,
            generated: false,
        })
    }

    /// Uses `explicit` when given, otherwise mints an id.
    pub(crate) fn resolve(
        prefix: &'static str,
        explicit: Option<String>,
    ) -> Result<Self, ConstructionError> {
        match explicit {
            Some(id) => Self::explicit(prefix, id),
            None => Ok(Self::generated(prefix)),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.value
    }
}

impl Clone for InstanceId {
    fn clone(&self) -> Self {
        if self.generated {
            Self::generated(self.prefix)
        } else {
            Self {
                prefix: self.prefix,
                value: self.value.clone(),
                generated: false,
            }
        }
    }
}

/// Ids are also used as `#id` selectors by the client runtimes, so they are restricted to
/// characters that need no selector escaping.
pub(crate) fn validate_element_id(id: &str) -> Result<(), ConstructionError> {
    let valid = id.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic())
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(ConstructionError::InvalidId(id.to_string()))
    }
}
