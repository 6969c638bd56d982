//! Construction errors and non-fatal consistency warnings.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Invalid widget props detected while constructing a widget value.
///
/// Construction is the only fallible step; a widget that was built renders without errors.
pub enum ConstructionError {
    /// A disclosure container was given no panels.
    #[error("disclosure container requires at least one panel")]
    EmptyPanels,
    /// A required text prop was empty or whitespace.
    #[error("{widget} requires a non-empty {field}")]
    EmptyLabel {
        /// Widget kind being constructed.
        widget: &'static str,
        /// Offending prop.
        field: &'static str,
    },
    /// A color key did not match the palette.
    #[error("unknown color key `{0}`")]
    UnknownColor(String),
    /// A size key did not match the size table.
    #[error("unknown size key `{0}`")]
    UnknownSize(String),
    /// An explicit element id cannot be used as an id and selector reference.
    #[error("invalid element id `{0}`; expected ascii letters, digits, `-` or `_`")]
    InvalidId(String),
    /// A hypermedia fetch was configured without a URL.
    #[error("hypermedia fetch requires a non-empty url")]
    EmptyFetchUrl,
    /// A disclosure fetch trigger would fire on direct activation instead of on reveal.
    #[error("hypermedia trigger `{0}` must fire when the panel is revealed, not on activation")]
    ActivationTrigger(String),
    /// One element would carry both a toggle hook and a hypermedia trigger.
    #[error("<{tag}> carries both a toggle hook and a hypermedia trigger")]
    BehaviorCollision {
        /// Tag of the offending element.
        tag: String,
        /// Id of the offending element when it has one.
        id: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-fatal input inconsistency resolved by a documented policy.
pub enum ConsistencyWarning {
    /// Several panels were marked open by default in single-open mode; the first one was kept.
    MultipleDefaultOpen {
        /// Panel left expanded.
        kept: usize,
        /// Panels rendered collapsed instead.
        collapsed: Vec<usize>,
    },
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleDefaultOpen { kept, collapsed } => write!(
                f,
                "single-open container marks several panels open by default; keeping panel {kept}, collapsing {collapsed:?}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            ConstructionError::EmptyLabel {
                widget: "panel",
                field: "title"
            }
            .to_string(),
            "panel requires a non-empty title"
        );
        assert_eq!(
            ConstructionError::UnknownColor("teal".into()).to_string(),
            "unknown color key `teal`"
        );
        assert!(ConsistencyWarning::MultipleDefaultOpen {
            kept: 0,
            collapsed: vec![2]
        }
        .to_string()
        .contains("keeping panel 0"));
    }
}
