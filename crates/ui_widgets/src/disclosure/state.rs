use serde::{Deserialize, Serialize};

use crate::error::ConsistencyWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// How many panels the client runtime allows open at once.
pub enum DisclosureMode {
    /// Opening one panel collapses its siblings.
    #[default]
    SingleOpen,
    /// Panels open and close independently.
    MultiOpen,
}

impl DisclosureMode {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::SingleOpen => "single-open",
            Self::MultiOpen => "multi-open",
        }
    }

    /// Value of the container discriminator read by the toggle runtime.
    pub const fn runtime_value(self) -> &'static str {
        match self {
            Self::SingleOpen => "collapse",
            Self::MultiOpen => "open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Initial state of one panel for a render.
///
/// Transitions happen in the client toggle runtime after the page loads; the server only
/// emits the initial state.
pub enum PanelState {
    /// Content region hidden.
    Collapsed,
    /// Content region visible.
    Expanded,
}

impl PanelState {
    /// Returns `true` for [`PanelState::Expanded`].
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

/// Computes initial panel states from each panel's default-open flag.
///
/// In [`DisclosureMode::SingleOpen`] the first default-open panel wins and later ones render
/// collapsed; the tie-break is reported as a [`ConsistencyWarning`].
pub fn initial_states<I>(
    mode: DisclosureMode,
    defaults: I,
) -> (Vec<PanelState>, Option<ConsistencyWarning>)
where
    I: IntoIterator<Item = bool>,
{
    let defaults: Vec<bool> = defaults.into_iter().collect();
    let state = |open: bool| {
        if open {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    };

    match mode {
        DisclosureMode::MultiOpen => (defaults.into_iter().map(state).collect(), None),
        DisclosureMode::SingleOpen => {
            let mut open = defaults
                .iter()
                .enumerate()
                .filter_map(|(index, open)| open.then_some(index));
            let kept = open.next();
            let collapsed: Vec<usize> = open.collect();
            let states = (0..defaults.len())
                .map(|index| state(Some(index) == kept))
                .collect();
            let warning = match kept {
                Some(kept) if !collapsed.is_empty() => {
                    Some(ConsistencyWarning::MultipleDefaultOpen { kept, collapsed })
                }
                _ => None,
            };
            (states, warning)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use PanelState::{Collapsed, Expanded};

    #[test]
    fn single_open_keeps_first_default_open_panel() {
        let (states, warning) = initial_states(DisclosureMode::SingleOpen, [true, false, true]);
        assert_eq!(states, vec![Expanded, Collapsed, Collapsed]);
        assert_eq!(
            warning,
            Some(ConsistencyWarning::MultipleDefaultOpen {
                kept: 0,
                collapsed: vec![2]
            })
        );
    }

    #[test]
    fn single_open_without_conflict_has_no_warning() {
        let (states, warning) = initial_states(DisclosureMode::SingleOpen, [false, true, false]);
        assert_eq!(states, vec![Collapsed, Expanded, Collapsed]);
        assert_eq!(warning, None);

        let (states, warning) = initial_states(DisclosureMode::SingleOpen, [false, false]);
        assert_eq!(states, vec![Collapsed, Collapsed]);
        assert_eq!(warning, None);
    }

    #[test]
    fn multi_open_states_are_independent() {
        let (states, warning) = initial_states(DisclosureMode::MultiOpen, [true, false, true]);
        assert_eq!(states, vec![Expanded, Collapsed, Expanded]);
        assert_eq!(warning, None);
    }

    #[test]
    fn mode_tokens_match_runtime_vocabulary() {
        assert_eq!(DisclosureMode::SingleOpen.runtime_value(), "collapse");
        assert_eq!(DisclosureMode::MultiOpen.runtime_value(), "open");
        assert_eq!(DisclosureMode::default(), DisclosureMode::SingleOpen);
        assert_eq!(
            serde_json::from_str::<DisclosureMode>("\"multi-open\"").expect("mode"),
            DisclosureMode::MultiOpen
        );
    }
}
