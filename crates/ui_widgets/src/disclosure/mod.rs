//! Disclosure-widget state model shared by the accordion and tab families.
//!
//! A [`DisclosureContainer`] owns its panels, their initial [`PanelState`]s, and the ids used
//! to wire each heading control to its content region. Widgets iterate
//! [`DisclosureContainer::slots`] and let each [`PanelSlot`] apply the id/ARIA/toggle-hook
//! attributes, so both families share one consistent wiring and only differ in classes.

mod panel;
mod state;

use leptos::logging;
use ui_render::Element;

use crate::error::{ConsistencyWarning, ConstructionError};
use crate::identity::InstanceId;

pub use panel::{Panel, PanelContent};
pub use state::{initial_states, DisclosureMode, PanelState};

/// Class token hiding a collapsed content region. The toggle runtime removes and re-adds it.
pub const HIDDEN_CLASS: &str = "hidden";
/// Marker attribute on the heading indicator glyph rotated by the toggle runtime.
pub const INDICATOR_MARKER_ATTR: &str = "data-accordion-icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Widget family, selecting the attribute vocabulary read by the toggle runtime.
pub enum DisclosureFamily {
    /// Stacked headings, each followed by its content region.
    Accordion,
    /// Tab strip followed by the tab panels.
    Tabs,
}

impl DisclosureFamily {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Accordion => "accordion",
            Self::Tabs => "tabs",
        }
    }

    /// Heading-control attribute holding the `#id` of its content region.
    pub const fn target_attr(self) -> &'static str {
        match self {
            Self::Accordion => "data-accordion-target",
            Self::Tabs => "data-tabs-target",
        }
    }

    /// ARIA attribute carrying the heading control's state.
    pub const fn state_attr(self) -> &'static str {
        match self {
            Self::Accordion => "aria-expanded",
            Self::Tabs => "aria-selected",
        }
    }

    const fn control_role(self) -> Option<&'static str> {
        match self {
            Self::Accordion => None,
            Self::Tabs => Some("tab"),
        }
    }

    const fn region_role(self) -> Option<&'static str> {
        match self {
            Self::Accordion => Some("region"),
            Self::Tabs => Some("tabpanel"),
        }
    }

    /// Tab strips always show one panel.
    const fn requires_selection(self) -> bool {
        matches!(self, Self::Tabs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Base id of a container and the per-panel ids derived from it.
pub struct DisclosureIds {
    base: InstanceId,
}

impl DisclosureIds {
    /// Container base id.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// Id of panel `index`'s heading control.
    pub fn heading(&self, index: usize) -> String {
        format!("{}-heading-{index}", self.base())
    }

    /// Id of panel `index`'s content region.
    pub fn body(&self, index: usize) -> String {
        format!("{}-body-{index}", self.base())
    }

    /// Id of the element wrapping all content regions.
    pub fn content(&self) -> String {
        format!("{}-content", self.base())
    }
}

#[derive(Debug, Clone)]
/// Validated panels plus the mode, ids, and initial states shared by a disclosure widget.
pub struct DisclosureContainer {
    family: DisclosureFamily,
    mode: DisclosureMode,
    ids: DisclosureIds,
    panels: Vec<Panel>,
    states: Vec<PanelState>,
    warnings: Vec<ConsistencyWarning>,
}

impl DisclosureContainer {
    /// Validates `panels` and resolves ids and initial states.
    ///
    /// Without `explicit_id` the base id is minted from this instance, so sibling and nested
    /// containers never collide.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyPanels`] for an empty panel list and
    /// [`ConstructionError::InvalidId`] for an unusable explicit id.
    pub fn new(
        family: DisclosureFamily,
        mode: DisclosureMode,
        panels: Vec<Panel>,
        explicit_id: Option<String>,
    ) -> Result<Self, ConstructionError> {
        if panels.is_empty() {
            return Err(ConstructionError::EmptyPanels);
        }
        let ids = DisclosureIds {
            base: InstanceId::resolve(family.token(), explicit_id)?,
        };

        let (mut states, warning) =
            initial_states(mode, panels.iter().map(Panel::is_open_by_default));
        if family.requires_selection() && !states.iter().any(|state| state.is_expanded()) {
            states[0] = PanelState::Expanded;
        }

        let warnings: Vec<ConsistencyWarning> = warning.into_iter().collect();
        for warning in &warnings {
            logging::warn!("{} `{}`: {warning}", family.token(), ids.base());
        }

        Ok(Self {
            family,
            mode,
            ids,
            panels,
            states,
            warnings,
        })
    }

    /// Widget family.
    pub fn family(&self) -> DisclosureFamily {
        self.family
    }

    /// Open mode communicated to the toggle runtime.
    pub fn mode(&self) -> DisclosureMode {
        self.mode
    }

    /// Base and per-panel ids.
    pub fn ids(&self) -> &DisclosureIds {
        &self.ids
    }

    /// Container base id.
    pub fn base_id(&self) -> &str {
        self.ids.base()
    }

    /// Panels in display order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Initial state of every panel.
    pub fn states(&self) -> &[PanelState] {
        &self.states
    }

    /// Initial state of panel `index`.
    pub fn state(&self, index: usize) -> Option<PanelState> {
        self.states.get(index).copied()
    }

    /// Tie-breaks applied while resolving initial states.
    pub fn warnings(&self) -> &[ConsistencyWarning] {
        &self.warnings
    }

    /// Per-panel wiring views in display order.
    pub fn slots(&self) -> impl Iterator<Item = PanelSlot<'_>> + '_ {
        let last = self.panels.len() - 1;
        self.panels
            .iter()
            .zip(self.states.iter().copied())
            .enumerate()
            .map(move |(index, (panel, state))| PanelSlot {
                family: self.family,
                index,
                is_last: index == last,
                panel,
                state,
                heading_id: self.ids.heading(index),
                body_id: self.ids.body(index),
            })
    }
}

#[derive(Debug, Clone)]
/// Wiring view of one panel inside its container.
pub struct PanelSlot<'a> {
    family: DisclosureFamily,
    index: usize,
    is_last: bool,
    panel: &'a Panel,
    state: PanelState,
    heading_id: String,
    body_id: String,
}

impl<'a> PanelSlot<'a> {
    /// Position in the container.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` for the first panel.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` for the last panel.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Panel props.
    pub fn panel(&self) -> &'a Panel {
        self.panel
    }

    /// Initial state for this render.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Returns `true` when the panel starts expanded.
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Heading control id.
    pub fn heading_id(&self) -> &str {
        &self.heading_id
    }

    /// Content region id.
    pub fn body_id(&self) -> &str {
        &self.body_id
    }

    /// Adds id, toggle hook, state, and `aria-controls` to the heading control.
    ///
    /// The heading control never receives hypermedia attributes.
    pub fn wire_control(&self, control: Element) -> Element {
        control
            .id(self.heading_id.clone())
            .attr_opt("role", self.family.control_role())
            .attr(self.family.target_attr(), format!("#{}", self.body_id))
            .attr(self.family.state_attr(), bool_token(self.is_expanded()))
            .attr("aria-controls", self.body_id.clone())
    }

    /// Adds id, role, and `aria-labelledby` to the content region, plus the panel's lazy
    /// fetch when configured.
    pub fn wire_region(&self, region: Element) -> Element {
        let region = region
            .id(self.body_id.clone())
            .attr_opt("role", self.family.region_role())
            .attr("aria-labelledby", self.heading_id.clone());
        match self.panel.fetch() {
            Some(fetch) => fetch.apply(region),
            None => region,
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::hypermedia::HypermediaFetch;

    fn panels(titles: &[&str]) -> Vec<Panel> {
        titles
            .iter()
            .map(|title| Panel::new(*title, "body").expect("panel"))
            .collect()
    }

    #[test]
    fn empty_panel_list_fails_fast() {
        assert!(matches!(
            DisclosureContainer::new(
                DisclosureFamily::Accordion,
                DisclosureMode::SingleOpen,
                Vec::new(),
                None
            ),
            Err(ConstructionError::EmptyPanels)
        ));
    }

    #[test]
    fn explicit_id_drives_every_panel_id() {
        let container = DisclosureContainer::new(
            DisclosureFamily::Accordion,
            DisclosureMode::MultiOpen,
            panels(&["A", "B"]),
            Some("faq".to_string()),
        )
        .expect("container");

        let ids: Vec<(String, String)> = container
            .slots()
            .map(|slot| (slot.heading_id().to_string(), slot.body_id().to_string()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("faq-heading-0".to_string(), "faq-body-0".to_string()),
                ("faq-heading-1".to_string(), "faq-body-1".to_string()),
            ]
        );
        assert_eq!(container.ids().content(), "faq-content");
    }

    #[test]
    fn generated_base_ids_differ_between_instances() {
        let build = || {
            DisclosureContainer::new(
                DisclosureFamily::Accordion,
                DisclosureMode::SingleOpen,
                panels(&["A"]),
                None,
            )
            .expect("container")
        };
        let first = build();
        let second = build();
        assert_ne!(first.base_id(), second.base_id());
        assert!(first.base_id().starts_with("accordion-"));
    }

    #[test]
    fn single_open_conflict_is_recorded_as_warning() {
        let mut list = panels(&["A", "B", "C"]);
        list[0] = list[0].clone().opened();
        list[2] = list[2].clone().opened();

        let container = DisclosureContainer::new(
            DisclosureFamily::Accordion,
            DisclosureMode::SingleOpen,
            list,
            None,
        )
        .expect("container");

        assert_eq!(
            container.states(),
            &[
                PanelState::Expanded,
                PanelState::Collapsed,
                PanelState::Collapsed
            ]
        );
        assert_eq!(container.warnings().len(), 1);
    }

    #[test]
    fn tabs_select_first_panel_when_none_is_open() {
        let container = DisclosureContainer::new(
            DisclosureFamily::Tabs,
            DisclosureMode::SingleOpen,
            panels(&["A", "B"]),
            None,
        )
        .expect("container");
        assert_eq!(container.state(0), Some(PanelState::Expanded));
        assert_eq!(container.state(1), Some(PanelState::Collapsed));
        assert_eq!(container.state(2), None);
    }

    #[test]
    fn slot_wiring_cross_references_heading_and_region() {
        let list = vec![Panel::new("A", "a")
            .expect("panel")
            .opened()
            .with_fetch(HypermediaFetch::new("/a").expect("fetch"))];
        let container = DisclosureContainer::new(
            DisclosureFamily::Accordion,
            DisclosureMode::SingleOpen,
            list,
            Some("x".to_string()),
        )
        .expect("container");
        let slot = container.slots().next().expect("slot");

        let control = slot.wire_control(Element::new("button"));
        let region = slot.wire_region(Element::new("div"));

        assert_eq!(control.get_attr("id"), Some("x-heading-0"));
        assert_eq!(control.get_attr("data-accordion-target"), Some("#x-body-0"));
        assert_eq!(control.get_attr("aria-expanded"), Some("true"));
        assert_eq!(control.get_attr("aria-controls"), region.get_attr("id"));
        assert_eq!(region.get_attr("aria-labelledby"), control.get_attr("id"));
        assert_eq!(region.get_attr("role"), Some("region"));
        assert!(!control.has_attr("hx-get"));
        assert_eq!(region.get_attr("hx-get"), Some("/a"));
        assert!(slot.is_first() && slot.is_last());
    }

    #[test]
    fn tab_wiring_uses_tab_vocabulary() {
        let container = DisclosureContainer::new(
            DisclosureFamily::Tabs,
            DisclosureMode::SingleOpen,
            panels(&["A", "B"]),
            Some("t".to_string()),
        )
        .expect("container");
        let slot = container.slots().nth(1).expect("slot");
        let control = slot.wire_control(Element::new("button"));
        let region = slot.wire_region(Element::new("div"));

        assert_eq!(control.get_attr("role"), Some("tab"));
        assert_eq!(control.get_attr("aria-selected"), Some("false"));
        assert_eq!(control.get_attr("data-tabs-target"), Some("#t-body-1"));
        assert_eq!(region.get_attr("role"), Some("tabpanel"));
    }
}
