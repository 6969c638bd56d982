//! Hypermedia-fetch attributes and their coexistence with the client toggle runtime.
//!
//! Two independent client runtimes read the rendered markup. The toggle runtime binds click
//! handlers to elements carrying a toggle hook (for example `data-accordion-target`). The
//! hypermedia runtime issues requests for elements carrying `hx-*` request attributes. No
//! element may carry both: a disclosure fetch lives on the content region and fires on the
//! region's `revealed` signal, after the toggle runtime has shown it.

use serde::{Deserialize, Serialize};
use ui_render::{Element, Markup};

use crate::error::ConstructionError;

/// Fetch URL attribute read by the hypermedia runtime.
pub const FETCH_URL_ATTR: &str = "hx-get";
/// Trigger expression attribute read by the hypermedia runtime.
pub const FETCH_TRIGGER_ATTR: &str = "hx-trigger";
/// Swap strategy attribute read by the hypermedia runtime.
pub const FETCH_SWAP_ATTR: &str = "hx-swap";
/// Target override attribute read by the hypermedia runtime.
pub const FETCH_TARGET_ATTR: &str = "hx-target";

/// Attributes through which the hypermedia runtime binds a request trigger.
pub const HYPERMEDIA_TRIGGER_ATTRS: &[&str] = &[
    "hx-get",
    "hx-post",
    "hx-put",
    "hx-patch",
    "hx-delete",
    "hx-trigger",
];

/// Attributes through which the toggle runtime binds a click handler.
pub const TOGGLE_HOOK_ATTRS: &[&str] = &[
    "data-accordion-target",
    "data-tabs-target",
    "data-dismiss-target",
    "data-collapse-toggle",
];

const REVEAL_EVENTS: &[&str] = &["revealed", "intersect"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Swap strategy used when splicing a hypermedia response into the page.
pub enum Swap {
    /// Replace the target's children.
    #[default]
    InnerHtml,
    /// Replace the target itself.
    OuterHtml,
    /// Insert before the target.
    BeforeBegin,
    /// Insert before the target's first child.
    AfterBegin,
    /// Insert after the target's last child.
    BeforeEnd,
    /// Insert after the target.
    AfterEnd,
    /// Remove the target.
    Delete,
    /// Do not swap.
    None,
}

impl Swap {
    /// Attribute value understood by the hypermedia runtime.
    pub const fn token(self) -> &'static str {
        match self {
            Self::InnerHtml => "innerHTML",
            Self::OuterHtml => "outerHTML",
            Self::BeforeBegin => "beforebegin",
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
            Self::AfterEnd => "afterend",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lazy content fetch attached to a disclosure content region.
pub struct HypermediaFetch {
    url: String,
    trigger: String,
    swap: Option<Swap>,
    target: Option<String>,
}

impl HypermediaFetch {
    /// Trigger used unless another reveal-class trigger is configured.
    pub const DEFAULT_TRIGGER: &'static str = "revealed";

    /// Fetch of `url` triggered when the region is revealed.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyFetchUrl`] for an empty URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ConstructionError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConstructionError::EmptyFetchUrl);
        }
        Ok(Self {
            url,
            trigger: Self::DEFAULT_TRIGGER.to_string(),
            swap: None,
            target: None,
        })
    }

    /// Replaces the trigger expression.
    ///
    /// Every comma-separated trigger must start with a reveal-class event (`revealed` or
    /// `intersect`, modifiers allowed).
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ActivationTrigger`] for any other event.
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Result<Self, ConstructionError> {
        let trigger = trigger.into();
        validate_reveal_trigger(&trigger)?;
        self.trigger = trigger.trim().to_string();
        Ok(self)
    }

    /// Sets the swap strategy.
    pub fn with_swap(mut self, swap: Swap) -> Self {
        self.swap = Some(swap);
        self
    }

    /// Sets a target selector override.
    pub fn with_target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    /// Fetch URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Trigger expression.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Swap strategy, when configured.
    pub fn swap(&self) -> Option<Swap> {
        self.swap
    }

    /// Target selector override, when configured.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub(crate) fn apply(&self, element: Element) -> Element {
        element
            .attr(FETCH_URL_ATTR, self.url.clone())
            .attr(FETCH_TRIGGER_ATTR, self.trigger.clone())
            .attr_opt(FETCH_SWAP_ATTR, self.swap.map(Swap::token))
            .attr_opt(FETCH_TARGET_ATTR, self.target.clone())
    }
}

fn validate_reveal_trigger(trigger: &str) -> Result<(), ConstructionError> {
    let reject = || ConstructionError::ActivationTrigger(trigger.to_string());
    if trigger.trim().is_empty() {
        return Err(reject());
    }
    for spec in trigger.split(',') {
        match spec.split_whitespace().next() {
            Some(event) if REVEAL_EVENTS.contains(&event) => {}
            _ => return Err(reject()),
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// HTTP method of a hypermedia action.
pub enum HttpMethod {
    /// `GET` request.
    Get,
    /// `POST` request.
    Post,
    /// `PUT` request.
    Put,
    /// `PATCH` request.
    Patch,
    /// `DELETE` request.
    Delete,
}

impl HttpMethod {
    /// Request attribute name for this method.
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Get => "hx-get",
            Self::Post => "hx-post",
            Self::Put => "hx-put",
            Self::Patch => "hx-patch",
            Self::Delete => "hx-delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request issued when a control without a toggle hook (for example a button) is activated.
pub struct HypermediaAction {
    method: HttpMethod,
    url: String,
    swap: Option<Swap>,
    target: Option<String>,
}

impl HypermediaAction {
    /// Action issuing `method` against `url` with the control's native trigger.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyFetchUrl`] for an empty URL.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Result<Self, ConstructionError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConstructionError::EmptyFetchUrl);
        }
        Ok(Self {
            method,
            url,
            swap: None,
            target: None,
        })
    }

    /// Sets the swap strategy.
    pub fn with_swap(mut self, swap: Swap) -> Self {
        self.swap = Some(swap);
        self
    }

    /// Sets a target selector override.
    pub fn with_target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    /// HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn apply(&self, element: Element) -> Element {
        element
            .attr(self.method.attr(), self.url.clone())
            .attr_opt(FETCH_SWAP_ATTR, self.swap.map(Swap::token))
            .attr_opt(FETCH_TARGET_ATTR, self.target.clone())
    }
}

/// Returns `true` when `element` carries a toggle-runtime click hook.
pub fn carries_toggle_hook(element: &Element) -> bool {
    TOGGLE_HOOK_ATTRS.iter().any(|attr| element.has_attr(attr))
}

/// Returns `true` when `element` carries a hypermedia request trigger.
pub fn carries_hypermedia_trigger(element: &Element) -> bool {
    HYPERMEDIA_TRIGGER_ATTRS
        .iter()
        .any(|attr| element.has_attr(attr))
}

fn collision(element: &Element) -> ConstructionError {
    ConstructionError::BehaviorCollision {
        tag: element.tag().to_string(),
        id: element.get_attr("id").map(str::to_string),
    }
}

/// Attaches `fetch` to a caller-built element.
///
/// # Errors
///
/// Returns [`ConstructionError::BehaviorCollision`] when the element already carries a toggle
/// hook.
pub fn attach_fetch(
    element: Element,
    fetch: &HypermediaFetch,
) -> Result<Element, ConstructionError> {
    if carries_toggle_hook(&element) {
        return Err(collision(&element));
    }
    Ok(fetch.apply(element))
}

/// Attaches a toggle hook `hook_attr` pointing at `target_id` to a caller-built element.
///
/// # Errors
///
/// Returns [`ConstructionError::BehaviorCollision`] when the element already carries a
/// hypermedia trigger.
pub fn attach_toggle(
    element: Element,
    hook_attr: &'static str,
    target_id: &str,
) -> Result<Element, ConstructionError> {
    if carries_hypermedia_trigger(&element) {
        return Err(collision(&element));
    }
    Ok(element.attr(hook_attr, format!("#{target_id}")))
}

/// Checks a rendered tree for elements carrying both a toggle hook and a hypermedia trigger.
///
/// # Errors
///
/// Returns [`ConstructionError::BehaviorCollision`] for the first offending element.
pub fn verify_coexistence(markup: &Markup) -> Result<(), ConstructionError> {
    match markup
        .elements()
        .into_iter()
        .find(|element| carries_toggle_hook(element) && carries_hypermedia_trigger(element))
    {
        Some(element) => Err(collision(element)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fetch_defaults_to_revealed_trigger() {
        let fetch = HypermediaFetch::new("/panels/1").expect("fetch");
        assert_eq!(fetch.trigger(), "revealed");
        assert_eq!(fetch.url(), "/panels/1");
        assert_eq!(fetch.swap(), None);
    }

    #[test]
    fn reveal_class_triggers_with_modifiers_are_accepted() {
        for trigger in ["revealed", "intersect once", "revealed delay:200ms, intersect"] {
            HypermediaFetch::new("/x")
                .expect("fetch")
                .with_trigger(trigger)
                .expect("reveal trigger");
        }
    }

    #[test]
    fn activation_triggers_are_rejected() {
        for trigger in ["click", "load", "", "revealed, click", "click[ctrlKey]"] {
            assert_eq!(
                HypermediaFetch::new("/x")
                    .expect("fetch")
                    .with_trigger(trigger),
                Err(ConstructionError::ActivationTrigger(trigger.to_string()))
            );
        }
    }

    #[test]
    fn empty_urls_fail() {
        assert_eq!(
            HypermediaFetch::new("  "),
            Err(ConstructionError::EmptyFetchUrl)
        );
        assert_eq!(
            HypermediaAction::new(HttpMethod::Post, ""),
            Err(ConstructionError::EmptyFetchUrl)
        );
    }

    #[test]
    fn applied_fetch_emits_all_configured_attributes() {
        let fetch = HypermediaFetch::new("/lazy")
            .expect("fetch")
            .with_swap(Swap::OuterHtml)
            .with_target("#slot");
        let element = fetch.apply(Element::new("div"));

        assert_eq!(element.get_attr("hx-get"), Some("/lazy"));
        assert_eq!(element.get_attr("hx-trigger"), Some("revealed"));
        assert_eq!(element.get_attr("hx-swap"), Some("outerHTML"));
        assert_eq!(element.get_attr("hx-target"), Some("#slot"));
    }

    #[test]
    fn action_uses_method_attribute_without_trigger_override() {
        let action = HypermediaAction::new(HttpMethod::Delete, "/items/4")
            .expect("action")
            .with_swap(Swap::Delete);
        let element = action.apply(Element::new("button"));

        assert_eq!(element.get_attr("hx-delete"), Some("/items/4"));
        assert!(!element.has_attr("hx-trigger"));
        assert_eq!(element.get_attr("hx-swap"), Some("delete"));
    }

    #[test]
    fn attaching_both_behaviors_to_one_element_is_rejected() {
        let fetch = HypermediaFetch::new("/lazy").expect("fetch");

        let toggled = Element::new("button").id("h").attr("data-accordion-target", "#b");
        assert_eq!(
            attach_fetch(toggled, &fetch),
            Err(ConstructionError::BehaviorCollision {
                tag: "button".to_string(),
                id: Some("h".to_string()),
            })
        );

        let fetching = attach_fetch(Element::new("div"), &fetch).expect("plain element");
        assert!(matches!(
            attach_toggle(fetching, "data-accordion-target", "b"),
            Err(ConstructionError::BehaviorCollision { .. })
        ));

        let toggle = attach_toggle(Element::new("button"), "data-tabs-target", "panel")
            .expect("plain element");
        assert_eq!(toggle.get_attr("data-tabs-target"), Some("#panel"));
    }

    #[test]
    fn verify_coexistence_finds_nested_collisions() {
        let clean = Markup::from(
            Element::new("div")
                .child(Element::new("button").attr("data-accordion-target", "#b"))
                .child(Element::new("div").id("b").attr("hx-get", "/x")),
        );
        assert_eq!(verify_coexistence(&clean), Ok(()));

        let broken = Markup::from(Element::new("div").child(
            Element::new("button")
                .attr("data-accordion-target", "#b")
                .attr("hx-trigger", "click"),
        ));
        assert!(verify_coexistence(&broken).is_err());
    }
}
