//! Accordion: stacked disclosure panels in single- or multi-open mode.

use ui_render::{
    ClassBuilder, Element, IconName, IconSize, Markup, Render, RenderScope, ThemeSnapshot,
};

use crate::disclosure::{
    DisclosureContainer, DisclosureFamily, DisclosureMode, Panel, PanelSlot, HIDDEN_CLASS,
    INDICATOR_MARKER_ATTR,
};
use crate::error::ConstructionError;
use crate::palette::Color;

const INACTIVE_CLASSES: &str = "text-gray-500 dark:text-gray-400";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Accordion layout variants.
pub enum AccordionVariant {
    /// Continuous border down the stack, padded, rounded on the first and last panel.
    #[default]
    Bordered,
    /// Bottom border per panel only, no rounding, reduced padding.
    Flush,
}

impl AccordionVariant {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bordered => "bordered",
            Self::Flush => "flush",
        }
    }
}

#[derive(Debug, Clone)]
/// Validated accordion widget.
pub struct Accordion {
    container: DisclosureContainer,
    variant: AccordionVariant,
    color: Color,
    class: String,
}

#[derive(Debug, Clone, Default)]
/// Builder collecting accordion props before validation.
pub struct AccordionBuilder {
    panels: Vec<Panel>,
    mode: DisclosureMode,
    variant: AccordionVariant,
    color: Color,
    color_key: Option<String>,
    id: Option<String>,
    class: String,
}

impl Accordion {
    /// Starts an accordion builder.
    pub fn builder() -> AccordionBuilder {
        AccordionBuilder::default()
    }

    /// Single-open, bordered, blue accordion with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyPanels`] for an empty panel list.
    pub fn new(panels: Vec<Panel>) -> Result<Self, ConstructionError> {
        Self::builder().panels(panels).build()
    }

    /// Panels, ids, and initial states.
    pub fn container(&self) -> &DisclosureContainer {
        &self.container
    }

    /// Layout variant.
    pub fn variant(&self) -> AccordionVariant {
        self.variant
    }

    /// Hover/active color.
    pub fn color(&self) -> Color {
        self.color
    }

    fn active_classes(&self, theme: &ThemeSnapshot) -> String {
        let palette = self.color.tokens();
        let base = match self.variant {
            AccordionVariant::Bordered => palette.disclosure_active,
            AccordionVariant::Flush => palette.disclosure_flush_active,
        };
        ClassBuilder::new(base)
            .add_opt(theme.color_override(self.color.key()).map(str::to_string))
            .build()
    }

    fn render_heading(&self, slot: &PanelSlot<'_>, scope: &RenderScope, active: &str) -> Element {
        let palette = self.color.tokens();
        let panel = slot.panel();
        let classes = match self.variant {
            AccordionVariant::Bordered => ClassBuilder::new(
                "flex items-center justify-between w-full p-5 font-medium rtl:text-right gap-3 border border-gray-200",
            )
            .add("dark:border-gray-700")
            .add(palette.disclosure_focus)
            .add(palette.disclosure_hover)
            .add_if(slot.is_first(), "rounded-t-xl")
            .add_if(!slot.is_last(), "border-b-0"),
            AccordionVariant::Flush => ClassBuilder::new(
                "flex items-center justify-between w-full py-5 font-medium rtl:text-right gap-3 border-b border-gray-200",
            )
            .add("dark:border-gray-700"),
        }
        .add_if(slot.is_expanded(), active.to_string())
        .add_if(!slot.is_expanded(), INACTIVE_CLASSES);

        let indicator = Element::new("span")
            .class(
                ClassBuilder::new("shrink-0 transition-transform")
                    .add_if(slot.is_expanded(), "rotate-180")
                    .build(),
            )
            .flag(INDICATOR_MARKER_ATTR)
            .attr("aria-hidden", "true")
            .child(
                scope
                    .icons()
                    .render_icon(panel.icon().unwrap_or(IconName::ChevronDown), IconSize::Xs),
            );

        let control = slot
            .wire_control(
                Element::new("button")
                    .attr("type", "button")
                    .class(classes.merge(panel.extra_classes())),
            )
            .child(Element::new("span").child(panel.title()))
            .child(indicator);

        Element::new("h2")
            .attr("data-ui-slot", "heading")
            .child(control)
    }

    fn render_region(&self, slot: &PanelSlot<'_>, scope: &RenderScope) -> Element {
        let body_classes = match self.variant {
            AccordionVariant::Bordered => ClassBuilder::new("p-5 border border-gray-200")
                .add("dark:border-gray-700 dark:bg-gray-900")
                .add_if(!slot.is_last(), "border-b-0")
                .add_if(slot.is_last(), "border-t-0 rounded-b-xl"),
            AccordionVariant::Flush => {
                ClassBuilder::new("py-5 border-b border-gray-200").add("dark:border-gray-700")
            }
        };

        slot.wire_region(
            Element::new("div").class(
                ClassBuilder::new("ui-accordion-body")
                    .add_if(!slot.is_expanded(), HIDDEN_CLASS)
                    .build(),
            ),
        )
        .child(
            Element::new("div")
                .class(body_classes.build())
                .child(slot.panel().content().render(scope)),
        )
    }
}

impl Render for Accordion {
    fn render(&self, scope: &RenderScope) -> Markup {
        let theme = scope.theme();
        let active = self.active_classes(theme);
        let container = &self.container;

        Element::new("div")
            .id(container.base_id())
            .class(ClassBuilder::new("ui-accordion").merge(&self.class))
            .attr("data-accordion", container.mode().runtime_value())
            .attr("data-active-classes", active.clone())
            .attr("data-inactive-classes", INACTIVE_CLASSES)
            .attr("data-ui-kind", DisclosureFamily::Accordion.token())
            .attr("data-ui-variant", self.variant.token())
            .attr("data-ui-mode", container.mode().token())
            .children(container.slots().flat_map(|slot| {
                [
                    self.render_heading(&slot, scope, &active),
                    self.render_region(&slot, scope),
                ]
            }))
            .into()
    }
}

impl AccordionBuilder {
    /// Appends one panel.
    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Appends several panels.
    pub fn panels(mut self, panels: impl IntoIterator<Item = Panel>) -> Self {
        self.panels.extend(panels);
        self
    }

    /// Sets the open mode.
    pub fn mode(mut self, mode: DisclosureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the layout variant.
    pub fn variant(mut self, variant: AccordionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the hover/active color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self.color_key = None;
        self
    }

    /// Sets the color from a configuration key, validated by [`AccordionBuilder::build`].
    pub fn color_key(mut self, key: impl Into<String>) -> Self {
        self.color_key = Some(key.into());
        self
    }

    /// Uses an explicit base id instead of a generated one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Caller classes merged last into the container's class list.
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        self.class = classes.into();
        self
    }

    /// Validates props and builds the accordion.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyPanels`], [`ConstructionError::UnknownColor`], or
    /// [`ConstructionError::InvalidId`].
    pub fn build(self) -> Result<Accordion, ConstructionError> {
        let color = match self.color_key {
            Some(key) => key.parse()?,
            None => self.color,
        };
        let container = DisclosureContainer::new(
            DisclosureFamily::Accordion,
            self.mode,
            self.panels,
            self.id,
        )?;
        Ok(Accordion {
            container,
            variant: self.variant,
            color,
            class: self.class,
        })
    }
}
