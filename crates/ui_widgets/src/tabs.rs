//! Tabs: a tab strip selecting exactly one panel.

use ui_render::{ClassBuilder, Element, IconSize, Markup, Render, RenderScope};

use crate::disclosure::{
    DisclosureContainer, DisclosureFamily, DisclosureMode, Panel, PanelSlot, HIDDEN_CLASS,
};
use crate::error::ConstructionError;
use crate::palette::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Tab strip variants.
pub enum TabsVariant {
    /// Bottom border under the strip, selected tab underlined.
    #[default]
    Underline,
    /// Rounded pills, selected tab filled.
    Pills,
}

impl TabsVariant {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::Pills => "pills",
        }
    }

    const fn inactive_classes(self) -> &'static str {
        match self {
            Self::Underline => "border-transparent text-gray-500 hover:text-gray-600 hover:border-gray-300 dark:text-gray-400 dark:hover:text-gray-300",
            Self::Pills => "text-gray-500 hover:text-gray-900 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800 dark:hover:text-white",
        }
    }
}

#[derive(Debug, Clone)]
/// Validated tabs widget.
pub struct Tabs {
    container: DisclosureContainer,
    variant: TabsVariant,
    color: Color,
    class: String,
}

#[derive(Debug, Clone, Default)]
/// Builder collecting tabs props before validation.
pub struct TabsBuilder {
    panels: Vec<Panel>,
    variant: TabsVariant,
    color: Color,
    color_key: Option<String>,
    id: Option<String>,
    class: String,
}

impl Tabs {
    /// Starts a tabs builder.
    pub fn builder() -> TabsBuilder {
        TabsBuilder::default()
    }

    /// Underlined blue tabs with a generated id.
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

    /// Strip variant.
    pub fn variant(&self) -> TabsVariant {
        self.variant
    }

    /// Selected-tab color.
    pub fn color(&self) -> Color {
        self.color
    }

    fn render_tab(&self, slot: &PanelSlot<'_>, scope: &RenderScope, active: &str) -> Element {
        let panel = slot.panel();
        let base = match self.variant {
            TabsVariant::Underline => "inline-flex items-center p-4 border-b-2 rounded-t-lg",
            TabsVariant::Pills => "inline-flex items-center px-4 py-3 rounded-lg",
        };
        let classes = ClassBuilder::new(base)
            .add_if(slot.is_expanded(), active.to_string())
            .add_if(!slot.is_expanded(), self.variant.inactive_classes())
            .merge(panel.extra_classes());

        let mut control = slot.wire_control(
            Element::new("button")
                .attr("type", "button")
                .class(classes),
        );
        if let Some(icon) = panel.icon() {
            control = control.child(
                Element::new("span")
                    .class("me-2")
                    .attr("aria-hidden", "true")
                    .child(scope.icons().render_icon(icon, IconSize::Sm)),
            );
        }

        Element::new("li")
            .class("me-2")
            .attr("role", "presentation")
            .child(control.child(panel.title()))
    }

    fn render_panel(&self, slot: &PanelSlot<'_>, scope: &RenderScope) -> Element {
        slot.wire_region(
            Element::new("div").class(
                ClassBuilder::new("p-4 rounded-lg bg-gray-50 dark:bg-gray-800")
                    .add_if(!slot.is_expanded(), HIDDEN_CLASS)
                    .build(),
            ),
        )
        .child(slot.panel().content().render(scope))
    }
}

impl Render for Tabs {
    fn render(&self, scope: &RenderScope) -> Markup {
        let palette = self.color.tokens();
        let active = ClassBuilder::new(match self.variant {
            TabsVariant::Underline => palette.tab_underline_active,
            TabsVariant::Pills => palette.tab_pill_active,
        })
        .add_opt(
            scope
                .theme()
                .color_override(self.color.key())
                .map(str::to_string),
        )
        .build();
        let container = &self.container;
        let content_id = container.ids().content();

        let strip = Element::new("ul")
            .id(container.base_id())
            .class("flex flex-wrap -mb-px text-sm font-medium text-center")
            .attr("role", "tablist")
            .attr("data-tabs-toggle", format!("#{content_id}"))
            .attr("data-tabs-active-classes", active.clone())
            .attr(
                "data-tabs-inactive-classes",
                self.variant.inactive_classes(),
            )
            .children(
                container
                    .slots()
                    .map(|slot| self.render_tab(&slot, scope, &active)),
            );

        let strip_wrapper = match self.variant {
            TabsVariant::Underline => ClassBuilder::new("mb-4 border-b border-gray-200")
                .add("dark:border-gray-700"),
            TabsVariant::Pills => ClassBuilder::new("mb-4"),
        };

        Element::new("div")
            .class(ClassBuilder::new("ui-tabs").merge(&self.class))
            .attr("data-ui-kind", DisclosureFamily::Tabs.token())
            .attr("data-ui-variant", self.variant.token())
            .child(
                Element::new("div")
                    .class(strip_wrapper.build())
                    .child(strip),
            )
            .child(
                Element::new("div")
                    .id(content_id)
                    .children(container.slots().map(|slot| self.render_panel(&slot, scope))),
            )
            .into()
    }
}

impl TabsBuilder {
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

    /// Sets the strip variant.
    pub fn variant(mut self, variant: TabsVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the selected-tab color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self.color_key = None;
        self
    }

    /// Sets the color from a configuration key, validated by [`TabsBuilder::build`].
    pub fn color_key(mut self, key: impl Into<String>) -> Self {
        self.color_key = Some(key.into());
        self
    }

    /// Uses an explicit base id instead of a generated one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Caller classes merged last into the root's class list.
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        self.class = classes.into();
        self
    }

    /// Validates props and builds the tabs.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyPanels`], [`ConstructionError::UnknownColor`], or
    /// [`ConstructionError::InvalidId`].
    pub fn build(self) -> Result<Tabs, ConstructionError> {
        let color = match self.color_key {
            Some(key) => key.parse()?,
            None => self.color,
        };
        let container = DisclosureContainer::new(
            DisclosureFamily::Tabs,
            DisclosureMode::SingleOpen,
            self.panels,
            self.id,
        )?;
        Ok(Tabs {
            container,
            variant: self.variant,
            color,
            class: self.class,
        })
    }
}
