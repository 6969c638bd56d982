use ui_render::{ClassBuilder, Element, IconName, IconSize, Markup, Render, RenderScope};

use crate::error::ConstructionError;
use crate::identity::InstanceId;
use crate::palette::Color;

/// Toggle hook read by the toggle runtime to remove the target element.
pub const DISMISS_TARGET_ATTR: &str = "data-dismiss-target";

/// Close control removing the element with id `target_id`.
pub(crate) fn dismiss_button(target_id: &str, classes: &str, scope: &RenderScope) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class(
            ClassBuilder::new(
                "ms-auto -mx-1.5 -my-1.5 rounded-lg focus:ring-2 p-1.5 inline-flex items-center justify-center h-8 w-8",
            )
            .add(classes.to_string())
            .build(),
        )
        .attr(DISMISS_TARGET_ATTR, format!("#{target_id}"))
        .attr("aria-label", "Close")
        .child(Element::new("span").class("sr-only").child("Close"))
        .child(scope.icons().render_icon(IconName::Close, IconSize::Xs))
}

#[derive(Debug, Clone)]
/// Inline status message on a tinted surface.
pub struct Alert {
    id: InstanceId,
    message: String,
    title: Option<String>,
    color: Color,
    icon: IconName,
    dismissible: bool,
    class: String,
}

impl Alert {
    /// Blue informational alert with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLabel`] when the message is empty or whitespace.
    pub fn new(message: impl Into<String>) -> Result<Self, ConstructionError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ConstructionError::EmptyLabel {
                widget: "alert",
                field: "message",
            });
        }
        Ok(Self {
            id: InstanceId::generated("alert"),
            message,
            title: None,
            color: Color::default(),
            icon: IconName::Info,
            dismissible: false,
            class: String::new(),
        })
    }

    /// Uses an explicit id instead of the generated one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidId`] for an unusable id.
    pub fn with_id(mut self, id: impl Into<String>) -> Result<Self, ConstructionError> {
        self.id = InstanceId::explicit("alert", id.into())?;
        Ok(self)
    }

    /// Adds a bold lead-in before the message.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into()).filter(|title: &String| !title.trim().is_empty());
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replaces the leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = icon;
        self
    }

    /// Adds a close control removing the alert.
    pub fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    /// Caller classes merged last.
    pub fn with_class(mut self, classes: impl Into<String>) -> Self {
        self.class = classes.into();
        self
    }

    /// Element id, also the dismiss target.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Render for Alert {
    fn render(&self, scope: &RenderScope) -> Markup {
        let palette = self.color.tokens();
        let classes = ClassBuilder::new("flex items-center p-4 mb-4 text-sm rounded-lg")
            .add(palette.soft)
            .add_opt(
                scope
                    .theme()
                    .color_override(self.color.key())
                    .map(str::to_string),
            )
            .merge(&self.class);

        let mut body = Element::new("div").class("ms-3");
        if let Some(title) = &self.title {
            body = body
                .child(Element::new("span").class("font-medium").child(title.as_str()))
                .child(" ");
        }
        body = body.child(self.message.as_str());

        let alert = Element::new("div")
            .id(self.id.as_str())
            .class(classes)
            .attr("role", "alert")
            .attr("data-ui-kind", "alert")
            .attr("data-ui-color", self.color.key())
            .child(
                Element::new("span")
                    .class("shrink-0")
                    .attr("aria-hidden", "true")
                    .child(scope.icons().render_icon(self.icon, IconSize::Sm)),
            )
            .child(body);

        if self.dismissible {
            alert
                .child(dismiss_button(self.id.as_str(), palette.dismiss, scope))
                .into()
        } else {
            alert.into()
        }
    }
}
