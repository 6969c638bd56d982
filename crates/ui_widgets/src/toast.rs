use ui_render::{ClassBuilder, Element, IconName, IconSize, Markup, Render, RenderScope};

use crate::alert::dismiss_button;
use crate::error::ConstructionError;
use crate::identity::InstanceId;
use crate::palette::Color;

const TOAST_DISMISS_CLASSES: &str = "bg-white text-gray-400 hover:text-gray-900 focus:ring-gray-300 hover:bg-gray-100 dark:text-gray-500 dark:hover:text-white dark:bg-gray-800 dark:hover:bg-gray-700";

#[derive(Debug, Clone)]
/// Transient notification card with an icon badge.
pub struct Toast {
    id: InstanceId,
    message: String,
    icon: IconName,
    color: Color,
    dismissible: bool,
    class: String,
}

impl Toast {
    /// Dismissible green success toast with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLabel`] when the message is empty or whitespace.
    pub fn new(message: impl Into<String>) -> Result<Self, ConstructionError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ConstructionError::EmptyLabel {
                widget: "toast",
                field: "message",
            });
        }
        Ok(Self {
            id: InstanceId::generated("toast"),
            message,
            icon: IconName::Check,
            color: Color::Green,
            dismissible: true,
            class: String::new(),
        })
    }

    /// Uses an explicit id instead of the generated one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidId`] for an unusable id.
    pub fn with_id(mut self, id: impl Into<String>) -> Result<Self, ConstructionError> {
        self.id = InstanceId::explicit("toast", id.into())?;
        Ok(self)
    }

    /// Sets the badge icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the badge color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Removes the close control.
    pub fn persistent(mut self) -> Self {
        self.dismissible = false;
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

impl Render for Toast {
    fn render(&self, scope: &RenderScope) -> Markup {
        let badge = ClassBuilder::new("inline-flex items-center justify-center shrink-0 w-8 h-8 rounded-lg")
            .add(self.color.tokens().badge)
            .add_opt(
                scope
                    .theme()
                    .color_override(self.color.key())
                    .map(str::to_string),
            )
            .build();

        let toast = Element::new("div")
            .id(self.id.as_str())
            .class(
                ClassBuilder::new(
                    "flex items-center w-full max-w-xs p-4 text-gray-500 bg-white rounded-lg shadow-sm",
                )
                .add("dark:text-gray-400 dark:bg-gray-800")
                .merge(&self.class),
            )
            .attr("role", "alert")
            .attr("data-ui-kind", "toast")
            .attr("data-ui-color", self.color.key())
            .child(
                Element::new("div")
                    .class(badge)
                    .attr("aria-hidden", "true")
                    .child(scope.icons().render_icon(self.icon, IconSize::Sm)),
            )
            .child(
                Element::new("div")
                    .class("ms-3 text-sm font-normal")
                    .child(self.message.as_str()),
            );

        if self.dismissible {
            toast
                .child(dismiss_button(self.id.as_str(), TOAST_DISMISS_CLASSES, scope))
                .into()
        } else {
            toast.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::alert::DISMISS_TARGET_ATTR;

    #[test]
    fn message_is_required() {
        assert!(Toast::new("  ").is_err());
    }

    #[test]
    fn default_toast_is_dismissible_and_uses_success_badge() {
        let toast = Toast::new("Item moved.").expect("toast");
        let markup = toast.render(&RenderScope::new());

        let close = markup
            .find_all(|el| el.has_attr(DISMISS_TARGET_ATTR))
            .pop()
            .expect("close");
        assert_eq!(
            close.get_attr(DISMISS_TARGET_ATTR),
            Some(format!("#{}", toast.id()).as_str())
        );
        assert!(!markup
            .find_all(|el| el.has_class("bg-green-100"))
            .is_empty());
    }

    #[test]
    fn persistent_toast_has_no_close_control() {
        let markup = Toast::new("Uploading")
            .expect("toast")
            .persistent()
            .render(&RenderScope::new());
        assert!(markup.find_all(|el| el.tag() == "button").is_empty());
        assert!(markup.text_content().contains("Uploading"));
    }

    #[test]
    fn explicit_id_is_used_as_dismiss_target() {
        let toast = Toast::new("Done")
            .expect("toast")
            .with_id("done-toast")
            .expect("id")
            .with_color(Color::Red)
            .with_icon(IconName::Error);
        let markup = toast.render(&RenderScope::new());
        assert!(markup.find_by_id("done-toast").is_some());
        assert!(markup.to_html().contains("data-dismiss-target=\"#done-toast\""));
    }
}
