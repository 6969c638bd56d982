use serde::{Deserialize, Serialize};
use ui_render::{ClassBuilder, Element, IconName, IconSize, Markup, Render, RenderScope};

use crate::error::ConstructionError;
use crate::hypermedia::HypermediaAction;
use crate::palette::{Color, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Button fill variants.
pub enum ButtonVariant {
    /// Filled background.
    #[default]
    Solid,
    /// Transparent background with a colored border.
    Outline,
}

impl ButtonVariant {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Native `type` of a button element.
pub enum ButtonType {
    /// Plain button.
    #[default]
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl ButtonType {
    /// `type` attribute value.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone)]
/// Shared button control.
pub struct Button {
    label: String,
    variant: ButtonVariant,
    color: Color,
    size: Size,
    kind: ButtonType,
    disabled: bool,
    icon: Option<IconName>,
    action: Option<HypermediaAction>,
    class: String,
}

impl Button {
    /// Solid blue medium button labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLabel`] when the label is empty or whitespace.
    pub fn new(label: impl Into<String>) -> Result<Self, ConstructionError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ConstructionError::EmptyLabel {
                widget: "button",
                field: "label",
            });
        }
        Ok(Self {
            label,
            variant: ButtonVariant::default(),
            color: Color::default(),
            size: Size::default(),
            kind: ButtonType::default(),
            disabled: false,
            icon: None,
            action: None,
            class: String::new(),
        })
    }

    /// Sets the fill variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the native `type`.
    pub fn with_type(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }

    /// Renders the button disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Adds a leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Issues a hypermedia request when the button is activated.
    pub fn with_action(mut self, action: HypermediaAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Caller classes merged last.
    pub fn with_class(mut self, classes: impl Into<String>) -> Self {
        self.class = classes.into();
        self
    }

    /// Button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` when the button renders disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Render for Button {
    fn render(&self, scope: &RenderScope) -> Markup {
        let palette = self.color.tokens();
        let classes = ClassBuilder::new(
            "inline-flex items-center justify-center font-medium rounded-lg text-center focus:ring-4 focus:outline-none",
        )
        .add(self.size.button_tokens())
        .add(match self.variant {
            ButtonVariant::Solid => palette.solid,
            ButtonVariant::Outline => palette.outline,
        })
        .add_opt(
            scope
                .theme()
                .color_override(self.color.key())
                .map(str::to_string),
        )
        .add_if(self.disabled, "cursor-not-allowed opacity-50")
        .merge(&self.class);

        let mut button = Element::new("button")
            .attr("type", self.kind.token())
            .class(classes)
            .attr("data-ui-kind", "button")
            .attr("data-ui-variant", self.variant.token())
            .attr("data-ui-color", self.color.key())
            .attr("data-ui-size", self.size.key())
            .flag_if(self.disabled, "disabled");
        if let Some(action) = &self.action {
            button = action.apply(button);
        }
        if let Some(icon) = self.icon {
            button = button.child(
                Element::new("span")
                    .class("me-2")
                    .attr("aria-hidden", "true")
                    .child(scope.icons().render_icon(icon, IconSize::Sm)),
            );
        }
        button.child(self.label.as_str()).into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_render::ThemeSnapshot;

    use super::*;
    use crate::hypermedia::{HttpMethod, Swap};

    fn render(button: &Button) -> Markup {
        button.render(&RenderScope::new())
    }

    #[test]
    fn empty_label_fails() {
        assert!(matches!(
            Button::new(" "),
            Err(ConstructionError::EmptyLabel {
                widget: "button",
                field: "label"
            })
        ));
    }

    #[test]
    fn renders_size_variant_and_color_tokens() {
        let markup = render(
            &Button::new("Save")
                .expect("button")
                .with_variant(ButtonVariant::Outline)
                .with_color(Color::Red)
                .with_size(Size::Lg)
                .with_type(ButtonType::Submit),
        );
        let el = markup.as_element().expect("button");

        assert_eq!(el.get_attr("type"), Some("submit"));
        assert!(el.has_class("text-base"));
        assert!(el.has_class("border-red-700"));
        assert!(!el.has_class("bg-red-700"));
        assert_eq!(markup.text_content(), "Save");
    }

    #[test]
    fn disabled_button_is_flagged_and_dimmed() {
        let markup = render(&Button::new("Wait").expect("button").disabled());
        let el = markup.as_element().expect("button");
        assert_eq!(el.get_attr("disabled"), Some(""));
        assert!(el.has_class("opacity-50"));
    }

    #[test]
    fn action_sets_request_attributes_without_toggle_hook() {
        let action = HypermediaAction::new(HttpMethod::Post, "/cart")
            .expect("action")
            .with_swap(Swap::OuterHtml)
            .with_target("#cart");
        let markup = render(&Button::new("Add").expect("button").with_action(action));
        let el = markup.as_element().expect("button");

        assert_eq!(el.get_attr("hx-post"), Some("/cart"));
        assert_eq!(el.get_attr("hx-swap"), Some("outerHTML"));
        assert_eq!(el.get_attr("hx-target"), Some("#cart"));
        assert!(crate::hypermedia::verify_coexistence(&markup).is_ok());
    }

    #[test]
    fn caller_classes_and_theme_overrides_come_after_palette() {
        let button = Button::new("Go").expect("button").with_class("w-full");
        let scope = RenderScope::new()
            .with_theme(ThemeSnapshot::dark().with_color_override("blue", "shadow-lg"));
        let markup = button.render(&scope);
        let tokens: Vec<&str> = markup
            .as_element()
            .expect("button")
            .class_tokens()
            .collect();

        assert_eq!(tokens.last(), Some(&"w-full"));
        let palette_at = tokens.iter().position(|t| *t == "bg-blue-700").expect("palette");
        let override_at = tokens.iter().position(|t| *t == "shadow-lg").expect("override");
        assert!(palette_at < override_at);
    }
}
