use serde::{Deserialize, Serialize};
use ui_render::{ClassBuilder, Element, Markup, Render, RenderScope};

use crate::error::ConstructionError;
use crate::identity::InstanceId;

const LABEL_CLASSES: &str = "block mb-2 text-sm font-medium";
const INPUT_CLASSES: &str = "block w-full p-2.5 text-sm rounded-lg border";
const VALID_INPUT_CLASSES: &str = "bg-gray-50 border-gray-300 text-gray-900 focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";
const INVALID_INPUT_CLASSES: &str = "bg-red-50 border-red-500 text-red-900 placeholder-red-700 focus:ring-red-500 focus:border-red-500 dark:bg-gray-700 dark:text-red-500 dark:placeholder-red-500 dark:border-red-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Native `type` of a text input.
pub enum InputType {
    /// Free text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric input.
    Number,
    /// Search box.
    Search,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
}

impl InputType {
    /// `type` attribute value.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

#[derive(Debug, Clone)]
/// Labelled text input with optional help text and validation message.
pub struct TextField {
    id: InstanceId,
    name: String,
    label: String,
    input_type: InputType,
    value: Option<String>,
    placeholder: Option<String>,
    help: Option<String>,
    error: Option<String>,
    required: bool,
    disabled: bool,
    class: String,
}

impl TextField {
    /// Text input submitted as `name` and labelled `label`, with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLabel`] when the name or label is empty.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Result<Self, ConstructionError> {
        let name = name.into();
        let label = label.into();
        if name.trim().is_empty() {
            return Err(ConstructionError::EmptyLabel {
                widget: "text field",
                field: "name",
            });
        }
        if label.trim().is_empty() {
            return Err(ConstructionError::EmptyLabel {
                widget: "text field",
                field: "label",
            });
        }
        Ok(Self {
            id: InstanceId::generated("field"),
            name,
            label,
            input_type: InputType::default(),
            value: None,
            placeholder: None,
            help: None,
            error: None,
            required: false,
            disabled: false,
            class: String::new(),
        })
    }

    /// Uses an explicit id instead of the generated one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidId`] for an unusable id.
    pub fn with_id(mut self, id: impl Into<String>) -> Result<Self, ConstructionError> {
        self.id = InstanceId::explicit("field", id.into())?;
        Ok(self)
    }

    /// Sets the input type.
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Sets the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Adds help text below the input.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Marks the input invalid with a validation message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Marks the input required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Renders the input disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Caller classes merged last into the input's class list.
    pub fn with_class(mut self, classes: impl Into<String>) -> Self {
        self.class = classes.into();
        self
    }

    /// Input id.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns `true` when a validation message is set.
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    fn help_id(&self) -> String {
        format!("{}-help", self.id.as_str())
    }

    fn error_id(&self) -> String {
        format!("{}-error", self.id.as_str())
    }

    fn described_by(&self) -> Option<String> {
        let ids: Vec<String> = [
            self.help.as_ref().map(|_| self.help_id()),
            self.error.as_ref().map(|_| self.error_id()),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!ids.is_empty()).then(|| ids.join(" "))
    }
}

impl Render for TextField {
    fn render(&self, _scope: &RenderScope) -> Markup {
        let invalid = self.is_invalid();
        let label_classes = ClassBuilder::new(LABEL_CLASSES)
            .add_if(invalid, "text-red-700 dark:text-red-500")
            .add_if(!invalid, "text-gray-900 dark:text-white")
            .build();
        let input_classes = ClassBuilder::new(INPUT_CLASSES)
            .add_if(invalid, INVALID_INPUT_CLASSES)
            .add_if(!invalid, VALID_INPUT_CLASSES)
            .add_if(self.disabled, "cursor-not-allowed opacity-50")
            .merge(&self.class);

        let input = Element::new("input")
            .attr("type", self.input_type.token())
            .id(self.id.as_str())
            .attr("name", self.name.clone())
            .class(input_classes)
            .attr_opt("value", self.value.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .flag_if(self.required, "required")
            .flag_if(self.disabled, "disabled")
            .attr_opt("aria-invalid", invalid.then_some("true"))
            .attr_opt("aria-describedby", self.described_by());

        let mut field = Element::new("div")
            .class("mb-5")
            .attr("data-ui-kind", "text-field")
            .child(
                Element::new("label")
                    .attr("for", self.id.as_str())
                    .class(label_classes)
                    .child(self.label.as_str()),
            )
            .child(input);
        if let Some(help) = &self.help {
            field = field.child(
                Element::new("p")
                    .id(self.help_id())
                    .class("mt-2 text-sm text-gray-500 dark:text-gray-400")
                    .child(help.as_str()),
            );
        }
        if let Some(error) = &self.error {
            field = field.child(
                Element::new("p")
                    .id(self.error_id())
                    .class("mt-2 text-sm text-red-600 dark:text-red-500")
                    .child(error.as_str()),
            );
        }
        field.into()
    }
}
