//! Closed set of renderable widgets, used for nesting and for hosting inside Leptos views.

use std::sync::Arc;

use ui_render::{Element, Markup, Render, RenderScope, ThemeSnapshot};

use crate::accordion::Accordion;
use crate::alert::Alert;
use crate::button::Button;
use crate::tabs::Tabs;
use crate::text_field::TextField;
use crate::toast::Toast;

#[derive(Debug, Clone)]
/// Any widget in the set.
pub enum Widget {
    /// Accordion disclosure widget.
    Accordion(Accordion),
    /// Tabs disclosure widget.
    Tabs(Tabs),
    /// Button control.
    Button(Button),
    /// Inline alert.
    Alert(Alert),
    /// Toast notification.
    Toast(Toast),
    /// Text input.
    TextField(TextField),
    /// Several widgets rendered in order under the same scope.
    Group(Vec<Widget>),
    /// Subtree rendered under its own theme snapshot instead of the caller's.
    Scoped {
        /// Snapshot replacing the caller's theme for `child`.
        theme: Arc<ThemeSnapshot>,
        /// Widget rendered under `theme`.
        child: Box<Widget>,
    },
}

impl Widget {
    /// Wraps `child` so it renders under `theme`.
    pub fn scoped(theme: ThemeSnapshot, child: impl Into<Widget>) -> Self {
        Self::Scoped {
            theme: Arc::new(theme),
            child: Box::new(child.into()),
        }
    }

    /// Stable kind token, matching the `data-ui-kind` attribute of the rendered root.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Accordion(_) => "accordion",
            Self::Tabs(_) => "tabs",
            Self::Button(_) => "button",
            Self::Alert(_) => "alert",
            Self::Toast(_) => "toast",
            Self::TextField(_) => "text-field",
            Self::Group(_) => "group",
            Self::Scoped { .. } => "scoped",
        }
    }
}

impl Render for Widget {
    fn render(&self, scope: &RenderScope) -> Markup {
        match self {
            Self::Accordion(widget) => widget.render(scope),
            Self::Tabs(widget) => widget.render(scope),
            Self::Button(widget) => widget.render(scope),
            Self::Alert(widget) => widget.render(scope),
            Self::Toast(widget) => widget.render(scope),
            Self::TextField(widget) => widget.render(scope),
            Self::Group(widgets) => Markup::fragment(widgets.iter().map(|w| w.render(scope))),
            Self::Scoped { theme, child } => {
                let scope = scope.with_shared_theme(Arc::clone(theme));
                Element::new("div")
                    .attr("data-ui-kind", "scoped")
                    .attr(
                        "data-ui-color-scheme",
                        scope.theme().color_scheme().token(),
                    )
                    .child(child.render(&scope))
                    .into()
            }
        }
    }
}

macro_rules! widget_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Widget {
                fn from(widget: $variant) -> Self {
                    Self::$variant(widget)
                }
            }
        )*
    };
}

widget_from!(Accordion, Tabs, Button, Alert, Toast, TextField);

impl From<Vec<Widget>> for Widget {
    fn from(widgets: Vec<Widget>) -> Self {
        Self::Group(widgets)
    }
}
