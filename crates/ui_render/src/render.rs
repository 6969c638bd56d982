//! Render contract implemented by every widget.

use std::future::IntoFuture;

use crate::class::ClassBuilder;
use crate::markup::{Element, Markup};
use crate::scope::RenderScope;
use crate::theme::ColorScheme;

/// Pure conversion of an immutable widget value into a markup tree.
///
/// Implementations must not perform I/O and must not keep state between calls. Required props
/// are validated when the widget is constructed, so rendering cannot fail. Child widgets are
/// rendered with the same `scope` unless a subtree deliberately overrides the theme.
pub trait Render {
    /// Renders the widget under `scope`.
    fn render(&self, scope: &RenderScope) -> Markup;

    /// Renders and serializes to HTML.
    fn render_to_html(&self, scope: &RenderScope) -> String {
        self.render(scope).to_html()
    }
}

impl Render for Markup {
    fn render(&self, _scope: &RenderScope) -> Markup {
        self.clone()
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, scope: &RenderScope) -> Markup {
        (**self).render(scope)
    }
}

/// Awaits an upstream step that produces a widget (for example fetching panel content before
/// constructing the widget), then renders it synchronously.
///
/// # Errors
///
/// Returns the upstream error unchanged; rendering itself cannot fail.
pub async fn render_when_ready<W, E, F>(pending: F, scope: &RenderScope) -> Result<Markup, E>
where
    W: Render,
    F: IntoFuture<Output = Result<W, E>>,
{
    let widget = pending.await?;
    Ok(widget.render(scope))
}

/// Wraps rendered content in the page-level root that switches the CSS framework's dark
/// variants on or off.
///
/// This is the only place the snapshot's color scheme reaches a class string; widget-level
/// `dark:` tokens stay unconditional.
pub fn render_root(content: &impl Render, scope: &RenderScope) -> Markup {
    let scheme = scope.theme().color_scheme();
    let classes = match scheme {
        ColorScheme::Dark => ClassBuilder::new("ui-root").add("dark"),
        ColorScheme::Light => ClassBuilder::new("ui-root"),
    };
    Element::new("div")
        .class(classes.build())
        .attr("data-ui-color-scheme", scheme.token())
        .child(content.render(scope))
        .into()
}
