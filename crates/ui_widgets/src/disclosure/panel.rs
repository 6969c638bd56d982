use ui_render::{Element, IconName, Markup, Render, RenderScope};

use crate::error::ConstructionError;
use crate::hypermedia::HypermediaFetch;
use crate::widget::Widget;

#[derive(Debug, Clone)]
/// Body of a disclosure panel: ready markup or a nested widget rendered with the same scope.
pub enum PanelContent {
    /// Pre-built markup or plain text.
    Markup(Markup),
    /// Nested widget.
    Widget(Box<Widget>),
}

impl PanelContent {
    pub(crate) fn render(&self, scope: &RenderScope) -> Markup {
        match self {
            Self::Markup(markup) => markup.clone(),
            Self::Widget(widget) => widget.render(scope),
        }
    }
}

impl From<&str> for PanelContent {
    fn from(text: &str) -> Self {
        Self::Markup(Markup::text(text))
    }
}

impl From<String> for PanelContent {
    fn from(text: String) -> Self {
        Self::Markup(Markup::text(text))
    }
}

impl From<Markup> for PanelContent {
    fn from(markup: Markup) -> Self {
        Self::Markup(markup)
    }
}

impl From<Element> for PanelContent {
    fn from(element: Element) -> Self {
        Self::Markup(element.into())
    }
}

impl From<Widget> for PanelContent {
    fn from(widget: Widget) -> Self {
        Self::Widget(Box::new(widget))
    }
}

#[derive(Debug, Clone)]
/// One heading/content pair of a disclosure container. Immutable once built.
pub struct Panel {
    title: String,
    content: PanelContent,
    open_by_default: bool,
    icon: Option<IconName>,
    fetch: Option<HypermediaFetch>,
    extra_classes: String,
}

impl Panel {
    /// Panel titled `title`, collapsed by default.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLabel`] when the title is empty or whitespace.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<PanelContent>,
    ) -> Result<Self, ConstructionError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ConstructionError::EmptyLabel {
                widget: "panel",
                field: "title",
            });
        }
        Ok(Self {
            title,
            content: content.into(),
            open_by_default: false,
            icon: None,
            fetch: None,
            extra_classes: String::new(),
        })
    }

    /// Marks the panel open when the page first renders.
    pub fn opened(mut self) -> Self {
        self.open_by_default = true;
        self
    }

    /// Sets whether the panel is open when the page first renders.
    pub fn with_open_by_default(mut self, open: bool) -> Self {
        self.open_by_default = open;
        self
    }

    /// Replaces the default heading indicator glyph.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Loads the content region lazily when it is revealed.
    pub fn with_fetch(mut self, fetch: HypermediaFetch) -> Self {
        self.fetch = Some(fetch);
        self
    }

    /// Caller classes merged last into the heading control's class list.
    pub fn with_class(mut self, classes: impl Into<String>) -> Self {
        self.extra_classes = classes.into();
        self
    }

    /// Heading title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content region body.
    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    /// Whether the panel asks to be open on first render.
    pub fn is_open_by_default(&self) -> bool {
        self.open_by_default
    }

    /// Custom indicator glyph, if any.
    pub fn icon(&self) -> Option<IconName> {
        self.icon
    }

    /// Lazy fetch attached to the content region, if any.
    pub fn fetch(&self) -> Option<&HypermediaFetch> {
        self.fetch.as_ref()
    }

    /// Caller classes for the heading control.
    pub fn extra_classes(&self) -> &str {
        &self.extra_classes
    }
}
