//! Icon vocabulary and the registry seam that turns icon symbols into markup.

use serde::{Deserialize, Serialize};

use crate::markup::{Element, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon identifiers used by widgets.
pub enum IconName {
    /// Expand/collapse chevron, the default disclosure indicator.
    ChevronDown,
    /// Dismiss/close glyph.
    Close,
    /// Informational glyph.
    Info,
    /// Success checkmark.
    Check,
    /// Warning triangle.
    Warning,
    /// Error/danger glyph.
    Error,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::Close => "close",
            Self::Info => "info",
            Self::Check => "check",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    fn builtin_svg_body(self) -> &'static str {
        match self {
            Self::ChevronDown => {
                r#"<path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" fill="none" d="M9 5 5 1 1 5"/>"#
            }
            Self::Close => {
                r#"<path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" fill="none" d="m1 1 6 6m0 0 6 6M7 7l6-6M7 7l-6 6"/>"#
            }
            Self::Info => {
                r#"<path d="M10 .5a9.5 9.5 0 1 0 9.5 9.5A9.51 9.51 0 0 0 10 .5ZM9.5 4a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3ZM12 15H8a1 1 0 0 1 0-2h1v-3H8a1 1 0 0 1 0-2h2a1 1 0 0 1 1 1v4h1a1 1 0 0 1 0 2Z"/>"#
            }
            Self::Check => {
                r#"<path d="M10 .5a9.5 9.5 0 1 0 9.5 9.5A9.51 9.51 0 0 0 10 .5Zm3.707 8.207-4 4a1 1 0 0 1-1.414 0l-2-2a1 1 0 0 1 1.414-1.414L9 10.586l3.293-3.293a1 1 0 0 1 1.414 1.414Z"/>"#
            }
            Self::Warning => {
                r#"<path d="M10 .5a9.5 9.5 0 1 0 9.5 9.5A9.51 9.51 0 0 0 10 .5ZM10 15a1 1 0 1 1 0-2 1 1 0 0 1 0 2Zm1-4a1 1 0 0 1-2 0V6a1 1 0 0 1 2 0v5Z"/>"#
            }
            Self::Error => {
                r#"<path d="M10 .5a9.5 9.5 0 1 0 9.5 9.5A9.51 9.51 0 0 0 10 .5Zm3.707 11.793a1 1 0 1 1-1.414 1.414L10 11.414l-2.293 2.293a1 1 0 0 1-1.414-1.414L8.586 10 6.293 7.707a1 1 0 0 1 1.414-1.414L10 8.586l2.293-2.293a1 1 0 0 1 1.414 1.414L11.414 10l2.293 2.293Z"/>"#
            }
        }
    }

    fn builtin_view_box(self) -> &'static str {
        match self {
            Self::ChevronDown => "0 0 10 6",
            Self::Close => "0 0 14 14",
            Self::Info | Self::Check | Self::Warning | Self::Error => "0 0 20 20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Standardized icon sizes.
pub enum IconSize {
    /// Extra-small glyph.
    Xs,
    /// Small glyph.
    #[default]
    Sm,
    /// Medium glyph.
    Md,
    /// Large glyph.
    Lg,
}

impl IconSize {
    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Utility classes sizing the glyph box.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Xs => "w-3 h-3",
            Self::Sm => "w-4 h-4",
            Self::Md => "w-5 h-5",
            Self::Lg => "w-6 h-6",
        }
    }
}

/// Icon registry consumed by widgets as an opaque symbol-to-markup function.
///
/// Implementations must be pure; the same registry is shared by concurrent renders.
pub trait IconSet: Send + Sync {
    /// Renders `icon` at `size`.
    fn render_icon(&self, icon: IconName, size: IconSize) -> Markup;
}

#[derive(Debug, Clone, Copy, Default)]
/// Built-in inline SVG icon set.
pub struct BuiltinIcons;

impl IconSet for BuiltinIcons {
    fn render_icon(&self, icon: IconName, size: IconSize) -> Markup {
        Element::new("svg")
            .class(size.classes())
            .attr("data-icon", icon.token())
            .attr("data-size", size.token())
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", icon.builtin_view_box())
            .attr("fill", "currentColor")
            .attr("focusable", "false")
            .attr("aria-hidden", "true")
            .child(Markup::raw(icon.builtin_svg_body()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_icons_are_decorative_svgs() {
        let markup = BuiltinIcons.render_icon(IconName::ChevronDown, IconSize::Xs);
        let svg = markup.as_element().expect("svg element");

        assert_eq!(svg.tag(), "svg");
        assert_eq!(svg.get_attr("aria-hidden"), Some("true"));
        assert_eq!(svg.get_attr("data-icon"), Some("chevron-down"));
        assert!(svg.has_class("w-3"));
        assert!(markup.to_html().contains("<path"));
    }

    #[test]
    fn every_icon_has_a_distinct_token() {
        let all = [
            IconName::ChevronDown,
            IconName::Close,
            IconName::Info,
            IconName::Check,
            IconName::Warning,
            IconName::Error,
        ];
        let mut tokens: Vec<&str> = all.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), all.len());
    }
}
