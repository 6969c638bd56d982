//! Rendering foundation for the server-rendered widget set.
//!
//! The crate owns the markup tree widgets emit, the deterministic class composition engine, the
//! render-scoped theme snapshot, the icon registry seam, and the [`Render`] contract. It knows
//! nothing about individual widgets; those live in `ui_widgets`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class;
mod icon;
mod markup;
mod render;
mod scope;
mod theme;

pub use class::ClassBuilder;
pub use icon::{BuiltinIcons, IconName, IconSet, IconSize};
pub use markup::{Attr, Element, Markup};
pub use render::{render_root, render_when_ready, Render};
pub use scope::{provide_render_scope, use_render_scope, RenderScope};
pub use theme::{ColorScheme, ThemeConfigError, ThemeSnapshot, DEFAULT_THEME};

/// Convenience imports for widget crates.
pub mod prelude {
    pub use crate::{
        ClassBuilder, ColorScheme, Element, IconName, IconSet, IconSize, Markup, Render,
        RenderScope, ThemeSnapshot,
    };
}
