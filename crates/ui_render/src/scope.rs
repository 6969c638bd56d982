//! Render scope threaded through every widget render call.
//!
//! A [`RenderScope`] carries the shared, read-only [`ThemeSnapshot`] and the icon registry for
//! one render pass. Children receive the same scope unless a subtree explicitly overrides the
//! theme with [`RenderScope::with_theme`]. Leptos hosts can also publish the scope through
//! reactive context with [`provide_render_scope`].

use std::{fmt, sync::Arc};

use leptos::{provide_context, use_context};

use crate::icon::{BuiltinIcons, IconSet};
use crate::theme::{ThemeSnapshot, DEFAULT_THEME};

#[derive(Clone, Default)]
/// Theme and icon registry visible to a render pass.
pub struct RenderScope {
    theme: Option<Arc<ThemeSnapshot>>,
    icons: Option<Arc<dyn IconSet>>,
}

impl fmt::Debug for RenderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScope")
            .field("theme", &self.theme)
            .field("custom_icons", &self.icons.is_some())
            .finish()
    }
}

impl RenderScope {
    /// Scope with the default theme and built-in icons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope for a subtree rendered under `theme`. The icon registry is kept.
    pub fn with_theme(&self, theme: ThemeSnapshot) -> Self {
        self.with_shared_theme(Arc::new(theme))
    }

    /// Same as [`RenderScope::with_theme`] for a snapshot already shared with other scopes.
    pub fn with_shared_theme(&self, theme: Arc<ThemeSnapshot>) -> Self {
        Self {
            theme: Some(theme),
            icons: self.icons.clone(),
        }
    }

    /// Scope using a custom icon registry. The theme is kept.
    pub fn with_icons(&self, icons: Arc<dyn IconSet>) -> Self {
        Self {
            theme: self.theme.clone(),
            icons: Some(icons),
        }
    }

    /// Resolves the theme snapshot, falling back to [`DEFAULT_THEME`] when none was provided.
    ///
    /// Widgets resolve once at the top of `render` and reuse the reference for every
    /// sub-element.
    pub fn theme(&self) -> &ThemeSnapshot {
        self.theme.as_deref().unwrap_or(&DEFAULT_THEME)
    }

    /// Icon registry for this scope.
    pub fn icons(&self) -> &dyn IconSet {
        match &self.icons {
            Some(icons) => icons.as_ref(),
            None => &BuiltinIcons,
        }
    }

    /// Returns `true` when both scopes reference the same snapshot allocation.
    pub fn shares_theme_with(&self, other: &RenderScope) -> bool {
        match (&self.theme, &other.theme) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Publishes `scope` to descendant Leptos components.
pub fn provide_render_scope(scope: RenderScope) {
    provide_context(scope);
}

/// Returns the nearest [`RenderScope`] from Leptos context, or the default scope.
pub fn use_render_scope() -> RenderScope {
    use_context::<RenderScope>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::icon::{IconName, IconSize};
    use crate::markup::Markup;
    use crate::theme::ColorScheme;

    use super::*;

    struct TextIcons;

    impl IconSet for TextIcons {
        fn render_icon(&self, icon: IconName, _size: IconSize) -> Markup {
            Markup::text(icon.token())
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn missing_theme_resolves_to_default_snapshot() {
        let scope = RenderScope::new();
        assert_eq!(scope.theme(), &DEFAULT_THEME);
        assert_eq!(scope.theme().color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn subtree_override_keeps_icons_and_leaves_parent_untouched() {
        let parent = RenderScope::new().with_icons(Arc::new(TextIcons));
        let child = parent.with_theme(ThemeSnapshot::dark());

        assert_eq!(parent.theme().color_scheme(), ColorScheme::Light);
        assert_eq!(child.theme().color_scheme(), ColorScheme::Dark);
        assert_eq!(
            child
                .icons()
                .render_icon(IconName::Close, IconSize::Sm)
                .text_content(),
            "close"
        );
    }

    #[test]
    fn clones_share_one_snapshot_by_reference() {
        let scope = RenderScope::new().with_theme(ThemeSnapshot::dark());
        let copy = scope.clone();
        assert!(scope.shares_theme_with(&copy));
        assert!(!scope.shares_theme_with(&scope.with_theme(ThemeSnapshot::dark())));
    }

    #[test]
    fn scope_is_shareable_across_threads() {
        assert_send_sync::<RenderScope>();
    }

    #[test]
    fn leptos_context_falls_back_to_default_scope() {
        let runtime = leptos::create_runtime();
        let scope = use_render_scope();
        assert_eq!(scope.theme(), &DEFAULT_THEME);
        runtime.dispose();
    }
}
