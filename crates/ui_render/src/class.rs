//! Deterministic class-attribute composition.
//!
//! A [`ClassBuilder`] accumulates class fragments in call order: the base fragment, then every
//! `add`/`add_if` fragment, then the caller's override passed to [`ClassBuilder::merge`]. Tokens
//! are never removed, reordered, or deduplicated; the browser's class parser is idempotent and
//! the CSS layer decides precedence.
//!
//! Dark-variant tokens (`dark:*`) always go through [`ClassBuilder::add`]. Whether they apply is
//! decided by the CSS framework at runtime, not by the theme snapshot seen during rendering.

use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fluent accumulator of class fragments.
pub struct ClassBuilder {
    fragments: Vec<Cow<'static, str>>,
}

impl ClassBuilder {
    /// Starts a builder from the base fragment. A fragment may hold several space-separated tokens.
    pub fn new(base: impl Into<Cow<'static, str>>) -> Self {
        Self {
            fragments: vec![base.into()],
        }
    }

    /// Appends a fragment unconditionally.
    pub fn add(mut self, fragment: impl Into<Cow<'static, str>>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Appends a fragment only when `condition` holds. A false condition is a no-op.
    ///
    /// Conditions are widget state (first panel, initially expanded, disabled, ...). Never pass the
    /// theme's color scheme here; dark tokens are unconditional.
    pub fn add_if(self, condition: bool, fragment: impl Into<Cow<'static, str>>) -> Self {
        if condition {
            self.add(fragment)
        } else {
            self
        }
    }

    /// Appends an optional fragment when present.
    pub fn add_opt(self, fragment: Option<impl Into<Cow<'static, str>>>) -> Self {
        match fragment {
            Some(fragment) => self.add(fragment),
            None => self,
        }
    }

    /// Iterates the accumulated tokens in output order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
    }

    /// Joins the accumulated tokens with single spaces.
    pub fn build(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }

    /// Terminal operation: appends `user_override` as the last, highest-precedence layer and
    /// returns the joined class string.
    ///
    /// The builder is consumed, so an override cannot be merged twice into the same builder.
    /// Layering several overrides means cloning the builder or calling [`ClassBuilder::add`]
    /// for all but the last one; each is appended, none replaces another. An empty override
    /// yields the same string as [`ClassBuilder::build`].
    pub fn merge(self, user_override: &str) -> String {
        self.add(user_override.to_string()).build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_keep_call_order_and_skip_false_conditions() {
        let classes = ClassBuilder::new("flex items-center")
            .add("p-5")
            .add_if(false, "rounded-t-xl")
            .add_if(true, "border-b-0")
            .add("dark:border-gray-700")
            .merge("my-custom");

        assert_eq!(
            classes,
            "flex items-center p-5 border-b-0 dark:border-gray-700 my-custom"
        );
    }

    #[test]
    fn empty_override_matches_build_without_merge() {
        let builder = ClassBuilder::new("a").add("b").add_if(true, "c");
        assert_eq!(builder.clone().merge(""), builder.build());
        assert_eq!(builder.clone().merge("   "), builder.build());
    }

    #[test]
    fn duplicates_are_kept_and_whitespace_is_normalized() {
        let classes = ClassBuilder::new("  p-4   p-4 ").add("\tborder\n").merge("p-4");
        assert_eq!(classes, "p-4 p-4 border p-4");
    }

    #[test]
    fn layered_overrides_are_appended_never_replaced() {
        let base = ClassBuilder::new("text-sm");
        let first = base.clone().merge("text-lg");
        let layered = base.add("text-lg").merge("text-xl");

        assert_eq!(first, "text-sm text-lg");
        assert_eq!(layered, "text-sm text-lg text-xl");
    }

    #[test]
    fn optional_fragment_is_appended_only_when_present() {
        let none: Option<&'static str> = None;
        let classes = ClassBuilder::new("a").add_opt(none).add_opt(Some("b")).build();
        assert_eq!(classes, "a b");
    }

    #[test]
    fn empty_builder_produces_empty_string() {
        assert_eq!(ClassBuilder::default().merge(""), "");
    }
}
