//! Color and size vocabularies and their class lookup tables.
//!
//! Every class string is spelled out in full so the CSS framework's source scanner can see it.
//! Tables never fall back: a key missing from the vocabulary fails at construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Closed color vocabulary shared by all widgets.
pub enum Color {
    /// Brand/primary color.
    #[default]
    Blue,
    /// Neutral color.
    Gray,
    /// Success color.
    Green,
    /// Danger color.
    Red,
    /// Warning color.
    Yellow,
}

impl Color {
    /// Every color in declaration order.
    pub const ALL: [Color; 5] = [
        Color::Blue,
        Color::Gray,
        Color::Green,
        Color::Red,
        Color::Yellow,
    ];

    /// Stable key used in configuration and theme color overrides.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }

    pub(crate) const fn tokens(self) -> &'static ColorTokens {
        match self {
            Self::Blue => &BLUE,
            Self::Gray => &GRAY,
            Self::Green => &GREEN,
            Self::Red => &RED,
            Self::Yellow => &YELLOW,
        }
    }
}

impl FromStr for Color {
    type Err = ConstructionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.key() == raw)
            .ok_or_else(|| ConstructionError::UnknownColor(raw.to_string()))
    }
}

/// Color-dependent token subsets. Layout tokens never live here.
pub(crate) struct ColorTokens {
    /// Expanded disclosure heading, bordered variant.
    pub disclosure_active: &'static str,
    /// Expanded disclosure heading, flush variant.
    pub disclosure_flush_active: &'static str,
    /// Hover tokens for disclosure headings.
    pub disclosure_hover: &'static str,
    /// Focus ring for disclosure headings.
    pub disclosure_focus: &'static str,
    /// Selected tab, underline variant.
    pub tab_underline_active: &'static str,
    /// Selected tab, pills variant.
    pub tab_pill_active: &'static str,
    /// Filled button.
    pub solid: &'static str,
    /// Outlined button.
    pub outline: &'static str,
    /// Tinted surface for alerts.
    pub soft: &'static str,
    /// Dismiss control sitting on a tinted surface.
    pub dismiss: &'static str,
    /// Icon badge for toasts.
    pub badge: &'static str,
}

const BLUE: ColorTokens = ColorTokens {
    disclosure_active: "bg-blue-100 text-blue-600 dark:bg-gray-800 dark:text-white",
    disclosure_flush_active: "text-blue-600 dark:text-blue-500",
    disclosure_hover: "hover:bg-blue-100 dark:hover:bg-gray-800",
    disclosure_focus: "focus:ring-4 focus:ring-blue-200 dark:focus:ring-blue-800",
    tab_underline_active: "text-blue-600 border-blue-600 dark:text-blue-500 dark:border-blue-500",
    tab_pill_active: "text-white bg-blue-600 dark:bg-blue-500",
    solid: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800",
    outline: "text-blue-700 border border-blue-700 hover:text-white hover:bg-blue-800 focus:ring-blue-300 dark:border-blue-500 dark:text-blue-500 dark:hover:text-white dark:hover:bg-blue-500 dark:focus:ring-blue-800",
    soft: "text-blue-800 bg-blue-50 dark:bg-gray-800 dark:text-blue-400",
    dismiss: "bg-blue-50 text-blue-500 focus:ring-blue-400 hover:bg-blue-200 dark:bg-gray-800 dark:text-blue-400 dark:hover:bg-gray-700",
    badge: "text-blue-500 bg-blue-100 dark:bg-blue-800 dark:text-blue-200",
};

const GRAY: ColorTokens = ColorTokens {
    disclosure_active: "bg-gray-100 text-gray-900 dark:bg-gray-800 dark:text-white",
    disclosure_flush_active: "text-gray-900 dark:text-white",
    disclosure_hover: "hover:bg-gray-100 dark:hover:bg-gray-800",
    disclosure_focus: "focus:ring-4 focus:ring-gray-200 dark:focus:ring-gray-800",
    tab_underline_active: "text-gray-900 border-gray-900 dark:text-white dark:border-white",
    tab_pill_active: "text-white bg-gray-800 dark:bg-gray-600",
    solid: "text-white bg-gray-800 hover:bg-gray-900 focus:ring-gray-300 dark:bg-gray-800 dark:hover:bg-gray-700 dark:focus:ring-gray-700",
    outline: "text-gray-900 border border-gray-800 hover:text-white hover:bg-gray-900 focus:ring-gray-300 dark:border-gray-600 dark:text-gray-400 dark:hover:text-white dark:hover:bg-gray-600 dark:focus:ring-gray-800",
    soft: "text-gray-800 bg-gray-50 dark:bg-gray-800 dark:text-gray-300",
    dismiss: "bg-gray-50 text-gray-500 focus:ring-gray-400 hover:bg-gray-200 dark:bg-gray-800 dark:text-gray-300 dark:hover:bg-gray-700",
    badge: "text-gray-500 bg-gray-100 dark:bg-gray-700 dark:text-gray-200",
};

const GREEN: ColorTokens = ColorTokens {
    disclosure_active: "bg-green-100 text-green-700 dark:bg-gray-800 dark:text-white",
    disclosure_flush_active: "text-green-700 dark:text-green-500",
    disclosure_hover: "hover:bg-green-100 dark:hover:bg-gray-800",
    disclosure_focus: "focus:ring-4 focus:ring-green-200 dark:focus:ring-green-800",
    tab_underline_active: "text-green-700 border-green-700 dark:text-green-500 dark:border-green-500",
    tab_pill_active: "text-white bg-green-700 dark:bg-green-600",
    solid: "text-white bg-green-700 hover:bg-green-800 focus:ring-green-300 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800",
    outline: "text-green-700 border border-green-700 hover:text-white hover:bg-green-800 focus:ring-green-300 dark:border-green-500 dark:text-green-500 dark:hover:text-white dark:hover:bg-green-600 dark:focus:ring-green-800",
    soft: "text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400",
    dismiss: "bg-green-50 text-green-500 focus:ring-green-400 hover:bg-green-200 dark:bg-gray-800 dark:text-green-400 dark:hover:bg-gray-700",
    badge: "text-green-500 bg-green-100 dark:bg-green-800 dark:text-green-200",
};

const RED: ColorTokens = ColorTokens {
    disclosure_active: "bg-red-100 text-red-700 dark:bg-gray-800 dark:text-white",
    disclosure_flush_active: "text-red-700 dark:text-red-500",
    disclosure_hover: "hover:bg-red-100 dark:hover:bg-gray-800",
    disclosure_focus: "focus:ring-4 focus:ring-red-200 dark:focus:ring-red-900",
    tab_underline_active: "text-red-700 border-red-700 dark:text-red-500 dark:border-red-500",
    tab_pill_active: "text-white bg-red-700 dark:bg-red-600",
    solid: "text-white bg-red-700 hover:bg-red-800 focus:ring-red-300 dark:bg-red-600 dark:hover:bg-red-700 dark:focus:ring-red-900",
    outline: "text-red-700 border border-red-700 hover:text-white hover:bg-red-800 focus:ring-red-300 dark:border-red-500 dark:text-red-500 dark:hover:text-white dark:hover:bg-red-600 dark:focus:ring-red-900",
    soft: "text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400",
    dismiss: "bg-red-50 text-red-500 focus:ring-red-400 hover:bg-red-200 dark:bg-gray-800 dark:text-red-400 dark:hover:bg-gray-700",
    badge: "text-red-500 bg-red-100 dark:bg-red-800 dark:text-red-200",
};

const YELLOW: ColorTokens = ColorTokens {
    disclosure_active: "bg-yellow-100 text-yellow-800 dark:bg-gray-800 dark:text-white",
    disclosure_flush_active: "text-yellow-800 dark:text-yellow-300",
    disclosure_hover: "hover:bg-yellow-100 dark:hover:bg-gray-800",
    disclosure_focus: "focus:ring-4 focus:ring-yellow-200 dark:focus:ring-yellow-900",
    tab_underline_active: "text-yellow-800 border-yellow-800 dark:text-yellow-300 dark:border-yellow-300",
    tab_pill_active: "text-white bg-yellow-500 dark:bg-yellow-600",
    solid: "text-white bg-yellow-400 hover:bg-yellow-500 focus:ring-yellow-300 dark:bg-yellow-500 dark:hover:bg-yellow-600 dark:focus:ring-yellow-900",
    outline: "text-yellow-500 border border-yellow-400 hover:text-white hover:bg-yellow-500 focus:ring-yellow-300 dark:border-yellow-300 dark:text-yellow-300 dark:hover:text-white dark:hover:bg-yellow-400 dark:focus:ring-yellow-900",
    soft: "text-yellow-800 bg-yellow-50 dark:bg-gray-800 dark:text-yellow-300",
    dismiss: "bg-yellow-50 text-yellow-500 focus:ring-yellow-400 hover:bg-yellow-200 dark:bg-gray-800 dark:text-yellow-300 dark:hover:bg-gray-700",
    badge: "text-orange-500 bg-orange-100 dark:bg-orange-700 dark:text-orange-200",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Closed size vocabulary for sized controls.
pub enum Size {
    /// Extra-small control.
    Xs,
    /// Small control.
    Sm,
    /// Default control.
    #[default]
    Md,
    /// Large control.
    Lg,
    /// Extra-large control.
    Xl,
}

impl Size {
    /// Every size in declaration order.
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];

    /// Stable key used in configuration.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    pub(crate) const fn button_tokens(self) -> &'static str {
        match self {
            Self::Xs => "px-3 py-2 text-xs",
            Self::Sm => "px-3 py-2 text-sm",
            Self::Md => "px-5 py-2.5 text-sm",
            Self::Lg => "px-5 py-3 text-base",
            Self::Xl => "px-6 py-3.5 text-base",
        }
    }
}

impl FromStr for Size {
    type Err = ConstructionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.key() == raw)
            .ok_or_else(|| ConstructionError::UnknownSize(raw.to_string()))
    }
}
