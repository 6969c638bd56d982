//! Server-rendered widget set built on `ui_render`.
//!
//! Widgets are immutable values validated at construction and rendered into markup trees that
//! two independent client runtimes read: the toggle runtime (disclosure state, dismissal) and
//! the hypermedia runtime (lazy fetches, requests). Every element id, ARIA cross-reference, and
//! runtime attribute is emitted here, and no element ever carries both a toggle hook and a
//! hypermedia trigger.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod accordion;
mod alert;
mod button;
pub mod disclosure;
mod error;
mod host;
pub mod hypermedia;
mod identity;
mod palette;
mod tabs;
mod text_field;
mod toast;
mod widget;

pub use accordion::{Accordion, AccordionBuilder, AccordionVariant};
pub use alert::{Alert, DISMISS_TARGET_ATTR};
pub use button::{Button, ButtonType, ButtonVariant};
pub use disclosure::{
    DisclosureContainer, DisclosureFamily, DisclosureIds, DisclosureMode, Panel, PanelContent,
    PanelSlot, PanelState,
};
pub use error::{ConsistencyWarning, ConstructionError};
pub use host::{WidgetHost, WidgetHostProps};
pub use hypermedia::{
    attach_fetch, attach_toggle, verify_coexistence, HttpMethod, HypermediaAction,
    HypermediaFetch, Swap,
};
pub use palette::{Color, Size};
pub use tabs::{Tabs, TabsBuilder, TabsVariant};
pub use text_field::{InputType, TextField};
pub use toast::Toast;
pub use widget::Widget;

/// Convenience imports for pages composing widgets.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionVariant, Alert, Button, ButtonType, ButtonVariant, Color,
        ConstructionError, DisclosureMode, HttpMethod, HypermediaAction, HypermediaFetch,
        InputType, Panel, Size, Swap, Tabs, TabsVariant, TextField, Toast, Widget, WidgetHost,
    };
    pub use ui_render::prelude::*;
}
