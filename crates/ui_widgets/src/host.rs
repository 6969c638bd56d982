use leptos::{component, view, IntoView};
use ui_render::{use_render_scope, ClassBuilder, Render};

use crate::widget::Widget;

#[component]
/// Mounts a server-rendered widget inside a Leptos view.
///
/// The widget renders with the [`ui_render::RenderScope`] published through Leptos context, or
/// the default scope when none was provided.
pub fn WidgetHost(
    /// Widget to render.
    widget: Widget,
    /// Optional layout-only class hook for the host wrapper.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let scope = use_render_scope();
    let html = widget.render(&scope).to_html();
    let class = ClassBuilder::new("ui-widget-host")
        .add_opt(layout_class)
        .build();

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="widget-host"
            data-ui-widget=widget.kind()
            inner_html=html
        ></div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::ssr::render_to_string;
    use ui_render::{provide_render_scope, RenderScope, ThemeSnapshot};

    use super::*;
    use crate::button::Button;

    #[test]
    fn host_renders_widget_with_the_provided_scope() {
        let widget = Widget::from(Button::new("Save").expect("button"));
        let html = render_to_string(move || {
            provide_render_scope(RenderScope::new().with_theme(
                ThemeSnapshot::light().with_color_override("blue", "ring-offset-4 shadow-2xl"),
            ));
            view! { <WidgetHost widget=widget layout_class="mt-2"/> }
        })
        .to_string();

        assert!(html.contains("data-ui-widget=\"button\""), "{html}");
        assert!(html.contains("data-ui-kind=\"widget-host\""), "{html}");
        assert!(html.contains("ui-widget-host mt-2"), "{html}");
        assert!(html.contains("shadow-2xl"), "{html}");
        assert!(html.contains("Save"), "{html}");
    }

    #[test]
    fn host_without_a_provided_scope_uses_the_default_theme() {
        let widget = Widget::from(Button::new("Save").expect("button"));
        let html = render_to_string(move || view! { <WidgetHost widget=widget/> }).to_string();

        assert!(html.contains("data-ui-widget=\"button\""), "{html}");
        assert!(!html.contains("shadow-2xl"), "{html}");
    }
}
