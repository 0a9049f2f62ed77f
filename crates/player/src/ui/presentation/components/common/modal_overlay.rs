//! Overlay shell: backdrop, content box and keyboard dismissal

use dioxus::prelude::*;

use crate::presentation::state::ClickOrigin;

/// Props for ModalOverlay
#[derive(Props, Clone, PartialEq)]
pub struct ModalOverlayProps {
    /// Every backdrop click, with whether the backdrop itself was the target
    pub on_backdrop_click: EventHandler<bool>,
    /// Escape key or the close button
    pub on_dismiss: EventHandler<()>,
    #[props(default)]
    pub title: Option<String>,
    pub children: Element,
}

#[component]
pub fn ModalOverlay(props: ModalOverlayProps) -> Element {
    let mut origin = use_signal(ClickOrigin::default);

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onmounted: move |e| async move {
                // focus so Escape reaches onkeydown
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    props.on_dismiss.call(());
                }
            },
            // runs after the content handler for the same click
            onclick: move |_| {
                let is_backdrop = origin.write().take_is_backdrop();
                props.on_backdrop_click.call(is_backdrop);
            },

            div {
                class: "modal-content",
                onclick: move |_| origin.write().mark_content(),

                div {
                    class: "modal-header",
                    if let Some(title) = props.title.as_ref() {
                        h2 { "{title}" }
                    }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| props.on_dismiss.call(()),
                        "×"
                    }
                }

                {props.children}
            }
        }
    }
}
