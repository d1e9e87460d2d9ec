//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use crate::compat;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        format!("outline {}", props.button_type.to_class())
    } else {
        props.button_type.to_class().to_string()
    };
    rsx! {
        button {
            class: "{class_str}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// Plain clickable text for secondary actions.
#[component]
pub fn TextAction(on_click: EventHandler<()>, children: Element) -> Element {
    rsx! {
        a {
            href: "#",
            style: "cursor: pointer;",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_click.call(());
            },
            small { {children} }
        }
    }
}

/// Copies `text_to_copy` to the clipboard and briefly confirms it.
#[component]
pub fn CopyButton(text_to_copy: String, label: String) -> Element {
    let clipboard = compat::use_clipboard_writer();
    let mut copied = use_signal(|| false);

    rsx! {
        a {
            href: "#",
            style: "cursor: pointer; display: inline-flex; align-items: center; gap: 0.25rem;",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let mut clipboard = clipboard;
                let text = text_to_copy.clone();
                spawn(async move {
                    if clipboard.set(text).await {
                        copied.set(true);
                        compat::sleep(std::time::Duration::from_millis(1000)).await;
                        copied.set(false);
                    }
                });
            },
            if copied() {
                small { "Copied" }
            } else {
                small { "{label}" }
            }
        }
    }
}

/// Shows `text` on hover/focus of `children`, rendered by Pico's
/// `data-tooltip` support.
#[component]
pub fn Tooltip(
    text: String,
    #[props(default = "top".to_string())] placement: String,
    children: Element,
) -> Element {
    rsx! {
        span {
            "data-tooltip": "{text}",
            "data-placement": "{placement}",
            tabindex: "0",
            {children}
        }
    }
}

// A modal with no title bar that closes on backdrop click or Escape key.
#[derive(Props, PartialEq, Clone)]
pub struct NoTitleModalProps {
    is_open: bool,
    on_close: EventHandler<()>,
    children: Element,
}

pub fn NoTitleModal(props: NoTitleModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        if props.is_open {
            dialog {
                open: true,
                // focus this element as soon as it is rendered into the DOM.
                autofocus: true,
                // Close when the dialog's backdrop is clicked.
                onclick: move |_| on_close.call(()),
                // Listen for keyboard events to close on "Escape".
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                // The <article> tag holds the content and stops the click
                // from propagating to the backdrop and closing the modal.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    {props.children}
                }
            }
        }
    }
}
