//=============================================================================
// File: src/components/question_helper.rs
//=============================================================================
use crate::components::pico::Tooltip;
use dioxus::prelude::*;

const WRAPPER_STYLE: &str = "display: inline-flex; align-items: center; justify-content: center; padding: 0.2px; border-radius: 36px; cursor: default;";

/// Feather `help-circle`.
#[component]
fn QuestionIcon(size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
            line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
        }
    }
}

/// Feather `plus-circle`.
#[component]
fn PlusCircleIcon(size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            style: "cursor: pointer;",
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", y1: "8", x2: "12", y2: "16" }
            line { x1: "8", y1: "12", x2: "16", y2: "12" }
        }
    }
}

/// A question-mark icon that explains `text` on hover or focus.
///
/// `label`, when given, is rendered after the icon inside the same
/// tooltip target.
#[component]
pub fn QuestionHelper(
    text: String,
    #[props(default = 16)] size: u32,
    #[props(default)] label: Option<Element>,
) -> Element {
    rsx! {
        Tooltip {
            text,
            span {
                style: WRAPPER_STYLE,
                QuestionIcon { size }
                if let Some(label) = label {
                    {label}
                }
            }
        }
    }
}

#[component]
pub fn PlusHelper(text: String, #[props(default)] label: Option<Element>) -> Element {
    rsx! {
        Tooltip {
            text,
            span {
                style: WRAPPER_STYLE,
                PlusCircleIcon { size: 16 }
                if let Some(label) = label {
                    {label}
                }
            }
        }
    }
}

/// Bare "?" glyph in white, for dark backgrounds.
#[component]
pub fn LightQuestionHelper(text: String, #[props(default)] label: Option<Element>) -> Element {
    rsx! {
        Tooltip {
            text,
            span {
                style: "{WRAPPER_STYLE} width: 24px; height: 24px; color: white;",
                span { style: "font-size: 1rem;", "?" }
                if let Some(label) = label {
                    {label}
                }
            }
        }
    }
}
