//! Reusable button components

use dioxus::prelude::*;

/// Chromeless button - accessibility and base behavior without visual
/// styling. Used directly by the slot grid, and by `Button` for the chrome.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] oncontextmenu: Option<EventHandler<MouseEvent>>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            oncontextmenu: move |e| {
                if let Some(ref handler) = oncontextmenu {
                    handler.call(e);
                }
            },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent background - for the primary action (Save)
    Primary,
    /// Muted background - for secondary actions (Load)
    Secondary,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

/// Styled button with consistent chrome across the action bar.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Small => "btn btn--small",
        ButtonSize::Medium => "btn",
    };
    let variant_class = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(format!("{size_class} {variant_class}")),
            onclick,
            {children}
        }
    }
}
