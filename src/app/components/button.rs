//! Button with variants, sizes and an optional async state.
//!
//! While `state` holds a value the button is disabled and shows a spinner,
//! check or cross instead of its children. Success and error clear
//! themselves after `STATE_RESET_MS`.

use dioxus::prelude::*;

use super::Icon;
use crate::app::timer::sleep_ms;
use crate::nav::NavIcon;

pub const STATE_RESET_MS: i32 = 2000;

#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[non_exhaustive]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ButtonState {
    Loading,
    Success,
    Error,
}

impl ButtonState {
    pub fn icon(&self) -> NavIcon {
        match self {
            ButtonState::Loading => NavIcon::Spinner,
            ButtonState::Success => NavIcon::Check,
            ButtonState::Error => NavIcon::Cross,
        }
    }

    /// Loading is cleared by the owner; the others time out
    pub fn resets_after_delay(&self) -> bool {
        !matches!(self, ButtonState::Loading)
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    /// Owner's state signal; cleared here once success/error has been shown
    state: Option<Signal<Option<ButtonState>>>,
    #[props(default)] disabled: bool,
    /// Render as a form submit button
    #[props(default)] submit: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    use_effect(move || {
        let Some(mut state) = state else {
            return;
        };
        if state().is_some_and(|s| s.resets_after_delay()) {
            spawn(async move {
                sleep_ms(STATE_RESET_MS).await;
                state.set(None);
            });
        }
    });

    let current = state.and_then(|s| s());
    let is_disabled = disabled || current.is_some();
    let button_type = if submit { "submit" } else { "button" };

    rsx! {
        button {
            r#type: button_type,
            class: "button {class}",
            "data-style": variant.class(),
            "data-size": size.class(),
            "data-state": current.map(|s| format!("{:?}", s).to_lowercase()),
            disabled: is_disabled,
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            if let Some(s) = current {
                Icon {
                    icon: s.icon(),
                    class: state_icon_class(s).to_string(),
                }
            } else {
                {children}
            }
        }
    }
}

fn state_icon_class(state: ButtonState) -> &'static str {
    match state {
        ButtonState::Loading => "icon icon-spin",
        _ => "icon",
    }
}
