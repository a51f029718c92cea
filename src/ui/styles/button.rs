// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

fn horizontal_gradient(stops: &[Color], alpha: f32) -> Background {
    let last = stops.len().saturating_sub(1).max(1);
    let linear = stops
        .iter()
        .enumerate()
        .fold(Linear::new(Degrees(90.0)), |linear, (index, color)| {
            #[allow(clippy::cast_precision_loss)] // at most a handful of stops
            let offset = index as f32 / last as f32;
            linear.add_stop(offset, Color { a: alpha, ..*color })
        });
    Background::Gradient(Gradient::Linear(linear))
}

/// Neon gradient button next to the search field.
pub fn search(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Disabled => opacity::OVERLAY_MEDIUM,
        _ => 0.9,
    };

    button::Style {
        background: Some(horizontal_gradient(
            &[palette::CORAL, palette::PEACH, palette::TURQUOISE],
            alpha,
        )),
        text_color: BLACK,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Pressed) {
            shadow::NONE
        } else {
            shadow::GLOW
        },
        snap: true,
    }
}

/// Whole-card button: glass surface that lifts on hover.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let (background_alpha, border_color, card_shadow) = match status {
        button::Status::Hovered => (
            opacity::GLASS * 2.0,
            Color {
                a: opacity::TEXT_MUTED,
                ..palette::VIOLET
            },
            shadow::LG,
        ),
        button::Status::Pressed => (opacity::GLASS * 3.0, palette::VIOLET, shadow::MD),
        _ => (
            opacity::GLASS,
            Color {
                a: opacity::GLASS_BORDER,
                ..WHITE
            },
            shadow::MD,
        ),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: background_alpha,
            ..WHITE
        })),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}

/// Violet to turquoise pill used by the photo download action.
pub fn download(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => 0.9,
    };

    button::Style {
        background: Some(horizontal_gradient(
            &[palette::VIOLET, palette::TURQUOISE],
            alpha,
        )),
        text_color: BLACK,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only button used for the gallery close action.
pub fn text_link(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => 0.8,
    };

    button::Style {
        background: None,
        text_color: Color { a: alpha, ..WHITE },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Small dismiss button inside a toast.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_button_uses_gradient_and_glow() {
        let style = search(&Theme::Dark, button::Status::Active);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.shadow, shadow::GLOW);
        assert_eq!(style.text_color, BLACK);
    }

    #[test]
    fn card_border_highlights_on_hover() {
        let theme = Theme::Dark;
        let active = card(&theme, button::Status::Active);
        let hovered = card(&theme, button::Status::Hovered);
        assert_ne!(active.border.color, hovered.border.color);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn text_link_has_no_background() {
        let style = text_link(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss(&theme, button::Status::Active).background.is_none());
        assert!(dismiss(&theme, button::Status::Hovered).background.is_some());
    }
}
