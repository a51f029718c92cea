// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn glass_border(rad: f32) -> Border {
    Border {
        color: Color {
            a: opacity::GLASS_BORDER,
            ..WHITE
        },
        width: border::WIDTH_SM,
        radius: rad.into(),
    }
}

/// Night background behind the whole listing.
#[must_use]
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Hero banner: violet-tinted night fading to black at the bottom.
#[must_use]
pub fn hero(_theme: &Theme) -> container::Style {
    let gradient = iced::gradient::Linear::new(iced::Degrees(180.0))
        .add_stop(
            0.0,
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::VIOLET
            },
        )
        .add_stop(
            1.0,
            Color {
                a: opacity::TEXT_MUTED,
                ..BLACK
            },
        );

    container::Style {
        background: Some(Background::Gradient(iced::Gradient::Linear(gradient))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Frosted shell around the search field and button.
#[must_use]
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS * 2.0,
            ..WHITE
        })),
        border: glass_border(radius::XL),
        shadow: shadow::LG,
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Dimmed layer behind the gallery modal.
#[must_use]
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Gallery modal panel.
#[must_use]
pub fn modal_panel(_theme: &Theme) -> container::Style {
    container::Style {
        // Opaque enough to read over the backdrop without blur support.
        background: Some(Background::Color(palette::GRAY_900)),
        border: glass_border(radius::XXL),
        shadow: shadow::LG,
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Photo tile inside the gallery grid.
#[must_use]
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE + 0.1,
            ..BLACK
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(Color {
            a: 0.9,
            ..WHITE
        }),
        ..Default::default()
    }
}

/// Placeholder shown while an image is loading or after it failed.
#[must_use]
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS * 2.0,
            ..WHITE
        })),
        text_color: Some(Color {
            a: opacity::TEXT_MUTED,
            ..WHITE
        }),
        ..Default::default()
    }
}

/// Error banner in the listing when events failed to load.
#[must_use]
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Toast card with a severity-colored border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_uses_accent_border() {
        let style = toast(palette::SUCCESS_500)(&Theme::Dark);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn backdrop_dims_with_strong_overlay() {
        let style = modal_backdrop(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..BLACK
            }))
        );
    }
}
