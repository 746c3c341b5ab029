use bevy::prelude::*;
use widget_helpers::input::cursor_world_position;
use widget_helpers::reset::{ResetButton, Resettable};

use crate::drag::DragState;

pub const CARD_SIZE: Vec2 = Vec2::new(300.0, 150.0);
const BUTTON_SIZE: Vec2 = Vec2::new(90.0, 36.0);

/// Where the card sits before anything drags it.
const CARD_ORIGIN: Vec2 = Vec2::new(0.0, 140.0);

// Dark theme: gray panel, blue button
const CARD_COLOR: Color = Color::srgb(0.12, 0.16, 0.22);
const TEXT_COLOR: Color = Color::srgb(0.95, 0.96, 0.98);
const BUTTON_NORMAL: Color = Color::srgb(0.11, 0.31, 0.85);
const BUTTON_HOVERED: Color = Color::srgb(0.16, 0.39, 0.93);
const BUTTON_PRESSED: Color = Color::srgb(0.10, 0.25, 0.70);

/// How quickly the card glides home when it is not being dragged.
const RETURN_SPEED: f32 = 8.0;

#[derive(Component, Default)]
pub struct Card {
    /// Displacement from `origin`, in pixels.
    pub offset: Vec2,
    /// The card's untransformed layout position.
    pub origin: Vec2,
}

impl Resettable for Card {
    fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }
}

pub fn spawn_card(mut commands: Commands) {
    commands
        .spawn((
            Sprite::from_color(CARD_COLOR, CARD_SIZE),
            Transform::from_translation(CARD_ORIGIN.extend(0.0)),
            Card {
                offset: Vec2::ZERO,
                origin: CARD_ORIGIN,
            },
            DragState::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new("You can drag me!"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Transform::from_xyz(0.0, 42.0, 1.0),
            ));
            parent.spawn((
                Text2d::new("- Ronald Rey"),
                TextFont {
                    font_size: 17.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Transform::from_xyz(0.0, 12.0, 1.0),
            ));
            parent
                .spawn((
                    Sprite::from_color(BUTTON_NORMAL, BUTTON_SIZE),
                    Transform::from_xyz(0.0, -38.0, 1.0),
                    ResetButton,
                ))
                .with_child((
                    Text2d::new("Reset"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                ));
        });
}

/// Applies the controller's offset to the card transform. While a drag is
/// active the card tracks the pointer exactly; otherwise it eases toward its
/// target, so a reset glides back to the origin.
pub fn apply_card_offset(
    time: Res<Time>,
    mut card_query: Query<(&Card, &DragState, &mut Transform)>,
) {
    let Ok((card, drag, mut transform)) = card_query.get_single_mut() else {
        return;
    };

    let target = card.origin + card.offset;
    let current = transform.translation.truncate();

    let next = if drag.is_dragging() {
        target
    } else {
        current.lerp(target, (time.delta_secs() * RETURN_SPEED).min(1.0))
    };
    transform.translation = next.extend(transform.translation.z);
}

/// Hover and press tints for the reset button.
pub fn style_reset_button(
    mouse_input: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut buttons: Query<(&GlobalTransform, &mut Sprite), With<ResetButton>>,
) {
    let cursor = cursor_world_position(&windows, &camera_query);

    for (transform, mut sprite) in &mut buttons {
        let size = sprite.custom_size.unwrap_or(Vec2::ONE);
        let rect = Rect::from_center_size(transform.translation().truncate(), size);
        let hovered = cursor.is_some_and(|position| rect.contains(position));

        sprite.color = if hovered && mouse_input.pressed(MouseButton::Left) {
            BUTTON_PRESSED
        } else if hovered {
            BUTTON_HOVERED
        } else {
            BUTTON_NORMAL
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_the_offset_to_zero() {
        let mut card = Card {
            offset: Vec2::new(120.0, -40.0),
            origin: CARD_ORIGIN,
        };
        card.reset();
        assert_eq!(card.offset, Vec2::ZERO, "reset must zero the offset");
        assert_eq!(card.origin, CARD_ORIGIN, "reset must not move the origin");
    }

    #[test]
    fn reset_of_a_resting_card_is_a_no_op() {
        let mut card = Card {
            offset: Vec2::ZERO,
            origin: CARD_ORIGIN,
        };
        card.reset();
        card.reset();
        assert_eq!(card.offset, Vec2::ZERO, "double reset stays at zero");
    }
}
