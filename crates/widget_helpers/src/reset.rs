use bevy::prelude::*;

use crate::input::{just_pressed_world_position, just_released_world_position};

#[derive(Component)]
pub struct ResetButton;

/// Components that know how to return to their rest value when the reset
/// affordance is clicked.
pub trait Resettable: Component {
    fn reset(&mut self);
}

/// Applies `reset` to every `T` when a press and the following release both
/// land on a [`ResetButton`]. Pressing the button may also start a drag on
/// the surface underneath; the release then ends that gesture and the reset
/// still applies.
pub fn handle_reset<T: Resettable>(
    button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    buttons: Query<(&GlobalTransform, &Sprite), With<ResetButton>>,
    mut targets: Query<&mut T>,
    mut pressed_on_button: Local<bool>,
) {
    if let Some(position) =
        just_pressed_world_position(&button_input, &touch_input, &windows, &camera)
    {
        *pressed_on_button = hits_button(&buttons, position);
    }

    let Some(position) =
        just_released_world_position(&button_input, &touch_input, &windows, &camera)
    else {
        return;
    };

    if core::mem::take(&mut *pressed_on_button) && hits_button(&buttons, position) {
        info!("Reset clicked");
        for mut target in &mut targets {
            target.reset();
        }
    }
}

fn hits_button(
    buttons: &Query<(&GlobalTransform, &Sprite), With<ResetButton>>,
    position: Vec2,
) -> bool {
    for (transform, sprite) in buttons {
        let size = sprite.custom_size.unwrap_or(Vec2::ONE);
        let rect = Rect::from_center_size(transform.translation().truncate(), size);
        if rect.contains(position) {
            return true;
        }
    }
    false
}
