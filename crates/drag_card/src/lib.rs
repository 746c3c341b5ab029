use bevy::prelude::*;
use widget_helpers::reset::handle_reset;

pub mod card;
pub mod drag;

use card::Card;

pub fn run() {
    widget_helpers::get_default_app(env!("CARGO_PKG_NAME"))
        .add_systems(Startup, (setup, card::spawn_card))
        .add_systems(
            Update,
            (
                drag::handle_drag_input,
                handle_reset::<Card>,
                card::style_reset_button,
                card::apply_card_offset,
            )
                .chain(),
        )
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
