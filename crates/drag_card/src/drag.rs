use bevy::prelude::*;
use bevy::window::CursorLeft;
use widget_helpers::input::{just_pressed_world_position, pressed_world_position};

use crate::card::Card;

/// Margin kept between the card edge and the viewport edge while dragging.
pub const GUTTER: f32 = 10.0;

/// Movement limits for one gesture, in offset space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boundary {
    pub min: Vec2,
    pub max: Vec2,
}

impl Boundary {
    /// Limits that keep `element` inside `viewport` with a `gutter` margin,
    /// for an element currently displaced by `offset`.
    pub fn compute(offset: Vec2, element: Rect, viewport: Rect, gutter: f32) -> Self {
        Self {
            min: offset + (viewport.min - element.min) + Vec2::splat(gutter),
            max: offset + (viewport.max - element.max) - Vec2::splat(gutter),
        }
    }

    /// Clamps `candidate` per axis. A degenerate axis (the element does not
    /// fit between the gutters, `min > max`) resolves to the interval
    /// midpoint, which centers the element on that axis.
    pub fn clamp(&self, candidate: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(candidate.x, self.min.x, self.max.x),
            clamp_axis(candidate.y, self.min.y, self.max.y),
        )
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        return f32::midpoint(min, max);
    }
    value.clamp(min, max)
}

/// Pointer tracking for one gesture. The boundary and the start offset are
/// captured at `begin` and stay fixed until the next gesture, so a window
/// resize mid-drag only takes effect on the next press.
#[derive(Component, Default)]
pub struct DragState {
    dragging: bool,
    start_offset: Vec2,
    boundary: Boundary,
}

impl DragState {
    pub fn begin(&mut self, pointer: Vec2, offset: Vec2, element: Rect, viewport: Rect) {
        self.dragging = true;
        self.start_offset = pointer - offset;
        self.boundary = Boundary::compute(offset, element, viewport, GUTTER);
    }

    /// Offset the element should take for the current pointer position.
    pub fn target(&self, pointer: Vec2) -> Vec2 {
        self.boundary.clamp(pointer - self.start_offset)
    }

    /// Idempotent
    pub fn end(&mut self) {
        self.dragging = false;
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Runs the whole gesture: a press inside the card begins tracking, held
/// movement drags the card within the boundary, and release, touch cancel or
/// the cursor leaving the window ends it.
pub fn handle_drag_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut cursor_left: EventReader<CursorLeft>,
    mut card_query: Query<(&mut Card, &mut DragState, &GlobalTransform, &Sprite)>,
) {
    // No measurable card, nothing to track
    let Ok((mut card, mut drag, global_transform, sprite)) = card_query.get_single_mut() else {
        return;
    };

    let cursor_gone = cursor_left.read().next().is_some();

    if let Some(pressed) =
        just_pressed_world_position(&mouse_input, &touch_input, &windows, &camera_query)
    {
        let size = sprite.custom_size.unwrap_or(Vec2::ONE);
        let element = Rect::from_center_size(global_transform.translation().truncate(), size);
        if element.contains(pressed) {
            let Ok(window) = windows.get_single() else {
                return;
            };
            let viewport =
                Rect::from_center_size(Vec2::ZERO, Vec2::new(window.width(), window.height()));
            drag.begin(pressed, card.offset, element, viewport);
        }
    } else if mouse_input.just_released(MouseButton::Left)
        || touch_input.any_just_released()
        || touch_input.any_just_canceled()
        || cursor_gone
    {
        drag.end();
    }

    if drag.is_dragging() {
        let Some(pointer) =
            pressed_world_position(&mouse_input, &touch_input, &windows, &camera_query)
        else {
            return;
        };
        card.offset = drag.target(pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The concrete scenario used throughout: a 300x150 card centered in a
    // 1280x800 viewport, world origin in the middle.
    const CARD_SIZE: Vec2 = Vec2::new(300.0, 150.0);

    fn viewport() -> Rect {
        Rect::from_center_size(Vec2::ZERO, Vec2::new(1280.0, 800.0))
    }

    fn card_rect(offset: Vec2) -> Rect {
        Rect::from_center_size(offset, CARD_SIZE)
    }

    fn begun_at(pointer: Vec2, offset: Vec2) -> DragState {
        let mut drag = DragState::default();
        drag.begin(pointer, offset, card_rect(offset), viewport());
        drag
    }

    #[test]
    fn boundary_leaves_a_gutter_on_every_edge() {
        let boundary = Boundary::compute(Vec2::ZERO, card_rect(Vec2::ZERO), viewport(), GUTTER);
        assert_eq!(
            boundary.min,
            Vec2::new(-480.0, -315.0),
            "min must stop the card one gutter short of the lower-left edges"
        );
        assert_eq!(
            boundary.max,
            Vec2::new(480.0, 315.0),
            "max must stop the card one gutter short of the upper-right edges"
        );
    }

    #[test]
    fn boundary_is_independent_of_the_current_offset() {
        // The reachable offsets do not depend on where the card currently
        // sits: a displaced card measures a displaced rect and the two cancel.
        let at_rest = Boundary::compute(Vec2::ZERO, card_rect(Vec2::ZERO), viewport(), GUTTER);
        let displaced = Vec2::new(120.0, -40.0);
        let mid_drag = Boundary::compute(displaced, card_rect(displaced), viewport(), GUTTER);
        assert_eq!(at_rest, mid_drag, "same card, same viewport, same limits");
    }

    #[test]
    fn move_follows_the_pointer_inside_the_boundary() {
        let drag = begun_at(Vec2::new(500.0, 400.0), Vec2::ZERO);
        assert_eq!(
            drag.target(Vec2::new(550.0, 400.0)),
            Vec2::new(50.0, 0.0),
            "a 50px pointer move inside the bounds is a 50px offset"
        );
    }

    #[test]
    fn dragging_past_the_edge_pins_at_the_boundary() {
        let drag = begun_at(Vec2::new(500.0, 400.0), Vec2::ZERO);
        assert_eq!(
            drag.target(Vec2::new(5000.0, 400.0)).x,
            480.0,
            "offset must pin exactly at max.x, never past it"
        );
        assert_eq!(
            drag.target(Vec2::new(-5000.0, -5000.0)),
            Vec2::new(-480.0, -315.0),
            "both axes clamp independently at min"
        );
    }

    #[test]
    fn every_move_in_a_gesture_stays_inside_the_boundary() {
        let drag = begun_at(Vec2::new(12.0, -30.0), Vec2::new(120.0, -40.0));
        let pointers = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10_000.0, 3.0),
            Vec2::new(-10_000.0, -10_000.0),
            Vec2::new(333.3, 812.5),
            Vec2::new(f32::MAX / 2.0, 0.0),
        ];
        for pointer in pointers {
            let offset = drag.target(pointer);
            assert!(
                offset.x >= drag.boundary.min.x && offset.x <= drag.boundary.max.x,
                "x stayed in bounds for pointer {pointer}"
            );
            assert!(
                offset.y >= drag.boundary.min.y && offset.y <= drag.boundary.max.y,
                "y stayed in bounds for pointer {pointer}"
            );
        }
    }

    #[test]
    fn identical_pointer_sequences_give_identical_trajectories() {
        // Mouse and touch both reduce to the same normalized points, so the
        // controller cannot tell them apart.
        let sequence = [
            Vec2::new(510.0, 390.0),
            Vec2::new(550.0, 400.0),
            Vec2::new(900.0, -200.0),
        ];
        let from_mouse = begun_at(Vec2::new(500.0, 400.0), Vec2::ZERO);
        let from_touch = begun_at(Vec2::new(500.0, 400.0), Vec2::ZERO);
        for pointer in sequence {
            assert_eq!(
                from_mouse.target(pointer),
                from_touch.target(pointer),
                "same points, same trajectory"
            );
        }
    }

    #[test]
    fn degenerate_boundary_centers_the_card() {
        // Card wider than the viewport minus both gutters: min.x > max.x.
        let narrow = Rect::from_center_size(Vec2::ZERO, Vec2::new(200.0, 800.0));
        let boundary = Boundary::compute(Vec2::ZERO, card_rect(Vec2::ZERO), narrow, GUTTER);
        assert!(
            boundary.min.x > boundary.max.x,
            "the x interval must be degenerate in this setup"
        );
        assert_eq!(
            boundary.clamp(Vec2::new(9999.0, 0.0)).x,
            0.0,
            "the degenerate axis resolves to the offset that centers the card"
        );
    }

    #[test]
    fn end_is_idempotent() {
        let mut drag = begun_at(Vec2::new(500.0, 400.0), Vec2::ZERO);
        assert!(drag.is_dragging(), "begin must start tracking");
        drag.end();
        assert!(!drag.is_dragging(), "end must stop tracking");
        drag.end();
        assert!(!drag.is_dragging(), "a second end changes nothing");
    }

    #[test]
    fn reset_mid_gesture_zeroes_the_offset_and_the_next_move_overwrites_it() {
        let mut card = Card {
            offset: Vec2::ZERO,
            origin: Vec2::ZERO,
        };
        let drag = begun_at(Vec2::new(500.0, 400.0), card.offset);

        card.offset = drag.target(Vec2::new(620.0, 360.0));
        assert_eq!(card.offset, Vec2::new(120.0, -40.0), "drag moved the card");

        use widget_helpers::reset::Resettable;
        card.reset();
        assert_eq!(
            card.offset,
            Vec2::ZERO,
            "reset applies even while a gesture is active"
        );

        card.offset = drag.target(Vec2::new(620.0, 360.0));
        assert_eq!(
            card.offset,
            Vec2::new(120.0, -40.0),
            "the gesture's start offset survives a reset"
        );
    }
}
