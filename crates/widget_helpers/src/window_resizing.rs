#[cfg(target_arch = "wasm32")]
pub fn handle_browser_resize(
    mut primary_query: bevy::ecs::system::Query<
        &mut bevy::window::Window,
        bevy::ecs::query::With<bevy::window::PrimaryWindow>,
    >,
) {
    // Surfaces larger than this fail Surface::configure on some mobile GPUs
    const MAX_WIDTH: f32 = 2048.0;
    const MAX_HEIGHT: f32 = 2048.0;

    let Some(browser_window) = web_sys::window() else {
        return;
    };
    let Some(inner_width) = browser_window.inner_width().ok().and_then(|w| w.as_f64()) else {
        return;
    };
    let Some(inner_height) = browser_window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };

    let target_width = (inner_width as f32).min(MAX_WIDTH);
    let target_height = (inner_height as f32).min(MAX_HEIGHT);

    for mut window in &mut primary_query {
        if (window.resolution.width() - target_width).abs() > f32::EPSILON
            || (window.resolution.height() - target_height).abs() > f32::EPSILON
        {
            window.resolution.set(target_width, target_height);
        }
    }
}
