//! Key bindings and the scripted interaction replayed by the demo
//!
//! - Tab: toggle paint/erase
//! - Up / Down: grow / shrink the brush radius

use topobrush::InputEvent;

/// Keys the brush reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Up,
    Down,
    Escape,
}

/// Translate a key press into a brush event
pub fn map_key(key: Key) -> Option<InputEvent> {
    match key {
        Key::Tab => Some(InputEvent::ToggleMode),
        Key::Up => Some(InputEvent::RadiusUp),
        Key::Down => Some(InputEvent::RadiusDown),
        Key::Escape => None,
    }
}

/// Horizontal drag across the viewport at height `y`, one sample every `step`
/// pixels.
pub fn drag_across(width: u32, y: f32, step: f32) -> Vec<InputEvent> {
    let step = step.max(1.0);
    let mut events = Vec::new();
    let mut x = step;
    while x < width as f32 {
        events.push(InputEvent::PointerMoved {
            x,
            y,
            primary_pressed: true,
        });
        x += step;
    }
    events
}

/// The demo session: paint a stroke, erase part of it, resize the brush,
/// zoom, and finally drag off the mesh.
pub fn demo_script(width: u32, height: u32) -> Vec<InputEvent> {
    let middle = height as f32 * 0.5;
    let mut events = drag_across(width, middle, 30.0);

    events.extend(map_key(Key::Tab));
    events.extend(map_key(Key::Down));
    events.extend(map_key(Key::Down));
    events.extend(drag_across(width / 2, middle + 40.0, 25.0));

    events.extend(map_key(Key::Tab));
    events.extend(map_key(Key::Up));
    events.push(InputEvent::Scroll { delta_y: 1.0 });
    events.push(InputEvent::PointerMoved {
        x: width as f32 * 0.5,
        y: 2.0,
        primary_pressed: true,
    });
    events
}
