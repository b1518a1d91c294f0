use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::controller::CameraController;
use crate::scene::Model;

/// Window-event-based input handler.
///
/// Tracks the last cursor position so drags arrive as deltas, and routes
/// events to their targets: left-drag rotates the camera, scroll rescales
/// the surface model.
pub struct InputHandler {
    last_mouse_pos: Option<Vec2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a handler with no cursor position seen yet.
    pub fn new() -> Self {
        Self {
            last_mouse_pos: None,
        }
    }

    /// Track the cursor and produce a drag delta relative to the previous
    /// position. The first position only seeds the tracking, so a drag
    /// whose button is already held when the cursor first reports cannot
    /// jump by the distance from the origin.
    fn drag_delta(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = self.last_mouse_pos.map(|last| position - last);
        self.last_mouse_pos = Some(position);
        delta
    }

    /// Returns true if the event was consumed.
    pub fn handle_event(
        &mut self,
        controller: &mut CameraController,
        surface_model: &mut Model,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                controller.mouse_pressed = *state == ElementState::Pressed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current_pos =
                    Vec2::new(position.x as f32, position.y as f32);
                if let Some(delta) = self.drag_delta(current_pos) {
                    if controller.mouse_pressed {
                        controller.rotate(delta);
                    }
                }
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                surface_model.scale_scroll(scroll);
                true
            }
            _ => false,
        }
    }
}
