use crate::controllers::interactive::data::input_event::{InputEvent, Key, PointerButton};
use crate::core::data::point::Point;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Turns winit window events into explorer input. winit reports button presses
/// without a position, so the last cursor position is tracked here.
#[derive(Debug, Default)]
pub struct WinitInputTranslator {
    cursor: Point,
}

impl WinitInputTranslator {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::QuitRequested),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point {
                    x: position.x as i32,
                    y: position.y as i32,
                };
                Some(InputEvent::PointerMoved {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button);
                let position = self.cursor;

                Some(match state {
                    ElementState::Pressed => InputEvent::PointerPressed { button, position },
                    ElementState::Released => InputEvent::PointerReleased { button, position },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scrolled {
                delta_y: scroll_delta_y(*delta),
            }),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => Some(InputEvent::KeyPressed(key_for(*code))),
            _ => None,
        }
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}

fn scroll_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

fn key_for(code: KeyCode) -> Key {
    match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::IncreaseIterations,
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::DecreaseIterations,
        KeyCode::KeyR => Key::ResetView,
        KeyCode::Escape => Key::Quit,
        _ => Key::Other,
    }
}
