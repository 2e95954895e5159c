use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other,
}

/// Keys the explorer reacts to. Anything else arrives as `Other`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    IncreaseIterations,
    DecreaseIterations,
    ResetView,
    Quit,
    Other,
}

/// One input event in surface pixel coordinates. A poll cycle delivers zero or
/// more of these before the next frame is rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerPressed { button: PointerButton, position: Point },
    PointerReleased { button: PointerButton, position: Point },
    PointerMoved { position: Point },
    Scrolled { delta_y: f64 },
    KeyPressed(Key),
    QuitRequested,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}
