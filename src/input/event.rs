/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds everything that happened during a frame into one
/// [`FrameInput`](super::FrameInput).
///
/// # Example
///
/// ```ignore
/// input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// let frame = input.end_frame(&engine.camera().camera, viewport);
/// engine.frame(&frame, dt);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Cursor left the window; nothing is under the pointer.
    CursorLeft,
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key string, e.g. `"KeyA"` or `"ArrowUp"`.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The UI layer reports whether the pointer is over one of its widgets.
    PointerOverUi {
        /// Whether a widget is under the pointer.
        over: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button: select.
    Left,
    /// Secondary (right) mouse button: deselect.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
