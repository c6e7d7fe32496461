//! Input identities and routed events

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use super::state::ControllerState;

/// Frame-over-frame change reported for a tracked input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Went down this frame (edge)
    Pressed,
    /// Still down (every frame the input is down, including the press frame)
    Held,
    /// Auto-repeat fired after the repeat delay elapsed
    Repeated,
    /// Went up this frame (edge)
    Released,
}

/// Pointer (mouse) button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    /// First extra button (usually "back")
    X1,
    /// Second extra button (usually "forward")
    X2,
}

impl PointerButton {
    pub const ALL: [PointerButton; 5] = [
        PointerButton::Left,
        PointerButton::Right,
        PointerButton::Middle,
        PointerButton::X1,
        PointerButton::X2,
    ];

    /// Maps a winit mouse button to a tracked pointer button
    ///
    /// Buttons beyond the five tracked ones have no identity and are never reported.
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        use winit::event::MouseButton as WB;
        match button {
            WB::Left => Some(Self::Left),
            WB::Right => Some(Self::Right),
            WB::Middle => Some(Self::Middle),
            WB::Back => Some(Self::X1),
            WB::Forward => Some(Self::X2),
            WB::Other(_) => None,
        }
    }
}

/// Four-way direction, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Device-independent semantic buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
pub enum AbstractButton {
    /// Move focus forward
    Tab,
    /// Move focus backward
    ShiftTab,
    /// Confirm / accept
    Affirm,
    /// Back out / dismiss
    Cancel,
    NextPage,
    PreviousPage,
}

/// Digital controller buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
pub enum ControllerButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,
    Back,
    Start,
    Guide,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// Physical keyboard key identifier
///
/// This is the fixed key set scanned by the keyboard forwarder every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
pub enum KeyCode {
    // Common keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    CapsLock,
    NumLock,
    ScrollLock,
    PrintScreen,
    Pause,
    ContextMenu,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Numbers
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,

    // Arrows
    Left,
    Right,
    Up,
    Down,

    // Punctuation
    Minus,
    Equal,
    BracketLeft,
    BracketRight,
    Backslash,
    Semicolon,
    Quote,
    Backquote,
    Comma,
    Period,
    Slash,
    IntlBackslash,
    IntlRo,
    IntlYen,

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadComma,
    NumpadEqual,
    NumpadEnter,
}

impl KeyCode {
    /// Returns true for either shift key
    pub fn is_shift(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }

    /// Convert from a winit physical key code
    ///
    /// Keys outside the tracked set map to `None`.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode as WK;
        let key = match key {
            WK::Space => Self::Space,
            WK::Enter => Self::Enter,
            WK::Escape => Self::Escape,
            WK::Backspace => Self::Backspace,
            WK::Tab => Self::Tab,
            WK::Delete => Self::Delete,
            WK::Insert => Self::Insert,
            WK::Home => Self::Home,
            WK::End => Self::End,
            WK::PageUp => Self::PageUp,
            WK::PageDown => Self::PageDown,
            WK::CapsLock => Self::CapsLock,
            WK::NumLock => Self::NumLock,
            WK::ScrollLock => Self::ScrollLock,
            WK::PrintScreen => Self::PrintScreen,
            WK::Pause => Self::Pause,
            WK::ContextMenu => Self::ContextMenu,

            WK::ShiftLeft => Self::ShiftLeft,
            WK::ShiftRight => Self::ShiftRight,
            WK::ControlLeft => Self::ControlLeft,
            WK::ControlRight => Self::ControlRight,
            WK::AltLeft => Self::AltLeft,
            WK::AltRight => Self::AltRight,
            WK::SuperLeft => Self::SuperLeft,
            WK::SuperRight => Self::SuperRight,

            WK::KeyA => Self::A,
            WK::KeyB => Self::B,
            WK::KeyC => Self::C,
            WK::KeyD => Self::D,
            WK::KeyE => Self::E,
            WK::KeyF => Self::F,
            WK::KeyG => Self::G,
            WK::KeyH => Self::H,
            WK::KeyI => Self::I,
            WK::KeyJ => Self::J,
            WK::KeyK => Self::K,
            WK::KeyL => Self::L,
            WK::KeyM => Self::M,
            WK::KeyN => Self::N,
            WK::KeyO => Self::O,
            WK::KeyP => Self::P,
            WK::KeyQ => Self::Q,
            WK::KeyR => Self::R,
            WK::KeyS => Self::S,
            WK::KeyT => Self::T,
            WK::KeyU => Self::U,
            WK::KeyV => Self::V,
            WK::KeyW => Self::W,
            WK::KeyX => Self::X,
            WK::KeyY => Self::Y,
            WK::KeyZ => Self::Z,

            WK::Digit0 => Self::Num0,
            WK::Digit1 => Self::Num1,
            WK::Digit2 => Self::Num2,
            WK::Digit3 => Self::Num3,
            WK::Digit4 => Self::Num4,
            WK::Digit5 => Self::Num5,
            WK::Digit6 => Self::Num6,
            WK::Digit7 => Self::Num7,
            WK::Digit8 => Self::Num8,
            WK::Digit9 => Self::Num9,

            WK::F1 => Self::F1,
            WK::F2 => Self::F2,
            WK::F3 => Self::F3,
            WK::F4 => Self::F4,
            WK::F5 => Self::F5,
            WK::F6 => Self::F6,
            WK::F7 => Self::F7,
            WK::F8 => Self::F8,
            WK::F9 => Self::F9,
            WK::F10 => Self::F10,
            WK::F11 => Self::F11,
            WK::F12 => Self::F12,
            WK::F13 => Self::F13,
            WK::F14 => Self::F14,
            WK::F15 => Self::F15,
            WK::F16 => Self::F16,
            WK::F17 => Self::F17,
            WK::F18 => Self::F18,
            WK::F19 => Self::F19,
            WK::F20 => Self::F20,
            WK::F21 => Self::F21,
            WK::F22 => Self::F22,
            WK::F23 => Self::F23,
            WK::F24 => Self::F24,

            WK::ArrowLeft => Self::Left,
            WK::ArrowRight => Self::Right,
            WK::ArrowUp => Self::Up,
            WK::ArrowDown => Self::Down,

            WK::Minus => Self::Minus,
            WK::Equal => Self::Equal,
            WK::BracketLeft => Self::BracketLeft,
            WK::BracketRight => Self::BracketRight,
            WK::Backslash => Self::Backslash,
            WK::Semicolon => Self::Semicolon,
            WK::Quote => Self::Quote,
            WK::Backquote => Self::Backquote,
            WK::Comma => Self::Comma,
            WK::Period => Self::Period,
            WK::Slash => Self::Slash,
            WK::IntlBackslash => Self::IntlBackslash,
            WK::IntlRo => Self::IntlRo,
            WK::IntlYen => Self::IntlYen,

            WK::Numpad0 => Self::Numpad0,
            WK::Numpad1 => Self::Numpad1,
            WK::Numpad2 => Self::Numpad2,
            WK::Numpad3 => Self::Numpad3,
            WK::Numpad4 => Self::Numpad4,
            WK::Numpad5 => Self::Numpad5,
            WK::Numpad6 => Self::Numpad6,
            WK::Numpad7 => Self::Numpad7,
            WK::Numpad8 => Self::Numpad8,
            WK::Numpad9 => Self::Numpad9,
            WK::NumpadAdd => Self::NumpadAdd,
            WK::NumpadSubtract => Self::NumpadSubtract,
            WK::NumpadMultiply => Self::NumpadMultiply,
            WK::NumpadDivide => Self::NumpadDivide,
            WK::NumpadDecimal => Self::NumpadDecimal,
            WK::NumpadComma => Self::NumpadComma,
            WK::NumpadEqual => Self::NumpadEqual,
            WK::NumpadEnter => Self::NumpadEnter,

            _ => return None,
        };
        Some(key)
    }
}

/// One routed event, mirroring a single [`UiRoot`](super::UiRoot) call
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        transition: Transition,
        key: KeyCode,
    },
    PointerButton {
        transition: Transition,
        button: PointerButton,
        /// Pointer position in logical pixels
        pos: [f32; 2],
    },
    Scroll {
        /// Change of the cumulative scroll value since it was last reported
        delta: f32,
        pos: [f32; 2],
    },
    PointerPosition {
        pos: [f32; 2],
    },
    ControllerState {
        slot: usize,
        state: ControllerState,
    },
    Direction {
        transition: Transition,
        direction: Direction,
    },
    AbstractButton {
        transition: Transition,
        button: AbstractButton,
    },
}

impl InputEvent {
    /// Returns the transition carried by edge-tracked events
    pub fn transition(&self) -> Option<Transition> {
        match self {
            Self::Key { transition, .. }
            | Self::PointerButton { transition, .. }
            | Self::Direction { transition, .. }
            | Self::AbstractButton { transition, .. } => Some(*transition),
            _ => None,
        }
    }
}
