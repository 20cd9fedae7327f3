use serde::{Deserialize, Serialize};

/// Screen position in logical (DPI-independent) units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a normalized rectangle from two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Top-right corner, where the result popup anchors.
    pub fn top_right(&self) -> Point {
        Point::new(self.x + self.width, self.y)
    }
}

/// Capture rectangle in device pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Modifier-key state sampled from the keyboard at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(1);
    pub const CONTROL: Modifiers = Modifiers(1 << 1);
    pub const SHIFT: Modifiers = Modifiers(1 << 2);
    pub const WIN: Modifiers = Modifiers(1 << 3);

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    None,
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    ButtonDown,
    ButtonUp,
    Move,
    WheelScroll,
}

/// One normalized low-level mouse event. Built once per OS hook callback.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub point: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub wheel_delta: Option<i32>,
}

/// Mouse gesture that opens a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMode {
    MiddleMouse,
    RightMouse,
    AltAndLeftMouse,
}

impl Default for TriggerMode {
    fn default() -> Self {
        TriggerMode::MiddleMouse
    }
}

/// Output of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Started(Point),
    Changed(Rect),
    Completed(Rect),
    Cancelled,
}

/// Events flowing through the app's internal channel.
#[derive(Debug, Clone)]
pub enum AppEvent {
    PipelineFinished,
    Shutdown,
}

/// Events for the presentation side (selection overlay, result popup).
#[derive(Debug, Clone)]
pub enum UiEvent {
    SelectionStarted(Point),
    SelectionChanged(Rect),
    SelectionEnded,
    ShowResult { text: String, anchor: Point },
}
