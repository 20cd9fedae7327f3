//! Pure translation of `WH_MOUSE_LL` messages into [`PointerEvent`]s.
//!
//! Kept free of OS types so the mapping is testable on any platform.

use gaze_types::{Modifiers, MouseButton, Point, PointerEvent, PointerKind};

pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_RBUTTONDOWN: u32 = 0x0204;
pub const WM_RBUTTONUP: u32 = 0x0205;
pub const WM_MBUTTONDOWN: u32 = 0x0207;
pub const WM_MBUTTONUP: u32 = 0x0208;
pub const WM_MOUSEWHEEL: u32 = 0x020A;

/// Decode one hook message. `mouse_data` is the raw `MSLLHOOKSTRUCT`
/// field; for wheel messages its signed high word carries the delta.
/// Returns `None` for messages the gesture layer has no use for.
pub fn decode_message(
    message: u32,
    x: i32,
    y: i32,
    mouse_data: u32,
    modifiers: Modifiers,
) -> Option<PointerEvent> {
    let point = Point::new(x as f64, y as f64);

    let (kind, button, wheel_delta) = match message {
        WM_LBUTTONDOWN => (PointerKind::ButtonDown, MouseButton::Left, None),
        WM_LBUTTONUP => (PointerKind::ButtonUp, MouseButton::Left, None),
        WM_RBUTTONDOWN => (PointerKind::ButtonDown, MouseButton::Right, None),
        WM_RBUTTONUP => (PointerKind::ButtonUp, MouseButton::Right, None),
        WM_MBUTTONDOWN => (PointerKind::ButtonDown, MouseButton::Middle, None),
        WM_MBUTTONUP => (PointerKind::ButtonUp, MouseButton::Middle, None),
        WM_MOUSEMOVE => (PointerKind::Move, MouseButton::None, None),
        WM_MOUSEWHEEL => {
            let delta = ((mouse_data >> 16) & 0xFFFF) as u16 as i16 as i32;
            (PointerKind::WheelScroll, MouseButton::None, Some(delta))
        }
        _ => return None,
    };

    Some(PointerEvent {
        kind,
        point,
        button,
        modifiers,
        wheel_delta,
    })
}
