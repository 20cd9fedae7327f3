use gaze_types::{
    GestureEvent, Modifiers, MouseButton, Point, PointerEvent, PointerKind, Rect, TriggerMode,
};

/// Selections narrower or shorter than this (logical units) are discarded.
pub const MIN_SELECTION_SIZE: f64 = 10.0;

/// Observable phases of the selection/pipeline state machine.
///
/// Selection-active and pipeline-busy are deliberately one guard: while a
/// pipeline runs, no new session can open, so the result surface is never
/// asked to render two answers at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    AwaitingGesture,
    Selecting,
    RunningPipeline,
}

/// Does a button-down event open a selection under the configured trigger?
///
/// Modifier state is sampled from the keyboard at event time, not carried in
/// the button event itself.
pub fn matches_trigger(mode: TriggerMode, button: MouseButton, modifiers: Modifiers) -> bool {
    match mode {
        TriggerMode::MiddleMouse => button == MouseButton::Middle && modifiers.is_empty(),
        TriggerMode::RightMouse => button == MouseButton::Right && modifiers.is_empty(),
        // Other modifiers may be held alongside Alt.
        TriggerMode::AltAndLeftMouse => {
            button == MouseButton::Left && modifiers.contains(Modifiers::ALT)
        }
    }
}

/// Turns the pointer-event stream into selection gestures.
///
/// Pure and synchronous; runs on the hook's event path, so transitions must
/// stay in-memory and fast.
pub struct GestureController {
    trigger: TriggerMode,
    phase: GesturePhase,
    origin: Point,
    current: Point,
}

impl GestureController {
    pub fn new(trigger: TriggerMode) -> Self {
        Self {
            trigger,
            phase: GesturePhase::AwaitingGesture,
            origin: Point::default(),
            current: Point::default(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Feed one pointer event; returns the gesture transition it causes, if
    /// any.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<GestureEvent> {
        match (self.phase, event.kind) {
            (GesturePhase::AwaitingGesture, PointerKind::ButtonDown) => {
                if !matches_trigger(self.trigger, event.button, event.modifiers) {
                    return None;
                }
                self.phase = GesturePhase::Selecting;
                self.origin = event.point;
                self.current = event.point;
                Some(GestureEvent::Started(event.point))
            }
            // No re-entrant sessions, and no new session while a pipeline
            // holds the guard.
            (GesturePhase::Selecting, PointerKind::ButtonDown) => None,
            (GesturePhase::RunningPipeline, PointerKind::ButtonDown) => None,
            (GesturePhase::Selecting, PointerKind::Move) => {
                self.current = event.point;
                Some(GestureEvent::Changed(self.selection_rect()))
            }
            // Releasing *any* button closes an open selection, tolerating
            // chorded input and stray extra clicks.
            (GesturePhase::Selecting, PointerKind::ButtonUp) => {
                let rect = self.selection_rect();
                if rect.width >= MIN_SELECTION_SIZE && rect.height >= MIN_SELECTION_SIZE {
                    self.phase = GesturePhase::RunningPipeline;
                    Some(GestureEvent::Completed(rect))
                } else {
                    tracing::debug!(
                        width = rect.width,
                        height = rect.height,
                        "selection below minimum size, cancelled"
                    );
                    self.phase = GesturePhase::AwaitingGesture;
                    Some(GestureEvent::Cancelled)
                }
            }
            _ => None,
        }
    }

    /// Clears the busy guard once a pipeline run reaches a terminal stage.
    pub fn finish_pipeline(&mut self) {
        if self.phase == GesturePhase::RunningPipeline {
            self.phase = GesturePhase::AwaitingGesture;
        }
    }

    fn selection_rect(&self) -> Rect {
        Rect::from_corners(self.origin, self.current)
    }
}
