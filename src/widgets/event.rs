use crate::layout::Offset;

/// One pointer sample as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Page-relative X position
    pub x: f32,
    /// Page-relative Y position
    pub y: f32,
    /// X movement since the previous sample of the same pointer
    pub movement_x: f32,
    /// Y movement since the previous sample of the same pointer
    pub movement_y: f32,
    /// Host timestamp in milliseconds
    pub time_stamp: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, time_stamp: f64) -> Self {
        Self {
            x,
            y,
            movement_x: 0.0,
            movement_y: 0.0,
            time_stamp,
        }
    }

    pub fn with_movement(mut self, movement_x: f32, movement_y: f32) -> Self {
        self.movement_x = movement_x;
        self.movement_y = movement_y;
        self
    }

    pub fn position(&self) -> Offset {
        Offset::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed
    Down(PointerSample),
    /// Pointer moved (pressed or not)
    Move(PointerSample),
    /// Pointer released
    Up(PointerSample),
}

impl PointerEvent {
    pub fn sample(&self) -> &PointerSample {
        match self {
            PointerEvent::Down(s) | PointerEvent::Move(s) | PointerEvent::Up(s) => s,
        }
    }

    pub fn time_stamp(&self) -> f64 {
        self.sample().time_stamp
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}
