use crate::{Point2D, contacts::ContactId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// First finger down, or an additional finger down
    Press,
    Move,
    Release,
    Cancel,
    /// Action code the surface doesn't know about; ignored
    Unrecognised(i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub id: ContactId,
    pub action: ContactAction,
    pub x: f32,
    pub y: f32,
}

impl InputEvent {
    pub fn new(id: ContactId, action: ContactAction, position: Point2D) -> Self {
        InputEvent {
            id,
            action,
            x: position.0,
            y: position.1,
        }
    }

    pub fn press(id: ContactId, position: Point2D) -> Self {
        InputEvent::new(id, ContactAction::Press, position)
    }

    pub fn moved(id: ContactId, position: Point2D) -> Self {
        InputEvent::new(id, ContactAction::Move, position)
    }

    pub fn release(id: ContactId, position: Point2D) -> Self {
        InputEvent::new(id, ContactAction::Release, position)
    }

    pub fn cancel(id: ContactId) -> Self {
        InputEvent::new(id, ContactAction::Cancel, (0., 0.))
    }

    pub fn position(&self) -> Point2D {
        (self.x, self.y)
    }
}

/// Notified whenever a press or move has been processed.
pub trait TouchListener {
    fn on_touch(&mut self);
}

impl<F: FnMut()> TouchListener for F {
    fn on_touch(&mut self) {
        self()
    }
}
