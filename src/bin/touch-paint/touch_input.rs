use egui::{Event, PointerButton, TouchPhase};
use log::{debug, info};
use touch_paint::{
    contacts::ContactId,
    input::{ContactAction, InputEvent},
};

/// Contact id used for the mouse pointer; real touch ids come from the platform.
pub const POINTER_CONTACT_ID: ContactId = ContactId::MAX;

/// Turns egui events into contact events.
///
/// Platforms also report the first finger as a pointer. Once any real touch has been
/// seen, pointer events are ignored so a finger is not counted twice.
pub struct TouchInput {
    pointer_enabled: bool,
    pointer_pressed: bool,
    touch_seen: bool,
}

impl TouchInput {
    pub fn new(pointer_enabled: bool) -> Self {
        TouchInput {
            pointer_enabled,
            pointer_pressed: false,
            touch_seen: false,
        }
    }

    pub fn translate(&mut self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Touch { id, phase, pos, .. } => {
                if !self.touch_seen {
                    info!("Touch input detected; pointer events will be ignored from now on");
                    self.touch_seen = true;
                }
                let action = match phase {
                    TouchPhase::Start => ContactAction::Press,
                    TouchPhase::Move => ContactAction::Move,
                    TouchPhase::End => ContactAction::Release,
                    TouchPhase::Cancel => ContactAction::Cancel,
                };
                Some(InputEvent::new(id.0, action, (pos.x, pos.y)))
            }
            _ if !self.pointer_enabled || self.touch_seen => None,
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                if *pressed {
                    self.pointer_pressed = true;
                    Some(InputEvent::press(POINTER_CONTACT_ID, (pos.x, pos.y)))
                } else if self.pointer_pressed {
                    self.pointer_pressed = false;
                    Some(InputEvent::release(POINTER_CONTACT_ID, (pos.x, pos.y)))
                } else {
                    None
                }
            }
            Event::PointerMoved(pos) if self.pointer_pressed => {
                Some(InputEvent::moved(POINTER_CONTACT_ID, (pos.x, pos.y)))
            }
            Event::PointerGone if self.pointer_pressed => {
                debug!("Pointer left the window while pressed");
                self.pointer_pressed = false;
                Some(InputEvent::cancel(POINTER_CONTACT_ID))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::{Modifiers, Pos2, TouchDeviceId, TouchId, pos2};

    use super::*;

    fn touch(id: u64, phase: TouchPhase, pos: Pos2) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos,
            force: 0.,
        }
    }

    fn button(pressed: bool, pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn touch_phases_map_to_actions() {
        let mut input = TouchInput::new(true);
        let cases = [
            (TouchPhase::Start, ContactAction::Press),
            (TouchPhase::Move, ContactAction::Move),
            (TouchPhase::End, ContactAction::Release),
            (TouchPhase::Cancel, ContactAction::Cancel),
        ];
        for (phase, action) in cases {
            let event = input.translate(&touch(4, phase, pos2(3., 7.))).unwrap();
            assert_eq!(event, InputEvent::new(4, action, (3., 7.)));
        }
    }

    #[test]
    fn pointer_drag_is_one_contact() {
        let mut input = TouchInput::new(true);
        assert_eq!(input.translate(&Event::PointerMoved(pos2(1., 1.))), None);
        assert_eq!(
            input.translate(&button(true, pos2(1., 1.))),
            Some(InputEvent::press(POINTER_CONTACT_ID, (1., 1.)))
        );
        assert_eq!(
            input.translate(&Event::PointerMoved(pos2(2., 3.))),
            Some(InputEvent::moved(POINTER_CONTACT_ID, (2., 3.)))
        );
        assert_eq!(
            input.translate(&button(false, pos2(2., 3.))),
            Some(InputEvent::release(POINTER_CONTACT_ID, (2., 3.)))
        );
        assert_eq!(input.translate(&Event::PointerMoved(pos2(5., 5.))), None);
    }

    #[test]
    fn pointer_leaving_window_cancels() {
        let mut input = TouchInput::new(true);
        input.translate(&button(true, pos2(1., 1.)));
        assert_eq!(
            input.translate(&Event::PointerGone),
            Some(InputEvent::cancel(POINTER_CONTACT_ID))
        );
        assert_eq!(input.translate(&Event::PointerGone), None);
    }

    #[test]
    fn pointer_ignored_after_first_touch() {
        let mut input = TouchInput::new(true);
        input.translate(&touch(1, TouchPhase::Start, pos2(0., 0.)));
        assert_eq!(input.translate(&button(true, pos2(0., 0.))), None);
    }

    #[test]
    fn pointer_can_be_disabled() {
        let mut input = TouchInput::new(false);
        assert_eq!(input.translate(&button(true, pos2(0., 0.))), None);
        assert!(
            input
                .translate(&touch(1, TouchPhase::Start, pos2(0., 0.)))
                .is_some()
        );
    }
}
