use std::{cell::Cell, rc::Rc};

use log::info;
use touch_paint::paint_surface::PaintSurface;

use crate::{touch_input::TouchInput, ui::render_ui};

pub struct Model {
    pub paint_surface: PaintSurface,
    pub touch_input: TouchInput,
    pub touches_seen: Rc<Cell<u64>>,
    pub show_overlay: bool,
}

impl Model {
    pub fn new(mut paint_surface: PaintSurface, pointer_enabled: bool) -> Self {
        let touches_seen = Rc::new(Cell::new(0));
        let counter = touches_seen.clone();
        paint_surface.set_touch_listener(move || counter.set(counter.get() + 1));

        info!(
            "Touch Paint started OK; pointer contacts {}",
            if pointer_enabled { "enabled" } else { "disabled" }
        );

        Model {
            paint_surface,
            touch_input: TouchInput::new(pointer_enabled),
            touches_seen,
            show_overlay: true,
        }
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        for event in events.iter() {
            if let Some(input_event) = self.touch_input.translate(event) {
                self.paint_surface.on_input_event(&input_event);
            }
        }

        if ctx.input(|i| i.key_pressed(egui::Key::H)) {
            self.show_overlay = !self.show_overlay;
        }

        if self.paint_surface.take_redraw_request() {
            ctx.request_repaint();
        }

        render_ui(ctx, self);

        // Wake up again for the next scheduled removal, even without any input
        if let Some(wakeup) = self.paint_surface.next_wakeup() {
            ctx.request_repaint_after(wakeup);
        }
    }
}
