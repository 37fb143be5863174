use egui::{Context, LayerId, PointerButton, Pos2, Rect};

/// Canvas input, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without buttons pressed)
    PointerMove { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
    /// Primary button was pressed and released over the canvas
    Click { position: Pos2 },
}

/// Turns raw egui pointer state into canvas `InputEvent`s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    canvas_layer: LayerId,
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            canvas_layer: LayerId::background(),
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Layer the canvas is painted on. Pointers over any other layer are ignored.
    pub fn set_canvas_layer(&mut self, layer: LayerId) {
        self.canvas_layer = layer;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// The pointer position if it is over the canvas and nothing covers it
    fn canvas_hover(&self, ctx: &Context) -> Option<Pos2> {
        let pos = ctx
            .input(|input| input.pointer.hover_pos())
            .filter(|pos| self.canvas_rect.contains(*pos))?;
        // Windows and modals register as areas; bare panels have no layer here
        ctx.layer_id_at(pos)
            .is_none_or(|top| top == self.canvas_layer)
            .then_some(pos)
    }

    /// Process this frame's pointer input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let hover = self.canvas_hover(ctx);
        let (pressed, released) = ctx.input(|input| {
            (
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });

        match hover {
            Some(pos) => {
                let position = self.to_local(pos);
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { position });
                }
                if pressed {
                    self.pressed_on_canvas = true;
                    events.push(InputEvent::PointerDown { position });
                }
                if released {
                    events.push(InputEvent::PointerUp { position });
                    if self.pressed_on_canvas {
                        events.push(InputEvent::Click { position });
                    }
                }
            }
            None if self.last_pointer_pos.is_some() => {
                events.push(InputEvent::PointerLeave);
            }
            None => {}
        }

        if released || hover.is_none() {
            self.pressed_on_canvas = false;
        }
        self.last_pointer_pos = hover;
        events
    }
}
