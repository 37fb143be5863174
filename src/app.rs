use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::input::InputHandler;
use crate::panels::{central_panel, sticker_prompt, tools_panel};
use crate::sketchpad::Sketchpad;
use crate::tool::StickerPalette;

/// What survives a restart
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PersistedState {
    palette: Option<StickerPalette>,
}

pub struct PaintApp {
    sketchpad: Sketchpad,
    input: InputHandler,
    /// Whether the custom sticker prompt is open
    show_sticker_prompt: bool,
    sticker_input: String,
    /// Last export outcome, shown in the tools panel
    status: Option<String>,
    last_revision: u64,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::from_sketchpad(Sketchpad::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let persisted: PersistedState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let sketchpad = match persisted.palette {
            Some(palette) if !palette.is_empty() => {
                log::info!("Restored sticker palette ({} stickers)", palette.len());
                Sketchpad::with_palette(settings, palette)
            }
            _ => Sketchpad::new(settings),
        };
        Self::from_sketchpad(sketchpad)
    }

    fn from_sketchpad(sketchpad: Sketchpad) -> Self {
        Self {
            sketchpad,
            input: InputHandler::new(egui::Rect::NOTHING),
            show_sticker_prompt: false,
            sticker_input: String::new(),
            status: None,
            last_revision: 0,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Feed this frame's pointer input over the canvas to the sketchpad
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        self.input.set_canvas_rect(canvas.rect);
        self.input.set_canvas_layer(canvas.layer_id);
        for event in self.input.process_input(ctx) {
            self.sketchpad.handle_input(event);
        }
    }

    /// Export to the configured file and record the outcome for the UI
    pub fn export(&mut self) {
        let file_name = self.sketchpad.settings().export_file_name.clone();
        match self.sketchpad.export_png(Path::new(&file_name)) {
            Ok([width, height]) => {
                self.status = Some(format!("Exported {}x{} to {}", width, height, file_name));
            }
            Err(err) => {
                log::error!("Export failed: {}", err);
                self.status = Some(format!("Export failed: {}", err));
            }
        }
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_input.clear();
        self.show_sticker_prompt = true;
    }

    pub fn is_sticker_prompt_open(&self) -> bool {
        self.show_sticker_prompt
    }

    pub fn sticker_input_mut(&mut self) -> &mut String {
        &mut self.sticker_input
    }

    /// Close the prompt, adding the typed sticker if `accept` is set
    pub fn close_sticker_prompt(&mut self, accept: bool) {
        if accept {
            let input = std::mem::take(&mut self.sticker_input);
            self.sketchpad.add_custom_sticker(&input);
        }
        self.sticker_input.clear();
        self.show_sticker_prompt = false;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
        const REDO: KeyboardShortcut =
            KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

        // Check redo first: the undo shortcut would also match it
        if ctx.input_mut(|i| i.consume_shortcut(&REDO)) {
            self.sketchpad.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.sketchpad.undo();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            palette: Some(self.sketchpad.palette().clone()),
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.show_sticker_prompt {
            self.handle_shortcuts(ctx);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
        sticker_prompt(self, ctx);

        let revision = self.sketchpad.revision();
        if revision != self.last_revision {
            self.last_revision = revision;
            ctx.request_repaint();
        }
    }
}
