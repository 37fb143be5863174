use std::path::Path;

use egui::{Color32, Pos2};

use crate::config::Settings;
use crate::error::ExportResult;
use crate::export::Exporter;
use crate::history::HistoryStore;
use crate::input::InputEvent;
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::tool::{Brush, BrushPreset, StickerPalette, ToolState};

/// One drawing session: committed work, the active tool and the sticker palette.
///
/// All pointer and button actions go through here. Each one that changes
/// what is on screen bumps `revision`.
#[derive(Debug, Clone)]
pub struct Sketchpad {
    settings: Settings,
    store: HistoryStore,
    tools: ToolState,
    palette: StickerPalette,
    renderer: Renderer,
}

impl Sketchpad {
    pub fn new(settings: Settings) -> Self {
        let palette = StickerPalette::new(settings.stickers.as_slice());
        Self::with_palette(settings, palette)
    }

    /// Start a session with a previously saved palette
    pub fn with_palette(settings: Settings, palette: StickerPalette) -> Self {
        let brush = Brush::new(settings.thin_thickness, settings.brush_color);
        Self {
            tools: ToolState::new(brush, settings.sticker_size),
            store: HistoryStore::new(),
            renderer: Renderer::default(),
            settings,
            palette,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Click { position } => self.click(position),
        }
    }

    /// Start a stroke, unless a sticker is waiting to be placed
    pub fn pointer_down(&mut self, position: Pos2) {
        if self.tools.is_sticker_armed() {
            self.tools.update_preview_position(position);
            return;
        }
        let brush = self.tools.brush();
        self.store.begin_stroke(position, brush.thickness, brush.color);
    }

    pub fn pointer_move(&mut self, position: Pos2) {
        if self.store.is_drawing() {
            self.store.extend_stroke(position);
        } else {
            self.tools.update_preview_position(position);
        }
    }

    pub fn pointer_up(&mut self, position: Pos2) {
        self.store.commit_stroke();
        self.tools.update_preview_position(position);
    }

    pub fn pointer_leave(&mut self) {
        self.store.commit_stroke();
    }

    /// Place the armed sticker at `position`
    pub fn click(&mut self, position: Pos2) {
        if let Some(placement) = self.tools.commit_preview(position) {
            log::info!("Placed sticker {:?} at {:?}", placement.glyph, placement.position);
            self.store
                .place_sticker(&placement.glyph, placement.position, placement.size);
        }
    }

    pub fn select_brush(&mut self, thickness: f32, color: Color32) {
        self.tools.select_brush(thickness, color);
    }

    /// Select the thin or thick brush in the current color
    pub fn select_brush_preset(&mut self, preset: BrushPreset) {
        let color = self.tools.brush().color;
        log::info!("Selected {}", preset.label());
        self.tools
            .select_brush(preset.thickness(&self.settings), color);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.tools.set_color(color);
    }

    /// Arm the palette sticker with this id. Returns false for unknown ids.
    pub fn select_sticker(&mut self, id: usize) -> bool {
        let Some(entry) = self.palette.get(id) else {
            log::warn!("No sticker with id {}", id);
            return false;
        };
        let glyph = entry.glyph.clone();
        log::info!("Selected sticker {:?}", glyph);
        self.tools.select_sticker(&glyph);
        true
    }

    /// Add a user-typed glyph to the palette. Blank input is ignored.
    pub fn add_custom_sticker(&mut self, input: &str) -> Option<usize> {
        let id = self.palette.add_custom(input)?.id;
        log::info!("Added custom sticker #{}", id);
        Some(id)
    }

    pub fn undo(&mut self) {
        self.store.undo();
    }

    pub fn redo(&mut self) {
        self.store.redo();
    }

    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.store.clear();
    }

    /// Redraw the visible canvas
    pub fn render(&self, surface: &mut dyn Surface) {
        let preview = self.tools.preview();
        self.renderer
            .render(surface, &self.store, preview.as_ref());
    }

    pub fn exporter(&self) -> Exporter {
        Exporter::new(self.settings.export_scale, self.renderer)
    }

    pub fn export_png_bytes(&self) -> ExportResult<Vec<u8>> {
        self.exporter()
            .export_png_bytes(&self.store, self.settings.canvas_size)
    }

    /// Write the high-resolution PNG to `path`, returning its pixel size
    pub fn export_png(&self, path: &Path) -> ExportResult<[u32; 2]> {
        self.exporter()
            .export_png(&self.store, self.settings.canvas_size, path)
    }

    /// Monotonic change counter covering both history and tool changes
    pub fn revision(&self) -> u64 {
        self.store.revision() + self.tools.revision()
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
