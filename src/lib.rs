#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod sketchpad;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tool;
pub mod widgets;

pub use app::PaintApp;
pub use command::{Command, CommandHistory};
pub use config::Settings;
pub use document::Document;
pub use element::{Element, ElementId};
pub use error::{ConfigError, ExportError};
pub use export::Exporter;
pub use history::HistoryStore;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use sketchpad::Sketchpad;
pub use sticker::Sticker;
pub use stroke::{MutableStroke, Stroke};
pub use surface::{PainterSurface, RasterSurface, Surface};
pub use tool::{ActiveTool, Brush, BrushPreset, StickerPalette, ToolPreview, ToolState};
