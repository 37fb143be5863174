mod common;

use common::{DrawCall, RecordingSurface, draw_stroke, pos};
use egui::Color32;
use sketchpad::{HistoryStore, Renderer, Sketchpad, ToolPreview};

fn kinds(calls: &[DrawCall]) -> Vec<&'static str> {
    calls
        .iter()
        .map(|call| match call {
            DrawCall::Clear => "clear",
            DrawCall::Path { .. } => "path",
            DrawCall::Circle { .. } => "circle",
            DrawCall::Text { .. } => "text",
        })
        .collect()
}

#[test]
fn test_layers_render_in_fixed_order() {
    let mut store = HistoryStore::new();
    draw_stroke(&mut store, &[pos(0.0, 0.0), pos(1.0, 1.0)], 1.0);
    store.place_sticker("😀", pos(10.0, 10.0), 24.0);
    draw_stroke(&mut store, &[pos(2.0, 2.0), pos(3.0, 3.0)], 3.0);

    let mut surface = RecordingSurface::default();
    let preview = ToolPreview::Brush {
        center: pos(50.0, 50.0),
        radius: 3.5,
        color: Color32::RED,
    };
    Renderer::default().render(&mut surface, &store, Some(&preview));

    // Both strokes come before the sticker, even the one committed after it
    assert_eq!(kinds(&surface.calls), ["clear", "path", "path", "text", "circle"]);
    match &surface.calls[2] {
        DrawCall::Path { width, .. } => assert_eq!(*width, 3.0),
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn test_in_progress_stroke_on_top_and_preview_hidden() {
    let mut store = HistoryStore::new();
    store.place_sticker("🧽", pos(10.0, 10.0), 24.0);
    store.begin_stroke(pos(0.0, 0.0), 5.0, Color32::BLUE);
    store.extend_stroke(pos(8.0, 8.0));

    let mut surface = RecordingSurface::default();
    let preview = ToolPreview::Sticker {
        glyph: "★".to_owned(),
        position: pos(1.0, 1.0),
        size: 24.0,
    };
    Renderer::default().render(&mut surface, &store, Some(&preview));

    assert_eq!(kinds(&surface.calls), ["clear", "text", "path"]);
    assert_eq!(
        surface.calls[2],
        DrawCall::Path {
            points: vec![pos(0.0, 0.0), pos(8.0, 8.0)],
            width: 5.0,
            color: Color32::BLUE,
        }
    );
}

#[test]
fn test_sketchpad_render_includes_tool_preview() {
    let mut pad = Sketchpad::default();
    pad.select_brush(20.0, Color32::GREEN);
    pad.pointer_move(pos(30.0, 40.0));

    let mut surface = RecordingSurface::default();
    pad.render(&mut surface);
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Clear,
            DrawCall::Circle {
                center: pos(30.0, 40.0),
                radius: 10.0,
                color: Color32::GREEN,
            },
        ]
    );
}

#[test]
fn test_committed_strokes_keep_creation_order() {
    let mut store = HistoryStore::new();
    for i in 0..5 {
        let x = i as f32;
        draw_stroke(&mut store, &[pos(x, 0.0), pos(x, 1.0)], 1.0 + x);
    }

    let mut surface = RecordingSurface::default();
    Renderer::default().render_content(&mut surface, &store);

    let widths: Vec<f32> = surface
        .calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::Path { width, .. } => Some(*width),
            _ => None,
        })
        .collect();
    assert_eq!(widths, [1.0, 2.0, 3.0, 4.0, 5.0]);
}
