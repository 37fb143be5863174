mod common;

use common::pos;
use egui::Color32;
use sketchpad::{ActiveTool, BrushPreset, InputEvent, Settings, Sketchpad, ToolPreview};

fn sticker_id(pad: &Sketchpad, glyph: &str) -> usize {
    pad.palette()
        .entries()
        .iter()
        .find(|e| e.glyph == glyph)
        .map(|e| e.id)
        .unwrap()
}

#[test]
fn test_drag_draws_a_stroke() {
    let mut pad = Sketchpad::default();
    pad.select_brush_preset(BrushPreset::Thick);

    for event in [
        InputEvent::PointerMove { position: pos(0.0, 0.0) },
        InputEvent::PointerDown { position: pos(0.0, 0.0) },
        InputEvent::PointerMove { position: pos(5.0, 5.0) },
        InputEvent::PointerMove { position: pos(10.0, 10.0) },
        InputEvent::PointerUp { position: pos(10.0, 10.0) },
    ] {
        pad.handle_input(event);
    }

    let strokes: Vec<_> = pad.store().document().strokes().collect();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].points(), &[pos(0.0, 0.0), pos(5.0, 5.0), pos(10.0, 10.0)]);
    assert_eq!(strokes[0].thickness(), 20.0);
    assert!(!pad.store().is_drawing());

    // Brush stays selected after use
    assert!(matches!(pad.tools().active(), ActiveTool::Brush(_)));
    assert!(pad.tools().preview().is_some());
}

#[test]
fn test_pointer_leave_ends_stroke() {
    let mut pad = Sketchpad::default();
    pad.pointer_down(pos(1.0, 1.0));
    pad.pointer_move(pos(2.0, 2.0));
    pad.pointer_leave();

    assert!(!pad.store().is_drawing());
    assert_eq!(pad.store().document().strokes().count(), 1);

    // Moves after leaving don't extend anything
    pad.pointer_move(pos(3.0, 3.0));
    let stroke = pad.store().document().strokes().next().unwrap();
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn test_preview_frozen_while_drawing() {
    let mut pad = Sketchpad::default();
    pad.select_brush_preset(BrushPreset::Thin);
    pad.pointer_move(pos(4.0, 4.0));
    pad.pointer_down(pos(4.0, 4.0));
    pad.pointer_move(pos(30.0, 30.0));
    assert_eq!(pad.tools().pointer(), pos(4.0, 4.0));

    pad.pointer_up(pos(30.0, 30.0));
    assert_eq!(pad.tools().pointer(), pos(30.0, 30.0));
}

#[test]
fn test_sticker_click_places_once() {
    let mut pad = Sketchpad::new(Settings {
        stickers: vec!["★".to_owned()],
        ..Default::default()
    });
    assert!(pad.select_sticker(sticker_id(&pad, "★")));

    pad.pointer_move(pos(50.0, 50.0));
    assert_eq!(
        pad.tools().preview(),
        Some(ToolPreview::Sticker {
            glyph: "★".to_owned(),
            position: pos(50.0, 50.0),
            size: 24.0,
        })
    );

    pad.handle_input(InputEvent::PointerDown { position: pos(50.0, 50.0) });
    pad.handle_input(InputEvent::PointerUp { position: pos(50.0, 50.0) });
    pad.handle_input(InputEvent::Click { position: pos(50.0, 50.0) });

    let doc = pad.store().document();
    assert_eq!(doc.len(), 1, "a sticker click must not also commit a stroke");
    let sticker = doc.stickers().next().unwrap();
    assert_eq!(sticker.glyph(), "★");
    assert_eq!(sticker.position(), pos(50.0, 50.0));
    assert!(pad.tools().preview().is_none());

    // Consumed: a second click places nothing
    pad.click(pos(60.0, 60.0));
    assert_eq!(pad.store().document().len(), 1);
}

#[test]
fn test_sticker_placed_after_long_press_with_movement() {
    let mut pad = Sketchpad::default();
    assert!(pad.select_sticker(3));

    // A slow, wobbly press still ends in a Click from the canvas input
    for event in [
        InputEvent::PointerMove { position: pos(40.0, 40.0) },
        InputEvent::PointerDown { position: pos(40.0, 40.0) },
        InputEvent::PointerMove { position: pos(46.0, 43.0) },
        InputEvent::PointerMove { position: pos(52.0, 47.0) },
        InputEvent::PointerUp { position: pos(52.0, 47.0) },
        InputEvent::Click { position: pos(52.0, 47.0) },
    ] {
        pad.handle_input(event);
    }

    let doc = pad.store().document();
    assert_eq!(doc.len(), 1);
    let sticker = doc.stickers().next().unwrap();
    assert_eq!(sticker.glyph(), "😀");
    assert_eq!(sticker.position(), pos(52.0, 47.0));
}

#[test]
fn test_sticker_placed_at_click_position() {
    let mut pad = Sketchpad::default();
    pad.select_sticker(1);
    pad.pointer_move(pos(10.0, 10.0));
    pad.click(pos(12.0, 14.0));

    let sticker = pad.store().document().stickers().next().unwrap();
    assert_eq!(sticker.position(), pos(12.0, 14.0));
}

#[test]
fn test_unknown_sticker_id_rejected() {
    let mut pad = Sketchpad::default();
    let revision = pad.revision();
    assert!(!pad.select_sticker(99));
    assert_eq!(pad.revision(), revision);
}

#[test]
fn test_custom_sticker_added_to_palette() {
    let mut pad = Sketchpad::default();
    let before = pad.palette().len();

    assert_eq!(pad.add_custom_sticker(""), None);
    assert_eq!(pad.palette().len(), before);

    let id = pad.add_custom_sticker("🎨").unwrap();
    assert_eq!(id, before + 1);
    assert!(pad.select_sticker(id));
    pad.click(pos(1.0, 2.0));
    assert_eq!(pad.store().document().stickers().next().unwrap().glyph(), "🎨");
}

#[test]
fn test_color_applies_to_next_stroke() {
    let mut pad = Sketchpad::default();
    pad.select_brush_preset(BrushPreset::Thin);
    pad.set_color(Color32::RED);
    pad.pointer_down(pos(0.0, 0.0));
    pad.pointer_up(pos(0.0, 0.0));

    let stroke = pad.store().document().strokes().next().unwrap();
    assert_eq!(stroke.color(), Color32::RED);
    assert_eq!(stroke.thickness(), 7.0);
}

#[test]
fn test_undo_redo_clear_through_sketchpad() {
    let mut pad = Sketchpad::default();
    pad.pointer_down(pos(0.0, 0.0));
    pad.pointer_move(pos(1.0, 1.0));
    pad.pointer_up(pos(1.0, 1.0));
    pad.select_sticker(1);
    pad.click(pos(5.0, 5.0));
    assert_eq!(pad.store().document().len(), 2);

    pad.undo();
    pad.undo();
    pad.undo();
    assert!(pad.store().document().is_empty());
    pad.redo();
    assert_eq!(pad.store().document().strokes().count(), 1);

    pad.clear();
    assert!(pad.store().document().is_empty());
    assert!(!pad.store().can_undo());
    assert!(!pad.store().can_redo());
}

#[test]
fn test_revision_tracks_visible_changes() {
    let mut pad = Sketchpad::default();
    let start = pad.revision();

    // No preview yet, so moving the pointer changes nothing visible
    pad.pointer_move(pos(3.0, 3.0));
    assert_eq!(pad.revision(), start);

    pad.select_brush_preset(BrushPreset::Thin);
    let selected = pad.revision();
    assert!(selected > start);

    pad.pointer_move(pos(4.0, 4.0));
    assert!(pad.revision() > selected);
}
