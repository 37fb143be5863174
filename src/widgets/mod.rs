mod sticker_button;

pub use sticker_button::StickerButton;
