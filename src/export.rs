/// Export: rasterize the composed layout and hand back PNG bytes under a
/// filename derived from the main caption.
///
/// Rasterization itself is an external collaborator's capability, modeled as
/// the `Rasterizer` trait. The built-in collaborator paints only what the
/// layout dictates (backdrop color plus block bands) and delegates PNG
/// encoding to the `image` crate; it is not a text renderer.
use crate::compositor::{self, Block, Layout};
use crate::error::{StudioError, StudioResult};
use crate::model::{CodeTheme, PostConfig};
use image::{Rgba, RgbaImage};
use std::io::Cursor;
use tracing::error;

/// Edge length of the square export canvas, in pixels
pub const CANVAS_SIZE: u32 = 500;
const CANVAS_PADDING: u32 = 24;

/// Characters of the caption kept in the download filename
pub const FILENAME_STEM_LEN: usize = 20;

/// Filename for a finished export: whitespace runs collapsed to a single
/// hyphen, cut to the first 20 characters, trailing separators trimmed.
pub fn download_filename(text: &str) -> String {
    let mut collapsed = String::new();
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                collapsed.push('-');
            }
            in_whitespace = true;
        } else {
            collapsed.push(ch);
            in_whitespace = false;
        }
    }

    let stem: String = collapsed.chars().take(FILENAME_STEM_LEN).collect();
    let stem = stem.trim_matches('-');
    if stem.is_empty() {
        return "post.png".to_string();
    }
    format!("{}.png", stem)
}

/// A finished export: PNG bytes plus the download filename
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub filename: String,
    pub png: Vec<u8>,
}

/// Bitmap snapshot provider for a composed layout
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, layout: &Layout) -> StudioResult<RgbaImage>;
}

/// Built-in collaborator: solid backdrop plus one band per block, stacked
/// top to bottom at the blocks' effective heights.
#[derive(Debug, Default)]
pub struct BlockRasterizer;

impl BlockRasterizer {
    fn block_height(block: &Block) -> u32 {
        match block {
            Block::Image { height, .. } => *height,
            // Text bands approximate two lines at the effective size
            Block::MainText { font_size, .. } => font_size * 2,
            Block::ThreadText { font_size, .. } => font_size * 2,
            Block::Code { code, .. } => {
                let lines = code.lines().count().max(1) as u32;
                (lines * 16).min(CANVAS_SIZE / 2)
            }
        }
    }

    fn block_color(block: &Block, text_color: Rgba<u8>) -> Rgba<u8> {
        match block {
            Block::Code {
                theme: CodeTheme::Dark,
                ..
            } => Rgba([17, 24, 39, 255]),
            Block::Code {
                theme: CodeTheme::Light,
                ..
            } => Rgba([243, 244, 246, 255]),
            Block::Image { .. } => Rgba([107, 114, 128, 255]),
            Block::MainText { .. } | Block::ThreadText { .. } => text_color,
        }
    }
}

impl Rasterizer for BlockRasterizer {
    fn rasterize(&self, layout: &Layout) -> StudioResult<RgbaImage> {
        let background = parse_hex_color(&layout.backdrop.background_color);
        let text_color = parse_hex_color(&layout.backdrop.text_color);

        let mut frame = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, background);

        let mut y = CANVAS_PADDING;
        for block in &layout.blocks {
            let height = Self::block_height(block);
            let color = Self::block_color(block, text_color);
            let bottom = (y + height).min(CANVAS_SIZE - CANVAS_PADDING);
            for row in y..bottom {
                for x in CANVAS_PADDING..CANVAS_SIZE - CANVAS_PADDING {
                    frame.put_pixel(x, row, color);
                }
            }
            y = bottom + CANVAS_PADDING / 2;
            if y >= CANVAS_SIZE - CANVAS_PADDING {
                break;
            }
        }

        Ok(frame)
    }
}

/// Rasterize a configuration and encode the snapshot as PNG.
///
/// Failures are logged and returned; nothing panics and no partial file is
/// produced.
pub fn export_png(
    rasterizer: &dyn Rasterizer,
    config: &PostConfig,
) -> StudioResult<ExportedImage> {
    let layout = compositor::compose(config);

    let frame = rasterizer.rasterize(&layout).map_err(|e| {
        error!(error = %e, "rasterization failed");
        e
    })?;

    let mut png = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| {
            error!(error = %e, "PNG encoding failed");
            StudioError::Export(format!("PNG encoding failed: {}", e))
        })?;

    Ok(ExportedImage {
        filename: download_filename(&config.text),
        png,
    })
}

/// Parse a `#rrggbb` color, falling back to opaque black
fn parse_hex_color(value: &str) -> Rgba<u8> {
    let hex = value.trim_start_matches('#');
    // The color field is free-form; non-ASCII input must fall back, not slice
    // mid-character
    if hex.len() == 6 && hex.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Rgba([r, g, b, 255]);
        }
    }
    Rgba([0, 0, 0, 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn filename_collapses_whitespace_and_cuts_at_twenty() {
        assert_eq!(
            download_filename("Hello   World this is long"),
            "Hello-World-this-is.png"
        );
    }

    #[test]
    fn filename_keeps_short_captions_whole() {
        assert_eq!(download_filename("Ship it"), "Ship-it.png");
        assert_eq!(download_filename("NoSpaces"), "NoSpaces.png");
    }

    #[test]
    fn filename_handles_exact_boundary() {
        // Exactly 20 characters after collapsing: no truncation, no trim
        assert_eq!(download_filename("abcdefghij klmnopqrs"), "abcdefghij-klmnopqrs.png");
        // 21st character falls off
        assert_eq!(download_filename("abcdefghij klmnopqrsT"), "abcdefghij-klmnopqrs.png");
    }

    #[test]
    fn filename_for_blank_caption_falls_back() {
        assert_eq!(download_filename("   "), "post.png");
        assert_eq!(download_filename(""), "post.png");
    }

    #[test]
    fn export_produces_a_decodable_png() {
        let exported = export_png(&BlockRasterizer, &PostConfig::default()).unwrap();
        assert!(exported.filename.ends_with(".png"));

        let decoded = image::load_from_memory(&exported.png).unwrap();
        assert_eq!(decoded.width(), CANVAS_SIZE);
        assert_eq!(decoded.height(), CANVAS_SIZE);
    }

    #[test]
    fn export_can_be_written_to_disk() {
        let exported = export_png(&BlockRasterizer, &PostConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&exported.filename);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&exported.png).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn hex_parsing_falls_back_to_black() {
        assert_eq!(parse_hex_color("#ffffff"), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_hex_color("not-a-color"), Rgba([0, 0, 0, 255]));
        // 6 bytes but not 6 ASCII hex digits
        assert_eq!(parse_hex_color("#a\u{20ac}ab"), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn export_tolerates_non_ascii_color_strings() {
        let mut config = PostConfig::default();
        config.background_color = "#a\u{20ac}ab".to_string();
        config.text_color = "\u{2764}\u{fe0f}red".to_string();

        let exported = export_png(&BlockRasterizer, &config).unwrap();
        let decoded = image::load_from_memory(&exported.png).unwrap();
        assert_eq!(decoded.width(), CANVAS_SIZE);
    }
}
