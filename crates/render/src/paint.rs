//! Cairo painting of a Frame

use crate::sprites::SpriteCatalogue;
use doomguy_status_core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use doomguy_status_types::Frame;
use gtk4::cairo;
use gtk4::prelude::GdkCairoContextExt;

/// Scale factors from the canvas to a `width` x `height` surface
pub fn canvas_scale(width: f64, height: f64) -> (f64, f64) {
    (width / CANVAS_WIDTH as f64, height / CANVAS_HEIGHT as f64)
}

/// Paint every placement in order, each sprite centred on its coordinate
///
/// Placements whose glyph is not in the catalogue are skipped.
pub fn paint_frame(
    cr: &cairo::Context,
    catalogue: &SpriteCatalogue,
    frame: &Frame,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (sx, sy) = canvas_scale(width, height);

    cr.save()?;
    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.paint()?;
    cr.scale(sx, sy);

    for placement in frame.iter() {
        let Some(pixbuf) = catalogue.get(placement.glyph) else {
            log::debug!("No sprite for {:?}", placement.glyph);
            continue;
        };
        let x = placement.x - pixbuf.width() as f64 / 2.0;
        let y = placement.y - pixbuf.height() as f64 / 2.0;
        cr.set_source_pixbuf(pixbuf, x, y);
        // keep the pixel art crisp when zoomed
        cr.source().set_filter(cairo::Filter::Nearest);
        cr.paint()?;
    }

    cr.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::testing::sprite_dir;
    use doomguy_status_types::GlyphToken;

    #[test]
    fn test_canvas_scale() {
        assert_eq!(canvas_scale(640.0, 64.0), (2.0, 2.0));
        assert_eq!(canvas_scale(320.0, 32.0), (1.0, 1.0));
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_sprite_is_centred() {
        let dir = sprite_dir("paint-centred");
        let catalogue = SpriteCatalogue::load(&dir).unwrap();

        let mut frame = Frame::default();
        frame.push(GlyphToken::FaceGod, (160.0, 16.0));

        let mut surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, 320, 32).unwrap();
        {
            let cr = cairo::Context::new(&surface).unwrap();
            paint_frame(&cr, &catalogue, &frame, 320.0, 32.0).unwrap();
        }
        surface.flush();

        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        // native-endian ARGB32, red is byte 2
        let red = |x: usize, y: usize| data[y * stride + x * 4 + 2];
        // 4x4 sprite centred on (160, 16) covers 158..162 x 14..18
        assert_eq!(red(158, 14), 255);
        assert_eq!(red(161, 17), 255);
        assert_eq!(red(157, 14), 0);
        assert_eq!(red(162, 18), 0);

        drop(data);
        let _ = std::fs::remove_dir_all(dir);
    }
}
