//! Menu geometry.
//!
//! Everything here is a free function of explicit sizes so it can be tested
//! without a window. Sizes are computed in whole pixels, the way the button
//! art was laid out.

use raylib::prelude::{Rectangle, Vector2};

use crate::resources::assets::Drawable;
use crate::resources::drawlist::{DrawCommand, DrawList};

/// Width to height ratio of a menu button.
const BUTTON_ASPECT: i32 = 3;
/// Gap between stacked menu buttons.
const BUTTON_SPACING: i32 = 20;
/// Distance of the menu buttons from the left edge.
const BUTTON_LEFT_MARGIN: i32 = 100;
/// Gap between the two map buttons.
const MAP_BUTTON_SPACING: i32 = BUTTON_SPACING * 3;

fn button_size(viewport: Vector2) -> (i32, i32) {
    let width = viewport.x as i32 / 4;
    (width, width / BUTTON_ASPECT)
}

fn rect(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(x as f32, y as f32, width as f32, height as f32)
}

/// New game, load game, support and customize, stacked on the left.
pub fn menu_button_rects(viewport: Vector2) -> [Rectangle; 4] {
    let (width, height) = button_size(viewport);
    let start_y = viewport.y as i32 / 5;
    std::array::from_fn(|i| {
        let y = start_y + (height + BUTTON_SPACING) * i as i32;
        rect(BUTTON_LEFT_MARGIN, y, width, height)
    })
}

/// The two map buttons side by side, centered horizontally.
pub fn map_button_rects(viewport: Vector2) -> [Rectangle; 2] {
    let (width, height) = button_size(viewport);
    let x = (viewport.x as i32 - (width * 2 + MAP_BUTTON_SPACING)) / 2;
    let y = viewport.y as i32 / 3;
    [
        rect(x, y, width, height),
        rect(x + width + MAP_BUTTON_SPACING, y, width, height),
    ]
}

/// Half-open hit test: the right and bottom edges are outside.
pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Region of a `texture_width` x `texture_height` texture that fills the
/// viewport without distortion, cropping the excess equally on both sides.
pub fn cover_source_rect(texture_width: u32, texture_height: u32, viewport: Vector2) -> Rectangle {
    let tw = texture_width as i32;
    let th = texture_height as i32;
    if tw <= 0 || th <= 0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
        return rect(0, 0, tw, th);
    }
    let screen_aspect = viewport.x / viewport.y;
    let texture_aspect = tw as f32 / th as f32;
    if screen_aspect > texture_aspect {
        let height = (tw as f32 / screen_aspect) as i32;
        rect(0, (th - height) / 2, tw, height)
    } else {
        let width = (th as f32 * screen_aspect) as i32;
        rect((tw - width) / 2, 0, width, th)
    }
}

/// Fill the viewport with `background`, cropped to keep its aspect ratio.
pub fn draw_cover_background(surface: &mut DrawList, background: &Drawable, viewport: Vector2) {
    let source = cover_source_rect(background.width, background.height, viewport);
    surface.push(
        DrawCommand::rect(&background.key, Rectangle::new(0.0, 0.0, viewport.x, viewport.y))
            .with_source(source),
    );
}
