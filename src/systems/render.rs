//! Replays a [`DrawList`] through raylib.
//!
//! Commands are drawn in emission order. Unknown texture keys are skipped;
//! the asset layer always registers a placeholder, so a miss here means the
//! screen referenced a key it never loaded.

use raylib::prelude::*;

use crate::resources::drawlist::{Destination, DrawCommand, DrawList};
use crate::resources::texturestore::TextureStore;

/// Source and destination rectangles plus the pivot for one command.
///
/// `texture_size` is the full texture size, used when the command has no
/// source rectangle.
pub fn resolve_geometry(command: &DrawCommand, texture_size: Vector2) -> (Rectangle, Rectangle, Vector2) {
    let source = command
        .source
        .unwrap_or(Rectangle::new(0.0, 0.0, texture_size.x, texture_size.y));
    match command.destination {
        Destination::Rect(rect) => (source, rect, command.origin),
        Destination::Position(position) => {
            let dest = Rectangle {
                x: position.x,
                y: position.y,
                width: source.width * command.scale,
                height: source.height * command.scale,
            };
            (source, dest, command.origin.scale_by(command.scale))
        }
    }
}

pub fn render_draw_list<D: RaylibDraw>(d: &mut D, list: &DrawList, textures: &TextureStore) {
    for command in list.iter() {
        let Some(texture) = textures.get(&command.texture) else {
            continue;
        };
        let size = Vector2 {
            x: texture.width as f32,
            y: texture.height as f32,
        };
        let (source, dest, origin) = resolve_geometry(command, size);
        d.draw_texture_pro(texture, source, dest, origin, command.rotation, command.tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_destination_uses_full_texture() {
        let cmd = DrawCommand::rect("bg", Rectangle::new(0.0, 0.0, 1600.0, 900.0));
        let (src, dest, origin) = resolve_geometry(&cmd, Vector2 { x: 800.0, y: 600.0 });
        assert_eq!(src.width, 800.0);
        assert_eq!(src.height, 600.0);
        assert_eq!(dest.width, 1600.0);
        assert_eq!(origin.x, 0.0);
    }

    #[test]
    fn test_position_destination_scales_size_and_origin() {
        let cmd = DrawCommand::at("quad", Vector2 { x: 100.0, y: 50.0 })
            .with_origin(Vector2 { x: 200.0, y: 100.0 })
            .with_scale(0.5);
        let (_, dest, origin) = resolve_geometry(&cmd, Vector2 { x: 400.0, y: 200.0 });
        assert_eq!(dest.x, 100.0);
        assert_eq!(dest.width, 200.0);
        assert_eq!(dest.height, 100.0);
        assert_eq!(origin.x, 100.0);
        assert_eq!(origin.y, 50.0);
    }
}
