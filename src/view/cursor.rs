//! Magnetic cursor indicator.

use crate::interaction::cursor::CursorFrame;
use crate::view::styles::Palette;
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};

/// Below this opacity the indicator is not drawn.
const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// Draw the indicator over whatever is already in `buf`.
pub fn render_cursor(buf: &mut Buffer, area: Rect, frame: &CursorFrame, palette: &Palette) {
    if frame.opacity < MIN_VISIBLE_OPACITY {
        return;
    }
    let Some((x, y)) = cell_for(frame, area) else {
        return;
    };
    let glyph = if frame.is_active_size() { "◉" } else { "●" };
    let mut style = palette.accent.add_modifier(Modifier::BOLD);
    if frame.opacity < 0.5 {
        style = style.add_modifier(Modifier::DIM);
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(glyph);
        cell.set_fg(style.fg.unwrap_or_default());
        cell.modifier.insert(style.add_modifier);
    }
}

/// Cell under the indicator's position, if inside `area`.
pub fn cell_for(frame: &CursorFrame, area: Rect) -> Option<(u16, u16)> {
    let x = frame.position.x.floor();
    let y = frame.position.y.floor();
    let inside = x >= f64::from(area.left())
        && x < f64::from(area.right())
        && y >= f64::from(area.top())
        && y < f64::from(area.bottom());
    inside.then(|| (x as u16, y as u16))
}
