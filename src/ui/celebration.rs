use std::time::Instant;

use ratatui::prelude::*;

use crate::effects::Celebration;

/// Paint confetti straight into the frame buffer, over whatever is there.
pub fn render(frame: &mut Frame, area: Rect, effect: &Celebration) {
    let buffer = frame.buffer_mut();

    for particle in effect.visible_particles(Instant::now()) {
        let position = Position::new(
            area.x.saturating_add(particle.x),
            area.y.saturating_add(particle.y),
        );
        if !area.contains(position) {
            continue;
        }
        if let Some(cell) = buffer.cell_mut(position) {
            cell.set_char(particle.glyph).set_fg(particle.color);
        }
    }
}
