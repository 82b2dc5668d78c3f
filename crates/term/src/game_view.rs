//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(10, 10, 14);

const SNAKE_STYLE: CellStyle = CellStyle::new(Rgb::WHITE, BOARD_BG).bold();
const FOOD_STYLE: CellStyle = CellStyle::new(Rgb::RED, BOARD_BG).bold();
const EMPTY_STYLE: CellStyle = CellStyle::new(Rgb::new(60, 60, 70), BOARD_BG).dim();
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const OVERLAY_STYLE: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();

/// Glyph used for snake and food cells; color tells them apart.
pub const BLOCK_CHAR: char = '█';
pub const EMPTY_CHAR: char = '·';

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Terminal position of the top-left corner of the border.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let (ch, style) = match snap.cell(row * GRID_WIDTH + col) {
                    CellKind::Snake => (BLOCK_CHAR, SNAKE_STYLE),
                    CellKind::Food => (BLOCK_CHAR, FOOD_STYLE),
                    CellKind::Empty => (EMPTY_CHAR, EMPTY_STYLE),
                };
                let px = start_x + 1 + col as u16 * self.cell_w;
                let py = start_y + 1 + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w, start_y);

        if !snap.started {
            self.draw_overlay_text(fb, start_x, start_y, "PRESS ENTER");
        } else if snap.halted {
            self.draw_overlay_text(fb, start_x, start_y, "GAME OVER");
        } else if snap.collided {
            self.draw_overlay_text(fb, start_x, start_y, "COLLISION");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = BORDER_STYLE;
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "LENGTH", LABEL_STYLE);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.length as u64, VALUE_STYLE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TICK", LABEL_STYLE);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.tick, VALUE_STYLE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HEADING", LABEL_STYLE);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.direction.as_str(), VALUE_STYLE);
        y = y.saturating_add(2);

        let help = VALUE_STYLE.dim();
        for line in ["WASD  steer", "ENTER start", "Q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, text: &str) {
        let (frame_w, frame_h) = self.frame_size();
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_board_plus_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(), (42, 22));
        assert_eq!(view.frame_origin(Viewport::new(42, 22)), (0, 0));
        assert_eq!(view.frame_origin(Viewport::new(50, 30)), (4, 4));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn cell_size_is_at_least_one() {
        let view = GameView::new(0, 0);
        assert_eq!(view.frame_size(), (22, 22));
    }
}
