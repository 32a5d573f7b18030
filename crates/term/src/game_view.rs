//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MoveEvent, GRID_SIZE, WIN_TILE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
const BANNER: CellStyle = CellStyle::plain(Rgb::new(250, 204, 21), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six-digit tile with padding and looks roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.tile_w + 2,
            GRID_SIZE as u16 * self.tile_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            // Leave one row for the win banner.
            AnchorY::Top => 1,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (r, line) in snap.grid.iter().enumerate() {
            for (c, &value) in line.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if !snap.playable() {
            let text = if snap.finished_with_win() { "YOU WIN!" } else { "GAME OVER" };
            let mid_y = start_y + frame_h / 2;
            fb.put_str_centered(start_x, mid_y, frame_w, text, OVERLAY);
            fb.put_str_centered(start_x, mid_y + 1, frame_w, "r: new game", OVERLAY.dim());
        } else if snap.won && start_y > 0 {
            fb.put_str_centered(start_x, start_y - 1, frame_w, "2048! keep going", BANNER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: u32) {
        let px = start_x + 1 + col * self.tile_w;
        let py = start_y + 1 + row * self.tile_h;
        let style = tile_style(value);

        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
        let mid = py + self.tile_h / 2;
        if value == 0 {
            fb.put_str_centered(px, mid, self.tile_w, "·", style.dim());
        } else {
            fb.put_u32_centered(px, mid, self.tile_w, value, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y += 1;
        let n = fb.put_u32(panel_x, y, snap.score, VALUE);
        if let Some(ev) = snap.last_move.filter(|ev| ev.gained > 0) {
            fb.put_char(panel_x + n + 1, y, '+', VALUE.dim());
            fb.put_u32(panel_x + n + 2, y, ev.gained, VALUE.dim());
        }
        y += 2;

        fb.put_str(panel_x, y, "BEST TILE", LABEL);
        y += 1;
        let best = if snap.max_tile >= WIN_TILE { BANNER } else { VALUE };
        fb.put_u32(panel_x, y, snap.max_tile, best);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", LABEL);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves, VALUE);
        y += 2;

        fb.put_str(panel_x, y, "LAST", LABEL);
        y += 1;
        match snap.last_move {
            Some(ev) => self.draw_last_move(fb, panel_x, y, &ev),
            None => fb.put_str(panel_x, y, "-", VALUE),
        }
        y += 2;

        fb.put_str(panel_x, y, "arrows/hjkl/wasd", VALUE.dim());
        fb.put_str(panel_x, y + 1, "r restart  q quit", VALUE.dim());
    }

    fn draw_last_move(&self, fb: &mut FrameBuffer, x: u16, y: u16, ev: &MoveEvent) {
        fb.put_char(x, y, ev.direction.arrow(), VALUE);
        if ev.merges > 0 {
            fb.put_u32(x + 2, y, ev.merges, VALUE);
            fb.put_str(x + 2 + crate::fb::digit_count(ev.merges), y, "x merge", VALUE.dim());
        }
    }
}

/// Tile colours stepping from pale yellow to red as values grow.
fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        0 => Rgb::new(60, 60, 70),
        v if v <= 4 => Rgb::new(254, 240, 138),
        v if v <= 8 => Rgb::new(253, 224, 71),
        v if v <= 16 => Rgb::new(250, 204, 21),
        v if v <= 32 => Rgb::new(234, 179, 8),
        v if v <= 64 => Rgb::new(202, 138, 4),
        v if v <= 128 => Rgb::new(161, 98, 7),
        v if v <= 256 => Rgb::new(133, 77, 14),
        v if v <= 512 => Rgb::new(113, 63, 18),
        _ => Rgb::new(239, 68, 68),
    };
    let fg = match value {
        0 => Rgb::new(110, 110, 120),
        v if v <= 16 => Rgb::new(40, 40, 40),
        _ => Rgb::new(255, 255, 255),
    };
    CellStyle::plain(fg, bg).bold()
}
