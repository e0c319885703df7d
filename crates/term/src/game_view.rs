//! GameView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{BoardSnapshot, Coord, ShapeKind};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Block colours, indexed by shape identity - 1
const SHAPE_COLORS: [Rgb; ShapeKind::COUNT] = [
    Rgb::hex(0xCC6666),
    Rgb::hex(0x66CC66),
    Rgb::hex(0x6666CC),
    Rgb::hex(0xCCCC66),
    Rgb::hex(0xCC66CC),
    Rgb::hex(0x66CCCC),
    Rgb::hex(0xDAAA00),
];

pub fn shape_color(kind: ShapeKind) -> Rgb {
    SHAPE_COLORS[kind.index()]
}

/// Where the playfield landed on screen
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for a board snapshot.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().with_char(' '));

        let frame = self.frame_for(snap, viewport);
        let board_style = CellStyle::plain(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', board_style);
        draw_border(fb, frame, CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG));

        for row in 0..snap.height {
            for col in 0..snap.width {
                match ShapeKind::from_id(snap.cell(row, col)) {
                    Some(kind) => self.draw_block(fb, frame, row, col, kind),
                    None => self.draw_empty(fb, frame, row, col),
                }
            }
        }

        if let Some(active) = &snap.active {
            let ghost_style = CellStyle::plain(Rgb::new(140, 140, 140), PLAYFIELD_BG).dim();
            for &cell in &snap.ghost {
                if let Some((row, col)) = visible(snap, cell) {
                    self.fill_cell(fb, frame, row, col, '░', ghost_style);
                }
            }
            for &cell in &active.cells {
                if let Some((row, col)) = visible(snap, cell) {
                    self.draw_block(fb, frame, row, col, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            draw_overlay(fb, frame, "GAME OVER");
        } else if snap.paused {
            draw_overlay(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, snap: &BoardSnapshot, viewport: Viewport) -> Frame {
        let cols = u16::try_from(snap.width).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.height).unwrap_or(u16::MAX);
        let w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_mul(self.cell_h).saturating_add(2);
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + (col as u16) * self.cell_w;
        let py = frame.y + 1 + (row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: usize, col: usize, kind: ShapeKind) {
        let style = CellStyle::plain(shape_color(kind), PLAYFIELD_BG).bold();
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, row: usize, col: usize) {
        let style = CellStyle::plain(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell(fb, frame, row, col, '·', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, snap.next_kind.as_str(), value.dim());
        y = y.saturating_add(1);
        y = self.draw_preview(fb, panel_x, y, snap.next_kind, &snap.next_shape);
        y = y.saturating_add(1);

        let help = value.dim();
        for line in ["←→ move", "↑ z rotate", "↓ drop", "␣ hard drop", "p pause", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    /// Draw a piece footprint (rows grow upwards) with its top-left at
    /// `(x, y)`. Returns the first row below the preview.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: ShapeKind, shape: &[Coord]) -> u16 {
        let (Some(max_row), Some(min_row), Some(min_col)) = (
            shape.iter().map(|c| c.0).max(),
            shape.iter().map(|c| c.0).min(),
            shape.iter().map(|c| c.1).min(),
        ) else {
            return y;
        };

        let style = CellStyle::plain(shape_color(kind), SCREEN_BG).bold();
        for &(row, col) in shape {
            let dy = (max_row - row) as u16 * self.cell_h;
            let dx = (col - min_col) as u16 * self.cell_w;
            fb.fill_rect(x + dx, y + dy, self.cell_w, self.cell_h, '█', style);
        }
        y.saturating_add((max_row - min_row + 1) as u16 * self.cell_h)
    }
}

/// Top-indexed cell inside the visible grid, if it is
fn visible(snap: &BoardSnapshot, (row, col): Coord) -> Option<(usize, usize)> {
    let row = usize::try_from(row).ok().filter(|&r| r < snap.height)?;
    let col = usize::try_from(col).ok().filter(|&c| c < snap.width)?;
    Some((row, col))
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
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

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, y, text, style);
}
