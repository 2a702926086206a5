//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, piece_def, GameSnapshot, PieceSnapshot};
use crate::fb::{FrameBuffer, Style};
use crate::types::{PieceKind, Rgb, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_W: u16 = 14;
/// Widest board cell, in terminal columns.
const MAX_CELL_W: u16 = 4;

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

/// Lays out the well, the side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            fb.resize(viewport.width, viewport.height);
        } else {
            fb.clear();
        }

        let well_w = BOARD_WIDTH as u16 * self.cell_w;
        let well_h = BOARD_HEIGHT as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let total_w = frame_w + 2 + PANEL_W;
        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(origin_x + 1, origin_y + 1, well_w, well_h, ' ', Style {
            bg: WELL_BG,
            ..Style::default()
        });
        fb.draw_frame(origin_x, origin_y, frame_w, frame_h, Style::fg(Rgb::new(200, 200, 200)));

        let well = Well {
            x: origin_x + 1,
            y: origin_y + 1,
            cell_w: self.cell_w,
        };

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                match settled_kind(v) {
                    Some(kind) => well.put(fb, x as i16, y as i16, '█', cell_style(kind)),
                    None => well.put(fb, x as i16, y as i16, '·', empty_style()),
                }
            }
        }

        if let Some(guide) = snap.guide {
            let style = Style {
                bg: WELL_BG,
                ..Style::fg(Rgb::new(140, 140, 140)).dim()
            };
            for (x, y) in piece_cells(&guide) {
                well.put(fb, x, y, '░', style);
            }
        }

        if let Some(active) = snap.active {
            let style = cell_style(active.kind).bold();
            for (x, y) in piece_cells(&active) {
                well.put(fb, x, y, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            let text = "GAME OVER";
            let x = origin_x + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, origin_y + frame_h / 2, text, Style::fg(Rgb::new(255, 255, 255)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = Style::default().bold();
        let value = Style::fg(Rgb::new(200, 200, 200));

        let mut y = top;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let style = cell_style(snap.next);
        for (dx, dy) in get_shape(snap.next, Rotation::North) {
            fb.fill_rect(
                x + dx as u16 * self.cell_w,
                y + dy as u16,
                self.cell_w,
                1,
                '█',
                style,
            );
        }
        y += 5;

        fb.put_str(x, y, "SPEED", label);
        let end = fb.put_u32(x, y + 1, snap.interval_ms, value);
        fb.put_str(end, y + 1, "ms", value.dim());
        y += 3;

        fb.put_str(x, y, "ROWS", label);
        fb.put_u32(x, y + 1, snap.rows_cleared, value);
        y += 3;

        fb.put_str(x, y, "SEED", label);
        fb.put_u32(x, y + 1, snap.seed, value.dim());
    }
}

/// Screen placement of the well's cell grid.
struct Well {
    x: u16,
    y: u16,
    cell_w: u16,
}

impl Well {
    /// Draw one board cell. Cells outside the grid are skipped.
    fn put(&self, fb: &mut FrameBuffer, x: i16, y: i16, ch: char, style: Style) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return;
        }
        let px = self.x + x as u16 * self.cell_w;
        fb.fill_rect(px, self.y + y as u16, self.cell_w, 1, ch, style);
    }
}

fn piece_cells(p: &PieceSnapshot) -> impl Iterator<Item = (i16, i16)> {
    let (x, y) = (p.x, p.y);
    get_shape(p.kind, p.rotation)
        .into_iter()
        .map(move |(dx, dy)| (x + dx, y + dy))
}

fn settled_kind(v: u8) -> Option<PieceKind> {
    v.checked_sub(1).and_then(|id| PieceKind::from_id(id as usize))
}

fn cell_style(kind: PieceKind) -> Style {
    Style {
        bg: WELL_BG,
        ..Style::fg(piece_def(kind).color)
    }
}

fn empty_style() -> Style {
    Style {
        bg: WELL_BG,
        ..Style::fg(Rgb::new(90, 90, 100)).dim()
    }
}
