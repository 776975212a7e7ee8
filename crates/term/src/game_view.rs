//! GameView: maps a core session snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested without a terminal.

use blockfall_core::SessionSnapshot;
use blockfall_types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

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

/// Fixed color tag for each piece kind.
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(64, 208, 224),  // cyan
        PieceKind::O => Rgb::new(232, 208, 64),  // yellow
        PieceKind::Z => Rgb::new(224, 72, 72),   // red
        PieceKind::S => Rgb::new(96, 200, 96),   // green
        PieceKind::T => Rgb::new(176, 96, 216),  // purple
        PieceKind::L => Rgb::new(240, 144, 48),  // orange
        PieceKind::J => Rgb::new(96, 128, 240),  // blue
    }
}

/// A lightweight terminal renderer for the playfield and side panel.
pub struct GameView {
    /// Grid cell width in terminal columns (height is one row per cell).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the
    /// viewport. Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let field_w = GRID_WIDTH as u16 * self.cell_w;
        let field_h = GRID_HEIGHT as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field_bg = Style {
            fg: Rgb::new(70, 70, 82),
            bg: Rgb::new(24, 24, 32),
            bold: false,
        };

        self.draw_frame(fb, start_x, start_y, frame_w, frame_h);
        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field_bg);

        // Settled cells.
        for y in 0..GRID_HEIGHT as u16 {
            for x in 0..GRID_WIDTH as u16 {
                if let Some(kind) = snap.grid[y as usize][x as usize] {
                    self.draw_cell(fb, start_x, start_y, x, y, kind_color(kind));
                }
            }
        }

        // Active piece, clipped to the playfield.
        let color = kind_color(snap.active.kind);
        for (cx, cy) in snap.active.shape.iter_cells() {
            let x = snap.active.x + cx as i8;
            let y = snap.active.y + cy as i8;
            if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                self.draw_cell(fb, start_x, start_y, x as u16, y as u16, color);
            }
        }

        self.draw_panel(snap, fb, start_x + frame_w + 2, start_y);

        if snap.over {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        } else if snap.paused {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, " PAUSED ");
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, color: Rgb) {
        let style = Style {
            fg: color,
            bg: color,
            bold: false,
        };
        for dx in 0..self.cell_w {
            fb.put_char(start_x + 1 + x * self.cell_w + dx, start_y + 1 + y, ' ', style);
        }
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_panel(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer, x: u16, y: u16) {
        let label = Style {
            fg: Rgb::new(160, 160, 170),
            ..Style::default()
        };
        let value = Style {
            bold: true,
            ..Style::default()
        };

        fb.put_str(x, y + 1, "SCORE", label);
        let mut score_text = [0u8; 10];
        fb.put_str(x, y + 2, format_u32(snap.score, &mut score_text), value);

        fb.put_str(x, y + 4, "NEXT", label);
        let color = kind_color(snap.next_kind);
        for (cx, cy) in snap.next_shape.iter_cells() {
            let style = Style {
                fg: color,
                bg: color,
                bold: false,
            };
            for dx in 0..self.cell_w {
                fb.put_char(x + cx as u16 * self.cell_w + dx, y + 5 + cy as u16, ' ', style);
            }
        }

        fb.put_str(x, y + 11, "arrows move, up rotates", label);
        fb.put_str(x, y + 12, "p pause  r restart", label);
        fb.put_str(x, y + 13, "q quit", label);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 40, 40),
            bold: true,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        fb.put_str(tx, y + h / 2, text, style);
    }
}

/// Side panel width reserved to the right of the playfield.
const PANEL_W: u16 = 20;

/// Format a u32 into a stack buffer, avoiding a per-frame allocation.
fn format_u32(mut n: u32, buf: &mut [u8; 10]) -> &str {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Digits are ASCII.
    std::str::from_utf8(&buf[i..]).unwrap()
}
