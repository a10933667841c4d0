//! Terminal renderer: one character per grid cell.

use roam_core::{Cell, FrameDelta, SpriteId};
use roam_grid::{Bounds, Region, accessibility_mask};
use roam_sim::{DrawItem, FrameObserver};

const OPEN:    char = '.';
const BLOCKED: char = '#';

/// Paints the draw list into a character grid every `every` frames.
///
/// Items arrive back to front, so a student further down the screen
/// overwrites one standing behind it in the same cell.
pub struct AsciiObserver {
    bounds:  Bounds,
    mask:    Vec<bool>,
    offset:  f32,
    glyphs:  Vec<char>,
    every:   u64,
    canvas:  Vec<char>,
    pub simulated: u64,
    pub skipped:   u64,
}

impl AsciiObserver {
    /// `glyphs[i]` is drawn for `SpriteId(i)`.
    pub fn new<R: Region>(region: &R, offset: f32, glyphs: Vec<char>, every: u64) -> Self {
        let bounds = region.bounds();
        Self {
            bounds,
            mask: accessibility_mask(region),
            offset,
            glyphs,
            every: every.max(1),
            canvas: Vec::with_capacity(bounds.area()),
            simulated: 0,
            skipped: 0,
        }
    }

    /// The empty region: `.` where students may stand, `#` elsewhere.
    pub fn valid_spots(&self) -> String {
        let cells: Vec<char> =
            self.mask.iter().map(|&open| if open { OPEN } else { BLOCKED }).collect();
        self.rows(&cells)
    }

    fn glyph(&self, sprite: Option<SpriteId>) -> char {
        sprite.and_then(|s| self.glyphs.get(s.index()).copied()).unwrap_or('?')
    }

    fn rows(&self, cells: &[char]) -> String {
        cells
            .chunks(self.bounds.width.max(1) as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FrameObserver for AsciiObserver {
    fn on_frame_start(&mut self, _frame: u64, delta: FrameDelta) {
        if delta.simulate {
            self.simulated += 1;
        } else {
            self.skipped += 1;
        }
        self.canvas.clear();
        self.canvas
            .extend(self.mask.iter().map(|&open| if open { OPEN } else { BLOCKED }));
    }

    fn on_draw(&mut self, item: &DrawItem) {
        // Undo the presentation offset to land on the student's own cell.
        let cell = Cell::new(
            item.pos.x.round() as i32,
            (item.pos.y - self.offset).round() as i32,
        );
        let glyph = self.glyph(item.sprite);
        if let Some(i) = self.bounds.index_of(cell) {
            self.canvas[i] = glyph;
        }
    }

    fn on_frame_end(&mut self, frame: u64) {
        if frame.is_multiple_of(self.every) {
            println!("frame {frame}");
            println!("{}", self.rows(&self.canvas));
            println!();
        }
    }
}
