//! Presentation hooks.

use roam_core::{AgentId, FrameDelta, Point, SpriteId};

/// One entry of a frame's draw list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawItem {
    pub agent: AgentId,
    pub sprite: Option<SpriteId>,
    /// Visual position for this frame, vertical offset included.
    pub pos: Point,
}

/// Callbacks invoked by [`Population::run`][crate::Population::run] and
/// [`Population::render`][crate::Population::render].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The camera transform and the actual sprite
/// blitting live on the implementor's side.
///
/// # Example: count what gets drawn
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl FrameObserver for Counter {
///     fn on_draw(&mut self, _item: &DrawItem) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called before the students are updated.
    fn on_frame_start(&mut self, _frame: u64, _delta: FrameDelta) {}

    /// Called once per student, back to front (ascending visual y).
    fn on_draw(&mut self, _item: &DrawItem) {}

    /// Called after the frame's draw list has been delivered.
    fn on_frame_end(&mut self, _frame: u64) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
