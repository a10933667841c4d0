//! Sprite handles and the loading gate.

use roam_core::{AgentId, AgentRng, SpriteId};

/// Hands out opaque sprite handles.
///
/// The population only checks that every student has *a* handle before it
/// starts rendering; it never compares or inspects them.
pub trait SpriteProvider {
    /// `true` once all images the provider needs have loaded.
    fn is_ready(&self) -> bool;

    /// A handle for `agent`.  Only called when [`is_ready`](Self::is_ready).
    fn sprite_for(&mut self, agent: AgentId, rng: &mut AgentRng) -> SpriteId;
}

/// Random outfit per student, cached by handle.
///
/// Each call to [`sprite_for`](SpriteProvider::sprite_for) picks one of
/// `variants` appearances at random and appends it to the cache; the handle
/// is the cache slot.
#[derive(Clone, Debug)]
pub struct SpriteCache {
    variants: u32,
    slots: Vec<u32>,
    loaded: bool,
}

impl SpriteCache {
    /// A cache whose images are still loading.
    pub fn new(variants: u32) -> Self {
        Self { variants: variants.max(1), slots: Vec::new(), loaded: false }
    }

    /// A cache whose images are already available.
    pub fn loaded(variants: u32) -> Self {
        let mut cache = Self::new(variants);
        cache.mark_loaded();
        cache
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Appearance index behind `sprite`, if it came from this cache.
    pub fn variant(&self, sprite: SpriteId) -> Option<u32> {
        self.slots.get(sprite.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SpriteProvider for SpriteCache {
    fn is_ready(&self) -> bool {
        self.loaded
    }

    fn sprite_for(&mut self, _agent: AgentId, rng: &mut AgentRng) -> SpriteId {
        let id = SpriteId(self.slots.len() as u32);
        self.slots.push(rng.gen_range(0..self.variants));
        id
    }
}
