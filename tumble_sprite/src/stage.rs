// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sprite registry and per-tick driver.
//!
//! A [`Stage`] owns sprites behind generational [`SpriteId`] handles, advances
//! them once per tick, keeps them inside the canvas, and reports coalesced
//! redraw damage plus edge contacts. Collision queries run over the live set.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::collide::colliding;
use crate::sprite::Sprite;
use crate::types::EdgeFlags;

/// Generational handle for sprites on a [`Stage`].
///
/// Handles stay invalid after removal even when the slot is reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(u32, u32);

impl SpriteId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Sprite ids are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Accumulator for dirty canvas area, coalesced into a single rectangle.
///
/// Every reported rectangle is unioned into one; the host repaints at most
/// one region per tick regardless of how many sprites moved.
#[derive(Clone, Debug, Default)]
pub struct Redraw {
    dirty: Option<Rect>,
}

impl Redraw {
    /// Fold a dirty rectangle into the accumulator.
    pub fn request(&mut self, rect: Rect) {
        self.dirty = Some(match self.dirty {
            Some(acc) => acc.union(rect),
            None => rect,
        });
    }

    /// True if nothing has been reported since the last take.
    pub const fn is_empty(&self) -> bool {
        self.dirty.is_none()
    }

    /// Drain the accumulated rectangle, leaving the accumulator empty.
    pub fn take(&mut self) -> Option<Rect> {
        self.dirty.take()
    }
}

/// What a [`Stage::tick`] produced: repaint area and edge contacts.
#[derive(Clone, Debug, Default)]
pub struct TickDamage {
    /// Union of every area that changed this tick, if any.
    pub redraw: Option<Rect>,
    /// Sprites that reached a canvas edge, with the edges they touched.
    pub edges: Vec<(SpriteId, EdgeFlags)>,
}

impl TickDamage {
    /// True if nothing moved and no edge was reached.
    pub fn is_empty(&self) -> bool {
        self.redraw.is_none() && self.edges.is_empty()
    }
}

/// A canvas-sized arena of sprites.
#[derive(Debug)]
pub struct Stage {
    width: f64,
    height: f64,
    sprites: Vec<Option<Sprite>>,
    // Parallel to `sprites`; bumped on removal so stale ids miss.
    generations: Vec<u32>,
    free_list: Vec<usize>,
    redraw: Redraw,
}

impl Stage {
    /// An empty stage with the given canvas extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            sprites: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            redraw: Redraw::default(),
        }
    }

    /// Canvas width in pixels.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in pixels.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Resize the canvas and push every sprite back inside the new extents.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for slot in &mut self.sprites {
            if let Some(sprite) = slot {
                let before = sprite.pose().bounds();
                if sprite.pose_mut().move_into_bounds(width, height) {
                    self.redraw.request(before.union(sprite.pose().bounds()));
                }
            }
        }
    }

    /// Add a sprite. Returns a stable handle and marks its area dirty.
    pub fn insert(&mut self, sprite: Sprite) -> SpriteId {
        self.redraw.request(sprite.pose().bounds());
        let idx = if let Some(idx) = self.free_list.pop() {
            self.sprites[idx] = Some(sprite);
            idx
        } else {
            self.sprites.push(Some(sprite));
            self.generations.push(1);
            self.sprites.len() - 1
        };
        SpriteId::new(idx, self.generations[idx])
    }

    /// Remove a sprite, returning it if the handle was live.
    pub fn remove(&mut self, id: SpriteId) -> Option<Sprite> {
        if !self.is_alive(id) {
            return None;
        }
        let idx = id.idx();
        let sprite = self.sprites[idx].take()?;
        self.generations[idx] += 1;
        self.free_list.push(idx);
        self.redraw.request(sprite.pose().bounds());
        Some(sprite)
    }

    /// Whether the handle refers to a sprite still on the stage.
    pub fn is_alive(&self, id: SpriteId) -> bool {
        self.generations.get(id.idx()) == Some(&id.1)
            && self.sprites.get(id.idx()).is_some_and(Option::is_some)
    }

    /// Borrow a sprite, if the handle is live.
    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.sprites.get(id.idx())?.as_ref()
    }

    /// Mutably borrow a sprite, if the handle is live.
    ///
    /// The caller is responsible for reporting any change it makes through
    /// [`Stage::register_change`]; the stage only tracks its own mutations.
    pub fn sprite_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.sprites.get_mut(id.idx())?.as_mut()
    }

    /// Report an externally mutated area for the next tick's redraw.
    pub fn register_change(&mut self, rect: Rect) {
        self.redraw.request(rect);
    }

    /// Advance every enabled sprite one tick.
    ///
    /// Each sprite moves by its speed along its heading, is pushed back inside
    /// the canvas if it left, and contributes the union of its old and new
    /// footprint to the redraw area when it moved. Edge contacts are reported
    /// from the position the motion actually reached, before the push-back.
    pub fn tick(&mut self) -> TickDamage {
        let mut edges = Vec::new();
        for (idx, slot) in self.sprites.iter_mut().enumerate() {
            let Some(sprite) = slot else {
                continue;
            };
            if !sprite.enabled() {
                continue;
            }
            let before = sprite.pose().bounds();
            let mut moved = false;
            if sprite.speed() != 0.0 {
                let speed = sprite.speed();
                sprite.pose_mut().advance(speed);
                moved = true;
            }
            let crossed = sprite.pose().crossed_edges(self.width, self.height);
            if !crossed.is_empty() {
                edges.push((SpriteId::new(idx, self.generations[idx]), crossed));
            }
            moved |= sprite.pose_mut().move_into_bounds(self.width, self.height);
            if moved {
                self.redraw.request(before.union(sprite.pose().bounds()));
            }
        }
        TickDamage {
            redraw: self.redraw.take(),
            edges,
        }
    }

    /// Every colliding pair among live, enabled sprites.
    ///
    /// Pairs are reported once, first handle ordered before the second.
    pub fn collisions(&self) -> Vec<(SpriteId, SpriteId)> {
        let mut live = Vec::new();
        for (idx, slot) in self.sprites.iter().enumerate() {
            if let Some(sprite) = slot
                && sprite.enabled()
            {
                live.push((SpriteId::new(idx, self.generations[idx]), sprite));
            }
        }
        let mut pairs = Vec::new();
        for i in 0..live.len() {
            for j in (i + 1)..live.len() {
                if colliding(live[i].1, live[j].1) {
                    pairs.push((live[i].0, live[j].0));
                }
            }
        }
        pairs
    }
}
