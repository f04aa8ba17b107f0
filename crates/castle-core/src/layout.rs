//! Static screen layout consumed by the simulation.
//!
//! The layout is owned by whoever draws the game. The simulation only reads
//! centre points and bounds from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Rect;

/// Spawn strip, castle area and defence slot rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub spawn: Rect,
    pub castle: Rect,
    pub slots: Vec<Rect>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT, DEFAULT_SLOT_COUNT)
    }
}

impl Layout {
    /// Standard arrangement: castle in the bottom quarter, slots staggered
    /// across it, spawn strip along the top edge.
    pub fn for_screen(width: f32, height: f32, slot_count: usize) -> Self {
        let castle_height = (height * CASTLE_HEIGHT_FRACTION).floor();
        let castle_top = height - castle_height;
        let castle = Rect::new(0.0, castle_top, width, castle_height);

        let spawn_width = width - 2.0 * SPAWN_SIDE_MARGIN;
        let spawn = Rect::new(
            ((width - spawn_width) / 2.0).floor(),
            0.0,
            spawn_width,
            SPAWN_HEIGHT,
        );

        Self {
            spawn,
            castle,
            slots: slot_rects(width, castle_top, castle_height, slot_count),
        }
    }

    /// Centre of the castle area (the point enemies attack).
    pub fn castle_center(&self) -> Vec2 {
        self.castle.center()
    }

    /// Centre of slot `index`, if it exists.
    pub fn slot_center(&self, index: usize) -> Option<Vec2> {
        self.slots.get(index).map(Rect::center)
    }

    /// Index of the first slot containing `point`.
    pub fn slot_at(&self, point: Vec2) -> Option<usize> {
        self.slots.iter().position(|r| r.contains(point))
    }
}

fn slot_rects(width: f32, hud_top: f32, hud_height: f32, count: usize) -> Vec<Rect> {
    let spacing = if count > 1 {
        ((width - 2.0 * SLOT_MARGIN_X - count as f32 * SLOT_SIZE) / (count as f32 - 1.0)).floor()
    } else {
        0.0
    };
    let base_y = hud_top + ((hud_height - SLOT_SIZE) / 2.0).floor();

    (0..count)
        .map(|i| {
            let x = SLOT_MARGIN_X + i as f32 * (SLOT_SIZE + spacing);
            let y = base_y + SLOT_Y_OFFSETS[i % SLOT_Y_OFFSETS.len()];
            Rect::new(x, y, SLOT_SIZE, SLOT_SIZE)
        })
        .collect()
}
