// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite bounce.
//!
//! Tick a moving sprite around a small canvas, bouncing its heading whenever
//! the stage reports an edge contact.
//!
//! Run:
//! - `cargo run -p tumble_demos --example sprite_bounce`

use kurbo::{Point, Size};
use tumble_sprite::{EdgeFlags, Sprite, Stage};

fn main() {
    let mut stage = Stage::new(200.0, 120.0);
    let mut ball = Sprite::new(Point::new(20.0, 40.0), Size::new(16.0, 16.0));
    ball.set_speed(24.0);
    ball.pose_mut().set_heading(30.0);
    let id = stage.insert(ball);

    for tick in 0..12 {
        let damage = stage.tick();
        for (hit, edges) in &damage.edges {
            if *hit != id {
                continue;
            }
            let sprite = stage.sprite_mut(id).unwrap();
            let heading = sprite.pose().heading();
            // Mirror the heading across the edge that was hit.
            let bounced = if edges.intersects(EdgeFlags::EAST | EdgeFlags::WEST) {
                180.0 - heading
            } else {
                -heading
            };
            sprite.pose_mut().set_heading(bounced);
            println!("tick {tick}: bounced off {edges:?}, heading {heading} -> {bounced}");
        }
        let pos = stage.sprite(id).unwrap().pose().position();
        println!("tick {tick}: position ({:.1}, {:.1})", pos.x, pos.y);
        if let Some(redraw) = damage.redraw {
            println!("tick {tick}: redraw {redraw:?}");
        }
    }

    // The stage pushes the sprite back inside after every contact.
    let pose = stage.sprite(id).unwrap().pose();
    let bounds = pose.bounds();
    assert!(
        bounds.x0 >= 0.0 && bounds.y0 >= 0.0 && bounds.x1 <= 200.0 && bounds.y1 <= 120.0,
        "sprite should end up inside the canvas"
    );
}
