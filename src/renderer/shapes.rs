//! Shape generation for 2D primitives
//!
//! All shapes are triangle lists in world space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::settings::CharacterStyle;
use crate::sim::{Character, GameState, Platform, Rect};

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.x, r.y, r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a thick line segment
pub fn segment(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

pub fn platform(p: &Platform) -> Vec<Vertex> {
    let color = if p.is_goal {
        colors::GOAL
    } else {
        colors::PLATFORM
    };
    rect(&p.rect, color)
}

/// Stick figure fitted to the character's bounding box
///
/// Legs swing with horizontal position so the stride tracks the ground
/// covered; in the air they spread into a fixed pose.
pub fn stick_figure(c: &Character, color: [f32; 4]) -> Vec<Vertex> {
    let b = c.bounds();
    let (w, h) = (b.width, b.height);
    let cx = b.x + w / 2.0;
    let line = (w * 0.1).max(1.0);

    let head_radius = w.min(h) * 0.2;
    let head = Vec2::new(cx, b.y + head_radius);
    let neck = Vec2::new(cx, b.y + head_radius * 2.0);
    let hip = Vec2::new(cx, b.y + h * 0.62);
    let shoulder = neck.lerp(hip, 0.2);

    let swing = if c.grounded {
        (b.x * 0.15).sin() * w * 0.35
    } else {
        w * 0.4
    };
    let lean = if c.vel.x.abs() > 0.5 {
        c.vel.x.signum() * w * 0.1
    } else {
        0.0
    };

    let left_foot = Vec2::new(cx - swing, b.bottom());
    let right_foot = Vec2::new(cx + swing, b.bottom());
    let left_hand = Vec2::new(cx - w * 0.45 + lean, shoulder.y + h * 0.2);
    let right_hand = Vec2::new(cx + w * 0.45 + lean, shoulder.y + h * 0.2);

    let mut vertices = circle(head, head_radius, color, 16);
    for (from, to) in [
        (neck, hip),
        (shoulder, left_hand),
        (shoulder, right_hand),
        (hip, left_foot),
        (hip, right_foot),
    ] {
        vertices.extend(segment(from, to, line, color));
    }
    vertices
}

pub fn character(c: &Character, style: CharacterStyle) -> Vec<Vertex> {
    match style {
        CharacterStyle::Block => rect(&c.bounds(), colors::CHARACTER),
        CharacterStyle::StickFigure => stick_figure(c, colors::STICK_FIGURE),
    }
}

/// Build the whole frame: platforms in generation order, then the character
pub fn scene(state: &GameState, style: CharacterStyle) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = state.platforms.iter().flat_map(platform).collect();
    vertices.extend(character(&state.character, style));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(v: &Vertex, r: &Rect) -> bool {
        let eps = 1e-3;
        v.position[0] >= r.x - eps
            && v.position[0] <= r.right() + eps
            && v.position[1] >= r.y - eps
            && v.position[1] <= r.bottom() + eps
    }

    #[test]
    fn test_rect_covers_corners() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let v = rect(&r, colors::PLATFORM);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| inside(v, &r)));
        assert!(v.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(v.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_degenerate_segment_is_empty() {
        let p = Vec2::new(1.0, 1.0);
        assert!(segment(p, p, 2.0, colors::CHARACTER).is_empty());
    }

    #[test]
    fn test_goal_colored() {
        let goal = Platform::goal(0.0, 0.0, 10.0, 10.0);
        assert!(platform(&goal).iter().all(|v| v.color == colors::GOAL));
        let plain = Platform::new(0.0, 0.0, 10.0, 10.0);
        assert!(platform(&plain).iter().all(|v| v.color == colors::PLATFORM));
    }

    #[test]
    fn test_stick_figure_stays_near_bounds() {
        let c = Character::spawn(800.0, 450.0);
        let b = c.bounds();
        // Allow for line width poking past the box
        let slack = Rect::new(b.x - 5.0, b.y - 5.0, b.width + 10.0, b.height + 10.0);
        let v = stick_figure(&c, colors::STICK_FIGURE);
        assert!(!v.is_empty());
        assert_eq!(v.len() % 3, 0);
        assert!(v.iter().all(|v| inside(v, &slack)));
    }

    #[test]
    fn test_scene_draws_platforms_then_character() {
        let state = GameState::new(11, 800.0, 450.0);
        let v = scene(&state, CharacterStyle::Block);
        assert_eq!(v.len(), (state.platforms.len() + 1) * 6);
        assert!(v[v.len() - 6..].iter().all(|v| v.color == colors::CHARACTER));
        assert!(v[..6].iter().all(|v| v.color == colors::PLATFORM));
    }
}
