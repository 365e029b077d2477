//! Mapping between the topology's logical canvas and screen space.

use bfs_graph_core::{CanvasSize, Position};
use egui::{Pos2, Rect};

/// Uniform scale plus offset that fits the logical canvas inside a screen rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of canvas point (0, 0).
    pub origin: Pos2,
    /// Screen pixels per canvas unit.
    pub scale: f32,
}

impl CanvasTransform {
    /// Fit `canvas` into `rect`, preserving aspect ratio and centering it.
    pub fn fit(rect: Rect, canvas: CanvasSize) -> Self {
        if canvas.width <= 0.0 || canvas.height <= 0.0 {
            return Self {
                origin: rect.min,
                scale: 1.0,
            };
        }

        let scale = (rect.width() / canvas.width)
            .min(rect.height() / canvas.height)
            .max(f32::EPSILON);
        let used = egui::vec2(canvas.width * scale, canvas.height * scale);
        let origin = rect.min + (rect.size() - used) * 0.5;

        Self { origin, scale }
    }

    pub fn to_screen(&self, position: Position) -> Pos2 {
        Pos2::new(
            self.origin.x + position.x * self.scale,
            self.origin.y + position.y * self.scale,
        )
    }

    pub fn to_canvas(&self, point: Pos2) -> Position {
        Position::new(
            (point.x - self.origin.x) / self.scale,
            (point.y - self.origin.y) / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_exact_size_is_identity_offset() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(1000.0, 800.0));
        let t = CanvasTransform::fit(rect, CanvasSize::default());
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.origin, Pos2::new(10.0, 20.0));
        assert_eq!(t.to_screen(Position::new(500.0, 400.0)), Pos2::new(510.0, 420.0));
    }

    #[test]
    fn test_fit_letterboxes_wide_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(2000.0, 800.0));
        let t = CanvasTransform::fit(rect, CanvasSize::default());
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.origin, Pos2::new(500.0, 0.0));
    }

    #[test]
    fn test_fit_scales_down() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(500.0, 400.0));
        let t = CanvasTransform::fit(rect, CanvasSize::default());
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.to_screen(Position::new(750.0, 400.0)), Pos2::new(375.0, 200.0));
    }

    #[test]
    fn test_screen_to_canvas_inverts() {
        let rect = Rect::from_min_size(Pos2::new(3.0, 7.0), egui::vec2(640.0, 480.0));
        let t = CanvasTransform::fit(rect, CanvasSize::default());
        let p = Position::new(123.0, 456.0);
        let back = t.to_canvas(t.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-3);
        assert!((back.y - p.y).abs() < 1e-3);
    }
}
