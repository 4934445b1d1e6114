//! Gated obstacles and the field that spawns, scrolls and retires them

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A vertical pair of solid segments with a gap between `top` and `bottom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Lower edge of the upper segment
    pub top: f32,
    /// Upper edge of the lower segment (`top + gap`)
    pub bottom: f32,
    /// Set once the obstacle has been scored
    pub passed: bool,
}

impl Obstacle {
    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Owns every live obstacle, kept in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Width given to newly spawned obstacles
    width: f32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(width: f32) -> Self {
        Self {
            obstacles: Vec::new(),
            width,
            next_id: 1,
        }
    }

    /// Live obstacles, oldest (leftmost) first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Spawn one obstacle at `x` with its gap placed uniformly in
    /// `[margin_top, field_height - gap_height - margin_bottom]`
    ///
    /// If that range is empty or not finite the gap is centred instead
    /// (pinned to the top when the gap is taller than the field).
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        x: f32,
        field_height: f32,
        gap_height: f32,
        margin_top: f32,
        margin_bottom: f32,
    ) -> &Obstacle {
        let lo = margin_top;
        let hi = field_height - gap_height - margin_bottom;

        let top = if lo.is_finite() && hi.is_finite() && hi >= lo {
            rng.random_range(lo..=hi)
        } else {
            log::warn!(
                "Gap range [{lo}, {hi}] is unusable (field {field_height}, gap {gap_height}), centring"
            );
            let centred = ((field_height - gap_height) / 2.0).max(0.0);
            if centred.is_finite() { centred } else { 0.0 }
        };

        log::debug!("Spawning obstacle at x={x} gap=[{top}, {}]", top + gap_height);
        self.insert(x, top, gap_height)
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop obstacles whose right edge is left of `left_bound`; returns how many went
    pub fn prune(&mut self, left_bound: f32) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right() >= left_bound);
        before - self.obstacles.len()
    }

    /// Flag obstacles whose right edge has moved left of `actor_x`
    ///
    /// Returns the number of obstacles flagged by this call. Each obstacle is
    /// reported at most once in its lifetime.
    pub fn mark_passed(&mut self, actor_x: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if obstacle.right() < actor_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Place an obstacle directly (scripted layouts and tests)
    pub fn insert(&mut self, x: f32, top: f32, gap_height: f32) -> &Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            x,
            width: self.width,
            top,
            bottom: top + gap_height,
            passed: false,
        });
        &self.obstacles[self.obstacles.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_margins() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut field = ObstacleField::new(80.0);
        for _ in 0..500 {
            let o = field.spawn(&mut rng, 440.0, 760.0, 260.0, 60.0, 90.0).clone();
            assert!(o.top >= 60.0 && o.top <= 410.0, "top {}", o.top);
            assert_eq!(o.bottom, o.top + 260.0);
            assert_eq!(o.x, 440.0);
            assert!(!o.passed);
        }
        assert_eq!(field.len(), 500);
    }

    #[test]
    fn test_spawn_degenerate_field_centres_gap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::new(80.0);

        let o = field.spawn(&mut rng, 100.0, 300.0, 260.0, 60.0, 90.0).clone();
        assert_eq!(o.top, 20.0);
        assert_eq!(o.bottom, 280.0);

        // Gap taller than the field
        let o = field.spawn(&mut rng, 100.0, 200.0, 260.0, 60.0, 90.0).clone();
        assert_eq!(o.top, 0.0);
        assert_eq!(o.bottom, 260.0);
    }

    #[test]
    fn test_spawn_survives_non_finite_field() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ObstacleField::new(80.0);

        let o = field.spawn(&mut rng, 100.0, f32::INFINITY, 260.0, 60.0, 90.0).clone();
        assert_eq!(o.top, 0.0);
        assert_eq!(o.bottom, 260.0);

        let o = field.spawn(&mut rng, 100.0, f32::NAN, 260.0, 60.0, 90.0).clone();
        assert_eq!(o.top, 0.0);
    }

    #[test]
    fn test_advance_and_prune() {
        let mut field = ObstacleField::new(80.0);
        field.insert(0.0, 100.0, 260.0);
        field.insert(200.0, 100.0, 260.0);

        field.advance(99.0);
        // Right edge at -19: still visible enough to keep
        assert_eq!(field.prune(-20.0), 0);

        field.advance(2.0);
        // Right edge at -21: gone
        assert_eq!(field.prune(-20.0), 1);
        assert_eq!(field.len(), 1);
        assert_eq!(field.obstacles()[0].x, 99.0);
    }

    #[test]
    fn test_prune_keeps_exact_boundary() {
        let mut field = ObstacleField::new(80.0);
        field.insert(-100.0, 100.0, 260.0);
        assert_eq!(field.prune(-20.0), 0);
    }

    #[test]
    fn test_mark_passed_once() {
        let mut field = ObstacleField::new(80.0);
        field.insert(0.0, 100.0, 260.0);

        // Right edge at 80, actor at 60: not yet
        assert_eq!(field.mark_passed(60.0), 0);

        field.advance(21.0);
        assert_eq!(field.mark_passed(60.0), 1);
        assert!(field.obstacles()[0].passed);

        field.advance(10.0);
        assert_eq!(field.mark_passed(60.0), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut field = ObstacleField::new(80.0);
        let a = field.insert(0.0, 0.0, 10.0).id;
        field.clear();
        let b = field.insert(0.0, 0.0, 10.0).id;
        assert_ne!(a, b);
    }
}
