//! Roaming enemy
//!
//! A one-dimensional bounce between the surface edges. No physics.

/// Horizontal patrol state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyAgent {
    /// Left edge of the sprite, in surface pixels
    pub x: f32,
    /// +1.0 moving right, -1.0 moving left
    pub direction: f32,
    /// Pixels per second
    pub speed: f32,
}

impl EnemyAgent {
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            x,
            direction: 1.0,
            speed,
        }
    }

    /// Integrate by `dt` and reflect at either edge; `extent` is the drawn
    /// sprite width
    pub fn advance(&mut self, dt: f32, surface_width: f32, extent: f32) {
        let max_x = (surface_width - extent).max(0.0);
        self.x += self.direction * self.speed * dt;

        if self.x <= 0.0 {
            self.x = 0.0;
            self.direction = 1.0;
        } else if self.x >= max_x {
            self.x = max_x;
            self.direction = -1.0;
        }
    }

    pub fn moving_left(&self) -> bool {
        self.direction < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reflects_at_right_edge() {
        let mut enemy = EnemyAgent::new(750.0, 100.0);
        enemy.advance(0.5, 800.0, 36.0);
        assert_eq!(enemy.x, 764.0);
        assert!(enemy.moving_left());

        enemy.advance(0.1, 800.0, 36.0);
        assert_eq!(enemy.x, 754.0);
    }

    #[test]
    fn test_reflects_at_left_edge() {
        let mut enemy = EnemyAgent::new(5.0, 100.0);
        enemy.direction = -1.0;
        enemy.advance(0.1, 800.0, 36.0);
        assert_eq!(enemy.x, 0.0);
        assert!(!enemy.moving_left());
    }

    #[test]
    fn test_surface_narrower_than_sprite() {
        let mut enemy = EnemyAgent::new(0.0, 100.0);
        enemy.advance(0.1, 20.0, 36.0);
        assert_eq!(enemy.x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_enemy_stays_on_surface(
            width in 40.0f32..2000.0,
            steps in proptest::collection::vec(0.0f32..0.1, 1..200),
        ) {
            let extent = 36.0;
            let mut enemy = EnemyAgent::new(0.0, 120.0);
            for dt in steps {
                enemy.advance(dt, width, extent);
                prop_assert!(enemy.x >= 0.0 && enemy.x <= width - extent);
                prop_assert!(enemy.direction == 1.0 || enemy.direction == -1.0);
            }
        }
    }
}
