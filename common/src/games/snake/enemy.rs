use super::types::Point;

/// One axis-priority chase step from `enemy` towards `target`.
///
/// Moves along x when the horizontal distance is strictly larger, otherwise
/// along y, so equal distances resolve vertically. Exactly one coordinate
/// changes by one, unless the enemy already sits on the target's row/column
/// for the chosen axis, in which case it stays put.
pub fn chase_step(enemy: Point, target: Point) -> Point {
    let dx = target.x as isize - enemy.x as isize;
    let dy = target.y as isize - enemy.y as isize;

    if dx.abs() > dy.abs() {
        Point::new(enemy.x.saturating_add_signed(dx.signum()), enemy.y)
    } else {
        Point::new(enemy.x, enemy.y.saturating_add_signed(dy.signum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manhattan(a: Point, b: Point) -> usize {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }

    #[test]
    fn test_prefers_larger_axis() {
        assert_eq!(chase_step(Point::new(0, 5), Point::new(10, 7)), Point::new(1, 5));
        assert_eq!(chase_step(Point::new(10, 5), Point::new(0, 7)), Point::new(9, 5));
        assert_eq!(chase_step(Point::new(4, 0), Point::new(5, 9)), Point::new(4, 1));
        assert_eq!(chase_step(Point::new(4, 9), Point::new(5, 0)), Point::new(4, 8));
    }

    #[test]
    fn test_tie_moves_vertically() {
        assert_eq!(chase_step(Point::new(2, 2), Point::new(5, 5)), Point::new(2, 3));
        assert_eq!(chase_step(Point::new(5, 5), Point::new(2, 2)), Point::new(5, 4));
    }

    #[test]
    fn test_on_target_does_not_move() {
        assert_eq!(chase_step(Point::new(3, 3), Point::new(3, 3)), Point::new(3, 3));
    }

    #[test]
    fn test_never_moves_diagonally() {
        for ex in 0..12 {
            for ey in 0..12 {
                let enemy = Point::new(ex, ey);
                let target = Point::new(6, 4);
                let next = chase_step(enemy, target);
                if enemy == target {
                    continue;
                }
                let moved_x = next.x != enemy.x;
                let moved_y = next.y != enemy.y;
                assert!(moved_x ^ moved_y, "enemy at {} moved to {}", enemy, next);
                assert_eq!(manhattan(enemy, next), 1);
                assert_eq!(manhattan(next, target) + 1, manhattan(enemy, target));
            }
        }
    }
}
