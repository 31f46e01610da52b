use crate::games::SessionRng;
use super::types::{FieldSize, Point};

/// Random draws before falling back to scanning the whole field.
pub const MAX_SPAWN_ATTEMPTS: usize = 100;

/// Rejection sampling over the field. After `MAX_SPAWN_ATTEMPTS` misses every
/// free cell is collected and one is picked uniformly, so a crowded field
/// costs one scan instead of an unbounded loop. `None` means the field is full.
pub fn find_free_cell<F>(field_size: &FieldSize, rng: &mut SessionRng, is_blocked: F) -> Option<Point>
where
    F: Fn(&Point) -> bool,
{
    if field_size.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Point::new(
            rng.random_range(0..field_size.width),
            rng.random_range(0..field_size.height),
        );
        if !is_blocked(&candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Point> = field_size.cells().filter(|cell| !is_blocked(cell)).collect();
    rng.choose(&free)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_field_returns_unblocked_cell() {
        let field = FieldSize::new(20, 20);
        let mut rng = SessionRng::new(42);
        let blocked = Point::new(3, 3);
        for _ in 0..200 {
            let cell = find_free_cell(&field, &mut rng, |p| *p == blocked).unwrap();
            assert_ne!(cell, blocked);
            assert!(field.contains(&cell));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let field = FieldSize::new(30, 30);
        let free = Point::new(17, 29);
        let mut rng = SessionRng::new(42);
        let cell = find_free_cell(&field, &mut rng, |p| *p != free);
        assert_eq!(cell, Some(free));
    }

    #[test]
    fn test_full_field_returns_none() {
        let field = FieldSize::new(12, 12);
        let mut rng = SessionRng::new(42);
        assert_eq!(find_free_cell(&field, &mut rng, |_| true), None);
    }
}
