use std::fmt::Display;
use std::ops::RangeInclusive;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn check_range<T>(name: &str, value: T, range: RangeInclusive<T>) -> Result<(), String>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{} must be between {} and {} (got {})",
            name,
            range.start(),
            range.end(),
            value
        ))
    }
}

pub fn check_probability(name: &str, value: f32) -> Result<(), String> {
    if value.is_nan() {
        return Err(format!("{} must be a number", name));
    }
    check_range(name, value, 0.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_accepts_bounds() {
        assert!(check_range("width", 12, 12..=100).is_ok());
        assert!(check_range("width", 100, 12..=100).is_ok());
    }

    #[test]
    fn test_check_range_reports_field_name() {
        let err = check_range("field_width", 5, 12..=100).unwrap_err();
        assert!(err.contains("field_width"));
        assert!(err.contains("got 5"));
    }

    #[test]
    fn test_check_probability_rejects_nan_and_out_of_range() {
        assert!(check_probability("p", f32::NAN).is_err());
        assert!(check_probability("p", 1.5).is_err());
        assert!(check_probability("p", -0.1).is_err());
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
    }
}
