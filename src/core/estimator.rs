use crate::domain::model::Estimate;

pub const HOURS_PER_FEATURE: u32 = 5;
pub const WORK_HOURS_PER_DAY: u32 = 5;
pub const HOURLY_RATE: u32 = 80;

/// Computes the estimated cost (BRL, rounded to the nearest multiple of 10)
/// and delivery timeline (days) for a project.
///
/// The cost applies a mild superlinear markup (`^1.02`) to the linear
/// hours-times-rate base; the timeline adds a rounded-up one-third
/// contingency buffer. Both are published business constants and must not be
/// "corrected". Callers are responsible for keeping the counts inside the
/// form bounds; in particular `developer_count` must be at least 1.
pub fn estimate(developer_count: u32, feature_count: u32) -> Estimate {
    let base_cost = f64::from(feature_count)
        * f64::from(HOURS_PER_FEATURE)
        * (f64::from(developer_count) * f64::from(HOURLY_RATE));
    let cost = (base_cost.powf(1.02).ceil() / 10.0).round() as u64 * 10;

    let base_timeline = (f64::from(feature_count)
        * (f64::from(HOURS_PER_FEATURE) / f64::from(developer_count))
        / f64::from(WORK_HOURS_PER_DAY))
    .ceil();
    let timeline = (base_timeline + (base_timeline / 3.0).ceil()) as u32;

    Estimate { cost, timeline }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_project() {
        // base cost 400; 400^1.02 ~= 450.92 -> ceil 451 -> 45.1 -> 45 -> 450
        let result = estimate(1, 1);
        assert_eq!(result.cost, 450);
        assert_eq!(result.timeline, 2);
    }

    #[test]
    fn ten_features_two_developers() {
        // base cost 8000; base timeline ceil(10 * 2.5 / 5) = 5; buffer ceil(5/3) = 2
        let result = estimate(2, 10);
        assert_eq!(result.cost, 9580);
        assert_eq!(result.timeline, 7);
    }

    #[test]
    fn largest_project() {
        let result = estimate(5, 100);
        assert_eq!(result.cost, 255_300);
        assert_eq!(result.timeline, 27);
    }

    #[test]
    fn estimate_is_deterministic() {
        assert_eq!(estimate(3, 42), estimate(3, 42));
    }

    #[test]
    fn single_day_timeline_exists() {
        // 1 feature, 5 developers: 1 hour of work -> 1 day + 1 buffer day
        let result = estimate(5, 1);
        assert_eq!(result.timeline, 2);
    }
}
