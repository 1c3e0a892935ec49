use super::journey::JourneyStep;

/// Position of step `index` out of `count` on the 0-100 track. A lone step
/// sits in the middle; otherwise steps span 5 to 95 evenly.
pub fn auto_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 50.0;
    }
    5.0 + 90.0 * index as f64 / (count - 1) as f64
}

/// Stable-sorts by `order` and rewrites every position.
pub fn distribute_positions(steps: &mut [JourneyStep]) {
    steps.sort_by_key(|s| s.order);

    let count = steps.len();
    for (index, step) in steps.iter_mut().enumerate() {
        step.position = auto_position(index, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(order: i32, title: &str) -> JourneyStep {
        JourneyStep {
            order,
            title: title.to_string(),
            ..JourneyStep::default()
        }
    }

    #[test]
    fn single_step_is_centered() {
        assert_eq!(auto_position(0, 1), 50.0);
    }

    #[test]
    fn endpoints_are_five_and_ninety_five() {
        assert_eq!(auto_position(0, 4), 5.0);
        assert_eq!(auto_position(3, 4), 95.0);
        assert_eq!(auto_position(1, 3), 50.0);
    }

    #[test]
    fn positions_strictly_increase() {
        let n = 7;
        let positions: Vec<f64> = (0..n).map(|i| auto_position(i, n)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sort_is_stable_for_equal_orders() {
        let mut steps = vec![step(2, "c"), step(1, "a"), step(1, "b"), step(0, "z")];
        distribute_positions(&mut steps);

        let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["z", "a", "b", "c"]);
        assert_eq!(steps[0].position, 5.0);
        assert_eq!(steps[3].position, 95.0);
        assert_eq!(steps[1].position, 35.0);
    }
}
