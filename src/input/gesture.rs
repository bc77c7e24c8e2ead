use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // moved left: advance
    Backward, // moved right: go back
}

/// Classifies a horizontal gesture from its start and end x coordinates.
///
/// Moves of at most [`SWIPE_THRESHOLD`] pixels in either direction are noise.
pub fn classify(start_x: f32, end_x: f32) -> Option<Direction> {
    let delta = end_x - start_x;
    if delta < -SWIPE_THRESHOLD {
        Some(Direction::Forward)
    } else if delta > SWIPE_THRESHOLD {
        Some(Direction::Backward)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_move_goes_forward() {
        assert_eq!(classify(300.0, 200.0), Some(Direction::Forward));
    }

    #[test]
    fn rightward_move_goes_backward() {
        assert_eq!(classify(200.0, 300.0), Some(Direction::Backward));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify(200.0, 240.0), None);
        assert_eq!(classify(200.0, 250.0), None);
        assert_eq!(classify(200.0, 150.0), None);
        assert_eq!(classify(200.0, 250.5), Some(Direction::Backward));
        assert_eq!(classify(200.0, 149.5), Some(Direction::Forward));
    }
}
