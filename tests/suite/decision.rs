//! Decision properties checked across a grid of widths and gestures.

use swipedeck_engine::{SwipeDecision, decide};

const WIDTHS: [f64; 4] = [240.0, 375.0, 400.0, 1024.0];
const VELOCITIES: [f64; 7] = [0.0, 120.0, 499.0, 500.0, 501.0, 1500.0, 4000.0];

fn offsets(width: f64) -> impl Iterator<Item = f64> {
    (0..=60).map(move |step| f64::from(step) * width / 40.0)
}

fn mirror(decision: SwipeDecision) -> SwipeDecision {
    match decision {
        SwipeDecision::Accept => SwipeDecision::Reject,
        SwipeDecision::Reject => SwipeDecision::Accept,
        SwipeDecision::Abort => SwipeDecision::Abort,
    }
}

#[test]
fn mirrored_gestures_get_mirrored_decisions() {
    for width in WIDTHS {
        for velocity in VELOCITIES {
            for offset in offsets(width) {
                assert_eq!(
                    decide(-offset, -velocity, width),
                    mirror(decide(offset, velocity, width)),
                    "offset {offset} velocity {velocity} width {width}"
                );
            }
        }
    }
}

#[test]
fn direction_always_matches_the_offset_sign() {
    for width in WIDTHS {
        for velocity in VELOCITIES {
            for offset in offsets(width) {
                assert_ne!(decide(offset, -velocity, width), SwipeDecision::Reject);
                assert_ne!(decide(-offset, velocity, width), SwipeDecision::Accept);
            }
        }
    }
}

#[test]
fn dragging_further_never_undoes_an_accept() {
    for width in WIDTHS {
        for velocity in VELOCITIES {
            let mut accepted = false;
            for offset in offsets(width) {
                let decision = decide(offset, velocity, width);
                if accepted {
                    assert_eq!(decision, SwipeDecision::Accept, "offset {offset}");
                }
                accepted |= decision == SwipeDecision::Accept;
            }
            assert!(accepted, "width {width} velocity {velocity} never accepted");
        }
    }
}

#[test]
fn slow_release_threshold_scales_with_width() {
    for width in WIDTHS {
        let quarter = width * 0.25;
        assert_eq!(decide(quarter * 0.99, 0.0, width), SwipeDecision::Abort);
        assert_eq!(decide(quarter * 1.01, 0.0, width), SwipeDecision::Accept);
        assert_eq!(decide(-quarter * 1.01, 0.0, width), SwipeDecision::Reject);
    }
}

#[test]
fn fast_release_with_travel_is_accepted_anywhere() {
    for width in WIDTHS {
        assert_eq!(decide(1.0, 501.0, width), SwipeDecision::Accept);
        assert_eq!(decide(-1.0, -501.0, width), SwipeDecision::Reject);
        assert_eq!(decide(0.0, 5000.0, width), SwipeDecision::Abort);
    }
}

#[test]
fn unusable_input_aborts() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(decide(bad, 0.0, 400.0), SwipeDecision::Abort);
        assert_eq!(decide(200.0, bad, 400.0), SwipeDecision::Abort);
        assert_eq!(decide(200.0, 0.0, bad), SwipeDecision::Abort);
    }
    assert_eq!(decide(200.0, 0.0, 0.0), SwipeDecision::Abort);
    assert_eq!(decide(200.0, 0.0, -400.0), SwipeDecision::Abort);
}
