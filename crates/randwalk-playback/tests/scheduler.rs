use randwalk_core::FRAME_SKIP;
use randwalk_playback::{resolve_frame, PlaybackScheduler};

#[test]
fn ten_step_scenario() {
    let scheduler = PlaybackScheduler::new(10);
    assert_eq!(FRAME_SKIP, 4);
    assert_eq!(scheduler.pause_threshold(), 6);

    assert_eq!(scheduler.resolve_frame(0), 0);
    assert_eq!(scheduler.resolve_frame(5), 20);
    assert_eq!(scheduler.resolve_frame(6), 24);
    assert_eq!(scheduler.resolve_frame(9), 24);
    assert_eq!(resolve_frame(9, 10), 24);
}

#[test]
fn resolve_is_monotone_and_held() {
    for num_steps in [1, 2, 3, 10, 57, 400, 499] {
        let scheduler = PlaybackScheduler::new(num_steps);
        let threshold = scheduler.pause_threshold();
        let held = threshold * FRAME_SKIP;

        let mut previous = 0;
        for logical in 0..=num_steps + 5 {
            let raw = scheduler.resolve_frame(logical);
            assert!(raw >= previous, "not monotone at {} for {} steps", logical, num_steps);
            assert!(raw < scheduler.trajectory_len());
            if logical >= threshold {
                assert_eq!(raw, held);
            }
            previous = raw;
        }
    }
}

#[test]
fn raw_index_always_in_range() {
    // A ratio of one never holds, so the clamp to the last index applies
    let scheduler = PlaybackScheduler::with_timing(8, 4, 1.0);
    assert_eq!(scheduler.resolve_frame(8), 32);
    assert_eq!(scheduler.resolve_frame(usize::MAX), 32);
    assert_eq!(scheduler.trajectory_len(), 33);
}
