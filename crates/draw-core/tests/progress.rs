use draw_core::{DrawConfig, EndProgress};

#[test]
fn first_update_marks_every_end_at_zero() {
    let mut progress = EndProgress::new(8, 900, 5);

    let changed = progress.update(0);
    assert_eq!(changed.len(), 8);
    assert!(changed.iter().all(|&(_, fill)| fill == 0));
}

#[test]
fn fill_never_decreases_and_freezes_at_one_hundred() {
    let mut progress = EndProgress::new(4, 60, 5);

    let mut last = vec![0_i64; 4];
    for elapsed in 0..400 {
        progress.update(elapsed);
        for end in 0..4 {
            let fill = progress.fill(end);
            assert!(fill >= last[end], "fill for end {end} decreased");
            assert!(fill <= 100);
            last[end] = fill;
        }
    }
    assert!(last.iter().all(|&fill| fill == 100));

    // Once at 100, nothing changes any more.
    for elapsed in 400..500 {
        assert!(progress.update(elapsed).is_empty());
    }
}

#[test]
fn stored_fill_only_moves_in_granularity_steps() {
    let mut progress = EndProgress::new(1, 100, 5);
    progress.update(0);

    // 1..4 percent raw: below the granularity threshold, display stays at 0.
    for elapsed in 1..5 {
        assert!(progress.update(elapsed).is_empty());
        assert_eq!(progress.fill(0), 0);
    }
    // 5 percent raw: one full step.
    assert_eq!(progress.update(5), vec![(0, 5)]);
}

#[test]
fn reaching_exactly_one_hundred_always_lands() {
    // Granularity larger than the final gap: 100 must still be reached.
    let mut progress = EndProgress::new(1, 100, 30);
    progress.update(0);
    progress.update(90); // stored 90
    assert_eq!(progress.fill(0), 90);

    let changed = progress.update(100);
    assert_eq!(changed, vec![(0, 100)]);
}

#[test]
fn later_ends_stay_empty_until_their_time_window_opens() {
    let mut progress = EndProgress::new(3, 60, 5);
    progress.update(0);

    progress.update(59);
    assert_eq!(progress.fill(0), 98);
    assert_eq!(progress.fill(1), 0);
    assert_eq!(progress.fill(2), 0);

    progress.update(90);
    assert_eq!(progress.fill(0), 100);
    assert_eq!(progress.fill(1), 50);
    assert_eq!(progress.fill(2), 0);
}

#[test]
fn timer_reports_changed_ends_through_tick_output() {
    let config = DrawConfig {
        countdown_min: 4.0,
        min_per_end: 1.0,
        total_ends: 4,
        progress_update_percentage: 10,
        ..DrawConfig::default()
    };
    let mut timer = draw_core::CountdownTimer::new(&config);

    let out = timer.tick();
    assert_eq!(out.changed_ends.len(), 4, "all segments appear at startup");

    // Within the granularity window no end reports a change.
    let out = timer.tick();
    assert!(out.changed_ends.is_empty());
}
