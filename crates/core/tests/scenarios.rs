use std::time::Duration;

use plot_core::{AxisPhase, LabelLayout, ManualClock, Plot, PlotBounds, PlotSettings};

fn settings(history_len: usize, right: f32, max_time_lines: usize) -> PlotSettings {
    PlotSettings {
        history_len,
        bounds: PlotBounds::from_edges(0.0, 0.0, right, 100.0).unwrap(),
        scale_factor: 1.0,
        max_time_lines,
        bar_space: 10.0,
        text_size: 12.0,
        label_layout: LabelLayout::default(),
    }
}

fn plot(history_len: usize) -> Plot<ManualClock> {
    Plot::with_clock(settings(history_len, 100.0, 4), ManualClock::new()).unwrap()
}

#[test]
fn idle_signal_stays_on_midline() {
    let mut plot = plot(10);
    for _ in 0..500 {
        let frame = plot.update(0.0, 3);
        assert!(!frame.rescaled);
        assert!(plot.y_history().iter().all(|y| *y == 50.0));
    }
}

#[test]
fn constant_signal_settles_without_rescale() {
    let mut plot = plot(10);
    for tick in 1..=200 {
        let frame = plot.update(5.0, 3);
        assert!(!frame.rescaled, "rescaled on tick {tick}");
        if tick >= 10 {
            assert!(plot.y_history().iter().all(|y| *y == 45.0), "tick {tick}");
        }
    }
}

#[test]
fn flat_window_outside_bounds_is_not_rescaled() {
    let mut plot = plot(10);
    for _ in 0..10 {
        plot.update(500.0, 1);
    }
    let frame = plot.update(500.0, 1);
    assert!(!frame.rescaled);
    assert!(frame.curve.iter().all(|p| p.y.is_finite()));
    assert!(plot.y_history().iter().all(|y| *y == -450.0));
}

#[test]
fn rising_ramp_rescales_on_first_crossing() {
    let mut plot = plot(10);
    // y = 50 - 2k leaves the top edge once k > 25
    for k in 1..=25 {
        let frame = plot.update(2.0 * k as f32, 1);
        assert!(!frame.rescaled, "tick {k}");
        assert_eq!(plot.y_history()[9], 50.0 - 2.0 * k as f32);
    }

    let frame = plot.update(52.0, 1);
    assert!(frame.rescaled);
    let ys = plot.y_history();
    assert!(ys.iter().all(|y| (-1e-3..=100.0 + 1e-3).contains(y)));
    assert!(ys[9].abs() < 1e-3);
    assert!((ys[0] - 100.0).abs() < 1e-3);
}

#[test]
fn falling_ramp_rescales_on_first_crossing() {
    let mut plot = plot(10);
    for k in 1..=25 {
        assert!(!plot.update(-2.0 * k as f32, 1).rescaled, "tick {k}");
    }
    assert!(plot.update(-52.0, 1).rescaled);
    assert!(plot
        .y_history()
        .iter()
        .all(|y| (-1e-3..=100.0 + 1e-3).contains(y)));
}

#[test]
fn rescaled_value_lines_stay_inside_plot() {
    let mut plot = plot(10);
    for k in 0..40 {
        plot.update((k as f32 * 0.7).sin() * 300.0, 3);
        let frame = plot.frame();
        for segment in &frame.value_grid {
            assert!(segment.from.y > 0.0 && segment.from.y < 100.0);
        }
        assert_eq!(frame.value_grid.len(), frame.value_labels.len());
    }
}

#[test]
fn x_history_never_changes() {
    let mut plot = plot(25);
    let initial = plot.x_history().to_vec();
    assert_eq!(initial.first().copied(), Some(0.0));
    assert_eq!(initial.last().copied(), Some(100.0));
    for k in 0..1_000 {
        plot.update(k as f32, 5);
    }
    assert_eq!(plot.x_history(), initial.as_slice());
}

#[test]
fn time_axis_scrolls_after_deterministic_tick_count() {
    // width 120: 60 / 0.25 = 240 ticks to the second line,
    // 40 / 0.25 = 160 more to the third
    let mut plot = Plot::with_clock(settings(10, 120.0, 3), ManualClock::new()).unwrap();
    for _ in 0..399 {
        plot.update(0.0, 1);
    }
    assert_eq!(plot.time_axis().phase(), AxisPhase::Growing);
    assert_eq!(plot.time_axis().line_count(), 2);

    plot.update(0.0, 1);
    assert_eq!(plot.time_axis().phase(), AxisPhase::Scrolling);
    assert_eq!(plot.time_axis().line_count(), 3);
}

#[test]
fn time_labels_follow_the_clock() {
    let clock = ManualClock::new();
    let mut plot = Plot::with_clock(settings(10, 120.0, 2), clock.clone()).unwrap();
    for tick in 0..2_000 {
        clock.set(Duration::from_millis(tick * 16));
        let frame = plot.update(0.0, 1);
        assert!(frame.time_grid.len() <= 3);
        assert_eq!(frame.time_grid.len(), frame.time_labels.len());
        assert_eq!(plot.time_axis().labels().len(), plot.time_axis().line_count() + 1);
    }
    // the newest label was stamped after the axis started scrolling
    let newest = plot.time_axis().labels().last().unwrap();
    assert!(newest > 4.0, "newest label {newest}");
}

#[test]
fn huge_spike_keeps_value_grid_bounded() {
    let mut plot = plot(10);
    for spike in [1e9_f32, 3e10, -3e10] {
        let frame = plot.update(spike, 1);
        assert!(frame.rescaled);
        assert!(!frame.value_grid.is_empty());
        assert!(frame.value_grid.len() <= 52, "{} lines", frame.value_grid.len());
        assert_eq!(frame.value_grid.len(), frame.value_labels.len());
        assert!(frame.value_grid.iter().all(|s| s.from.y > 0.0 && s.from.y < 100.0));
    }
}
