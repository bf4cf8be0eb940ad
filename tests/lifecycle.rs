//! Mount/unmount lifecycle and resize debounce, driven through the headless host

use narshe_scene::platform::SurfaceMode;
use narshe_scene::{
    FrameScheduler, HeadlessHost, SceneConfig, SceneError, Surface, TickOutcome, Viewport,
};

fn config() -> SceneConfig {
    SceneConfig {
        particle_count: Some(24),
        seed: Some(3),
        ..SceneConfig::default()
    }
}

fn mounted(viewport: Viewport) -> FrameScheduler<HeadlessHost> {
    let mut scheduler = FrameScheduler::new(config()).unwrap();
    assert!(scheduler.start(HeadlessHost::new(viewport)).unwrap());
    scheduler
}

fn resize_at(scheduler: &mut FrameScheduler<HeadlessHost>, now_ms: f64, viewport: Viewport) {
    scheduler.host_mut().unwrap().set_now(now_ms);
    scheduler.emit_resize(viewport);
}

#[test]
fn test_resize_burst_applies_once_with_last_dimensions() {
    let mut scheduler = mounted(Viewport::new(800.0, 600.0, 1.0));
    scheduler.pump(0.0);

    let burst = [
        Viewport::new(780.0, 590.0, 1.0),
        Viewport::new(700.0, 500.0, 1.0),
        Viewport::new(640.0, 480.0, 1.0),
        Viewport::new(1024.0, 700.0, 2.0),
    ];
    for (i, vp) in burst.iter().enumerate() {
        resize_at(&mut scheduler, 5.0 + i as f64 * 60.0, *vp);
    }
    // Only one debounce timer outstanding
    assert_eq!(scheduler.host().unwrap().pending_timers(), 1);

    let mut t = 16.0;
    while t < 1500.0 {
        scheduler.pump(t);
        t += 16.0;
    }

    let last = burst[burst.len() - 1];
    assert_eq!(scheduler.stats().unwrap().resizes_applied, 1);
    assert_eq!(scheduler.viewport(), Some(last));
    let surface = scheduler.surface().unwrap();
    assert_eq!(surface.physical_width(), 2048);
    assert_eq!(surface.physical_height(), 1400);
    assert_eq!(surface.width(), 1024.0);
    assert_eq!(scheduler.host().unwrap().pending_timers(), 0);
}

#[test]
fn test_resize_not_applied_before_quiet_period() {
    let mut scheduler = mounted(Viewport::new(800.0, 600.0, 1.0));
    resize_at(&mut scheduler, 0.0, Viewport::new(400.0, 300.0, 1.0));
    scheduler.pump(200.0);
    assert_eq!(scheduler.stats().unwrap().resizes_applied, 0);
    assert_eq!(scheduler.viewport(), Some(Viewport::new(800.0, 600.0, 1.0)));
    scheduler.pump(260.0);
    assert_eq!(scheduler.stats().unwrap().resizes_applied, 1);
}

#[test]
fn test_separate_bursts_apply_separately() {
    let mut scheduler = mounted(Viewport::new(800.0, 600.0, 1.0));
    resize_at(&mut scheduler, 0.0, Viewport::new(500.0, 400.0, 1.0));
    scheduler.pump(300.0);
    resize_at(&mut scheduler, 400.0, Viewport::new(600.0, 450.0, 1.0));
    scheduler.pump(700.0);
    assert_eq!(scheduler.stats().unwrap().resizes_applied, 2);
    assert_eq!(scheduler.viewport(), Some(Viewport::new(600.0, 450.0, 1.0)));
}

#[test]
fn test_stop_before_start_is_harmless() {
    let mut scheduler = FrameScheduler::<HeadlessHost>::new(config()).unwrap();
    assert!(scheduler.stop().is_none());
    assert!(scheduler.stop().is_none());
    assert_eq!(scheduler.tick(0.0), TickOutcome::Stopped);
}

#[test]
fn test_stop_twice_leaves_nothing_pending() {
    let mut scheduler = mounted(Viewport::new(320.0, 240.0, 1.0));
    scheduler.pump(0.0);
    scheduler.pump(16.0);
    // Pending debounce timer at the moment of unmount
    resize_at(&mut scheduler, 20.0, Viewport::new(300.0, 200.0, 1.0));

    let host = scheduler.stop().unwrap();
    assert!(host.is_idle());
    assert!(scheduler.stop().is_none());
    assert!(!scheduler.is_mounted());
    assert_eq!(scheduler.tick(32.0), TickOutcome::Stopped);
    assert!(scheduler.stats().is_none());
}

#[test]
fn test_restart_after_stop() {
    let mut scheduler = mounted(Viewport::new(320.0, 240.0, 1.0));
    scheduler.pump(0.0);
    let host = scheduler.stop().unwrap();

    assert!(scheduler.start(host).unwrap());
    assert_eq!(scheduler.pump(1000.0), Some(TickOutcome::Rendered));
    // Fresh session
    assert_eq!(scheduler.stats().unwrap().frames_rendered, 1);
}

#[test]
fn test_missing_surface_never_starts_loop() {
    let mut scheduler = FrameScheduler::new(config()).unwrap();
    let host = HeadlessHost::new(Viewport::new(320.0, 240.0, 1.0))
        .with_surface_mode(SurfaceMode::Missing);
    assert!(!scheduler.start(host).unwrap());
    assert_eq!(scheduler.host().unwrap().frames_requested(), 0);
    assert!(!scheduler.host().unwrap().listener_attached());
}

#[test]
fn test_unavailable_surface_aborts_with_error() {
    let mut scheduler = FrameScheduler::new(config()).unwrap();
    let host = HeadlessHost::new(Viewport::new(320.0, 240.0, 1.0))
        .with_surface_mode(SurfaceMode::Unavailable("context lost".into()));
    let err = scheduler.start(host).unwrap_err();
    assert!(matches!(err, SceneError::SurfaceUnavailable(ref why) if why == "context lost"));
    assert!(!scheduler.is_mounted());
    assert!(scheduler.host().unwrap().is_idle());
    assert_eq!(scheduler.host().unwrap().frames_requested(), 0);
}

#[test]
fn test_resize_while_unmounted_is_ignored() {
    let mut scheduler = FrameScheduler::new(config()).unwrap();
    let host = HeadlessHost::new(Viewport::new(320.0, 240.0, 1.0))
        .with_surface_mode(SurfaceMode::Missing);
    scheduler.start(host).unwrap();
    scheduler.on_resize_event();
    scheduler.flush_resize();
    assert_eq!(scheduler.host().unwrap().pending_timers(), 0);
}

#[test]
fn test_each_rendered_tick_requests_exactly_one_frame() {
    let mut scheduler = mounted(Viewport::new(320.0, 240.0, 1.0));
    for i in 0..30 {
        assert_eq!(scheduler.pump(i as f64 * 16.0), Some(TickOutcome::Rendered));
        assert_eq!(scheduler.host().unwrap().pending_frames().len(), 1);
    }
    assert_eq!(scheduler.host().unwrap().frames_requested(), 31);
}
