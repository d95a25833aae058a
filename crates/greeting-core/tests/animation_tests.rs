mod common;

use greeting_core::*;
use common::*;
use glam::Vec2;

fn mount(input: &GreetingInput, seed: u64) -> (AnimationContext<RecordingBackend>, ImageLoadSender<FakeBitmap>) {
    AnimationContext::mount(input, 16.0 / 9.0, RecordingBackend::default(), seeded(seed))
}

#[test]
fn single_message_falls_and_eventually_wraps() {
    let (mut ctx, _tx) = mount(&input(&["Hi"], 0), 1);
    assert_eq!(ctx.objects().len(), 1);

    ctx.tick();
    let msg = &ctx.objects()[0];
    assert_eq!(msg.kind, ObjectKind::Message);
    assert!(msg.velocity.y < 0.0);

    // worst case: spawned at y = 100, slowest fall 0.08 per tick
    let ticks = ((100.0 - (-45.0)) / 0.08) as usize + 2;
    let mut wraps = 0;
    for _ in 0..ticks {
        if let TickOutcome::Advanced { respawned } = ctx.tick() {
            wraps += respawned;
        }
    }
    assert!(wraps >= 1);
}

#[test]
fn positions_stay_clamped_under_strong_wind() {
    let (mut ctx, _tx) = mount(&input(&["a", "b", "c"], 40), 2);
    ctx.pointer_moved(Vec2::new(1.0, -1.0));
    for _ in 0..3000 {
        ctx.tick();
        for o in ctx.objects() {
            assert!(o.position.x.abs() <= 40.0);
            assert!(o.position.z.abs() <= 30.0);
        }
    }
}

#[test]
fn camera_eases_toward_pointer_target() {
    let (mut ctx, _tx) = mount(&input(&[], 0), 3);
    ctx.pointer_moved(Vec2::new(1.0, 0.0));
    ctx.tick();
    assert!((ctx.camera().eye.x - 0.25).abs() < 1e-6);
    assert_eq!(ctx.camera().eye.y, 0.0);
    assert_eq!(ctx.camera().eye.z, 35.0);
    assert_eq!(ctx.camera().target, glam::Vec3::ZERO);

    for _ in 0..500 {
        ctx.tick();
    }
    assert!((ctx.camera().eye.x - 5.0).abs() < 1e-3);
}

#[test]
fn clock_advances_by_nominal_step() {
    let (mut ctx, _tx) = mount(&input(&[], 0), 4);
    for _ in 0..10 {
        ctx.tick();
    }
    assert!((ctx.clock() - 0.16).abs() < 1e-5);
}

#[test]
fn heart_mode_hides_only_messages() {
    let (mut ctx, tx) = mount(&input(&["one", "two"], 5), 5);
    assert!(tx.send_loaded(0, "photo.jpg", FakeBitmap { width: 800, height: 600 }));
    ctx.tick();
    let visible = |ctx: &AnimationContext<RecordingBackend>, kind: ObjectKind| {
        ctx.objects()
            .iter()
            .filter(|o| o.kind == kind)
            .map(|o| o.visible)
            .collect::<Vec<_>>()
    };
    let messages_before = visible(&ctx, ObjectKind::Message);
    let images_before = visible(&ctx, ObjectKind::Image);
    assert_eq!(images_before, vec![true]);

    assert_eq!(ctx.toggle_mode(), DisplayMode::Heart);
    ctx.tick();
    assert!(visible(&ctx, ObjectKind::Message).iter().all(|v| !v));
    assert_eq!(visible(&ctx, ObjectKind::Image), images_before);
    assert!(visible(&ctx, ObjectKind::Heart).iter().all(|v| *v));
    assert_eq!(ctx.backend().last_visible, 6);

    assert_eq!(ctx.toggle_mode(), DisplayMode::Normal);
    ctx.tick();
    assert_eq!(visible(&ctx, ObjectKind::Message), messages_before);
    assert_eq!(visible(&ctx, ObjectKind::Image), images_before);
}

#[test]
fn shared_mode_flag_is_seen_by_the_tick() {
    let (mut ctx, _tx) = mount(&input(&["x"], 0), 6);
    let flag = ctx.mode_flag();
    flag.set(DisplayMode::Heart);
    ctx.tick();
    assert!(!ctx.objects()[0].visible);
}

#[test]
fn loaded_photos_join_on_the_next_tick() {
    let (mut ctx, tx) = mount(&input(&[], 0), 7);
    let late = tx.clone();
    assert!(tx.send_loaded(0, "a.jpg", FakeBitmap { width: 10, height: 10 }));
    assert!(late.send_loaded(1, "b.jpg", FakeBitmap { width: 20, height: 10 }));
    assert!(ctx.objects().is_empty());
    ctx.tick();
    assert_eq!(ctx.objects().len(), 2);
    assert!(ctx.objects().iter().all(|o| o.kind == ObjectKind::Image));
    assert_eq!(ctx.backend().frames, 1);
}

#[test]
fn failed_photo_is_skipped_without_disturbing_others() {
    let (mut ctx, tx) = mount(&input(&["keep"], 3), 8);
    ctx.tick();
    let before: Vec<_> = ctx.objects().iter().map(|o| o.sprite).collect();

    assert!(tx.send_failed(0, "missing.jpg", "404"));
    assert!(matches!(ctx.tick(), TickOutcome::Advanced { .. }));
    let after: Vec<_> = ctx.objects().iter().map(|o| o.sprite).collect();
    assert_eq!(before, after);
    assert!(ctx.objects().iter().all(|o| o.kind != ObjectKind::Image));
}

#[test]
fn sprite_creation_failures_degrade_gracefully() {
    let backend = RecordingBackend::refusing_messages();
    let (mut ctx, _tx) = AnimationContext::mount(&input(&["a", "b"], 4), 1.0, backend, seeded(9));
    assert_eq!(ctx.objects().len(), 4);
    assert!(ctx.objects().iter().all(|o| o.kind == ObjectKind::Heart));
    assert!(matches!(ctx.tick(), TickOutcome::Advanced { .. }));
}

#[test]
fn teardown_releases_everything_exactly_once() {
    let (mut ctx, tx) = mount(&input(&["a", "b"], 10), 10);
    assert!(tx.send_loaded(0, "p.jpg", FakeBitmap { width: 1, height: 1 }));
    ctx.tick();
    assert_eq!(ctx.backend().stars_uploaded, 1500);

    assert!(ctx.teardown());
    assert!(!ctx.teardown());

    let backend = ctx.backend();
    let mut released = backend.released.clone();
    released.sort();
    let mut created = backend.created.clone();
    created.sort();
    assert_eq!(released, created);
    assert_eq!(released.len(), 13);
    assert_eq!(backend.release_calls, 1);
    assert_eq!(ctx.state(), LoopState::Stopped);
}

#[test]
fn stopped_context_ignores_ticks_and_late_loads() {
    let (mut ctx, tx) = mount(&input(&["a"], 1), 11);
    ctx.teardown();
    let frames = ctx.backend().frames;
    assert!(!tx.send_loaded(0, "late.jpg", FakeBitmap { width: 1, height: 1 }));
    assert_eq!(ctx.tick(), TickOutcome::Stopped);
    assert_eq!(ctx.backend().frames, frames);
    assert!(ctx.objects().is_empty());
}

#[test]
fn resize_updates_aspect_and_backend() {
    let (mut ctx, _tx) = mount(&input(&[], 0), 12);
    ctx.resize(800, 400);
    assert_eq!(ctx.camera().aspect, 2.0);
    assert_eq!(ctx.backend().resized, Some((800, 400)));
}

#[test]
fn huge_spawn_range_still_ticks_inside_bounds() {
    let mut input = input(&["Hi"], 2);
    input.config.spawn.x = Span::new(-3e38, 3e38);
    let (mut ctx, _tx) = AnimationContext::mount(&input, 1.0, RecordingBackend::default(), seeded(4));
    for _ in 0..10 {
        assert!(matches!(ctx.tick(), TickOutcome::Advanced { .. }));
    }
    assert!(ctx.objects().iter().all(|o| o.position.x.abs() <= 40.0));
}

#[test]
fn failed_heart_entry_leaves_messages_visible() {
    let (mut ctx, _tx) = mount(&input(&["a"], 1), 12);
    let flag = ctx.mode_flag();
    let mut left = false;
    assert_eq!(flag.toggle_with(|| false, || left = true), DisplayMode::Normal);
    assert!(!left);
    ctx.tick();
    assert_eq!(ctx.backend().last_visible, 2);
}

#[test]
fn toggle_with_runs_enter_then_leave() {
    let flag = ModeFlag::default();
    let mut entered = 0;
    let mut left = 0;
    assert_eq!(flag.toggle_with(|| { entered += 1; true }, || left += 1), DisplayMode::Heart);
    assert_eq!(flag.toggle_with(|| { entered += 1; true }, || left += 1), DisplayMode::Normal);
    assert_eq!((entered, left), (1, 1));
    assert_eq!(flag.get(), DisplayMode::Normal);
}
