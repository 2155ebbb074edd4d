use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipeable_core::{Runtime, FRAME_NANOS_60HZ};
use swipeable_foundation::prelude::*;
use swipeable_ui_graphics::Color;

const CONTAINER_WIDTH: f32 = 1080.0;
const DELTAS_PER_GESTURE: &[usize] = &[16, 64, 256];

fn action(name: &str) -> SwipeAction {
    SwipeAction::new(ActionCustomization::new(name, Color::WHITE, Color::RED), || {})
}

fn config(mode: HapticFeedbackMode) -> SwipeableConfig {
    SwipeableConfig::builder()
        .behavior(SwipeBehavior::Reveal)
        .left_actions([action("pin"), action("star")])
        .right_actions([action("delete")])
        .haptic(HapticFeedbackConfig::DEFAULT.with_mode(mode))
        .on_swipe_progress(|progress, direction| {
            black_box((progress, direction));
        })
        .build()
        .expect("benchmark config is valid")
}

fn bench_drag_deltas(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_deltas");
    for mode in [
        HapticFeedbackMode::ThresholdOnce,
        HapticFeedbackMode::Continuous,
        HapticFeedbackMode::ProgressSteps,
    ] {
        for &deltas in DELTAS_PER_GESTURE {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), deltas),
                &deltas,
                |b, &deltas| {
                    let runtime = Runtime::default();
                    let swipeable =
                        Swipeable::new(config(mode), runtime.handle(), CONTAINER_WIDTH)
                            .expect("valid width");
                    let step = CONTAINER_WIDTH / deltas as f32;
                    b.iter(|| {
                        swipeable.on_drag_start();
                        for index in 0..deltas {
                            let sign = if index % 2 == 0 { 1.0 } else { -0.5 };
                            swipeable.on_drag_delta(black_box(step * sign));
                        }
                        black_box(swipeable.offset());
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_release_and_settle(c: &mut Criterion) {
    c.bench_function("release_and_settle", |b| {
        let runtime = Runtime::default();
        let handle = runtime.handle();
        let swipeable = Swipeable::new(
            config(HapticFeedbackMode::ThresholdOnce),
            handle.clone(),
            CONTAINER_WIDTH,
        )
        .expect("valid width");
        let mut frame = 0u64;
        b.iter(|| {
            swipeable.on_drag_start();
            swipeable.on_drag_delta(black_box(-CONTAINER_WIDTH));
            swipeable.on_drag_end();
            while handle.has_frame_callbacks() {
                frame += 1;
                handle.drain_frame_callbacks(frame * FRAME_NANOS_60HZ);
            }
            swipeable.close();
            while handle.has_frame_callbacks() {
                frame += 1;
                handle.drain_frame_callbacks(frame * FRAME_NANOS_60HZ);
            }
            black_box(swipeable.state());
        });
    });
}

criterion_group!(drag_pipeline, bench_drag_deltas, bench_release_and_settle);
criterion_main!(drag_pipeline);
