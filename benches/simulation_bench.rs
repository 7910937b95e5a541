use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plane_kinematics::{Plane, PhysicsWorld, Vec2};

// --- Helper for filling a world with a grid of falling boxes ---
fn build_box_grid(num_boxes: usize) -> PhysicsWorld {
    let plane = Plane::new(1920.0, 1080.0).expect("plane dimensions are positive");
    let mut world = PhysicsWorld::new(plane);

    let size = 10;
    let per_row = 90;
    for i in 0..num_boxes {
        let x = 15.0 + (i % per_row) as f64 * 20.0;
        let y = 15.0 + (i / per_row) as f64 * 20.0;
        world
            .create_body_with_mass(&format!("box_{i}"), Vec2::new(x, y), size, size, 1.0)
            .expect("grid fits on the plane");
        if i % 3 == 0 {
            if let Some(body) = world.body_mut(&format!("box_{i}")) {
                body.set_velocity(Vec2::new(40.0, -20.0));
            }
        }
    }
    world
}

// Benchmark for a grid of boxes falling onto the bottom of the plane
fn bench_falling_boxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("falling_boxes");

    for num_boxes in [10, 100, 500].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            b.iter(|| {
                let mut world = build_box_grid(black_box(n));
                let dt = 1.0 / 60.0;
                for _ in 0..120 {
                    let report = world.step(black_box(dt)).expect("dt is positive");
                    black_box(report);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_falling_boxes);
criterion_main!(benches);
