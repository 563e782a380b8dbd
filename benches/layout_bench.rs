// Benchmark for week layout
// Measures segmenting and full-schedule layout at a typical window size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use week_planner::models::day::{Day, DAY_ORDER};
use week_planner::models::event::Event;
use week_planner::models::user::User;
use week_planner::services::layout::{compute_geometry, layout_schedule, plan_grid_lines, segment_week};

fn schedule(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let start_day = DAY_ORDER[i % 7];
            let end_day = DAY_ORDER[(i % 7 + i % 3).min(6)];
            Event::builder()
                .name(format!("Event {}", i))
                .starts(start_day, ((i % 20) as u32) * 100)
                .ends(end_day, ((i % 20) as u32 + 2) * 100)
                .host(User::new(if i % 2 == 0 { "Lucia" } else { "Chat" }))
                .build()
                .unwrap()
        })
        .collect()
}

fn benchmark_segment(c: &mut Criterion) {
    let geometry = compute_geometry(1400, 1380);
    let whole_week = Event::builder()
        .starts(Day::Sunday, 0)
        .ends(Day::Saturday, 2300)
        .host(User::new("Lucia"))
        .build()
        .unwrap();

    c.bench_function("segment_whole_week", |b| {
        b.iter(|| segment_week(black_box(&whole_week), black_box(&geometry)))
    });

    c.bench_function("plan_grid_lines", |b| {
        b.iter(|| plan_grid_lines(black_box(&geometry)))
    });
}

fn benchmark_layout_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_schedule");
    let geometry = compute_geometry(1400, 1380);
    let subject = User::new("Lucia");

    for count in [10, 100, 1000] {
        let events = schedule(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| layout_schedule(black_box(events), &subject, true, geometry));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_segment, benchmark_layout_schedule);
criterion_main!(benches);
