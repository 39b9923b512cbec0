use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_dotjump::bridge::EngineBridge;
use tui_dotjump::core::FrameSink;
use tui_dotjump::term::{PixelGrid, RenderSink, ScoreSink, Surface};

struct NullSink;

impl FrameSink for NullSink {
    fn set_cell(&mut self, _x: i32, _y: i32, _color: u8) {}

    fn set_score(&mut self, _value: u32) {}
}

struct NullSurface;

impl Surface for NullSurface {
    fn paint_cell(&mut self, _x: i32, _y: i32, _color: u8) {}

    fn paint_score(&mut self, _value: u32) {}
}

fn bench_engine_step(c: &mut Criterion) {
    let mut bridge = EngineBridge::new().unwrap();
    let mut sink = NullSink;
    bridge.initialize(&mut sink);
    bridge.step(true, &mut sink);

    c.bench_function("engine_step_playing", |b| {
        b.iter(|| {
            bridge.step(black_box(false), &mut sink);
        })
    });
}

fn bench_diffed_frame(c: &mut Criterion) {
    // A full engine step through the diffing renderer; most cells are
    // unchanged frame-to-frame, which is the case the diff exists for.
    let mut bridge = EngineBridge::new().unwrap();
    let mut grid = PixelGrid::new();
    let mut score = ScoreSink::new();
    let mut surface = NullSurface;
    {
        let mut sink = RenderSink::new(&mut grid, &mut score, &mut surface);
        bridge.initialize(&mut sink);
        bridge.step(true, &mut sink);
    }

    c.bench_function("diffed_frame_step", |b| {
        b.iter(|| {
            let mut sink = RenderSink::new(&mut grid, &mut score, &mut surface);
            bridge.step(black_box(false), &mut sink);
        })
    });
}

fn bench_unchanged_cell(c: &mut Criterion) {
    let mut grid = PixelGrid::new();
    let mut surface = NullSurface;
    grid.set_cell(3, 4, 2, &mut surface);

    c.bench_function("set_cell_unchanged", |b| {
        b.iter(|| {
            grid.set_cell(black_box(3), black_box(4), black_box(2), &mut surface);
        })
    });
}

criterion_group!(
    benches,
    bench_engine_step,
    bench_diffed_frame,
    bench_unchanged_cell
);
criterion_main!(benches);
