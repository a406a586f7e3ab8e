//! Benchmark flood fill and path tracing.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vyuha::core::{Cell, Direction, Pose};
use vyuha::drive::{Actuator, WallSensor};
use vyuha::grid::{GridConfig, MazeGrid};
use vyuha::planning::{FloodMode, flood_fill, trace_path};
use vyuha::{PhaseController, SolverConfig};

/// Comb maze: full-height columns joined along the bottom row.
fn comb_maze(size: usize) -> MazeGrid {
    let mut grid = MazeGrid::new(size, size);
    grid.enclose_boundary();
    for x in 0..size as i32 - 1 {
        for y in 1..size as i32 {
            grid.register_wall(Cell::new(x, y), Direction::East);
        }
    }
    for cell in grid.cells().collect::<Vec<_>>() {
        grid.mark_visited(cell);
    }
    grid
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [10, 16, 32] {
        let goals = GridConfig::square(size).center_cells();
        let open = MazeGrid::new(size, size);
        let comb = comb_maze(size);

        group.bench_with_input(BenchmarkId::new("open_full", size), &size, |b, _| {
            b.iter(|| flood_fill(black_box(&open), black_box(&goals), FloodMode::Full))
        });

        group.bench_with_input(BenchmarkId::new("comb_restricted", size), &size, |b, _| {
            b.iter(|| flood_fill(black_box(&comb), black_box(&goals), FloodMode::Restricted))
        });
    }

    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let size = 16;
    let grid = comb_maze(size);
    let goals = GridConfig::square(size).center_cells();
    let field = flood_fill(&grid, &goals, FloodMode::Restricted);

    c.bench_function("trace_comb_16", |b| {
        b.iter(|| trace_path(black_box(&grid), black_box(&field), Cell::ORIGIN, FloodMode::Restricted))
    });
}

/// Drive over a ground-truth grid.
struct GridDrive {
    truth: MazeGrid,
    pose: Pose,
}

impl WallSensor for GridDrive {
    fn wall_front(&mut self) -> vyuha::Result<bool> {
        Ok(self.truth.has_wall(self.pose.cell, self.pose.heading))
    }

    fn wall_left(&mut self) -> vyuha::Result<bool> {
        Ok(self.truth.has_wall(self.pose.cell, self.pose.heading.left()))
    }

    fn wall_right(&mut self) -> vyuha::Result<bool> {
        Ok(self.truth.has_wall(self.pose.cell, self.pose.heading.right()))
    }
}

impl Actuator for GridDrive {
    fn turn_left(&mut self) -> vyuha::Result<()> {
        self.pose.heading = self.pose.heading.left();
        Ok(())
    }

    fn turn_right(&mut self) -> vyuha::Result<()> {
        self.pose.heading = self.pose.heading.right();
        Ok(())
    }

    fn move_forward(&mut self) -> vyuha::Result<()> {
        self.pose.cell = self.pose.ahead();
        Ok(())
    }
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for size in [10, 16] {
        let truth = comb_maze(size);
        group.bench_with_input(BenchmarkId::new("comb", size), &size, |b, &size| {
            b.iter(|| {
                let drive = GridDrive {
                    truth: truth.clone(),
                    pose: Pose::default(),
                };
                let config = SolverConfig::for_size(size).with_max_iterations(100_000);
                let mut controller = PhaseController::new(config, drive).unwrap();
                black_box(controller.run().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flood_fill, bench_trace, bench_full_run);
criterion_main!(benches);
