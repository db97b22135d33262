use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sportsdash::config::{Config, MockConfig};
use sportsdash::fixtures::MockGenerator;
use sportsdash::league::League;
use sportsdash::tui::action::Action;
use sportsdash::tui::reducer::reduce;
use sportsdash::tui::state::AppState;
use sportsdash::types::{Dataset, DataSource, TeamStanding};
use sportsdash::utils::{filter_by_search, sort_by_key, SortDirection};
use std::sync::Arc;

/// Mock generator that never fails, so every iteration does the full work
fn create_generator() -> MockGenerator {
    let config = MockConfig {
        error_rate: 0.0,
        latency_ms: 0,
        game_count: 6,
    };
    MockGenerator::seeded(&config, 42)
}

fn create_sample_standings() -> Vec<TeamStanding> {
    create_generator()
        .standings(League::Nfl)
        .unwrap_or_default()
}

fn create_sample_dataset(league: League) -> Dataset {
    let generator = create_generator();
    Dataset {
        league,
        standings: generator.standings(league).unwrap_or_default(),
        games: generator.recent_games(league).unwrap_or_default(),
        stats: generator.dashboard_stats(league).unwrap_or_default(),
        standings_source: DataSource::Mock,
        games_source: DataSource::Mock,
    }
}

/// Benchmark mock data generation per league
fn bench_mock_generation(c: &mut Criterion) {
    let generator = create_generator();

    let mut group = c.benchmark_group("mock_generation");

    group.bench_function("standings_nfl", |b| {
        b.iter(|| generator.standings(black_box(League::Nfl)))
    });

    group.bench_function("recent_games_nba", |b| {
        b.iter(|| generator.recent_games(black_box(League::Nba)))
    });

    group.bench_function("search_epl", |b| {
        b.iter(|| generator.search(black_box("united"), black_box(League::Epl)))
    });

    group.finish();
}

/// Benchmark the sort and filter helpers the presenter relies on
fn bench_sort_and_filter(c: &mut Criterion) {
    let standings = create_sample_standings();

    let mut group = c.benchmark_group("sort_filter");

    group.bench_function("sort_by_win_percentage", |b| {
        b.iter(|| {
            sort_by_key(
                black_box(&standings),
                black_box("win_percentage"),
                SortDirection::Descending,
            )
        })
    });

    group.bench_function("sort_by_name", |b| {
        b.iter(|| sort_by_key(black_box(&standings), black_box("name"), SortDirection::Ascending))
    });

    group.bench_function("filter_by_name", |b| {
        b.iter(|| filter_by_search(black_box(&standings), black_box("new"), &["name"]))
    });

    group.finish();
}

/// Benchmark reducer paths that rebuild the dashboard view
fn bench_reducer_dispatch(c: &mut Criterion) {
    let dataset = Arc::new(create_sample_dataset(League::Nba));
    let (loaded, _) = reduce(
        AppState::new(Config::default()),
        Action::DataLoaded(Ok(dataset.clone())),
    );

    let mut group = c.benchmark_group("reducer");

    group.bench_function("data_loaded", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(AppState::new(Config::default())),
                black_box(Action::DataLoaded(Ok(dataset.clone()))),
            );
            new_state
        })
    });

    group.bench_function("apply_search", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(loaded.clone()),
                black_box(Action::ApplySearch("lakers".to_string())),
            );
            new_state
        })
    });

    group.bench_function("next_league", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(loaded.clone()), black_box(Action::NextLeague));
            new_state
        })
    });

    group.finish();
}

/// Benchmark state cloning (to measure overhead)
fn bench_state_operations(c: &mut Criterion) {
    let (state, _) = reduce(
        AppState::new(Config::default()),
        Action::DataLoaded(Ok(Arc::new(create_sample_dataset(League::Nhl)))),
    );

    let mut group = c.benchmark_group("state_operations");

    group.bench_function("clone_full_state", |b| {
        b.iter(|| black_box(state.clone()))
    });

    group.bench_function("clone_view_arc", |b| {
        b.iter(|| black_box(state.data.view.clone()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mock_generation,
    bench_sort_and_filter,
    bench_reducer_dispatch,
    bench_state_operations
);
criterion_main!(benches);
