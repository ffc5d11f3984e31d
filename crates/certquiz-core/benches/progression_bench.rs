//! # Progression Benchmarks
//!
//! Performance benchmarks for certquiz-core controller operations.
//!
//! Run with: `cargo bench -p certquiz-core`

use certquiz_core::{
    Catalog, Question, QuizController, RankInfo, RankTable, Stage, StageId, catalog_from_json,
    catalog_to_json,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

/// Create a catalog of three stages with `per_stage` questions each.
fn create_catalog(per_stage: usize) -> Catalog {
    let info = |title: &str| RankInfo {
        title: title.to_string(),
        description: String::new(),
        icon: String::new(),
        razryad: None,
    };
    let stages = (1..=3)
        .map(|id| Stage {
            id: StageId(id),
            title: format!("Stage {id}"),
            subtitle: None,
            description: None,
            icon: None,
            passing_score: per_stage as u32,
            questions: (0..per_stage)
                .map(|i| Question {
                    id: i as u32,
                    prompt: format!("Question {i}"),
                    options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    correct_answer: i % 4,
                    explanation: format!("Explanation {i}"),
                })
                .collect(),
        })
        .collect();
    Catalog::new(
        stages,
        RankTable {
            master: info("Master"),
            high: info("High"),
            medium: info("Medium"),
            low: info("Low"),
        },
    )
    .expect("catalog")
}

/// Play all stages with perfect answers.
fn play_through(catalog: &Arc<Catalog>) -> QuizController {
    let mut quiz = QuizController::new(Arc::clone(catalog));
    for id in catalog.stage_ids() {
        quiz.begin_stage(id);
        let count = catalog.stage(id).map_or(0, Stage::question_count);
        for i in 0..count {
            quiz.record_answer(id, i, i % 4);
            quiz.advance();
        }
        quiz.acknowledge_stage_end();
    }
    quiz
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_play_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("play_through");

    for size in [15, 150, 1500].iter() {
        let catalog = Arc::new(create_catalog(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(play_through(catalog).aggregate_percentage()));
        });
    }

    group.finish();
}

fn bench_live_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("live_score");

    for size in [15, 150, 1500].iter() {
        let catalog = Arc::new(create_catalog(*size));
        let mut quiz = QuizController::new(Arc::clone(&catalog));
        quiz.begin_stage(StageId(1));
        for i in 0..*size {
            quiz.record_answer(StageId(1), i, i % 4);
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &quiz, |b, quiz| {
            b.iter(|| black_box(quiz.current_score()));
        });
    }

    group.finish();
}

fn bench_catalog_parse(c: &mut Criterion) {
    let json = catalog_to_json(&create_catalog(150)).expect("encode");

    c.bench_function("catalog_from_json_450", |b| {
        b.iter(|| black_box(catalog_from_json(json.as_bytes()).expect("parse")));
    });
}

criterion_group!(
    benches,
    bench_play_through,
    bench_live_score,
    bench_catalog_parse
);
criterion_main!(benches);
