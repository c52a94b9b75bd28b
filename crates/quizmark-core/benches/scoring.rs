use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizmark_core::evaluators::{
    ExclusiveChoiceEvaluator, FreeTextEvaluator, MultiSelectEvaluator, SingleChoiceEvaluator,
};
use quizmark_core::model::{ChoiceQuestion, TextItem, WordGroup};
use quizmark_core::normalize::parse_answers;
use quizmark_core::scoring::percentage;
use quizmark_core::traits::Evaluator;

fn make_text_items(n: usize) -> Vec<TextItem> {
    (0..n)
        .map(|i| {
            let value = if i % 3 == 0 { "Estoy" } else { "soy" };
            TextItem::new("estoy|estás|está|estamos|estáis|están").with_value(value)
        })
        .collect()
}

fn make_questions(n: usize) -> Vec<ChoiceQuestion> {
    (0..n)
        .map(|i| {
            let mut q = ChoiceQuestion::new("b", ["a", "b", "c", "d"]);
            q.select(if i % 2 == 0 { "b" } else { "c" });
            q
        })
        .collect()
}

fn make_groups(n: usize) -> Vec<WordGroup> {
    (0..n)
        .map(|i| {
            let mut g = WordGroup::new(format!("palabra{i}"), i % 4 == 0);
            g.set_checked(i % 3 == 0);
            g
        })
        .collect()
}

fn bench_percentage(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentage");

    group.bench_function("1_of_3", |b| {
        b.iter(|| percentage(black_box(1), black_box(3)))
    });

    group.bench_function("large", |b| {
        b.iter(|| percentage(black_box(123_456), black_box(654_321)))
    });

    group.finish();
}

fn bench_answer_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer_set");

    group.bench_function("parse_single", |b| {
        b.iter(|| parse_answers(black_box(Some("Madrid"))))
    });

    group.bench_function("parse_six", |b| {
        b.iter(|| parse_answers(black_box(Some(" Estoy|estás |está|Estamos|estáis|están"))))
    });

    group.finish();
}

fn bench_evaluators(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let mut text = make_text_items(100);
    group.bench_function("free_text_100", |b| {
        b.iter(|| FreeTextEvaluator.evaluate(black_box(&mut text)))
    });

    let mut radios = make_questions(100);
    group.bench_function("single_choice_100", |b| {
        b.iter(|| SingleChoiceEvaluator.evaluate(black_box(&mut radios)))
    });

    let mut rows = make_questions(100);
    group.bench_function("exclusive_choice_100", |b| {
        b.iter(|| ExclusiveChoiceEvaluator.evaluate(black_box(&mut rows)))
    });

    let mut words = make_groups(100);
    group.bench_function("multi_select_100", |b| {
        b.iter(|| MultiSelectEvaluator.evaluate(black_box(&mut words)))
    });

    group.finish();
}

criterion_group!(benches, bench_percentage, bench_answer_sets, bench_evaluators);
criterion_main!(benches);
