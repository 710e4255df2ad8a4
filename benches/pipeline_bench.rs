//! Benchmark for deferred calls, currying and pipeline assembly.
//!
//! Measures the overhead of the dynamic calling convention relative to a
//! direct call of the same function.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pointfree::args;
use pointfree::compose::{Argument, Placeholder, State, assemble, bind, compose, curry, stage};
use pointfree::value::{Function, Value};
use std::hint::black_box;

fn add() -> Function {
    Function::new("add", |arguments| {
        Ok(Value::Int(arguments.int("add", 0)? + arguments.int("add", 1)?))
    })
}

fn add_keyword() -> Function {
    Function::new("add_keyword", |arguments| {
        Ok(Value::Int(
            arguments.int("add_keyword", 0)? + arguments.keyword_int("add_keyword", "amount")?,
        ))
    })
}

fn double() -> Function {
    Function::new("double", |arguments| {
        Ok(Value::Int(arguments.int("double", 0)? * 2))
    })
}

// =============================================================================
// Deferred Call Benchmarks
// =============================================================================

fn benchmark_deferred_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deferred_call");

    group.bench_function("direct", |bencher| {
        let function = add();
        bencher.iter(|| black_box(function.call(args![1, 2])));
    });

    group.bench_function("bound_once", |bencher| {
        let call = bind(
            add(),
            [Argument::Hole(Placeholder::index(0)), Argument::from(Value::Int(2))],
            [],
        );
        bencher.iter(|| black_box(call.apply(&args![1])));
    });

    group.bench_function("bound_twice", |bencher| {
        let call = bind(
            add(),
            [
                Argument::Hole(Placeholder::index(1)),
                Argument::Hole(Placeholder::named("right")),
            ],
            [],
        );
        bencher.iter(|| {
            let pending = call.apply(&args![0]).unwrap().pending().unwrap();
            black_box(pending.apply(&args![1; right = 2]))
        });
    });

    group.finish();
}

// =============================================================================
// Curry Benchmarks
// =============================================================================

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");

    for arity in [1_usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("one_per_call", arity), &arity, |bencher, &arity| {
            let curried = curry(add(), arity);
            bencher.iter(|| {
                let mut state = curried.clone();
                for index in 0..arity {
                    state = state
                        .apply([Value::Int(index as i64)])
                        .unwrap()
                        .pending()
                        .unwrap();
                }
                black_box(state.invoke())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    group.bench_function("compose_chain", |bencher| {
        let chain = (0..8).fold(double(), |chain, _| compose(double(), chain));
        bencher.iter(|| black_box(chain.call(args![1])));
    });

    for stages in [1_usize, 4, 16] {
        let state = State::from([("amount".to_string(), Value::Int(1))]);
        let build = move || {
            (0..stages).map(|_| {
                stage(
                    add_keyword(),
                    [Argument::Hole(Placeholder::index(0))],
                    [("amount".to_string(), Argument::Hole(Placeholder::named("amount")))],
                )
            })
        };

        group.bench_with_input(BenchmarkId::new("assemble", stages), &stages, |bencher, _| {
            bencher.iter(|| black_box(assemble(build(), curry(double(), 1), &state)));
        });

        group.bench_with_input(BenchmarkId::new("run", stages), &stages, |bencher, _| {
            let pipeline = assemble(build(), curry(double(), 1), &state).unwrap();
            bencher.iter(|| {
                let saturated = pipeline.accumulate([Value::Int(1)]);
                black_box(saturated.invoke())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_deferred_call,
    benchmark_curry,
    benchmark_pipeline
);
criterion_main!(benches);
