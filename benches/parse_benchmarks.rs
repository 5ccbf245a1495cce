mod fixtures;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use criterion::Throughput;
use graphql_syntax::ParseOptions;

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    group.throughput(Throughput::Bytes(
        fixtures::SMALL_SCHEMA.len() as u64,
    ));
    group.bench_function("small (synthetic)", |b| {
        b.iter(|| {
            black_box(graphql_syntax::parse(fixtures::SMALL_SCHEMA))
        })
    });

    let large = fixtures::large_schema();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large (synthetic)", |b| {
        b.iter(|| black_box(graphql_syntax::parse(&large)))
    });

    group.finish();
}

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            black_box(graphql_syntax::parse(fixtures::SIMPLE_QUERY))
        })
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            black_box(graphql_syntax::parse(fixtures::COMPLEX_QUERY))
        })
    });

    group.bench_function("complex_query_no_extras", |b| {
        let options = ParseOptions::new()
            .ignore_comments(true)
            .ignore_locations(true);
        b.iter(|| {
            black_box(graphql_syntax::parse_with_options(
                fixtures::COMPLEX_QUERY,
                options,
            ))
        })
    });

    group.finish();
}

fn lex_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    let large = fixtures::large_schema();

    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large schema", |b| {
        b.iter(|| {
            let mut offset = 0;
            loop {
                let token = graphql_syntax::lex(&large, offset)
                    .expect("fixture lexes cleanly");
                if token.is_eof() {
                    break;
                }
                offset = token.end;
            }
        })
    });

    group.finish();
}

criterion_group!(benches, schema_parse, executable_parse, lex_throughput);
criterion_main!(benches);
