use criterion::{criterion_group, criterion_main, Criterion};

use helpers::documents::{create_document, create_vocabulary};
use page_index::{
    builder::{build_index, BuilderOptions},
    documents::{Document, MemoryStore},
    query::Query,
    search::{QueryEngine, Ranker},
};
use rand::{rngs::StdRng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    const NUM_DOCS: usize = 5_000;

    let vocabulary = create_vocabulary(2_000, &mut rng);
    let store: MemoryStore = (0..NUM_DOCS)
        .map(|ix| {
            let document = create_document(50., &vocabulary, &mut rng);
            Document::new(
                format!("http://example.com/{}", ix + 1),
                1,
                document.text(&mut rng),
            )
        })
        .collect();

    let index = build_index(&store, &BuilderOptions::default())
        .expect("Error while building the index");

    // Queries over words of at least 3 letters
    let words: Vec<String> = vocabulary
        .iter()
        .map(|w| w.to_lowercase())
        .filter(|w| w.len() >= 3 && w != "and" && w != "or")
        .take(6)
        .collect();
    let line = format!(
        "{} {} or {} or {} and {} {}",
        words[0], words[1], words[2], words[3], words[4], words[5]
    );
    let query = Query::parse(&line).expect("Error while parsing the query");
    let engine = QueryEngine::new(&index);

    c.bench_function("evaluate", |b| b.iter(|| engine.evaluate(&query)));
    c.bench_function("evaluate+rank", |b| {
        b.iter(|| {
            Ranker::new(engine.evaluate(&query), &store)
                .take(10)
                .count()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(100);
    targets = criterion_benchmark
}
criterion_main!(benches);
