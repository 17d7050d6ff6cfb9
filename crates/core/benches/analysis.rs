use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use metrica_core::tokenize::{sentences, word_tokens};
use metrica_core::{ArticleMetrics, ExtractedArticle, LexiconConfig, LexiconSet, syllable_count};

fn fixture_lexicon() -> LexiconSet {
    let config = LexiconConfig {
        dictionary_dir: "../../tests/fixtures/MasterDictionary".into(),
        stopwords_dir: "../../tests/fixtures/StopWords".into(),
        ..Default::default()
    };
    LexiconSet::load(&config).unwrap()
}

fn article(paragraphs: usize) -> String {
    let body = std::fs::read_to_string("../../tests/fixtures/Extracted_Text/blackassign0002.txt").unwrap();
    std::iter::repeat_n(body.as_str(), paragraphs).collect::<Vec<_>>().join(" ")
}

fn bench_tokenize(c: &mut Criterion) {
    let text = article(50);

    let mut group = c.benchmark_group("tokenize");
    group.bench_function("sentences", |b| b.iter(|| sentences(black_box(&text))));
    group.bench_function("words", |b| b.iter(|| word_tokens(black_box(&text))));
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let lexicon = fixture_lexicon();

    let mut group = c.benchmark_group("metrics");
    for paragraphs in [1, 10, 100] {
        let text = article(paragraphs);
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| ArticleMetrics::compute(black_box(text), &lexicon))
        });
    }
    group.finish();
}

fn bench_syllables(c: &mut Criterion) {
    let words = ["communication", "isolation", "beautiful", "rhythm", "introduced", "meetings"];

    c.bench_function("syllable_count", |b| {
        b.iter(|| words.iter().map(|w| syllable_count(black_box(w))).sum::<usize>())
    });
}

fn bench_extract(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/page.html").unwrap();

    c.bench_function("extract_html", |b| b.iter(|| ExtractedArticle::from_html("1", black_box(&html))));
}

criterion_group!(benches, bench_tokenize, bench_metrics, bench_syllables, bench_extract);
criterion_main!(benches);
