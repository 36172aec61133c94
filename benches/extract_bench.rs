use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kalima::extract::{decode_runs, strip_diacritics};

pub fn extract_benchmark(c: &mut Criterion) {
    let dummy = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ (1:1:1) bismi
    ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ (1:2:1) al-hamdu
    ٱلرَّحْمَٰنِ ٱلرَّحِيمِ (1:3:1) ar-rahmani
    مَٰلِكِ يَوْمِ ٱلدِّينِ (1:4:1) maliki
    "
    .repeat(200);
    let bytes = dummy.as_bytes();
    c.bench_function("decode_runs", |b| b.iter(|| decode_runs(black_box(bytes))));
    c.bench_function("strip_diacritics", |b| {
        b.iter(|| strip_diacritics(black_box("ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ")))
    });
}

criterion_group!(benches, extract_benchmark);
criterion_main!(benches);
