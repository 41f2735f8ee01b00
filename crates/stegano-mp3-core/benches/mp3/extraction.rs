use criterion::{criterion_group, criterion_main, Criterion};
use stegano_mp3_core::{embed, extract, scan, AncillaryStrategy, Configuration};

fn carrier(frames: usize) -> Vec<u8> {
    let mut frame = vec![0u8; 96];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x14, 0xC0]);
    frame.repeat(frames)
}

pub fn mp3_extraction(c: &mut Criterion) {
    let config = Configuration::new(true, true, 2, "Bench42").expect("valid configuration");
    let audio = embed(
        &carrier(2_000),
        include_bytes!("extraction.rs"),
        "extraction",
        "rs",
        &config,
    )
    .expect("Cannot embed secret")
    .result;

    c.bench_function("MP3 Frame Scan", |b| {
        b.iter(|| scan(&audio, AncillaryStrategy::MainDataAware).expect("Cannot scan"))
    });

    c.bench_function("MP3 Extraction", |b| {
        b.iter(|| extract(&audio, &config).expect("Cannot extract secret"))
    });
}

criterion_group!(benches, mp3_extraction);
criterion_main!(benches);
