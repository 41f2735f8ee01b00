use criterion::{criterion_group, criterion_main, Criterion};
use stegano_mp3_core::{embed, Configuration};

/// 32 kbps / 48 kHz mono frames without audio data
fn carrier(frames: usize) -> Vec<u8> {
    let mut frame = vec![0u8; 96];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x14, 0xC0]);
    frame.repeat(frames)
}

pub fn mp3_embedding(c: &mut Criterion) {
    let audio = carrier(2_000);
    let secret = include_bytes!("embedding.rs");

    c.bench_function("MP3 Embedding sequential", |b| {
        let config = Configuration::new(false, false, 1, "").expect("valid configuration");
        b.iter(|| {
            embed(&audio, secret, "embedding", "rs", &config).expect("Cannot embed secret");
        })
    });

    c.bench_function("MP3 Embedding random and encrypted", |b| {
        let config = Configuration::new(true, true, 4, "Bench42").expect("valid configuration");
        b.iter(|| {
            embed(&audio, secret, "embedding", "rs", &config).expect("Cannot embed secret");
        })
    });
}

criterion_group!(benches, mp3_embedding);
criterion_main!(benches);
