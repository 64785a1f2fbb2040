// Performance benchmarks for the peerdex registry
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use peerdex::registry::structs::peer_record::PeerRecord;
use peerdex::registry::structs::peer_registry::PeerRegistry;

fn create_filled_registry(files: usize, peers_per_file: usize) -> PeerRegistry {
    let registry = PeerRegistry::new();
    for peer in 0..peers_per_file {
        let record = PeerRecord::new(
            &format!("user{peer}"),
            &format!("10.0.{}.{}:9100", peer / 256, peer % 256),
        );
        registry.register_peer(record.clone());
        for file in 0..files {
            registry.share(&format!("file{file}.mp3"), record.clone());
        }
    }
    registry
}

fn bench_register_peer(c: &mut Criterion) {
    let registry = PeerRegistry::new();
    let mut next = 0u32;

    c.bench_function("register_peer", |b| {
        b.iter(|| {
            let record = PeerRecord::new("user", &format!("10.1.{}.{}:9100", next / 256, next % 256));
            next = next.wrapping_add(1);
            black_box(registry.register_peer(record));
        });
    });
}

fn bench_share(c: &mut Criterion) {
    let registry = PeerRegistry::new();
    let record = PeerRecord::new("user", "10.0.0.1:9100");
    registry.register_peer(record.clone());
    let mut next = 0u32;

    c.bench_function("share", |b| {
        b.iter(|| {
            registry.share(&format!("file{}.mp3", next % 4096), record.clone());
            next = next.wrapping_add(1);
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let registry = create_filled_registry(1000, 8);

    c.bench_function("search_substring", |b| {
        b.iter(|| {
            black_box(registry.search(black_box("file42")));
        });
    });
}

fn bench_unregister_reregister(c: &mut Criterion) {
    let registry = create_filled_registry(100, 8);
    let record = PeerRecord::new("user0", "10.0.0.0:9100");

    c.bench_function("unregister_and_reshare", |b| {
        b.iter(|| {
            registry.unregister_peer(&record);
            registry.register_peer(record.clone());
            for file in 0..100 {
                registry.share(&format!("file{file}.mp3"), record.clone());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_register_peer,
    bench_share,
    bench_search,
    bench_unregister_reregister
);
criterion_main!(benches);
