use criterion::{black_box, criterion_group, criterion_main, Criterion};

use concord::effects::EffectLog;
use concord::protocol::{decode_frame, encode_frame};
use concord::replay::{random_stream, Scenario};
use concord::{process_frame, Order};

fn bench_dispatch_frame(c: &mut Criterion) {
    let scenario = Scenario::skirmish(8);
    let stream = random_stream(&scenario, 256, 1);

    c.bench_function("dispatch_256_orders", |b| {
        b.iter(|| {
            let (mut manager, mut world) = scenario.build().unwrap();
            let mut log = EffectLog::new();
            process_frame(&mut manager, world.as_mut(), black_box(&stream), &mut log).unwrap();
            log
        })
    });
}

fn bench_lobby_chat(c: &mut Criterion) {
    let mut scenario = Scenario::skirmish(8);
    scenario.players = None;
    scenario.local_player = None;
    let stream: Vec<(u32, Order)> = (0..256)
        .map(|i| (i % 8, Order::team_chat(format!("line {}", i))))
        .collect();

    c.bench_function("lobby_team_chat_256", |b| {
        b.iter(|| {
            let (mut manager, _) = scenario.build().unwrap();
            let mut log = EffectLog::new();
            process_frame(&mut manager, None, black_box(&stream), &mut log).unwrap();
            log
        })
    });
}

fn bench_decode_frame(c: &mut Criterion) {
    let scenario = Scenario::skirmish(8);
    let text = encode_frame(&random_stream(&scenario, 256, 2)).unwrap();

    c.bench_function("decode_frame_256", |b| {
        b.iter(|| decode_frame(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, bench_dispatch_frame, bench_lobby_chat, bench_decode_frame);
criterion_main!(benches);
