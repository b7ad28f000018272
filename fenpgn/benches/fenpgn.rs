use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fenpgn::{fen, pgn, FenComponent, TagPattern, Validation};

const FENS: [(&str, &str); 4] = [
    (
        "initial",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "sicilian",
        "r1b1k2r/2qnbppp/p2ppn2/1p4B1/3NPPP1/2N2Q2/PPP4P/2KR1B1R w kq - 0 11",
    ),
    (
        "middle",
        "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K w - - 1 21",
    ),
    (
        "open_position",
        "4r1k1/3R1ppp/8/5P2/p7/6PP/4pK2/1rN1B3 w - - 4 43",
    ),
];

const PGN: &str = r#"[Event "Casual Game"]
[Site "Internet"]
[Date "2023.05.25"]
[Round "-"]
[White "Player1"]
[Black "Player2"]
[Result "1/2-1/2"]
[WhiteElo "2400"]
[BlackElo "2200"]

1. e4 e5 2. Nf3 Nc6 3. Bc4 Nf6 4. Ng5 d5 5. exd5 Na5 6. Bb5+ c6 7. dxc6 bxc6 8. Bd3 Ng4
"#;

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for (name, fen) in FENS {
        group.bench_function(name, |b| b.iter(|| black_box(fen::is_valid(fen))));
    }
}

fn bench_component_start(c: &mut Criterion) {
    for (validation, group_name) in [
        (Validation::Full, "component_start"),
        (Validation::LayoutOnly, "component_start_layout_only"),
    ] {
        let mut group = c.benchmark_group(group_name);
        for (name, fen) in FENS {
            group.bench_function(name, |b| {
                b.iter(|| {
                    black_box(
                        fen::index_of_component_start(fen, FenComponent::FullmoveNum, validation)
                            .unwrap(),
                    )
                })
            });
        }
    }
}

fn bench_extract_tag(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_tag");
    group.bench_function("compile_each_time", |b| {
        b.iter(|| black_box(pgn::extract_tag_value(PGN, "BlackElo")))
    });
    let pat = TagPattern::new("BlackElo");
    group.bench_function("precompiled", |b| b.iter(|| black_box(pat.extract(PGN))));
}

criterion_group!(
    benches,
    bench_validate,
    bench_component_start,
    bench_extract_tag,
);

criterion_main!(benches);
