use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::HashMap;

use unmyeong_cache::hash_input;
use unmyeong_matrix::{RawAspect, RawAstroRecord, RawPillar, RawSajuRecord, compute_matrix, normalize};

fn fixture() -> (RawSajuRecord, RawAstroRecord) {
    let saju = RawSajuRecord {
        day_master_element: Some("wood".into()),
        pillars: vec![
            RawPillar {
                stem_element: Some("wood".into()),
                branch_element: Some("fire".into()),
                stem_sibsin: Some("bigyeon".into()),
                branch_sibsin: Some("siksin".into()),
                stage: Some("jewang".into()),
            },
            RawPillar {
                stem_element: Some("water".into()),
                branch_element: Some("metal".into()),
                stem_sibsin: Some("jeongin".into()),
                branch_sibsin: Some("jeonggwan".into()),
                stage: Some("geonrok".into()),
            },
            RawPillar {
                stem_element: Some("earth".into()),
                branch_element: Some("earth".into()),
                stem_sibsin: Some("pyeonjae".into()),
                branch_sibsin: Some("jeongjae".into()),
                stage: Some("myo".into()),
            },
            RawPillar {
                stem_element: Some("fire".into()),
                branch_element: Some("wood".into()),
                stem_sibsin: Some("sanggwan".into()),
                branch_sibsin: Some("geopjae".into()),
                stage: Some("tae".into()),
            },
        ],
        shinsal: vec!["cheoneul".into(), "dohwa".into(), "yeokma".into()],
        yongsin: Some("fire".into()),
        daeun_element: Some("metal".into()),
        saeun_element: Some("water".into()),
        ..Default::default()
    };
    let astro = RawAstroRecord {
        dominant_element: Some("fire".into()),
        planet_houses: HashMap::from([
            ("sun".to_owned(), 10),
            ("moon".to_owned(), 4),
            ("mercury".to_owned(), 9),
            ("venus".to_owned(), 5),
            ("mars".to_owned(), 1),
            ("jupiter".to_owned(), 2),
            ("saturn".to_owned(), 7),
        ]),
        planet_signs: HashMap::from([
            ("sun".to_owned(), "leo".to_owned()),
            ("moon".to_owned(), "cancer".to_owned()),
            ("venus".to_owned(), "libra".to_owned()),
        ]),
        aspects: vec![
            RawAspect {
                planet1: Some("sun".into()),
                planet2: Some("moon".into()),
                kind: Some("trine".into()),
                orb: Some(2.0),
                angle: None,
            },
            RawAspect {
                planet1: Some("mars".into()),
                planet2: Some("saturn".into()),
                kind: Some("square".into()),
                orb: Some(1.1),
                angle: None,
            },
        ],
        ..Default::default()
    };
    (saju, astro)
}

fn normalize_bench(c: &mut Criterion) {
    let (saju, astro) = fixture();
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&saju), black_box(&astro)))
    });
}

fn hash_bench(c: &mut Criterion) {
    let (saju, astro) = fixture();
    let input = normalize(&saju, &astro);
    c.bench_function("hash_input", |b| b.iter(|| hash_input(black_box(&input))));
}

fn matrix_bench(c: &mut Criterion) {
    let (saju, astro) = fixture();
    let input = normalize(&saju, &astro);
    c.bench_function("compute_matrix", |b| {
        b.iter(|| compute_matrix(black_box(&input)))
    });
}

criterion_group!(benches, normalize_bench, hash_bench, matrix_bench);
criterion_main!(benches);
