use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rekap_core::model::GradeUpdate;
use rekap_core::scoring::{final_score, predikat};
use rekap_core::summary::ClassSummary;
use rekap_core::RosterStore;

fn make_roster(n: usize) -> RosterStore {
    let mut rk = RosterStore::new();
    for i in 0..n {
        let nim = format!("2301{i:05}");
        let base = (i % 100) as f64;
        rk.add_student(&nim, &format!("Student {i}"), &format!("{}", 100.0 - base))
            .unwrap();
        let update = GradeUpdate::new()
            .quiz(base.to_string())
            .tugas((base * 0.9).to_string())
            .uts((100.0 - base).to_string())
            .uas((base * 0.5 + 40.0).to_string());
        rk.set_grades(&nim, &update).unwrap();
    }
    rk
}

fn bench_scoring(c: &mut Criterion) {
    c.bench_function("final_score", |b| {
        b.iter(|| final_score(black_box(90.0), black_box(85.0), black_box(88.0), black_box(92.0)))
    });

    c.bench_function("predikat", |b| b.iter(|| predikat(black_box(69.99))));
}

fn bench_recap(c: &mut Criterion) {
    let roster = make_roster(1_000);

    c.bench_function("recap_1000", |b| b.iter(|| black_box(&roster).recap()));

    c.bench_function("filter_below_1000", |b| {
        b.iter(|| black_box(&roster).filter_below(black_box(70.0)))
    });

    let recap = roster.recap();
    c.bench_function("class_summary_1000", |b| {
        b.iter(|| ClassSummary::from_entries(black_box(&recap)))
    });
}

criterion_group!(benches, bench_scoring, bench_recap);
criterion_main!(benches);
