//! Benchmarks for composition and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks compose synthetic batches and aggregate reports of
//! growing size and serialize them.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vanban::compose::{compose, Variant};
use vanban::content::{Attendee, Document, DocumentKind, Meeting, Task, TaskStatus};
use vanban::render;

/// Creates a decision with the given number of articles.
fn create_decision(articles: usize) -> Document {
    let mut content = String::from("CHƯƠNG I\nQUY ĐỊNH CHUNG\n");
    for i in 1..=articles {
        content.push_str(&format!("Điều {i}. Nội dung điều {i}\n"));
        content.push_str("1. Khoản thứ nhất của điều.\n");
        content.push_str("a) Điểm thứ nhất của khoản.\n");
        content.push_str("Đoạn văn giải thích bổ sung cho điều này.\n");
    }

    Document::new(DocumentKind::Decision)
        .with_number(format!("{articles}/QĐ-UBND"))
        .with_issuer("Ủy ban nhân dân huyện Thống Nhất")
        .with_signer("Nguyễn Văn A", "Chủ tịch")
        .with_subject("Về việc ban hành Quy chế làm việc")
        .with_basis("Luật Tổ chức chính quyền địa phương;")
        .with_content(content)
}

/// Creates meetings on consecutive days, each with attendees and tasks.
fn create_meetings(count: usize) -> Vec<Meeting> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    (0..count)
        .map(|i| {
            let mut m = Meeting::new(format!("Giao ban tuần {}", i + 1), start + Duration::days(i as i64));
            m.chair = "Nguyễn Văn A".into();
            m.location = "Phòng họp số 1".into();
            m.conclusion = "Các đơn vị khẩn trương hoàn thành nhiệm vụ được giao.".into();
            m.attendees = (0..10)
                .map(|j| Attendee::new(format!("Cán bộ {j}"), "Chuyên viên"))
                .collect();
            m.tasks = (0..5)
                .map(|j| {
                    Task::new(format!("Nhiệm vụ {j}"), "Văn phòng").with_status(TaskStatus::InProgress)
                })
                .collect();
            m
        })
        .collect()
}

/// Benchmark composing and rendering batches.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [1, 10, 50].iter() {
        let docs: Vec<Document> = (0..*size).map(|_| create_decision(20)).collect();

        group.bench_function(format!("{}_documents", size), |b| {
            b.iter(|| {
                let rendered = compose(Variant::Batch(black_box(&docs))).unwrap();
                render::to_wordml(&rendered).unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark the landscape aggregate report.
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [5, 50].iter() {
        let meetings = create_meetings(*size);

        group.bench_function(format!("{}_meetings", size), |b| {
            b.iter(|| {
                let rendered = compose(Variant::Aggregate(black_box(&meetings))).unwrap();
                render::to_wordml(&rendered).unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark line classification on its own.
fn bench_classify(c: &mut Criterion) {
    let lines = [
        "CHƯƠNG II",
        "Điều 15. Trách nhiệm thi hành",
        "3. Văn phòng chủ trì tổng hợp",
        "b) Báo cáo kết quả thực hiện",
        "Quyết định này có hiệu lực kể từ ngày ký.",
    ];

    c.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in lines.iter() {
                black_box(vanban::classify(black_box(line)));
            }
        });
    });
}

criterion_group!(benches, bench_batch, bench_aggregate, bench_classify);
criterion_main!(benches);
