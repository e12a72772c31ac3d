//! Integration tests for document composition.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use vanban::compose::blocks::{OrgIdentity, FALLBACK_RECIPIENTS};
use vanban::compose::{compose, ComposeOptions, Composer, Variant};
use vanban::content::{
    Attendee, Document, DocumentKind, Meeting, MeetingStatus, Task, TaskStatus,
};
use vanban::layout::Role;
use vanban::model::{Block, Paragraph, RenderedDocument, Table};
use vanban::render::RenderStats;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn decision() -> Document {
    Document::new(DocumentKind::Decision)
        .with_number("15/QĐ-UBND")
        .with_issuer("Ủy ban nhân dân xã Gia Kiệm")
        .with_signer("Nguyễn Văn A", "Chủ tịch")
        .with_authority("TM. Ủy ban nhân dân")
        .with_issue_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        .with_location("Gia Kiệm")
        .with_subject("Về việc thành lập Tổ công tác chuyển đổi số")
        .with_content("Điều 1. Thành lập Tổ công tác.\n1. Tổ trưởng: Chủ tịch UBND xã.\nĐiều 2. Quyết định có hiệu lực kể từ ngày ký.")
}

fn meeting() -> Meeting {
    let mut m = Meeting::new("Giao ban tháng 3", at(5, 8));
    m.end = Some(at(5, 11));
    m.location = "Hội trường UBND xã".into();
    m.chair = "Nguyễn Văn A".into();
    m.chair_title = "Chủ tịch UBND xã".into();
    m.secretary = "Lê Thị C".into();
    m.organizing_unit = "Ủy ban nhân dân xã Gia Kiệm".into();
    m.attendees = vec![
        Attendee::new("Nguyễn Văn A", "Chủ tịch"),
        Attendee::new("Trần Văn B", "Phó Chủ tịch"),
    ];
    m.conclusion = "Đẩy nhanh tiến độ giải ngân vốn đầu tư công.".into();
    m.tasks = vec![Task::new("Rà soát hồ sơ", "Trần Văn B").with_status(TaskStatus::Completed)];
    m
}

fn texts(doc: &RenderedDocument) -> Vec<String> {
    doc.paragraphs().map(Paragraph::plain_text).collect()
}

fn all_variants(doc: &Document, docs: &[Document], m: &Meeting, ms: &[Meeting]) -> Vec<RenderedDocument> {
    [
        Variant::Single(doc),
        Variant::Batch(docs),
        Variant::Minutes(m),
        Variant::ConclusionNotice(m),
        Variant::InternalReport(m),
        Variant::Aggregate(ms),
    ]
    .into_iter()
    .map(|v| compose(v).unwrap())
    .collect()
}

#[test]
fn test_composition_is_deterministic() {
    let doc = decision();
    let docs = vec![decision(), Document::default()];
    let m = meeting();
    let ms = vec![meeting(), Meeting::default()];

    let first = all_variants(&doc, &docs, &m, &ms);
    let second = all_variants(&doc, &docs, &m, &ms);
    assert_eq!(first, second);
}

#[test]
fn test_every_table_fills_the_printable_width() {
    let doc = decision();
    let docs = vec![decision(), Document::default()];
    let m = meeting();
    let ms = vec![meeting(), Meeting::default()];

    for rendered in all_variants(&doc, &docs, &m, &ms) {
        let width = rendered.page.printable_width();
        for table in rendered.tables() {
            assert!(table.widths_balanced());
            assert_eq!(table.total_width, width);
        }
    }
}

#[test]
fn test_report_without_conclusion_or_tasks() {
    let mut m = meeting();
    m.conclusion = "   ".into();
    m.tasks.clear();

    let rendered = compose(Variant::InternalReport(&m)).unwrap();
    let texts = texts(&rendered);
    assert!(!texts.iter().any(|t| t.ends_with("KẾT LUẬN")));
    assert!(!texts.iter().any(|t| t.ends_with("NHIỆM VỤ ĐƯỢC GIAO")));
    assert!(texts.contains(&"I. THÔNG TIN CHUNG".to_string()));
    assert!(texts.contains(&"II. THÀNH PHẦN THAM DỰ".to_string()));
}

#[test]
fn test_letter_without_recipients_gets_fallback_lines() {
    let doc = Document::new(DocumentKind::OfficialLetter).with_issuer("Sở Nội vụ");
    let rendered = compose(Variant::Single(&doc)).unwrap();

    let signature: &Table = rendered.tables().last().unwrap();
    let left: Vec<String> = signature.rows[0].cells[0]
        .content
        .iter()
        .map(Paragraph::plain_text)
        .collect();
    let mut expected = vec!["Nơi nhận:".to_string()];
    expected.extend(FALLBACK_RECIPIENTS.iter().map(|r| r.to_string()));
    assert_eq!(left, expected);

    assert!(texts(&rendered).contains(&"Kính gửi: [Tên cơ quan nhận]".to_string()));
}

#[test]
fn test_org_split() {
    let identity = OrgIdentity::split("Ủy ban nhân dân xã Gia Kiệm");
    assert_eq!(identity.parent, "ỦY BAN NHÂN DÂN");
    assert_eq!(identity.sub, "XÃ GIA KIỆM");

    let identity = OrgIdentity::split("Văn phòng Chính phủ");
    assert_eq!(identity.parent, "VĂN PHÒNG CHÍNH PHỦ");
    assert_eq!(identity.sub, identity.parent);
}

#[test]
fn test_decision_with_three_bases() {
    let doc = decision()
        .with_basis("Căn cứ Luật Tổ chức chính quyền địa phương ngày 19 tháng 6 năm 2015;")
        .with_basis("Theo đề nghị của Văn phòng HĐND và UBND xã.")
        .with_basis("Nghị định số 30/2020/NĐ-CP về công tác văn thư;");
    let rendered = compose(Variant::Single(&doc)).unwrap();

    let bases: Vec<&Paragraph> = rendered
        .paragraphs()
        .filter(|p| {
            let text = p.plain_text();
            text.starts_with("Căn cứ") || text.starts_with("Theo đề nghị")
        })
        .collect();
    assert_eq!(bases.len(), 3);
    assert_eq!(
        bases[2].plain_text(),
        "Căn cứ Nghị định số 30/2020/NĐ-CP về công tác văn thư;"
    );
    assert!(bases.iter().all(|p| p.style == bases[0].style));
    let run_styles: Vec<_> = bases.iter().map(|p| p.runs().next().unwrap().style.clone()).collect();
    assert!(run_styles.iter().all(|s| *s == run_styles[0]));
}

#[test]
fn test_batch_of_three_has_two_breaks() {
    let docs = vec![decision(), decision(), decision()];
    let rendered = compose(Variant::Batch(&docs)).unwrap();
    assert_eq!(rendered.page_break_count(), 2);
    assert!(!rendered.blocks.last().unwrap().is_page_break());
    assert_eq!(RenderStats::of(&rendered).page_break_count, 2);
}

#[test]
fn test_decision_body_roles() {
    let rendered = compose(Variant::Single(&decision())).unwrap();
    let roles: Vec<Role> = rendered.paragraphs().filter_map(|p| p.role).collect();
    assert_eq!(roles, [Role::Article, Role::Clause, Role::Article]);
}

#[test]
fn test_signer_column_upper_cases_titles() {
    let rendered = compose(Variant::Single(&decision())).unwrap();
    let signature = rendered.tables().last().unwrap();
    let right: Vec<String> = signature.rows[0].cells[1]
        .content
        .iter()
        .map(Paragraph::plain_text)
        .collect();
    assert_eq!(right[0], "Gia Kiệm, ngày 05 tháng 03 năm 2024");
    assert_eq!(right[1], "TM. ỦY BAN NHÂN DÂN");
    assert_eq!(right[2], "CHỦ TỊCH");
    assert_eq!(right.last().unwrap(), "Nguyễn Văn A");
}

#[test]
fn test_minutes_and_notice_titles() {
    let m = meeting();
    let minutes = texts(&compose(Variant::Minutes(&m)).unwrap());
    assert!(minutes.contains(&"BIÊN BẢN".to_string()));
    assert!(minutes.contains(&"Cuộc họp kết thúc vào lúc 11:00 cùng ngày.".to_string()));

    let notice = texts(&compose(Variant::ConclusionNotice(&m)).unwrap());
    assert!(notice.contains(&"THÔNG BÁO".to_string()));
    assert!(notice.contains(&"Đẩy nhanh tiến độ giải ngân vốn đầu tư công.".to_string()));
}

#[test]
fn test_aggregate_statistics() {
    let mut cancelled = meeting();
    cancelled.title = "Họp đột xuất".into();
    cancelled.status = MeetingStatus::Cancelled;
    cancelled.start = Some(at(12, 14));
    let meetings = vec![meeting(), cancelled];

    let rendered = compose(Variant::Aggregate(&meetings)).unwrap();
    assert!(rendered.page.is_landscape());
    let texts = texts(&rendered);
    assert!(texts.contains(&"Từ ngày 05/03/2024 đến ngày 12/03/2024".to_string()));
    assert!(texts.contains(&"Tổng số: 2 cuộc họp".to_string()));

    let statistics = rendered.tables().nth(1).unwrap();
    let rows: Vec<String> = statistics.rows.iter().map(|r| r.plain_text()).collect();
    assert!(rows.contains(&"Đã hủy\t1".to_string()));
    assert!(rows.contains(&"Tổng nhiệm vụ\t2".to_string()));
    assert!(!rows.iter().any(|r| r.starts_with("Nhiệm vụ quá hạn")));
}

#[test]
fn test_export_stamp_in_footer() {
    let stamp = at(6, 9);
    let composer = Composer::new(
        ComposeOptions::new()
            .with_product_name("Sổ tay cuộc họp")
            .with_export_stamp(stamp, "admin"),
    );
    let rendered = composer.compose(Variant::InternalReport(&meeting())).unwrap();
    let footer = match rendered.blocks.last().unwrap() {
        Block::Paragraph(p) => p.plain_text(),
        other => panic!("unexpected footer block: {:?}", other),
    };
    assert_eq!(
        footer,
        "Ngày xuất: 06/03/2024 09:00  —  Người xuất: admin  —  Phần mềm: Sổ tay cuộc họp"
    );
    assert_eq!(rendered.metadata.created, Some(stamp));
}

#[test]
fn test_meeting_json_without_start_has_no_invented_date() {
    let m = vanban::meeting_from_json(r#"{"title": "Họp", "conclusion": "Thống nhất."}"#).unwrap();
    let ms = vec![m.clone()];
    assert_eq!(m.priority, 3);

    for variant in [
        Variant::Minutes(&m),
        Variant::ConclusionNotice(&m),
        Variant::InternalReport(&m),
        Variant::Aggregate(&ms),
    ] {
        let kind = variant.kind();
        let rendered = compose(variant).unwrap();
        let text = vanban::render::to_text(&rendered, &Default::default()).unwrap();
        assert!(!text.contains("1970"), "{kind}: {text}");
    }
}
