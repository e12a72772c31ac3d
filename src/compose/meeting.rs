//! Meeting record recipes: minutes, conclusion notice, internal report and
//! the multi-meeting aggregate.

use super::blocks::{
    date_phrase, label, national_heading, non_blank, section_title, signing_slot, spacer,
    text_line, text_lines, two_column, OrgIdentity,
};
use super::ComposeOptions;
use crate::content::{
    priority_label, Attendee, Meeting, MeetingDocument, MeetingKind, MeetingStatus, Task,
    TaskSummary,
};
use crate::error::Result;
use crate::layout::format::{
    clock, long_date, roman, short_date, time_range, upper_first, weekday,
};
use crate::layout::{
    style_of, Element, TableSpec, ATTENDEE_COLUMNS, DOCUMENT_COLUMNS, FACT_SHEET_COLUMNS,
    LABEL_FILL, LANDSCAPE_WIDTH, PORTRAIT_WIDTH, STATISTICS_COLUMNS, SUMMARY_COLUMNS,
    TASK_COLUMNS, TASK_COLUMNS_LANDSCAPE,
};
use crate::model::{
    Block, BorderStyle, Paragraph, Table, TableCell, TableRow, VerticalAlignment,
};

const ATTENDEE_HEADER: [&str; 5] = ["STT", "Họ và tên", "Chức vụ", "Đơn vị", "Vai trò"];
const TASK_HEADER: [&str; 5] = [
    "STT",
    "Nội dung nhiệm vụ",
    "Người/ĐV thực hiện",
    "Hạn hoàn thành",
    "Trạng thái",
];
const DOCUMENT_HEADER: [&str; 5] = [
    "STT",
    "Loại tài liệu",
    "Trích yếu nội dung",
    "Số hiệu",
    "Cơ quan ban hành",
];
const SUMMARY_HEADER: [&str; 9] = [
    "STT",
    "Tên cuộc họp",
    "Loại",
    "Thời gian",
    "Địa điểm",
    "Chủ trì",
    "Hình thức",
    "Trạng thái",
    "Nhiệm vụ",
];

/// Printed where a time is not known.
const UNKNOWN_TIME: &str = "...";

/// Meeting minutes (biên bản).
pub fn minutes(meeting: &Meeting, options: &ComposeOptions) -> Result<Vec<Block>> {
    let mut blocks = record_header(meeting, "BIÊN BẢN");
    blocks.push(style_of(Element::DocumentSubtitle).paragraph(meeting.title.trim()).into());
    blocks.push(spacer().into());

    blocks.push(
        text_line(format!("Thời gian: {}.", when_long(meeting))).into(),
    );
    blocks.push(text_line(format!("Địa điểm: {}.", meeting.location.trim())).into());
    blocks.push(text_line(format!("Chủ trì: {}.", chair_with_title(meeting))).into());
    blocks.push(text_line(format!("Thư ký: {}.", meeting.secretary.trim())).into());
    blocks.push(spacer().into());

    blocks.push(section_title("I. THÀNH PHẦN THAM DỰ").into());
    if !meeting.attendees.is_empty() {
        blocks.push(
            text_line(format!(
                "Tổng số: {} người; Có mặt: {}; Vắng mặt: {}.",
                meeting.attendees.len(),
                meeting.present_count(),
                meeting.absent_count()
            ))
            .into(),
        );
        blocks.push(spacer().into());
        blocks.push(attendee_table(&meeting.attendees)?.into());
        blocks.push(spacer().into());

        let absent: Vec<&Attendee> = meeting
            .attendees
            .iter()
            .filter(|a| !a.status.is_present())
            .collect();
        if !absent.is_empty() {
            blocks.push(label("Vắng mặt:").into());
            blocks.extend(absent.into_iter().map(|a| text_line(absentee_line(a)).into()));
            blocks.push(spacer().into());
        }
    }

    blocks.push(section_title("II. NỘI DUNG CUỘC HỌP").into());
    if non_blank(&meeting.agenda).is_some() {
        blocks.push(label("Chương trình cuộc họp:").into());
        blocks.extend(text_lines(&meeting.agenda));
        blocks.push(spacer().into());
    }
    if non_blank(&meeting.content).is_some() {
        blocks.push(label("Diễn biến cuộc họp:").into());
        blocks.extend(text_lines(&meeting.content));
        blocks.push(spacer().into());
    }

    blocks.push(section_title("III. KẾT LUẬN CUỘC HỌP").into());
    if meeting.has_conclusion() {
        blocks.extend(text_lines(&meeting.conclusion));
        blocks.push(spacer().into());
    }

    if !meeting.tasks.is_empty() {
        blocks.push(section_title("IV. NHIỆM VỤ ĐƯỢC GIAO").into());
        blocks.push(task_table(&meeting.tasks, PORTRAIT_WIDTH)?.into());
        blocks.push(spacer().into());
    }

    let end = meeting
        .end
        .map(clock)
        .unwrap_or_else(|| UNKNOWN_TIME.to_string());
    blocks.push(text_line(format!("Cuộc họp kết thúc vào lúc {end} cùng ngày.")).into());
    blocks.push(
        text_line(
            "Biên bản được lập thành 02 bản, các thành viên dự họp đã thống nhất nội dung trên.",
        )
        .into(),
    );
    blocks.push(spacer().into());
    blocks.push(spacer().into());

    blocks.push(
        two_column(
            signing_slot("THƯ KÝ", &meeting.secretary, options.signature_spacers),
            signing_slot("CHỦ TRÌ", &meeting.chair, options.signature_spacers),
        )?
        .into(),
    );
    Ok(blocks)
}

/// Notice of meeting conclusions (thông báo kết luận).
pub fn conclusion_notice(meeting: &Meeting, options: &ComposeOptions) -> Result<Vec<Block>> {
    let kind = kind_phrase(meeting.kind);
    let mut blocks = record_header(meeting, "THÔNG BÁO");
    blocks.push(
        style_of(Element::DocumentSubtitle)
            .paragraph(format!("Kết luận cuộc họp {kind}"))
            .into(),
    );
    blocks.push(style_of(Element::Caption).paragraph(meeting.title.trim()).into());
    blocks.push(spacer().into());

    let date = date_phrase(meeting.date());
    blocks.push(
        text_line(format!(
            "{}, tại {}, {} đã tổ chức cuộc họp {kind}: \"{}\".",
            upper_first(&date),
            meeting.location.trim(),
            meeting.organizing_unit.trim(),
            meeting.title.trim()
        ))
        .into(),
    );
    blocks.push(text_line(format!("Chủ trì cuộc họp: {}.", chair_with_title(meeting))).into());
    blocks.push(spacer().into());

    let concluding = non_blank(&meeting.chair_title).unwrap_or("Chủ trì");
    blocks.push(
        text_line(format!(
            "Sau khi nghe báo cáo và ý kiến thảo luận của các thành viên dự họp, {concluding} kết luận:"
        ))
        .into(),
    );
    blocks.push(spacer().into());

    if meeting.has_conclusion() {
        blocks.extend(text_lines(&meeting.conclusion));
        blocks.push(spacer().into());
    }

    if !meeting.tasks.is_empty() {
        blocks.push(label("Các nhiệm vụ cụ thể:").into());
        blocks.push(spacer().into());
        blocks.push(task_table(&meeting.tasks, PORTRAIT_WIDTH)?.into());
        blocks.push(spacer().into());
    }

    blocks.push(
        text_line(
            "Yêu cầu các đơn vị, cá nhân được phân công nghiêm túc triển khai thực hiện; \
             báo cáo kết quả về Văn phòng tổng hợp theo đúng thời hạn quy định./.",
        )
        .into(),
    );
    blocks.push(spacer().into());
    blocks.push(spacer().into());

    let recipients = style_of(Element::Recipient);
    let left = vec![
        style_of(Element::RecipientsLabel).paragraph("Nơi nhận:"),
        recipients.paragraph("- Như thành phần dự họp;"),
        recipients.paragraph("- Lưu: VT."),
    ];
    let title = non_blank(&meeting.chair_title).unwrap_or("CHỦ TRÌ");
    let right = signing_slot(title, &meeting.chair, options.signature_spacers);
    blocks.push(two_column(left, right)?.into());
    Ok(blocks)
}

/// Internal report with every recorded detail of one meeting.
///
/// Sections without content are left out and the remaining ones are
/// numbered without gaps.
pub fn internal_report(meeting: &Meeting, options: &ComposeOptions) -> Result<Vec<Block>> {
    let mut blocks: Vec<Block> = vec![
        style_of(Element::DocumentTitle)
            .paragraph("BÁO CÁO TỔNG HỢP CUỘC HỌP")
            .into(),
        spacer().into(),
    ];
    let mut sections = Sections::default();

    blocks.push(sections.title("THÔNG TIN CHUNG").into());
    blocks.push(fact_sheet(meeting)?.into());
    blocks.push(spacer().into());

    if !meeting.attendees.is_empty() {
        blocks.push(sections.title("THÀNH PHẦN THAM DỰ").into());
        blocks.push(
            text_line(format!(
                "Tổng số: {} người — Có mặt: {} — Vắng: {}",
                meeting.attendees.len(),
                meeting.present_count(),
                meeting.absent_count()
            ))
            .into(),
        );
        blocks.push(spacer().into());
        blocks.push(attendee_table(&meeting.attendees)?.into());
        blocks.push(spacer().into());
    }

    for (heading, text) in [
        ("CHƯƠNG TRÌNH CUỘC HỌP", &meeting.agenda),
        ("NỘI DUNG CHI TIẾT", &meeting.content),
        ("KẾT LUẬN", &meeting.conclusion),
    ] {
        if non_blank(text).is_some() {
            blocks.push(sections.title(heading).into());
            blocks.extend(text_lines(text));
            blocks.push(spacer().into());
        }
    }

    if !meeting.tasks.is_empty() {
        let summary = meeting.task_summary();
        blocks.push(sections.title("NHIỆM VỤ ĐƯỢC GIAO").into());
        blocks.push(task_table(&meeting.tasks, PORTRAIT_WIDTH)?.into());
        blocks.push(spacer().into());
        blocks.push(
            label(format!(
                "Tổng kết: {} nhiệm vụ — Hoàn thành: {}, Đang thực hiện: {}, Quá hạn: {}",
                summary.total, summary.completed, summary.in_progress, summary.overdue
            ))
            .into(),
        );
        blocks.push(spacer().into());
    }

    if !meeting.documents.is_empty() {
        blocks.push(sections.title("DANH MỤC TÀI LIỆU").into());
        blocks.push(document_table(&meeting.documents)?.into());
        blocks.push(spacer().into());
    }

    if non_blank(&meeting.personal_notes).is_some() {
        blocks.push(sections.title("GHI CHÚ CÁ NHÂN").into());
        blocks.extend(text_lines(&meeting.personal_notes));
        blocks.push(spacer().into());
    }

    let tags: Vec<&str> = meeting.tags.iter().filter_map(|t| non_blank(t)).collect();
    if !tags.is_empty() {
        blocks.push(text_line(format!("Từ khóa: {}", tags.join(", "))).into());
    }
    blocks.push(spacer().into());
    blocks.extend(super::blocks::footer(options));
    Ok(blocks)
}

/// Landscape overview of several meetings, rows in input order.
pub fn aggregate(meetings: &[Meeting], options: &ComposeOptions) -> Result<Vec<Block>> {
    let mut blocks: Vec<Block> = vec![style_of(Element::DocumentTitle)
        .paragraph("BẢNG TỔNG HỢP CÁC CUỘC HỌP")
        .into()];

    let first = meetings.iter().filter_map(|m| m.start).min();
    let last = meetings.iter().filter_map(|m| m.start).max();
    if let (Some(first), Some(last)) = (first, last) {
        blocks.push(
            style_of(Element::Caption)
                .paragraph(format!(
                    "Từ ngày {} đến ngày {}",
                    short_date(first.date()),
                    short_date(last.date())
                ))
                .into(),
        );
    }
    let mut count = style_of(Element::Caption);
    count.bold = true;
    blocks.push(
        count
            .paragraph(format!("Tổng số: {} cuộc họp", meetings.len()))
            .into(),
    );
    blocks.push(spacer().into());

    blocks.push(summary_table(meetings)?.into());
    blocks.push(spacer().into());

    blocks.push(section_title("THỐNG KÊ TỔNG HỢP").into());
    blocks.push(spacer().into());
    blocks.push(statistics_table(meetings)?.into());
    blocks.push(spacer().into());

    let detailed: Vec<&Meeting> = meetings
        .iter()
        .filter(|m| m.has_conclusion() || !m.tasks.is_empty())
        .collect();
    if !detailed.is_empty() {
        blocks.push(section_title("CHI TIẾT KẾT LUẬN VÀ NHIỆM VỤ").into());
        blocks.push(spacer().into());
        for (i, m) in detailed.into_iter().enumerate() {
            blocks.push(
                style_of(Element::EntryTitle)
                    .paragraph(format!("{}. {}", i + 1, m.title.trim()))
                    .into(),
            );
            blocks.push(
                style_of(Element::EntryDetail)
                    .paragraph(format!(
                        "Thời gian: {} — Chủ trì: {} — Trạng thái: {}",
                        when_short(m, " "),
                        m.chair.trim(),
                        m.status.label()
                    ))
                    .into(),
            );
            if m.has_conclusion() {
                blocks.push(label("Kết luận:").into());
                blocks.extend(text_lines(&m.conclusion));
            }
            if !m.tasks.is_empty() {
                blocks.push(label(format!("Nhiệm vụ ({}):", m.tasks.len())).into());
                blocks.push(task_table(&m.tasks, LANDSCAPE_WIDTH)?.into());
            }
            blocks.push(spacer().into());
        }
    }

    blocks.extend(super::blocks::footer(options));
    Ok(blocks)
}

/// National heading, organizing unit, date line and record title.
fn record_header(meeting: &Meeting, title: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = national_heading().into_iter().map(Block::from).collect();
    if let Some(unit) = non_blank(&meeting.organizing_unit) {
        blocks.extend(
            OrgIdentity::split(unit)
                .paragraphs(true)
                .into_iter()
                .map(Block::from),
        );
    }
    blocks.push(
        style_of(Element::DateLine)
            .paragraph(format!("........., {}", date_phrase(meeting.date())))
            .into(),
    );
    blocks.push(spacer().into());
    blocks.push(style_of(Element::DocumentTitle).paragraph(title).into());
    blocks
}

/// Roman-numbered section titles, numbered in order of appearance.
#[derive(Debug, Default)]
struct Sections {
    count: usize,
}

impl Sections {
    fn title(&mut self, text: &str) -> Paragraph {
        self.count += 1;
        section_title(format!("{}. {}", roman(self.count), text))
    }
}

/// `08:00 - 11:00, Thứ Ba, ngày 05 tháng 03 năm 2024`, with fill-in
/// blanks when the start is unknown.
fn when_long(meeting: &Meeting) -> String {
    match meeting.start {
        Some(start) => format!(
            "{}, {}, {}",
            time_range(start, meeting.end),
            weekday(start.date()),
            long_date(start.date())
        ),
        None => format!("{UNKNOWN_TIME}, {}", date_phrase(None)),
    }
}

/// Short date and time range joined by `sep`.
fn when_short(meeting: &Meeting, sep: &str) -> String {
    match meeting.start {
        Some(start) => format!(
            "{}{sep}{}",
            short_date(start.date()),
            time_range(start, meeting.end)
        ),
        None => UNKNOWN_TIME.to_string(),
    }
}

fn chair_with_title(meeting: &Meeting) -> String {
    match non_blank(&meeting.chair_title) {
        Some(title) => format!("{} - {}", meeting.chair.trim(), title),
        None => meeting.chair.trim().to_string(),
    }
}

/// Kind label as used after "cuộc họp": `giao ban`, `hội nghị`.
fn kind_phrase(kind: MeetingKind) -> String {
    let label = kind.label().to_lowercase();
    match label.strip_prefix("họp ") {
        Some(rest) => rest.to_string(),
        None => label,
    }
}

fn absentee_line(a: &Attendee) -> String {
    let mut line = format!("- {} - {}, {}", a.name.trim(), a.position.trim(), a.unit.trim());
    if let Some(reason) = a.status.absence_reason() {
        line.push(' ');
        line.push_str(reason);
    }
    if let Some(note) = non_blank(&a.note) {
        line.push_str(". ");
        line.push_str(note);
    }
    line
}

fn attendee_table(attendees: &[Attendee]) -> Result<Table> {
    let rows: Vec<Vec<String>> = attendees
        .iter()
        .enumerate()
        .map(|(i, a)| {
            vec![
                (i + 1).to_string(),
                a.name.clone(),
                a.position.clone(),
                a.unit.clone(),
                a.role.label().to_string(),
            ]
        })
        .collect();
    TableSpec::new(PORTRAIT_WIDTH, &ATTENDEE_COLUMNS)?.grid(&ATTENDEE_HEADER, &rows)
}

/// Task grid at the printable width of the page it sits on.
fn task_table(tasks: &[Task], width: u32) -> Result<Table> {
    let columns: &[u32] = if width == LANDSCAPE_WIDTH {
        &TASK_COLUMNS_LANDSCAPE
    } else {
        &TASK_COLUMNS
    };
    let rows: Vec<Vec<String>> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            vec![
                (i + 1).to_string(),
                t.title.clone(),
                t.assignee_cell(),
                t.deadline.map(short_date).unwrap_or_default(),
                t.status.label().to_string(),
            ]
        })
        .collect();
    TableSpec::new(width, columns)?.grid(&TASK_HEADER, &rows)
}

fn document_table(documents: &[MeetingDocument]) -> Result<Table> {
    let rows: Vec<Vec<String>> = documents
        .iter()
        .enumerate()
        .map(|(i, d)| {
            vec![
                (i + 1).to_string(),
                d.kind.label().to_string(),
                d.title.clone(),
                d.number.clone(),
                d.issuer.clone(),
            ]
        })
        .collect();
    TableSpec::new(PORTRAIT_WIDTH, &DOCUMENT_COLUMNS)?.grid(&DOCUMENT_HEADER, &rows)
}

/// Two-column label/value table with subtle borders.
fn fact_sheet(meeting: &Meeting) -> Result<Table> {
    let mut facts: Vec<(&str, String)> = vec![("Tên cuộc họp", meeting.title.trim().to_string())];
    if let Some(number) = non_blank(&meeting.number) {
        facts.push(("Số giấy mời", number.to_string()));
    }
    facts.push(("Loại cuộc họp", meeting.kind.label().to_string()));
    facts.push(("Cấp cuộc họp", meeting.level.label().to_string()));
    facts.push(("Trạng thái", meeting.status.label().to_string()));
    facts.push(("Mức ưu tiên", priority_label(meeting.priority).to_string()));
    facts.push((
        "Thời gian",
        match meeting.start {
            Some(start) => format!(
                "{}, {}, ngày {}",
                time_range(start, meeting.end),
                weekday(start.date()),
                short_date(start.date())
            ),
            None => UNKNOWN_TIME.to_string(),
        },
    ));
    facts.push(("Địa điểm", meeting.location.trim().to_string()));
    facts.push(("Hình thức", meeting.format.label().to_string()));
    if let Some(link) = non_blank(&meeting.online_link) {
        facts.push(("Link trực tuyến", link.to_string()));
    }
    facts.push(("Chủ trì", chair_with_title(meeting)));
    if let Some(secretary) = non_blank(&meeting.secretary) {
        facts.push(("Thư ký", secretary.to_string()));
    }
    facts.push(("Đơn vị tổ chức", meeting.organizing_unit.trim().to_string()));

    let label_style = style_of(Element::TableLabel);
    let value_style = style_of(Element::TableValue);
    let rows = facts
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let mut value_style = value_style;
            value_style.bold = i == 0;
            TableRow::new(vec![
                TableCell::with_content(vec![label_style.paragraph(name)])
                    .shaded(LABEL_FILL)
                    .aligned(VerticalAlignment::Center),
                TableCell::with_content(vec![value_style.paragraph(value)])
                    .aligned(VerticalAlignment::Center),
            ])
        })
        .collect();

    TableSpec::new(PORTRAIT_WIDTH, &FACT_SHEET_COLUMNS)?
        .with_borders(BorderStyle::Subtle)
        .table(rows)
}

fn summary_table(meetings: &[Meeting]) -> Result<Table> {
    let rows: Vec<Vec<String>> = meetings
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let tasks = m.task_summary();
            let progress = if tasks.total > 0 {
                format!("{}/{} xong", tasks.completed, tasks.total)
            } else {
                String::new()
            };
            vec![
                (i + 1).to_string(),
                m.title.clone(),
                m.kind.label().to_string(),
                when_short(m, "\n"),
                m.location.clone(),
                m.chair.clone(),
                m.format.label().to_string(),
                m.status.label().to_string(),
                progress,
            ]
        })
        .collect();
    TableSpec::new(LANDSCAPE_WIDTH, &SUMMARY_COLUMNS)?.grid(&SUMMARY_HEADER, &rows)
}

fn statistics_table(meetings: &[Meeting]) -> Result<Table> {
    let with_status = |status: MeetingStatus| meetings.iter().filter(|m| m.status == status).count();
    let mut tasks = TaskSummary::default();
    for m in meetings {
        tasks.merge(&m.task_summary());
    }
    let cancelled = with_status(MeetingStatus::Cancelled);

    let mut rows: Vec<(&str, usize)> = vec![
        ("Tổng số cuộc họp", meetings.len()),
        ("Đã lên lịch", with_status(MeetingStatus::Scheduled)),
        ("Đang diễn ra", with_status(MeetingStatus::InProgress)),
        ("Đã hoàn thành", with_status(MeetingStatus::Completed)),
    ];
    if cancelled > 0 {
        rows.push(("Đã hủy", cancelled));
    }
    rows.push(("Tổng nhiệm vụ", tasks.total));
    rows.push(("Nhiệm vụ hoàn thành", tasks.completed));
    if tasks.overdue > 0 {
        rows.push(("Nhiệm vụ quá hạn", tasks.overdue));
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|(name, n)| vec![name.to_string(), n.to_string()])
        .collect();
    TableSpec::new(LANDSCAPE_WIDTH, &STATISTICS_COLUMNS)?.grid(&["Chỉ tiêu", "Số lượng"], &rows)
}
