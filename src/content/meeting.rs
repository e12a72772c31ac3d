//! Meeting content: metadata, attendees, tasks and related documents.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A meeting record as supplied by a producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meeting {
    /// Meeting title
    pub title: String,

    /// Invitation number
    pub number: String,

    /// Kind of meeting
    pub kind: MeetingKind,

    /// Administrative level
    pub level: MeetingLevel,

    /// Lifecycle status
    pub status: MeetingStatus,

    /// Priority from 1 (low) to 5 (very high)
    pub priority: u8,

    /// Start time, if scheduled
    pub start: Option<NaiveDateTime>,

    /// End time, if known
    pub end: Option<NaiveDateTime>,

    /// Venue
    pub location: String,

    /// In person, online or hybrid
    pub format: MeetingFormat,

    /// Link for online participation
    pub online_link: String,

    /// Chairperson
    pub chair: String,

    /// Chairperson title
    pub chair_title: String,

    /// Secretary
    pub secretary: String,

    /// Organizing unit
    pub organizing_unit: String,

    /// Attendees in order
    pub attendees: Vec<Attendee>,

    /// Agenda text
    pub agenda: String,

    /// Proceedings text
    pub content: String,

    /// Conclusion text
    pub conclusion: String,

    /// Personal notes of the record keeper
    pub personal_notes: String,

    /// Tasks assigned at the meeting
    pub tasks: Vec<Task>,

    /// Related documents
    pub documents: Vec<MeetingDocument>,

    /// Free-form tags
    pub tags: Vec<String>,
}

impl Default for Meeting {
    fn default() -> Self {
        Self {
            title: String::new(),
            number: String::new(),
            kind: MeetingKind::default(),
            level: MeetingLevel::default(),
            status: MeetingStatus::default(),
            priority: DEFAULT_PRIORITY,
            start: None,
            end: None,
            location: String::new(),
            format: MeetingFormat::default(),
            online_link: String::new(),
            chair: String::new(),
            chair_title: String::new(),
            secretary: String::new(),
            organizing_unit: String::new(),
            attendees: Vec::new(),
            agenda: String::new(),
            content: String::new(),
            conclusion: String::new(),
            personal_notes: String::new(),
            tasks: Vec::new(),
            documents: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl Meeting {
    /// Create a meeting with a title and start time.
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start: Some(start),
            ..Default::default()
        }
    }

    /// Day the meeting starts on.
    pub fn date(&self) -> Option<NaiveDate> {
        self.start.map(|s| s.date())
    }

    /// Number of attendees counted as present.
    pub fn present_count(&self) -> usize {
        self.attendees.iter().filter(|a| a.status.is_present()).count()
    }

    /// Number of attendees counted as absent.
    pub fn absent_count(&self) -> usize {
        self.attendees.len() - self.present_count()
    }

    /// Counts of tasks by status.
    pub fn task_summary(&self) -> TaskSummary {
        let mut summary = TaskSummary {
            total: self.tasks.len(),
            ..Default::default()
        };
        for task in &self.tasks {
            match task.status {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Overdue => summary.overdue += 1,
                TaskStatus::NotStarted | TaskStatus::Cancelled => {}
            }
        }
        summary
    }

    /// Whether the meeting has a non-blank conclusion.
    pub fn has_conclusion(&self) -> bool {
        !self.conclusion.trim().is_empty()
    }
}

/// Task counts of one or more meetings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// All tasks
    pub total: usize,
    /// Completed tasks
    pub completed: usize,
    /// Tasks in progress
    pub in_progress: usize,
    /// Overdue tasks
    pub overdue: usize,
}

impl TaskSummary {
    /// Merge another summary into this one.
    pub fn merge(&mut self, other: &TaskSummary) {
        self.total += other.total;
        self.completed += other.completed;
        self.in_progress += other.in_progress;
        self.overdue += other.overdue;
    }
}

/// A meeting participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    /// Full name
    pub name: String,
    /// Position
    pub position: String,
    /// Unit
    pub unit: String,
    /// Role in the meeting
    pub role: AttendeeRole,
    /// Attendance status
    pub status: AttendanceStatus,
    /// Free-form note
    pub note: String,
}

impl Attendee {
    /// Create an attendee with a name and position.
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: AttendeeRole) -> Self {
        self.role = role;
        self
    }

    /// Set the attendance status.
    pub fn with_status(mut self, status: AttendanceStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// A task assigned at a meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// What must be done
    pub title: String,
    /// Person responsible
    pub assignee: String,
    /// Unit responsible
    pub unit: String,
    /// Deadline
    pub deadline: Option<NaiveDate>,
    /// Progress
    pub status: TaskStatus,
    /// Completion date
    pub completed_on: Option<NaiveDate>,
}

impl Task {
    /// Create a task with a title and assignee.
    pub fn new(title: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assignee: assignee.into(),
            ..Default::default()
        }
    }

    /// Set the responsible unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the deadline.
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Assignee followed by the unit on its own line.
    pub fn assignee_cell(&self) -> String {
        if self.unit.trim().is_empty() {
            self.assignee.clone()
        } else {
            format!("{}\n({})", self.assignee, self.unit)
        }
    }
}

/// A document related to a meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingDocument {
    /// Document type
    pub kind: MeetingDocumentKind,
    /// Title or summary
    pub title: String,
    /// Document number
    pub number: String,
    /// Date of issue
    pub issued_on: Option<NaiveDate>,
    /// Issuing body
    pub issuer: String,
}

/// Kind of meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingKind {
    /// Họp thường kỳ
    Regular,
    /// Họp giao ban
    Briefing,
    /// Họp chuyên đề
    Thematic,
    /// Họp sơ kết
    Interim,
    /// Họp tổng kết
    YearEnd,
    /// Họp kiểm điểm
    Review,
    /// Họp triển khai
    Rollout,
    /// Họp Ban chỉ đạo
    SteeringCommittee,
    /// Hội nghị
    Conference,
    /// Hội thảo / Tọa đàm
    Seminar,
    /// Tập huấn
    Training,
    /// Họp Chi bộ
    PartyCell,
    /// Họp Đảng ủy
    PartyCommittee,
    /// Họp HĐND
    PeoplesCouncil,
    /// Họp cơ quan
    #[default]
    Agency,
    /// Họp liên ngành
    InterAgency,
    /// Họp đột xuất
    Extraordinary,
    /// Tiếp công dân
    CitizenReception,
    /// Lễ kỷ niệm
    Ceremony,
    /// Giao lưu / Gặp mặt
    Gathering,
    /// Khác
    Other,
}

impl MeetingKind {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            MeetingKind::Regular => "Họp thường kỳ",
            MeetingKind::Briefing => "Họp giao ban",
            MeetingKind::Thematic => "Họp chuyên đề",
            MeetingKind::Interim => "Họp sơ kết",
            MeetingKind::YearEnd => "Họp tổng kết",
            MeetingKind::Review => "Họp kiểm điểm",
            MeetingKind::Rollout => "Họp triển khai",
            MeetingKind::SteeringCommittee => "Họp Ban chỉ đạo",
            MeetingKind::Conference => "Hội nghị",
            MeetingKind::Seminar => "Hội thảo / Tọa đàm",
            MeetingKind::Training => "Tập huấn",
            MeetingKind::PartyCell => "Họp Chi bộ",
            MeetingKind::PartyCommittee => "Họp Đảng ủy",
            MeetingKind::PeoplesCouncil => "Họp HĐND",
            MeetingKind::Agency => "Họp cơ quan",
            MeetingKind::InterAgency => "Họp liên ngành",
            MeetingKind::Extraordinary => "Họp đột xuất",
            MeetingKind::CitizenReception => "Tiếp công dân",
            MeetingKind::Ceremony => "Lễ kỷ niệm",
            MeetingKind::Gathering => "Giao lưu / Gặp mặt",
            MeetingKind::Other => "Khác",
        }
    }
}

/// Administrative level of a meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingLevel {
    /// Cấp đơn vị
    #[default]
    Unit,
    /// Cấp xã/phường
    Commune,
    /// Cấp tỉnh/TP
    Province,
    /// Cấp trung ương
    Central,
    /// Liên ngành
    InterAgency,
}

impl MeetingLevel {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            MeetingLevel::Unit => "Cấp đơn vị",
            MeetingLevel::Commune => "Cấp xã/phường",
            MeetingLevel::Province => "Cấp tỉnh/TP",
            MeetingLevel::Central => "Cấp trung ương",
            MeetingLevel::InterAgency => "Liên ngành",
        }
    }
}

/// Lifecycle status of a meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// Scheduled, not yet held
    #[default]
    Scheduled,
    /// Currently in session
    InProgress,
    /// Finished
    Completed,
    /// Postponed
    Postponed,
    /// Cancelled
    Cancelled,
}

impl MeetingStatus {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "Đã lên lịch",
            MeetingStatus::InProgress => "Đang diễn ra",
            MeetingStatus::Completed => "Đã kết thúc",
            MeetingStatus::Postponed => "Hoãn",
            MeetingStatus::Cancelled => "Hủy",
        }
    }
}

/// How a meeting is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingFormat {
    /// Trực tiếp
    #[default]
    InPerson,
    /// Trực tuyến
    Online,
    /// Kết hợp
    Hybrid,
}

impl MeetingFormat {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            MeetingFormat::InPerson => "Trực tiếp",
            MeetingFormat::Online => "Trực tuyến",
            MeetingFormat::Hybrid => "Kết hợp (hybrid)",
        }
    }
}

/// Role of an attendee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeRole {
    /// Chủ trì
    Chair,
    /// Thư ký
    Secretary,
    /// Báo cáo viên
    Presenter,
    /// Thành viên tham dự
    #[default]
    Attendee,
    /// Dự thính
    Observer,
    /// Được mời
    Invitee,
}

impl AttendeeRole {
    /// Vietnamese name used in attendee tables.
    pub fn label(self) -> &'static str {
        match self {
            AttendeeRole::Chair => "Chủ trì",
            AttendeeRole::Secretary => "Thư ký",
            AttendeeRole::Presenter => "Báo cáo viên",
            AttendeeRole::Observer => "Dự thính",
            AttendeeRole::Attendee | AttendeeRole::Invitee => "Tham dự",
        }
    }
}

/// Attendance status of an attendee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Invited, not yet confirmed
    #[default]
    Invited,
    /// Confirmed
    Confirmed,
    /// Present
    Attended,
    /// Absent without permission
    Absent,
    /// Absent with permission
    AbsentWithPermission,
    /// Sent a delegate
    Delegated,
}

impl AttendanceStatus {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Invited => "Đã mời",
            AttendanceStatus::Confirmed => "Xác nhận",
            AttendanceStatus::Attended => "Có mặt",
            AttendanceStatus::Absent => "Vắng mặt",
            AttendanceStatus::AbsentWithPermission => "Vắng có phép",
            AttendanceStatus::Delegated => "Ủy quyền",
        }
    }

    /// Whether the attendee counts as present in the minutes.
    pub fn is_present(self) -> bool {
        matches!(
            self,
            AttendanceStatus::Invited | AttendanceStatus::Confirmed | AttendanceStatus::Attended
        )
    }

    /// Reason suffix printed after an absentee's name.
    pub fn absence_reason(self) -> Option<&'static str> {
        match self {
            AttendanceStatus::AbsentWithPermission => Some("(có phép)"),
            AttendanceStatus::Delegated => Some("(ủy quyền)"),
            _ => None,
        }
    }
}

/// Progress of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    NotStarted,
    /// In progress
    InProgress,
    /// Completed
    Completed,
    /// Past its deadline
    Overdue,
    /// Cancelled
    Cancelled,
}

impl TaskStatus {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Chưa thực hiện",
            TaskStatus::InProgress => "Đang thực hiện",
            TaskStatus::Completed => "Đã hoàn thành",
            TaskStatus::Overdue => "Quá hạn",
            TaskStatus::Cancelled => "Hủy",
        }
    }
}

/// Kind of a meeting-related document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingDocumentKind {
    /// Giấy mời họp
    Invitation,
    /// Chương trình họp
    Agenda,
    /// Tài liệu họp
    Material,
    /// Biên bản cuộc họp
    Minutes,
    /// Thông báo kết luận
    ConclusionNotice,
    /// Nghị quyết
    Resolution,
    /// Văn bản chỉ đạo
    Directive,
    /// Quyết định
    Decision,
    /// Công văn
    OfficialLetter,
    /// Tài liệu khác
    #[default]
    Other,
}

impl MeetingDocumentKind {
    /// Vietnamese name.
    pub fn label(self) -> &'static str {
        match self {
            MeetingDocumentKind::Invitation => "Giấy mời họp",
            MeetingDocumentKind::Agenda => "Chương trình họp",
            MeetingDocumentKind::Material => "Tài liệu họp",
            MeetingDocumentKind::Minutes => "Biên bản cuộc họp",
            MeetingDocumentKind::ConclusionNotice => "Thông báo kết luận",
            MeetingDocumentKind::Resolution => "Nghị quyết",
            MeetingDocumentKind::Directive => "Văn bản chỉ đạo",
            MeetingDocumentKind::Decision => "Quyết định",
            MeetingDocumentKind::OfficialLetter => "Công văn",
            MeetingDocumentKind::Other => "Tài liệu khác",
        }
    }
}

/// Priority of a meeting that does not state one (medium).
pub const DEFAULT_PRIORITY: u8 = 3;

/// Vietnamese name of a priority level, out-of-range values read as medium.
pub fn priority_label(priority: u8) -> &'static str {
    match priority {
        1 => "Thấp",
        2 => "Bình thường",
        4 => "Cao",
        5 => "Rất cao",
        3 => "Trung bình",
        other => {
            log::warn!("priority {} out of range 1-5, shown as medium", other);
            "Trung bình"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_attendance_counts() {
        let mut meeting = Meeting::new("Giao ban tuần", at(8, 0));
        meeting.attendees = vec![
            Attendee::new("A", "Chủ tịch").with_status(AttendanceStatus::Attended),
            Attendee::new("B", "Phó Chủ tịch").with_status(AttendanceStatus::Confirmed),
            Attendee::new("C", "Công chức").with_status(AttendanceStatus::Invited),
            Attendee::new("D", "Công chức").with_status(AttendanceStatus::AbsentWithPermission),
            Attendee::new("E", "Công chức").with_status(AttendanceStatus::Delegated),
        ];
        assert_eq!(meeting.present_count(), 3);
        assert_eq!(meeting.absent_count(), 2);
    }

    #[test]
    fn test_task_summary() {
        let mut meeting = Meeting::new("Họp", at(8, 0));
        meeting.tasks = vec![
            Task::new("a", "x").with_status(TaskStatus::Completed),
            Task::new("b", "x").with_status(TaskStatus::Completed),
            Task::new("c", "x").with_status(TaskStatus::Overdue),
            Task::new("d", "x").with_status(TaskStatus::InProgress),
            Task::new("e", "x"),
        ];
        let summary = meeting.task_summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.in_progress, 1);
    }

    #[test]
    fn test_assignee_cell() {
        assert_eq!(Task::new("t", "Nguyễn Văn A").assignee_cell(), "Nguyễn Văn A");
        assert_eq!(
            Task::new("t", "Nguyễn Văn A")
                .with_unit("Văn phòng")
                .assignee_cell(),
            "Nguyễn Văn A\n(Văn phòng)"
        );
    }

    #[test]
    fn test_priority_label() {
        assert_eq!(priority_label(1), "Thấp");
        assert_eq!(priority_label(3), "Trung bình");
        assert_eq!(priority_label(9), "Trung bình");
    }

    #[test]
    fn test_defaults_from_sparse_json() {
        let meeting: Meeting = serde_json::from_str(r#"{"title": "Họp"}"#).unwrap();
        assert_eq!(meeting.priority, DEFAULT_PRIORITY);
        assert_eq!(meeting.start, None);
        assert_eq!(meeting.date(), None);
        assert_eq!(Meeting::default().priority, DEFAULT_PRIORITY);
        assert_eq!(Meeting::new("Họp", at(8, 0)).date(), Some(at(8, 0).date()));
    }
}
