// src/services/report.rs
// Report draft controller: holds one in-progress issue report, checks
// that the required fields are present and tells the user the outcome.
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::notifier::{NotificationKind, Notifier};

pub const MISSING_INFO_TITLE: &str = "Missing Information";
pub const MISSING_INFO_DESCRIPTION: &str = "Please fill in all required fields";
pub const SUBMITTED_TITLE: &str = "Issue Reported Successfully!";
pub const SUBMITTED_DESCRIPTION: &str =
    "Your complaint has been submitted. You'll receive SMS updates on resolution progress.";
pub const VOICE_TITLE: &str = "Voice Recognition";
pub const VOICE_DESCRIPTION: &str =
    "Voice input feature will be activated. Speak your issue description.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Phone,
    IssueType,
    Location,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Phone,
        DraftField::IssueType,
        DraftField::Location,
        DraftField::Description,
    ];

    /// Name used by the HTML form.
    pub fn form_name(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Phone => "phone",
            DraftField::IssueType => "issueType",
            DraftField::Location => "location",
            DraftField::Description => "description",
        }
    }

    fn struct_name(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Phone => "phone",
            DraftField::IssueType => "issue_type",
            DraftField::Location => "location",
            DraftField::Description => "description",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.form_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Reference to a file the user picked. Only the name is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ReportDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub issue_type: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub photo: Option<SelectedFile>,
}

impl ReportDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Phone => &self.phone,
            DraftField::IssueType => &self.issue_type,
            DraftField::Location => &self.location,
            DraftField::Description => &self.description,
        }
    }

    fn slot(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Phone => &mut self.phone,
            DraftField::IssueType => &mut self.issue_type,
            DraftField::Location => &mut self.location,
            DraftField::Description => &mut self.description,
        }
    }

    /// Required fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let by_field = errors.field_errors();
                DraftField::ALL
                    .into_iter()
                    .filter(|field| by_field.contains_key(field.struct_name()))
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("missing required fields: {}", join_fields(.fields))]
    MissingRequiredField { fields: Vec<DraftField> },
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.form_name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DraftController<N> {
    draft: ReportDraft,
    notifier: N,
}

impl<N: Notifier> DraftController<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_draft(ReportDraft::default(), notifier)
    }

    pub fn with_draft(draft: ReportDraft, notifier: N) -> Self {
        Self { draft, notifier }
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (ReportDraft, N) {
        (self.draft, self.notifier)
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.draft.photo = Some(file);
    }

    /// Checks the required fields. On success the draft and the selected
    /// file are cleared; on failure nothing changes.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(fields = %join_fields(&missing), "report rejected");
            self.notifier.notify(
                MISSING_INFO_TITLE,
                MISSING_INFO_DESCRIPTION,
                NotificationKind::Error,
            );
            return Err(SubmitError::MissingRequiredField { fields: missing });
        }

        tracing::info!(issue_type = %self.draft.issue_type, "report accepted");
        self.notifier.notify(
            SUBMITTED_TITLE,
            SUBMITTED_DESCRIPTION,
            NotificationKind::Success,
        );
        self.draft = ReportDraft::default();
        Ok(())
    }

    pub fn request_voice_input(&mut self) {
        self.notifier
            .notify(VOICE_TITLE, VOICE_DESCRIPTION, NotificationKind::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifier::ToastQueue;

    fn filled() -> ReportDraft {
        ReportDraft {
            name: "Asha".to_string(),
            phone: "9999999999".to_string(),
            issue_type: "drainage".to_string(),
            location: "Market Rd".to_string(),
            description: "Standing water".to_string(),
            photo: None,
        }
    }

    #[test]
    fn test_complete_draft_submits_and_resets() {
        let mut controller = DraftController::with_draft(filled(), ToastQueue::new());
        controller.select_file(SelectedFile::new("drain.jpg"));

        assert!(controller.submit().is_ok());

        let (draft, queue) = controller.into_parts();
        assert_eq!(draft, ReportDraft::default());
        assert!(draft.photo.is_none());
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, NotificationKind::Success);
        assert_eq!(queue.toasts()[0].title, SUBMITTED_TITLE);
    }

    #[test]
    fn test_missing_name_is_rejected_and_draft_kept() {
        let mut draft = filled();
        draft.name.clear();
        draft.description = "x".to_string();
        let mut controller = DraftController::with_draft(draft.clone(), ToastQueue::new());

        let err = controller.submit().unwrap_err();
        assert_eq!(
            err,
            SubmitError::MissingRequiredField {
                fields: vec![DraftField::Name]
            }
        );

        let (after, queue) = controller.into_parts();
        assert_eq!(after, draft);
        assert_eq!(queue.toasts()[0].kind, NotificationKind::Error);
        assert_eq!(queue.toasts()[0].title, MISSING_INFO_TITLE);
    }

    #[test]
    fn test_each_empty_field_blocks_submit() {
        for field in DraftField::ALL {
            let mut controller = DraftController::with_draft(filled(), ToastQueue::new());
            controller.select_file(SelectedFile::new("photo.png"));
            controller.update_field(field, "");
            let before = controller.draft().clone();

            assert!(controller.submit().is_err(), "{} empty", field);
            assert_eq!(controller.draft(), &before);
            assert_eq!(
                controller.draft().photo,
                Some(SelectedFile::new("photo.png"))
            );
        }
    }

    #[test]
    fn test_empty_draft_reports_all_fields_in_order() {
        let mut controller = DraftController::new(ToastQueue::new());
        match controller.submit() {
            Err(SubmitError::MissingRequiredField { fields }) => {
                assert_eq!(fields, DraftField::ALL.to_vec())
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_photo_is_not_required() {
        let mut controller = DraftController::with_draft(filled(), ToastQueue::new());
        assert!(controller.submit().is_ok());
    }

    #[test]
    fn test_update_field_keeps_last_value() {
        let mut controller = DraftController::new(ToastQueue::new());
        controller.update_field(DraftField::Location, "Temple St");
        controller.update_field(DraftField::Location, "Market Rd");
        assert_eq!(controller.draft().get(DraftField::Location), "Market Rd");

        let snapshot = controller.draft().clone();
        controller.update_field(DraftField::Location, "Market Rd");
        assert_eq!(controller.draft(), &snapshot);
        assert!(controller.notifier().toasts().is_empty());
    }

    #[test]
    fn test_select_file_overwrites_previous() {
        let mut controller = DraftController::new(ToastQueue::new());
        controller.select_file(SelectedFile::new("a.jpg"));
        controller.select_file(SelectedFile::new("b.jpg"));
        assert_eq!(controller.draft().photo, Some(SelectedFile::new("b.jpg")));
    }

    #[test]
    fn test_voice_request_leaves_draft_alone() {
        let mut controller = DraftController::with_draft(filled(), ToastQueue::new());
        controller.request_voice_input();

        assert_eq!(controller.draft(), &filled());
        let toast = &controller.notifier().toasts()[0];
        assert_eq!(toast.title, VOICE_TITLE);
        assert_eq!(toast.kind, NotificationKind::Info);
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("issueType".parse::<DraftField>().unwrap(), DraftField::IssueType);
        assert!("issue_type".parse::<DraftField>().is_err());
        for field in DraftField::ALL {
            assert_eq!(field.form_name().parse::<DraftField>().unwrap(), field);
        }
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut draft = filled();
        draft.phone = " ".to_string();
        assert!(draft.missing_fields().is_empty());
    }
}
