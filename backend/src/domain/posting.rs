//! Job posting data model.

use std::fmt;

use listing::Searchable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentinel shown as the posted date of a freshly created posting.
///
/// Posted dates are display-only text, not timestamps; they cannot be
/// sorted or compared. Listing order comes from the store instead.
pub const JUST_POSTED: &str = "Just now";

/// Logo URI substituted when a draft does not supply one.
pub const PLACEHOLDER_LOGO: &str = seed_data::PLACEHOLDER_LOGO;

/// Unique identifier of a posting within the store.
///
/// Assigned once at creation time and never changed afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PostingId(i64);

impl PostingId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostingId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// One job listing record.
///
/// Immutable once created: there is no update-in-place operation, only
/// create and delete. Serialises to the camelCase shape the store persists,
/// with the employment type under the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Unique identifier within the store.
    pub id: PostingId,
    /// Role title shown as the listing headline.
    #[schema(example = "Senior Frontend Developer")]
    pub title: String,
    /// Hiring company name.
    #[schema(example = "TechCorp Inc.")]
    pub company: String,
    /// Company logo URI.
    pub company_logo: String,
    /// Office location, or "Remote".
    #[schema(example = "San Francisco, CA")]
    pub location: String,
    /// Whether the role can be done remotely.
    pub is_remote: bool,
    /// Employment type, e.g. "Full-time" or "Contract".
    #[serde(rename = "type")]
    #[schema(example = "Full-time")]
    pub employment_type: String,
    /// Role category, e.g. "Software Developer".
    pub category: String,
    /// Eligible passout-year range.
    #[schema(example = "2020-2023")]
    pub batch: String,
    /// Required qualification.
    pub qualification: String,
    /// Eligible study stream, when the posting restricts one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Salary range as display text.
    pub salary: String,
    /// Relative posting age as display text.
    pub posted_date: String,
    /// Full role description.
    pub description: String,
}

impl JobPosting {
    /// Materialise a validated draft into a stored posting.
    ///
    /// Stamps the assigned identifier and the [`JUST_POSTED`] sentinel.
    #[must_use]
    pub fn from_draft(id: PostingId, draft: JobDraft) -> Self {
        Self {
            id,
            title: draft.title,
            company: draft.company,
            company_logo: draft.company_logo,
            location: draft.location,
            is_remote: draft.is_remote,
            employment_type: draft.employment_type,
            category: draft.category,
            batch: draft.batch,
            qualification: draft.qualification,
            stream: draft.stream,
            salary: draft.salary,
            posted_date: JUST_POSTED.to_owned(),
            description: draft.description,
        }
    }
}

impl Searchable for JobPosting {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.company, &self.description]
    }
}

impl From<seed_data::SeedPosting> for JobPosting {
    fn from(seed: seed_data::SeedPosting) -> Self {
        Self {
            id: PostingId::new(seed.id),
            title: seed.title,
            company: seed.company,
            company_logo: seed.company_logo,
            location: seed.location,
            is_remote: seed.is_remote,
            employment_type: seed.employment_type,
            category: seed.category,
            batch: seed.batch,
            qualification: seed.qualification,
            stream: seed.stream,
            salary: seed.salary,
            posted_date: seed.posted_date,
            description: seed.description,
        }
    }
}

/// Validation failures raised when constructing a [`JobDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    /// `title` was empty.
    EmptyTitle,
    /// `company` was empty.
    EmptyCompany,
    /// `location` was empty.
    EmptyLocation,
    /// `type` was empty.
    EmptyType,
    /// `category` was empty.
    EmptyCategory,
    /// `batch` was empty.
    EmptyBatch,
    /// `qualification` was empty.
    EmptyQualification,
    /// `salary` was empty.
    EmptySalary,
    /// `description` was empty.
    EmptyDescription,
}

impl DraftValidationError {
    /// JSON name of the offending request field.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyCompany => "company",
            Self::EmptyLocation => "location",
            Self::EmptyType => "type",
            Self::EmptyCategory => "category",
            Self::EmptyBatch => "batch",
            Self::EmptyQualification => "qualification",
            Self::EmptySalary => "salary",
            Self::EmptyDescription => "description",
        }
    }
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must not be empty", self.field())
    }
}

impl std::error::Error for DraftValidationError {}

/// Unvalidated field bundle for a new posting, as collected by the form.
#[derive(Debug, Clone, Default)]
pub struct DraftFields {
    /// Role title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Company logo URI; the placeholder is substituted when absent.
    pub company_logo: Option<String>,
    /// Office location.
    pub location: String,
    /// Whether the role can be done remotely.
    pub is_remote: bool,
    /// Employment type.
    pub employment_type: String,
    /// Role category.
    pub category: String,
    /// Eligible passout-year range.
    pub batch: String,
    /// Required qualification.
    pub qualification: String,
    /// Eligible study stream, optional.
    pub stream: Option<String>,
    /// Salary range as display text.
    pub salary: String,
    /// Full role description.
    pub description: String,
}

/// A posting creation payload that has passed field validation.
///
/// Every text field is non-empty except `stream`; the logo has been
/// defaulted when absent. Only [`JobPosting::from_draft`] consumes drafts,
/// so an invalid posting can never reach the store.
#[derive(Debug, Clone)]
pub struct JobDraft {
    title: String,
    company: String,
    company_logo: String,
    location: String,
    is_remote: bool,
    employment_type: String,
    category: String,
    batch: String,
    qualification: String,
    stream: Option<String>,
    salary: String,
    description: String,
}

fn required(value: String, error: DraftValidationError) -> Result<String, DraftValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

fn normalise_optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl TryFrom<DraftFields> for JobDraft {
    type Error = DraftValidationError;

    fn try_from(fields: DraftFields) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(fields.title, DraftValidationError::EmptyTitle)?,
            company: required(fields.company, DraftValidationError::EmptyCompany)?,
            company_logo: normalise_optional(fields.company_logo)
                .unwrap_or_else(|| PLACEHOLDER_LOGO.to_owned()),
            location: required(fields.location, DraftValidationError::EmptyLocation)?,
            is_remote: fields.is_remote,
            employment_type: required(fields.employment_type, DraftValidationError::EmptyType)?,
            category: required(fields.category, DraftValidationError::EmptyCategory)?,
            batch: required(fields.batch, DraftValidationError::EmptyBatch)?,
            qualification: required(
                fields.qualification,
                DraftValidationError::EmptyQualification,
            )?,
            stream: normalise_optional(fields.stream),
            salary: required(fields.salary, DraftValidationError::EmptySalary)?,
            description: required(fields.description, DraftValidationError::EmptyDescription)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete_fields() -> DraftFields {
        DraftFields {
            title: "DevOps Engineer".to_owned(),
            company: "CloudSystems".to_owned(),
            company_logo: None,
            location: "Austin, TX".to_owned(),
            is_remote: true,
            employment_type: "Contract".to_owned(),
            category: "Devops and Cloud".to_owned(),
            batch: "2019-2022".to_owned(),
            qualification: "B.Tech in CS/IT/ECE".to_owned(),
            stream: Some("Computer Science".to_owned()),
            salary: "$60 - $80 per hour".to_owned(),
            description: "Build and maintain our cloud infrastructure.".to_owned(),
        }
    }

    #[test]
    fn draft_becomes_a_posting_with_sentinel_date() {
        let draft = JobDraft::try_from(complete_fields()).expect("valid draft");
        let posting = JobPosting::from_draft(PostingId::new(42), draft);
        assert_eq!(posting.id, PostingId::new(42));
        assert_eq!(posting.posted_date, JUST_POSTED);
        assert_eq!(posting.company_logo, PLACEHOLDER_LOGO);
        assert_eq!(posting.stream.as_deref(), Some("Computer Science"));
    }

    #[rstest]
    #[case::title(|f: &mut DraftFields| f.title.clear(), "title")]
    #[case::company(|f: &mut DraftFields| f.company = "  ".to_owned(), "company")]
    #[case::location(|f: &mut DraftFields| f.location.clear(), "location")]
    #[case::employment_type(|f: &mut DraftFields| f.employment_type.clear(), "type")]
    #[case::category(|f: &mut DraftFields| f.category.clear(), "category")]
    #[case::batch(|f: &mut DraftFields| f.batch.clear(), "batch")]
    #[case::qualification(|f: &mut DraftFields| f.qualification.clear(), "qualification")]
    #[case::salary(|f: &mut DraftFields| f.salary.clear(), "salary")]
    #[case::description(|f: &mut DraftFields| f.description.clear(), "description")]
    fn blank_required_fields_are_rejected(
        #[case] blank: fn(&mut DraftFields),
        #[case] field: &str,
    ) {
        let mut fields = complete_fields();
        blank(&mut fields);
        let err = JobDraft::try_from(fields).expect_err("draft should be invalid");
        assert_eq!(err.field(), field);
    }

    #[test]
    fn blank_stream_collapses_to_none() {
        let mut fields = complete_fields();
        fields.stream = Some("   ".to_owned());
        let draft = JobDraft::try_from(fields).expect("valid draft");
        let posting = JobPosting::from_draft(PostingId::new(1), draft);
        assert_eq!(posting.stream, None);
    }

    #[test]
    fn posting_round_trips_through_the_stored_json_shape() {
        let draft = JobDraft::try_from(complete_fields()).expect("valid draft");
        let posting = JobPosting::from_draft(PostingId::new(7), draft);
        let json = serde_json::to_value(&posting).expect("serialise posting");
        assert_eq!(json["type"], "Contract");
        assert_eq!(json["isRemote"], true);
        let back: JobPosting = serde_json::from_value(json).expect("deserialise posting");
        assert_eq!(back, posting);
    }

    #[test]
    fn search_fields_cover_title_company_and_description() {
        let posting: JobPosting = seed_data::default_postings()
            .into_iter()
            .next()
            .map(Into::into)
            .expect("seed posting");
        assert_eq!(
            posting.search_fields(),
            vec![
                posting.title.as_str(),
                posting.company.as_str(),
                posting.description.as_str()
            ]
        );
    }
}
