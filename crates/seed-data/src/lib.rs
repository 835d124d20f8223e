//! Fallback seed job postings.
//!
//! The store serves this fixed collection until an admin has persisted one,
//! so a fresh deployment renders a populated board instead of an empty page.
//! The record type is independent of backend domain types to avoid circular
//! dependencies; the backend converts at the point of use.
//!
//! # Example
//!
//! ```
//! let postings = seed_data::default_postings();
//!
//! assert_eq!(postings.len(), 12);
//! assert_eq!(postings[0].title, "Senior Frontend Developer");
//! ```

use serde::{Deserialize, Serialize};

/// Logo URI used when a posting does not supply one.
pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg?height=80&width=80";

/// One seed job posting record.
///
/// Serialises to the same camelCase JSON shape the store persists, with the
/// employment type under the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPosting {
    /// Unique identifier within the seed collection.
    pub id: i64,
    /// Role title shown as the listing headline.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Company logo URI.
    pub company_logo: String,
    /// Office location, or "Remote".
    pub location: String,
    /// Whether the role can be done remotely.
    pub is_remote: bool,
    /// Employment type, e.g. "Full-time" or "Contract".
    #[serde(rename = "type")]
    pub employment_type: String,
    /// Role category, e.g. "Software Developer".
    pub category: String,
    /// Eligible passout-year range.
    pub batch: String,
    /// Required qualification.
    pub qualification: String,
    /// Eligible study stream, when the posting restricts one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Salary range as display text.
    pub salary: String,
    /// Relative posting age as display text, not a timestamp.
    pub posted_date: String,
    /// Full role description.
    pub description: String,
}

#[expect(clippy::too_many_arguments, reason = "flat record constructor used only by the seed table")]
fn posting(
    id: i64,
    title: &str,
    company: &str,
    location: &str,
    is_remote: bool,
    employment_type: &str,
    category: &str,
    batch: &str,
    qualification: &str,
    salary: &str,
    posted_date: &str,
    description: &str,
) -> SeedPosting {
    SeedPosting {
        id,
        title: title.to_owned(),
        company: company.to_owned(),
        company_logo: PLACEHOLDER_LOGO.to_owned(),
        location: location.to_owned(),
        is_remote,
        employment_type: employment_type.to_owned(),
        category: category.to_owned(),
        batch: batch.to_owned(),
        qualification: qualification.to_owned(),
        stream: None,
        salary: salary.to_owned(),
        posted_date: posted_date.to_owned(),
        description: description.to_owned(),
    }
}

/// The twelve-posting fallback collection, newest first.
#[must_use]
pub fn default_postings() -> Vec<SeedPosting> {
    vec![
        posting(
            1,
            "Senior Frontend Developer",
            "TechCorp Inc.",
            "San Francisco, CA",
            true,
            "Full-time",
            "Software Developer",
            "2020-2023",
            "B.Tech/M.Tech in CS/IT",
            "$120,000 - $150,000",
            "2 days ago",
            "We're looking for a Senior Frontend Developer to join our team. You'll be responsible for building user interfaces for our web applications using React, Next.js, and TypeScript. The ideal candidate has 5+ years of experience with modern frontend frameworks.",
        ),
        posting(
            2,
            "UX/UI Designer",
            "DesignHub",
            "New York, NY",
            false,
            "Full-time",
            "Design",
            "2021-2024",
            "Bachelor's in Design/HCI",
            "$90,000 - $110,000",
            "1 week ago",
            "DesignHub is seeking a talented UX/UI Designer to create beautiful, intuitive interfaces for our clients. You should have a strong portfolio demonstrating your design process and experience with Figma, Sketch, and Adobe Creative Suite.",
        ),
        posting(
            3,
            "DevOps Engineer",
            "CloudSystems",
            "Austin, TX",
            true,
            "Contract",
            "Devops and Cloud",
            "2019-2022",
            "B.Tech in CS/IT/ECE",
            "$60 - $80 per hour",
            "3 days ago",
            "Join our DevOps team to help build and maintain our cloud infrastructure. Experience with AWS, Kubernetes, Docker, and CI/CD pipelines is required. You'll be responsible for improving our deployment processes and system reliability.",
        ),
        posting(
            4,
            "Marketing Manager",
            "GrowthMarketing",
            "Chicago, IL",
            false,
            "Full-time",
            "Sales/Marketing",
            "2018-2022",
            "MBA in Marketing",
            "$85,000 - $105,000",
            "Just now",
            "We're looking for a Marketing Manager to lead our digital marketing efforts. The ideal candidate has experience with SEO, content marketing, social media, and email campaigns. You'll be responsible for developing and executing marketing strategies to drive growth.",
        ),
        posting(
            5,
            "Data Scientist",
            "DataInsights",
            "Remote",
            true,
            "Part-time",
            "Data Science",
            "2020-2023",
            "M.Sc/M.Tech in CS/Statistics",
            "$50 - $70 per hour",
            "5 days ago",
            "DataInsights is hiring a part-time Data Scientist to analyze large datasets and build predictive models. Strong background in statistics, machine learning, and programming (Python, R) is required. Experience with data visualization tools like Tableau is a plus.",
        ),
        posting(
            6,
            "Full Stack Developer",
            "WebTech Solutions",
            "Seattle, WA",
            false,
            "Full-time",
            "Software Developer",
            "2019-2022",
            "B.Tech/M.Tech in CS/IT",
            "$110,000 - $130,000",
            "1 week ago",
            "WebTech Solutions is looking for a Full Stack Developer proficient in both frontend and backend technologies. Experience with React, Node.js, and database systems is required. You'll be working on developing and maintaining web applications for our clients.",
        ),
        posting(
            7,
            "Cyber Security Analyst",
            "SecureNet",
            "Boston, MA",
            true,
            "Full-time",
            "Cyber Security",
            "2020-2023",
            "Bachelor's in CS/IT with Security focus",
            "$95,000 - $115,000",
            "3 days ago",
            "SecureNet is seeking a Cyber Security Analyst to help protect our systems and data from threats. You'll be responsible for monitoring security systems, conducting vulnerability assessments, and responding to security incidents.",
        ),
        posting(
            8,
            "Android Developer",
            "MobileApps Inc.",
            "San Diego, CA",
            false,
            "Full-time",
            "Android",
            "2021-2024",
            "B.Tech in CS/IT",
            "$100,000 - $120,000",
            "Just now",
            "MobileApps Inc. is looking for an Android Developer to join our mobile development team. Experience with Kotlin, Java, and Android SDK is required. You'll be responsible for developing and maintaining Android applications.",
        ),
        posting(
            9,
            "Business Analyst",
            "ConsultCorp",
            "Denver, CO",
            true,
            "Contract",
            "Business Analyst",
            "2018-2021",
            "MBA or equivalent",
            "$50 - $70 per hour",
            "4 days ago",
            "ConsultCorp is hiring a Business Analyst to help our clients optimize their business processes. Experience with requirements gathering, process mapping, and data analysis is required. You'll be working with clients to understand their needs and propose solutions.",
        ),
        posting(
            10,
            "QA Engineer",
            "QualityTech",
            "Portland, OR",
            false,
            "Full-time",
            "QA",
            "2020-2023",
            "Bachelor's in CS/IT or related field",
            "$85,000 - $100,000",
            "1 week ago",
            "QualityTech is looking for a QA Engineer to ensure the quality of our software products. Experience with manual and automated testing is required. You'll be responsible for developing test plans, executing tests, and reporting bugs.",
        ),
        posting(
            11,
            "Data Engineer",
            "DataFlow Systems",
            "Atlanta, GA",
            true,
            "Full-time",
            "Data Engineer",
            "2019-2022",
            "B.Tech/M.Tech in CS/IT",
            "$110,000 - $130,000",
            "2 days ago",
            "DataFlow Systems is seeking a Data Engineer to design and implement data pipelines. Experience with ETL processes, SQL, and big data technologies is required. You'll be responsible for building scalable data infrastructure.",
        ),
        posting(
            12,
            "Technical Consultant",
            "TechAdvise",
            "Miami, FL",
            false,
            "Full-time",
            "Consultant",
            "2018-2021",
            "Bachelor's in CS/IT or related field",
            "$90,000 - $110,000",
            "5 days ago",
            "TechAdvise is looking for a Technical Consultant to provide expert advice to our clients. Experience with software development and system architecture is required. You'll be working with clients to understand their technical needs and provide solutions.",
        ),
    ]
}
