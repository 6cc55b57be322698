/// # Type Driven Development
/// The registration record is deliberately a plain, mutable struct rather than a
/// parsed-and-frozen value object: the evaluation pipeline writes back onto it
/// (the computed fee, the per-session approval tags), and that mutation is part
/// of the contract callers observe - a rejected registration still carries
/// whatever tags were assigned before the rejection was reached.
///
/// Fields the caller must not control (`registration_fee`, `Session::approved`)
/// are excluded from deserialization, so a submitted document cannot pre-approve
/// its own sessions or pick its own fee.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Registration {
    // Absent and empty are the same thing to the validation rules, so the
    // identity fields default to empty rather than failing deserialization.
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub years_experience: Option<i32>,
    #[serde(default)]
    pub has_blog: bool,
    #[serde(default)]
    pub blog_url: Option<String>,
    #[serde(default)]
    pub browser: WebBrowser,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub employer: String,
    #[serde(skip)]
    pub registration_fee: i32,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// One proposed talk. `approved` starts out unset and is assigned exactly once
/// during evaluation; it is never reverted, even when the registration as a
/// whole is later rejected.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Session {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip)]
    pub approved: Option<bool>,
}

impl Session {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            approved: None,
        }
    }
}

/// The browser the speaker filled in on the submission form. Treated as an
/// opaque value pair; only the eligibility rules look at it.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WebBrowser {
    #[serde(default)]
    pub name: BrowserName,
    #[serde(default)]
    pub major_version: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub enum BrowserName {
    InternetExplorer,
    Chrome,
    Firefox,
    Safari,
    Edge,
    Opera,
    #[default]
    Other,
}

impl BrowserName {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserName::InternetExplorer => "InternetExplorer",
            BrowserName::Chrome => "Chrome",
            BrowserName::Firefox => "Firefox",
            BrowserName::Safari => "Safari",
            BrowserName::Edge => "Edge",
            BrowserName::Opera => "Opera",
            BrowserName::Other => "Other",
        }
    }
}
