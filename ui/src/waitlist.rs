//! The multi-step waitlist signup form, independent of its markup.

use derive_more::Display;
use payloads::ClientError;
use payloads::requests::WaitlistSignup;
use std::rc::Rc;
use yew::Reducible;

/// Success message stays up this long before the form closes.
pub const SUCCESS_CLOSE_MS: u32 = 3_000;
/// Delay between closing and clearing the form.
pub const RESET_DELAY_MS: u32 = 300;
pub const ERROR_VISIBLE_MS: u32 = 5_000;

pub const SUBMIT_LABEL: &str = "Join List";
pub const SUBMITTING_LABEL: &str = "Joining...";
pub const SUCCESS_TITLE: &str = "You're on the list!";
pub const SUCCESS_BODY: &str = "We'll notify you when Spark opens up for new educators.";
const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

pub const SUBSCRIBER_RANGES: &[&str] = &["Under 1K", "1K-10K", "10K-100K", "100K-1M", "1M+"];
pub const EMPLOYEE_RANGES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];
pub const COURSE_TYPES: &[&str] = &["Self-paced", "Cohort-based", "Live classes", "Not sure yet"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Role {
    #[display("creator")]
    Creator,
    #[display("teacher")]
    Teacher,
    #[display("team")]
    Team,
    #[display("other")]
    Other,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Creator, Role::Teacher, Role::Team, Role::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Creator => "Content creator",
            Role::Teacher => "Independent teacher",
            Role::Team => "Company or school",
            Role::Other => "Something else",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.to_string() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Contact,
    Profile,
    Details,
}

impl Step {
    pub fn number(&self) -> usize {
        match self {
            Step::Contact => 1,
            Step::Profile => 2,
            Step::Details => 3,
        }
    }

    pub const COUNT: usize = 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display("Please enter a valid email address")]
    MissingEmail,
    #[display("That email address doesn't look right")]
    InvalidEmail,
    #[display("Please tell us what best describes you")]
    MissingRole,
    #[display("Please enter a YouTube channel link, e.g. https://youtube.com/@channel")]
    InvalidChannelUrl,
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Name,
    SubscriberRange,
    YoutubeChannelUrl,
    EmployeeRange,
    CourseType,
    AdditionalInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub email: String,
    pub name: String,
    pub role: Option<Role>,
    pub subscriber_range: String,
    pub youtube_channel_url: String,
    pub employee_range: String,
    pub course_type: String,
    pub additional_info: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Loose shape check; the server has the final say.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

pub fn is_youtube_url(url: &str) -> bool {
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    matches!(
        host.to_ascii_lowercase().as_str(),
        "youtube.com" | "www.youtube.com" | "m.youtube.com" | "youtu.be"
    )
}

impl WaitlistForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::SubscriberRange => &mut self.subscriber_range,
            Field::YoutubeChannelUrl => &mut self.youtube_channel_url,
            Field::EmployeeRange => &mut self.employee_range,
            Field::CourseType => &mut self.course_type,
            Field::AdditionalInfo => &mut self.additional_info,
        };
        *slot = value;
    }

    pub fn validate(&self, step: Step) -> Result<(), ValidationError> {
        match step {
            Step::Contact => {
                let email = self.email.trim();
                if email.is_empty() {
                    return Err(ValidationError::MissingEmail);
                }
                if !is_valid_email(email) {
                    return Err(ValidationError::InvalidEmail);
                }
            }
            Step::Profile => {
                let role = self.role.ok_or(ValidationError::MissingRole)?;
                let channel = self.youtube_channel_url.trim();
                if role == Role::Creator && !channel.is_empty() && !is_youtube_url(channel) {
                    return Err(ValidationError::InvalidChannelUrl);
                }
            }
            Step::Details => {}
        }
        Ok(())
    }

    /// The request body. Answers to questions the chosen role never saw are
    /// left out.
    pub fn signup(&self) -> Result<WaitlistSignup, ValidationError> {
        for step in [Step::Contact, Step::Profile, Step::Details] {
            self.validate(step)?;
        }
        let creator = self.role == Some(Role::Creator);
        let team = self.role == Some(Role::Team);
        Ok(WaitlistSignup {
            email: self.email.trim().to_string(),
            name: non_empty(&self.name),
            role: self.role.map(|role| role.to_string()),
            employee_range: non_empty(&self.employee_range).filter(|_| team),
            subscriber_range: non_empty(&self.subscriber_range).filter(|_| creator),
            youtube_channel_url: non_empty(&self.youtube_channel_url).filter(|_| creator),
            course_type: non_empty(&self.course_type),
            additional_info: non_empty(&self.additional_info),
        })
    }
}

/// Message shown when the server turns a signup down.
pub fn failure_message(error: &ClientError) -> String {
    match error {
        ClientError::APIError(_, message) if !message.trim().is_empty() => message.clone(),
        ClientError::Network(_) => error.to_string(),
        _ => GENERIC_FAILURE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistAction {
    Set(Field, String),
    SetRole(Option<Role>),
    Next,
    Back,
    Invalid(ValidationError),
    BeginSubmit,
    Finished(Result<(), String>),
    /// Hide error number `n`, unless a newer one replaced it.
    ExpireError(u32),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistFlow {
    pub form: WaitlistForm,
    pub step: Step,
    pub submitting: bool,
    pub succeeded: bool,
    pub error: Option<String>,
    /// Bumped for every error shown.
    pub error_seq: u32,
}

impl WaitlistFlow {
    pub fn is_disabled(&self) -> bool {
        self.submitting || self.succeeded
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    fn show_error(&mut self, message: String) {
        self.error = Some(message);
        self.error_seq = self.error_seq.wrapping_add(1);
    }

    pub fn apply(&mut self, action: WaitlistAction) {
        match action {
            WaitlistAction::Set(field, value) => {
                if !self.is_disabled() {
                    self.form.set(field, value);
                }
            }
            WaitlistAction::SetRole(role) => {
                if !self.is_disabled() {
                    self.form.role = role;
                }
            }
            WaitlistAction::Next => match self.form.validate(self.step) {
                Ok(()) => {
                    self.error = None;
                    self.step = match self.step {
                        Step::Contact => Step::Profile,
                        Step::Profile | Step::Details => Step::Details,
                    };
                }
                Err(error) => self.show_error(error.to_string()),
            },
            WaitlistAction::Back => {
                self.error = None;
                self.step = match self.step {
                    Step::Contact | Step::Profile => Step::Contact,
                    Step::Details => Step::Profile,
                };
            }
            WaitlistAction::Invalid(error) => self.show_error(error.to_string()),
            WaitlistAction::BeginSubmit => {
                self.submitting = true;
                self.error = None;
            }
            WaitlistAction::Finished(Ok(())) => {
                self.submitting = false;
                self.succeeded = true;
            }
            WaitlistAction::Finished(Err(message)) => {
                self.submitting = false;
                self.show_error(message);
            }
            WaitlistAction::ExpireError(seq) => {
                if seq == self.error_seq {
                    self.error = None;
                }
            }
            WaitlistAction::Reset => *self = WaitlistFlow::default(),
        }
    }
}

impl Reducible for WaitlistFlow {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn flow_with(email: &str) -> WaitlistFlow {
        let mut flow = WaitlistFlow::default();
        flow.apply(WaitlistAction::Set(Field::Email, email.into()));
        flow
    }

    #[test]
    fn contact_step_requires_an_email() {
        let mut flow = flow_with("  ");
        flow.apply(WaitlistAction::Next);
        assert_eq!(flow.step, Step::Contact);
        assert_eq!(flow.error.as_deref(), Some("Please enter a valid email address"));

        flow.apply(WaitlistAction::Set(Field::Email, "not-an-email".into()));
        flow.apply(WaitlistAction::Next);
        assert_eq!(flow.error.as_deref(), Some("That email address doesn't look right"));

        flow.apply(WaitlistAction::Set(Field::Email, "ada@example.com".into()));
        flow.apply(WaitlistAction::Next);
        assert_eq!(flow.step, Step::Profile);
        assert_eq!(flow.error, None);
    }

    #[test]
    fn profile_step_requires_a_role() {
        let mut flow = flow_with("ada@example.com");
        flow.apply(WaitlistAction::Next);
        flow.apply(WaitlistAction::Next);
        assert_eq!(flow.step, Step::Profile);
        assert_eq!(flow.error.as_deref(), Some("Please tell us what best describes you"));

        flow.apply(WaitlistAction::SetRole(Some(Role::Teacher)));
        flow.apply(WaitlistAction::Next);
        assert_eq!(flow.step, Step::Details);
        flow.apply(WaitlistAction::Back);
        assert_eq!(flow.step, Step::Profile);
    }

    #[test]
    fn creators_channel_link_must_be_youtube() {
        let mut form = WaitlistForm {
            email: "ada@example.com".into(),
            role: Some(Role::Creator),
            youtube_channel_url: "https://vimeo.com/ada".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(Step::Profile), Err(ValidationError::InvalidChannelUrl));
        form.youtube_channel_url = "https://www.youtube.com/@ada".into();
        assert_eq!(form.validate(Step::Profile), Ok(()));
        form.youtube_channel_url.clear();
        assert_eq!(form.validate(Step::Profile), Ok(()));
    }

    #[test]
    fn signup_drops_answers_for_other_roles() {
        let form = WaitlistForm {
            email: " ada@example.com ".into(),
            name: "Ada".into(),
            role: Some(Role::Team),
            subscriber_range: "1K-10K".into(),
            youtube_channel_url: "https://youtube.com/@ada".into(),
            employee_range: "11-50".into(),
            course_type: "Cohort-based".into(),
            additional_info: "   ".into(),
        };
        let signup = form.signup().unwrap();
        assert_eq!(signup.email, "ada@example.com");
        assert_eq!(signup.role.as_deref(), Some("team"));
        assert_eq!(signup.employee_range.as_deref(), Some("11-50"));
        assert_eq!(signup.subscriber_range, None);
        assert_eq!(signup.youtube_channel_url, None);
        assert_eq!(signup.additional_info, None);
    }

    #[test]
    fn submission_locks_the_form_until_it_fails() {
        let mut flow = flow_with("ada@example.com");
        flow.apply(WaitlistAction::BeginSubmit);
        assert!(flow.is_disabled());
        assert_eq!(flow.submit_label(), "Joining...");

        flow.apply(WaitlistAction::Set(Field::Email, "other@example.com".into()));
        assert_eq!(flow.form.email, "ada@example.com");

        flow.apply(WaitlistAction::Finished(Err("Already signed up".into())));
        assert!(!flow.is_disabled());
        assert_eq!(flow.submit_label(), "Join List");
        assert_eq!(flow.error.as_deref(), Some("Already signed up"));
    }

    #[test]
    fn expiring_an_old_error_keeps_the_newer_one() {
        let mut flow = flow_with("ada@example.com");
        flow.apply(WaitlistAction::Finished(Err("first".into())));
        let first = flow.error_seq;
        flow.apply(WaitlistAction::Finished(Err("second".into())));

        flow.apply(WaitlistAction::ExpireError(first));
        assert_eq!(flow.error.as_deref(), Some("second"));
        flow.apply(WaitlistAction::ExpireError(flow.error_seq));
        assert_eq!(flow.error, None);
    }

    #[test]
    fn success_then_reset_starts_over() {
        let mut flow = flow_with("ada@example.com");
        flow.apply(WaitlistAction::BeginSubmit);
        flow.apply(WaitlistAction::Finished(Ok(())));
        assert!(flow.succeeded);
        assert!(flow.is_disabled());

        flow.apply(WaitlistAction::Reset);
        assert_eq!(flow, WaitlistFlow::default());
    }

    #[test]
    fn server_messages_are_shown_as_sent() {
        let error = ClientError::APIError(StatusCode::CONFLICT, "Already on the list".into());
        assert_eq!(failure_message(&error), "Already on the list");
        assert_eq!(
            failure_message(&ClientError::Unsuccessful),
            "Something went wrong. Please try again later."
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }
}
