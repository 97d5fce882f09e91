use crate::config::{log_warning, LineBreaks, SiteConfig};
use std::rc::Rc;

/// How a visitor wants to take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Investor,
    VolunteerDeveloper,
    FarmerFieldLead,
    BuilderEngineer,
    PartnerNgo,
}

impl Role {
    /// All roles, in the order the dropdown lists them.
    pub const ALL: [Role; 5] = [
        Role::Investor,
        Role::VolunteerDeveloper,
        Role::FarmerFieldLead,
        Role::BuilderEngineer,
        Role::PartnerNgo,
    ];

    /// Option label, also used verbatim in the email subject and body
    pub fn label(&self) -> &'static str {
        match self {
            Role::Investor => "Investor",
            Role::VolunteerDeveloper => "Volunteer Developer",
            Role::FarmerFieldLead => "Farmer / Field Lead",
            Role::BuilderEngineer => "Builder / Engineer",
            Role::PartnerNgo => "Partner / NGO",
        }
    }

    pub fn from_label(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.label() == label)
    }
}

/// A change coming from one of the form's controls.
#[derive(Debug, Clone, PartialEq)]
pub enum FormInput {
    Name(String),
    Role(String),
    Email(String),
}

/// State of the join form. Inputs are controlled: each event carries the
/// control's full current value and the state takes it as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinForm {
    pub name: String,
    pub role: Role,
    pub email: String,
}

impl JoinForm {
    pub fn apply(&mut self, input: FormInput) {
        match input {
            FormInput::Name(value) => self.name = value,
            FormInput::Email(value) => self.email = value,
            // The select only offers known labels; anything else keeps the current role
            FormInput::Role(label) => {
                if let Some(role) = Role::from_label(&label) {
                    self.role = role;
                }
            }
        }
    }

    pub fn subject(&self) -> String {
        format!("Join Agri-Build: {} - {}", self.role.label(), self.name)
    }

    pub fn body(&self, line_breaks: LineBreaks) -> String {
        let sep = match line_breaks {
            LineBreaks::Literal => "%0A",
            LineBreaks::Encoded => "\n",
        };
        format!(
            "Name: {}{sep}Role: {}{sep}Email: {}{sep}",
            self.name,
            self.role.label(),
            self.email,
        )
    }

    /// Build the `mailto:` link that opens a pre-filled draft.
    pub fn mailto_uri(&self, config: &SiteConfig) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            config.contact_email,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body(config.line_breaks)),
        )
    }
}

/// Hands a finished `mailto:` link to whatever opens mail drafts.
pub trait MailHandoff {
    fn open(&self, uri: &str);
}

/// Navigates the current document to the link. Fire-and-forget: if no mail
/// client is registered, nothing visible happens.
pub struct LocationHandoff;

impl MailHandoff for LocationHandoff {
    fn open(&self, uri: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().set_href(uri).is_err() {
            log_warning("Agri-Build: Could not open the mail client link");
        }
    }
}

/// Shared handle to the handoff, provided through context.
#[derive(Clone)]
pub struct Handoff(pub Rc<dyn MailHandoff>);

impl Handoff {
    pub fn browser() -> Self {
        Handoff(Rc::new(LocationHandoff))
    }
}

/// Submit the form: build the link and hand it off. Returns the link.
pub fn submit(form: &JoinForm, config: &SiteConfig, handoff: &dyn MailHandoff) -> String {
    let uri = form.mailto_uri(config);
    handoff.open(&uri);
    uri
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHandoff {
        opened: RefCell<Vec<String>>,
    }

    impl MailHandoff for RecordingHandoff {
        fn open(&self, uri: &str) {
            self.opened.borrow_mut().push(uri.to_string());
        }
    }

    fn ada() -> JoinForm {
        let mut form = JoinForm::default();
        form.apply(FormInput::Name("Ada".to_string()));
        form.apply(FormInput::Role("Volunteer Developer".to_string()));
        form.apply(FormInput::Email("ada@example.com".to_string()));
        form
    }

    #[test]
    fn test_default_role_is_investor() {
        assert_eq!(JoinForm::default().role, Role::Investor);
        assert_eq!(JoinForm::default().role.label(), "Investor");
    }

    #[test]
    fn test_selecting_each_role() {
        for role in Role::ALL {
            let mut form = JoinForm::default();
            form.apply(FormInput::Role(role.label().to_string()));
            assert_eq!(form.role, role);
            assert_eq!(form.role.label(), role.label());
        }
    }

    #[test]
    fn test_unknown_role_label_is_ignored() {
        let mut form = JoinForm::default();
        form.apply(FormInput::Role("Builder / Engineer".to_string()));
        form.apply(FormInput::Role("Astronaut".to_string()));
        assert_eq!(form.role, Role::BuilderEngineer);
    }

    #[test]
    fn test_typed_text_is_kept_verbatim() {
        let mut form = JoinForm::default();
        let mut typed = String::new();
        for ch in "Ada Lovelace <ada@@nowhere>".chars() {
            typed.push(ch);
            form.apply(FormInput::Name(typed.clone()));
            form.apply(FormInput::Email(typed.clone()));
        }
        assert_eq!(form.name, "Ada Lovelace <ada@@nowhere>");
        assert_eq!(form.email, "Ada Lovelace <ada@@nowhere>");
    }

    #[test]
    fn test_mailto_subject() {
        let uri = ada().mailto_uri(&SiteConfig::default());
        assert!(
            uri.starts_with(
                "mailto:info@agribuild.org?subject=Join%20Agri-Build%3A%20Volunteer%20Developer%20-%20Ada&body="
            ),
            "got {}",
            uri
        );
    }

    #[test]
    fn test_mailto_body_keeps_literal_separators() {
        let uri = ada().mailto_uri(&SiteConfig::default());
        let body = uri.split("&body=").nth(1).unwrap();
        assert_eq!(
            body,
            "Name%3A%20Ada%250ARole%3A%20Volunteer%20Developer%250AEmail%3A%20ada%40example.com%250A"
        );
        let decoded = urlencoding::decode(body).unwrap();
        assert_eq!(
            decoded,
            "Name: Ada%0ARole: Volunteer Developer%0AEmail: ada@example.com%0A"
        );
    }

    #[test]
    fn test_mailto_body_with_encoded_line_breaks() {
        let config = SiteConfig {
            line_breaks: LineBreaks::Encoded,
            ..Default::default()
        };
        let uri = ada().mailto_uri(&config);
        let body = uri.split("&body=").nth(1).unwrap();
        assert_eq!(
            body,
            "Name%3A%20Ada%0ARole%3A%20Volunteer%20Developer%0AEmail%3A%20ada%40example.com%0A"
        );
    }

    #[test]
    fn test_mailto_uses_configured_address() {
        let config = SiteConfig {
            contact_email: "join@example.org".to_string(),
            ..Default::default()
        };
        assert!(ada().mailto_uri(&config).starts_with("mailto:join@example.org?subject="));
    }

    #[test]
    fn test_slashes_in_role_are_encoded() {
        let mut form = ada();
        form.apply(FormInput::Role("Partner / NGO".to_string()));
        assert!(form
            .mailto_uri(&SiteConfig::default())
            .contains("subject=Join%20Agri-Build%3A%20Partner%20%2F%20NGO%20-%20Ada"));
    }

    #[test]
    fn test_malformed_email_passes_through() {
        let mut form = ada();
        form.apply(FormInput::Email("not an address".to_string()));
        let uri = form.mailto_uri(&SiteConfig::default());
        assert!(uri.contains("Email%3A%20not%20an%20address"));
    }

    #[test]
    fn test_submit_hands_off_once() {
        let handoff = RecordingHandoff::default();
        let config = SiteConfig::default();
        let uri = submit(&ada(), &config, &handoff);
        assert_eq!(*handoff.opened.borrow(), vec![uri.clone()]);
        assert_eq!(uri, ada().mailto_uri(&config));
    }
}
