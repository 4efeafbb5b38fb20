//! Support escalation types.

use crate::session::RecoverySession;
use crate::types::{ErrorCode, PaymentErrorKind};
use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

/// Contact details offered when the user escalates to support.
///
/// ```rust
/// use payment_recovery::SupportContact;
///
/// let contact = SupportContact::default()
///     .with_email("billing@example.com")
///     .with_phone("+1 800 555 0100");
///
/// let links = contact.links("Payment failed").unwrap();
/// assert_eq!(links[0].scheme(), "mailto");
/// assert_eq!(links[1].as_str(), "tel:+18005550100");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportContact {
    /// Support mailbox.
    pub email: Option<String>,
    /// Support phone number, any formatting.
    pub phone: Option<String>,
}

impl SupportContact {
    /// Set the support mailbox.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the support phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Build `mailto:` and `tel:` links, in that order, skipping blank entries.
    pub fn links(&self, subject: &str) -> Result<Vec<Url>, url::ParseError> {
        let mut links = Vec::with_capacity(2);

        if let Some(email) = self.email.as_deref().map(str::trim)
            && !email.is_empty()
        {
            let mut link = Url::parse(&format!("mailto:{}", email))?;
            link.set_query(Some(&format!("subject={}", encode_subject(subject))));
            links.push(link);
        }

        if let Some(phone) = self.phone.as_deref() {
            let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
            if !digits.is_empty() {
                links.push(Url::parse(&format!("tel:{}", digits))?);
            }
        }

        Ok(links)
    }
}

/// Percent-encode a mailto header value. Spaces must be `%20`, not `+`.
fn encode_subject(subject: &str) -> String {
    form_urlencoded::byte_serialize(subject.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Context handed to the navigator when the user contacts support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    /// Kind of the current failure, if any was recorded.
    pub kind: Option<PaymentErrorKind>,
    /// Raw gateway code of the current failure.
    pub code: Option<ErrorCode>,
    /// Failures recorded in the session.
    pub retry_count: u32,
    /// Whether the retry budget was used up.
    pub exhausted: bool,
    /// Ready-to-open contact links.
    pub links: Vec<Url>,
}

impl SupportRequest {
    /// Build a request from the session's current state.
    pub fn from_session(
        session: &RecoverySession,
        contact: &SupportContact,
    ) -> Result<Self, url::ParseError> {
        let error = session.current_error();
        let subject = match error {
            Some(error) => format!("Payment failed: {}", error.kind),
            None => "Payment help".to_string(),
        };

        Ok(Self {
            kind: error.map(|e| e.kind),
            code: error.and_then(|e| e.code.clone()),
            retry_count: session.retry_count(),
            exhausted: session.is_exhausted(),
            links: contact.links(&subject)?,
        })
    }
}
