use url::Url;

use crate::Result;

/// Fields collected by the contact form
#[derive(Debug, Clone, Default)]
pub struct Enquiry {
    /// Display text of the selected subject option
    pub subject: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl Enquiry {
    pub fn mail_subject(&self) -> String {
        format!("New Enquiry – {}", self.subject)
    }

    pub fn mail_body(&self) -> String {
        let phone = self
            .phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("N/A");

        format!(
            "Subject: {}\nName: {} {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            self.subject, self.first_name, self.last_name, self.email, phone, self.message
        )
    }
}

/// Build the mailto link the contact form navigates to
pub fn compose_mailto(recipient: &str, enquiry: &Enquiry) -> Result<Url> {
    let link = format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&enquiry.mail_subject()),
        urlencoding::encode(&enquiry.mail_body()),
    );
    Ok(Url::parse(&link)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry() -> Enquiry {
        Enquiry {
            subject: "Interior Design".to_string(),
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            message: "Two bedrooms & a loft".to_string(),
        }
    }

    #[test]
    fn test_body_falls_back_to_na_phone() {
        let body = enquiry().mail_body();
        assert!(body.contains("Name: Sam Lee\n"));
        assert!(body.contains("Phone: N/A\n"));
        assert!(body.ends_with("Message:\nTwo bedrooms & a loft"));
    }

    #[test]
    fn test_blank_phone_counts_as_missing() {
        let mut enquiry = enquiry();
        enquiry.phone = Some("   ".to_string());
        assert!(enquiry.mail_body().contains("Phone: N/A"));

        enquiry.phone = Some("555-0100".to_string());
        assert!(enquiry.mail_body().contains("Phone: 555-0100"));
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let url = compose_mailto("studio@example.com", &enquiry()).unwrap();
        assert_eq!(url.scheme(), "mailto");

        let text = url.as_str();
        assert!(text.starts_with("mailto:studio@example.com?subject=New%20Enquiry%20"));
        assert!(text.contains("&body=Subject%3A%20Interior%20Design%0A"));
        assert!(text.contains("%26%20a%20loft"));
    }
}
