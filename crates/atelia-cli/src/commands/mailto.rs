use anyhow::Result;

use atelia_core::compose::{compose_mailto, Enquiry};
use atelia_core::AppConfig;

pub fn run(config: &AppConfig, enquiry: &Enquiry, json: bool) -> Result<()> {
    let link = compose_mailto(&config.contact.email, enquiry)?;

    if json {
        let out = serde_json::json!({
            "recipient": config.contact.email,
            "subject": enquiry.mail_subject(),
            "body": enquiry.mail_body(),
            "link": link.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", link);
    }

    Ok(())
}
