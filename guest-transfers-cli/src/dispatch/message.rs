//! Confirmation message text and deep link construction

use crate::config::Config;
use crate::guests::{date_cell, time_cell, GuestRecord};

/// Confirmation text for one guest, with real newlines
pub fn build_message(guest: &GuestRecord, config: &Config) -> String {
    let name = guest.text("Name");
    let from = guest.text("From");
    let to = guest.text("To");
    let date = guest.get("Date").map(date_cell).unwrap_or_default();
    let time = guest.get("Time").map(time_cell).unwrap_or_default();
    let company = &config.company_name;
    let website = &config.company_website;

    format!(
        "Hello {name}, Thanks for choosing {company} ({website}) as a transfer provider.\n\n\
         Your transfer from {from} to {to} on {date} at {time} is confirmed.\n\n\
         Your driver will be waiting for you outside the exit door holding a sign with your name OR a sign of {company}.\n\
         If you have any questions, write me anytime. If you can't find the driver, contact us immediately.\n\n\
         We also do all tours and trips inside Egypt.\n\
         Have a safe flight!\n\
         {website}\n\
         Thank you!"
    )
}

/// `https://<host>/send?phone=<digits>&text=<percent-encoded message>`
pub fn build_link(host: &str, phone: &str, message: &str) -> String {
    format!(
        "https://{}/send?phone={}&text={}",
        host,
        phone,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guest() -> GuestRecord {
        GuestRecord::from_row(
            json!({
                "Name": "Ana Silva",
                "Phone": "+20 100-123-4567",
                "From": "Cairo Airport",
                "To": "Giza Hotel",
                "Date": 45726,
                "Time": 0.5
            })
            .as_object()
            .cloned()
            .unwrap(),
        )
    }

    #[test]
    fn test_message_interpolates_booking() {
        let message = build_message(&guest(), &Config::default());
        assert!(message.starts_with("Hello Ana Silva, Thanks for choosing Egypt Travelist"));
        assert!(message.contains(
            "Your transfer from Cairo Airport to Giza Hotel on Monday, March 10, 2025 at 12:00 is confirmed."
        ));
        assert!(message.ends_with("www.egypttravelist.com\nThank you!"));
    }

    #[test]
    fn test_message_with_missing_fields() {
        let guest = GuestRecord::from_row(json!({"Name": "Ben"}).as_object().cloned().unwrap());
        let message = build_message(&guest, &Config::default());
        assert!(message.contains("Your transfer from  to  on  at  is confirmed."));
    }

    #[test]
    fn test_link_encodes_newlines() {
        let link = build_link("web.whatsapp.com", "201001234567", "Hi Ana,\n\nSee you & bye");
        assert_eq!(
            link,
            "https://web.whatsapp.com/send?phone=201001234567&text=Hi%20Ana%2C%0A%0ASee%20you%20%26%20bye"
        );
    }
}
