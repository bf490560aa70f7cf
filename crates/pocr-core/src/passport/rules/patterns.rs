//! Common regex patterns for passport label extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Accepted literal date forms: `YYYY-MM-DD`, `DD-MM-YYYY`, `DD/MM/YYYY`.
const DATE_VALUE: &str = r"(\d{4}-\d{2}-\d{2}|\d{2}-\d{2}-\d{4}|\d{2}/\d{2}/\d{4})";

fn labeled_date(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){}[:\s]*{}", label, DATE_VALUE)).unwrap()
}

lazy_static! {
    // Document numbers
    pub static ref PASSPORT_NO: Regex = Regex::new(
        r"(?i)Passport\s*No[:\s]*([A-Z0-9<-]{6,9})"
    ).unwrap();

    pub static ref OLD_PASSPORT_NO: Regex = Regex::new(
        r"(?i)Old\s*Passport\s*No[:\s]*([A-Z0-9-]+)"
    ).unwrap();

    pub static ref FILE_NO: Regex = Regex::new(
        r"(?i)File\s*No[:\s]*([A-Z0-9-]+)"
    ).unwrap();

    pub static ref CLIENT_ID: Regex = Regex::new(
        r"(?i)Client\s*ID[:\s]*([A-Za-z0-9_-]+)"
    ).unwrap();

    // Names
    pub static ref GIVEN_NAME: Regex = Regex::new(
        r"(?i)Given\s*Name[s]?:\s*([A-Z\s]+)"
    ).unwrap();

    pub static ref SURNAME: Regex = Regex::new(
        r"(?i)Surname[:\s]*([A-Z\s]+)"
    ).unwrap();

    pub static ref FATHER_NAME: Regex = Regex::new(
        r"(?i)Father(?:'s)?\s*Name[:\s]*([A-Z\s]+)"
    ).unwrap();

    pub static ref MOTHER_NAME: Regex = Regex::new(
        r"(?i)Mother(?:'s)?\s*Name[:\s]*([A-Z\s]+)"
    ).unwrap();

    pub static ref SPOUSE_NAME: Regex = Regex::new(
        r"(?i)Spouse(?:'s)?\s*Name[:\s]*([A-Z\s]+)"
    ).unwrap();

    pub static ref NATIONALITY: Regex = Regex::new(
        r"(?i)Nationality[:\s]*([A-Z\s]+)"
    ).unwrap();

    // Places
    pub static ref PLACE_OF_ISSUE: Regex = Regex::new(
        r"(?i)Place\s*of\s*Issue[:\s]*([A-Z0-9,\s-]+)"
    ).unwrap();

    pub static ref OLD_PLACE_OF_ISSUE: Regex = Regex::new(
        r"(?i)Old\s*Place\s*of\s*Issue[:\s]*([A-Z0-9,\s-]+)"
    ).unwrap();

    pub static ref PLACE_OF_BIRTH: Regex = Regex::new(
        r"(?i)Place\s*of\s*Birth[:\s]*([A-Z0-9,\s-]+)"
    ).unwrap();

    pub static ref ADDRESS: Regex = Regex::new(
        r"(?i)Address[:\s]*([A-Z0-9,\s.-]+)"
    ).unwrap();

    // Postal index number
    pub static ref PIN_LABELED: Regex = Regex::new(
        r"(?i)PIN[:\s]*(\d{5,6})"
    ).unwrap();

    pub static ref PIN_STANDALONE: Regex = Regex::new(
        r"\b(\d{6})\b"
    ).unwrap();

    // Labeled dates
    pub static ref ISSUE_DATE: Regex = labeled_date("doi");

    pub static ref OLD_ISSUE_DATE: Regex = labeled_date("old doi");

    pub static ref BIRTH_DATE: Regex = labeled_date(r"(?:Date\s*of\s*Birth|DOB)");

    pub static ref EXPIRY_DATE: Regex = labeled_date(r"(?:Date\s*of\s*Expiry|DOE)");
}
