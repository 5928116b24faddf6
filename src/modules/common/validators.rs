use lazy_static::lazy_static;
use regex::Regex;

// Plate patterns are matched against trimmed, upper-cased input. Digit and
// whitespace classes are spelled out so they only match ASCII.
lazy_static! {
    /// Portuguese plates, current format (AA-00-AA)
    pub static ref REGEX_PT_CURRENT_PLATE: Regex =
        Regex::new(r"^[A-Z]{2}-[0-9]{2}-[A-Z]{2}$").unwrap();
    /// Portuguese plates, old format (00-AA-00)
    pub static ref REGEX_PT_OLD_PLATE: Regex =
        Regex::new(r"^[0-9]{2}-[A-Z]{2}-[0-9]{2}$").unwrap();
    /// Portuguese plates, very old format (AA-0000)
    pub static ref REGEX_PT_VERY_OLD_PLATE: Regex =
        Regex::new(r"^[A-Z]{2}-[0-9]{4}$").unwrap();
    //
    /// French plates issued since 2009 (AA-000-AA)
    pub static ref REGEX_FR_CURRENT_PLATE: Regex =
        Regex::new(r"^[A-Z]{2}-[0-9]{3}-[A-Z]{2}$").unwrap();
    /// French plates issued until 2009 (0000 AAA 00)
    pub static ref REGEX_FR_OLD_PLATE: Regex =
        Regex::new(r"^[0-9]{1,4}[\t\n\x0B\x0C\r ][A-Z]{1,3}[\t\n\x0B\x0C\r ][0-9]{2}$").unwrap();
    //
    /// Spanish plates issued since 2000 (0000 AAA or 0000-AAA)
    pub static ref REGEX_ES_CURRENT_PLATE: Regex =
        Regex::new(r"^[0-9]{4}[ -][A-Z]{3}$").unwrap();
    /// Spanish plates issued until 2000 (A 0000 AA or A-0000-AA)
    pub static ref REGEX_ES_OLD_PLATE: Regex =
        Regex::new(r"^[A-Z]{1,2}[ -][0-9]{4}[ -][A-Z]{1,2}$").unwrap();
    //
    /// A optionally signed decimal number using `.` as the decimal separator
    /// and no grouping, eg: `12`, `-12.5`, `.5`, `12.`
    pub static ref REGEX_IS_PLAIN_DECIMAL: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
    //
    /// A phone number, only digits and at least 9 of them
    pub static ref REGEX_PHONE: Regex =
        Regex::new(r"^[0-9]{9,}$").unwrap();
    /// A email address, eg: `joana.silva+vendas@frota.pt`
    pub static ref REGEX_EMAIL: Regex =
        Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$").unwrap();
}
