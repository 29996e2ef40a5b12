use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches chassis numbers as printed on japanese export certificates,
    /// eg: NZE121-3123785 or a plain 17 char VIN
    pub static ref REGEX_IS_CHASSIS_NUMBER: Regex =
        Regex::new(r"^[A-Z0-9]+(-[A-Z0-9]+)?$").unwrap();
    //
    pub static ref REGEX_CONTAINS_NUMBER: Regex = Regex::new(r"[0-9]").unwrap();
    //
    pub static ref REGEX_CONTAINS_UPPERCASE_CHARACTER: Regex = Regex::new(r"[A-Z]").unwrap();
    //
    pub static ref REGEX_CONTAINS_LOWERCASE_CHARACTER: Regex = Regex::new(r"[a-z]").unwrap();
}
