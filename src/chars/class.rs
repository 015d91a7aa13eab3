use super::satisfy::Satisfy;

/// Parser for one character of a named class
pub type CharClass = Satisfy<fn(char) -> bool>;

fn class(predicate: fn(char) -> bool, description: &'static str) -> CharClass {
    Satisfy::new(predicate, description)
}

/// Unicode whitespace
pub fn whitespace() -> CharClass {
    class(|c| c.is_whitespace(), "whitespace")
}

/// Decimal digit `0`-`9`
pub fn digit() -> CharClass {
    class(|c| c.is_ascii_digit(), "digit")
}

pub fn letter() -> CharClass {
    class(|c| c.is_alphabetic(), "letter")
}

pub fn letter_or_digit() -> CharClass {
    class(|c| c.is_alphanumeric(), "letter or digit")
}

pub fn lower() -> CharClass {
    class(|c| c.is_lowercase(), "lowercase letter")
}

pub fn upper() -> CharClass {
    class(|c| c.is_uppercase(), "uppercase letter")
}

/// Any Unicode numeric character, including digits of other scripts
pub fn numeric() -> CharClass {
    class(|c| c.is_numeric(), "numeric character")
}
