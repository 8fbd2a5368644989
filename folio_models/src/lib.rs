use macros::nutype_string;

pub mod blog;
pub mod contact;
mod macros;

nutype_string!(SearchTerm(validate(len_char_max = 256),));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_max_length() {
        assert!(SearchTerm::try_new("a".repeat(256)).is_ok());
        assert!(SearchTerm::try_new("a".repeat(257)).is_err());
    }
}
