use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// A lowercase classification label, e.g. `push_pull_legs` or `hypertrophy`.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(forward)]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: &str) -> Result<Self, TagError> {
        let trimmed_tag = tag.trim();

        if trimmed_tag.is_empty() {
            return Err(TagError::Empty);
        }

        let len = trimmed_tag.len();

        if len > 32 {
            return Err(TagError::TooLong(len));
        }

        if !trimmed_tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(TagError::InvalidCharacter(trimmed_tag.to_string()));
        }

        Ok(Tag(trimmed_tag.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TagError {
    #[error("Tag must not be empty")]
    Empty,
    #[error("Tag must be 32 characters or fewer ({0} > 32)")]
    TooLong(usize),
    #[error("Tag must consist of lowercase letters, digits and underscores (`{0}`)")]
    InvalidCharacter(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Push A", Ok(Name("Push A".to_string())))]
    #[case("  Pull B  ", Ok(Name("Pull B".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("push_pull_legs", Ok(Tag("push_pull_legs".to_string())))]
    #[case(" deload ", Ok(Tag("deload".to_string())))]
    #[case("6_days", Ok(Tag("6_days".to_string())))]
    #[case("", Err(TagError::Empty))]
    #[case("Push", Err(TagError::InvalidCharacter("Push".to_string())))]
    #[case("push pull", Err(TagError::InvalidCharacter("push pull".to_string())))]
    #[case(
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        Err(TagError::TooLong(33))
    )]
    fn test_tag_new(#[case] tag: &str, #[case] expected: Result<Tag, TagError>) {
        assert_eq!(Tag::new(tag), expected);
    }
}
