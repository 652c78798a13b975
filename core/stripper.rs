pub mod c_family;
pub mod common;
pub mod pattern;

pub use common::{CommentMatch, StripError, remove_matches};

/// How comments are located in a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StripStrategy {
    /// Regular-expression substitution, blind to string literals.
    #[default]
    Pattern,
    /// Character scanner that leaves string, character and template
    /// literals untouched. Block comments are recognised before line
    /// comments, so a `//` inside `/* */` does not cut the block short as it
    /// does with [`StripStrategy::Pattern`].
    LiteralAware,
}

pub fn strip_text(content: &str, strategy: StripStrategy) -> Result<String, StripError> {
    match strategy {
        StripStrategy::Pattern => Ok(pattern::strip(content)),
        StripStrategy::LiteralAware => {
            let matches = c_family::find_comments(content)?;
            remove_matches(content.to_string(), matches)
        }
    }
}
