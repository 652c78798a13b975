use regex::Regex;
use std::sync::LazyLock;

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*").expect("valid line comment regex"));

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"));

/// Removes `//` comments up to the end of each line, then the shortest
/// `/* ... */` spans of what remains.
///
/// Delimiters inside string or character literals are not recognised as such:
/// `"http://host"` loses everything from `//` onwards.
pub fn strip(input: &str) -> String {
    let without_line_comments = LINE_COMMENT.replace_all(input, "");
    BLOCK_COMMENT
        .replace_all(&without_line_comments, "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_delimiters_is_unchanged() {
        let input = "public class A {\n    int x = 3 / 2 * 4;\n}\n";
        assert_eq!(strip(input), input);
    }

    #[test]
    fn test_line_comment_keeps_text_before_opener() {
        assert_eq!(strip("let a = 1; // one\nlet b = 2;"), "let a = 1; \nlet b = 2;");
        assert_eq!(strip("// whole line\n"), "\n");
    }

    #[test]
    fn test_block_comment_across_lines() {
        assert_eq!(strip("a/*x\ny*/b"), "ab");
    }

    #[test]
    fn test_block_comments_are_shortest_and_not_nested() {
        assert_eq!(strip("a/* 1 */b/* 2 */c"), "abc");
        assert_eq!(strip("a/* outer /* inner */ tail */b"), "a tail */b");
    }

    #[test]
    fn test_unterminated_block_comment_is_kept() {
        assert_eq!(strip("int a; /* open\nint b;"), "int a; /* open\nint b;");
    }

    #[test]
    fn test_line_comments_are_removed_before_block_comments() {
        // The line pass eats the block terminator, leaving the opener behind.
        assert_eq!(strip("/* a // b */\nc"), "/* a \nc");
    }

    #[test]
    fn test_delimiters_inside_literals_are_not_protected() {
        assert_eq!(
            strip("fetch('http://localhost:8080');\n"),
            "fetch('http:\n"
        );
    }

    #[test]
    fn test_mixed_comments_scenario() {
        let input = "int x = 1; // init\n/* block\ncomment */\nint y = 2;";
        assert_eq!(strip(input), "int x = 1; \n\nint y = 2;");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let input = "/** Doc */\nclass A { // trailing\n  /* inline */ int b; }\n";
        let once = strip(input);
        assert_eq!(strip(&once), once);
    }

    #[test]
    fn test_crlf_line_comment_consumes_carriage_return() {
        assert_eq!(strip("a; // c\r\nb;"), "a; \nb;");
    }
}
