use super::common::{CommentMatch, Start, StripError, find_comments_impl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseState {
    Normal,
    FirstSlash,
    LineComment,
    BlockComment,
    BlockCommentSawStar,
    StringDoubleQuotes,
    StringDoubleQuotesEscaped,
    StringSingleQuotes,
    StringSingleQuotesEscaped,
    TemplateLiteral,
    TemplateLiteralEscaped,
    End,
}
impl Start for ParseState {
    fn start() -> Self {
        ParseState::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseAction {
    Nothing,
    CommentMightStart,
    ConfirmLineComment,
    ConfirmBlockComment,
    DismissPotential,
    LineCommentEnd,
    BlockCommentEnd,
    Unterminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentState {
    NotIn,
    SawFirstSlash { slash_idx: usize },
    InLine { start_idx: usize },
    InBlock { start_idx: usize },
}
impl Start for CommentState {
    fn start() -> Self {
        CommentState::NotIn
    }
}

fn enter_literal(c: char) -> Option<ParseState> {
    match c {
        '"' => Some(ParseState::StringDoubleQuotes),
        '\'' => Some(ParseState::StringSingleQuotes),
        '`' => Some(ParseState::TemplateLiteral),
        _ => None,
    }
}

// Quoted strings end at a newline so a stray apostrophe in JSX text cannot
// swallow the rest of the file. Template literals may span lines.
pub(crate) fn c_state_transition(
    from: ParseState,
    current_char: Option<char>,
) -> (ParseState, ParseAction) {
    let Some(c) = current_char else {
        return match from {
            ParseState::FirstSlash => (ParseState::End, ParseAction::DismissPotential),
            ParseState::LineComment => (ParseState::End, ParseAction::LineCommentEnd),
            ParseState::BlockComment | ParseState::BlockCommentSawStar => {
                (ParseState::End, ParseAction::Unterminated)
            }
            _ => (ParseState::End, ParseAction::Nothing),
        };
    };

    match from {
        ParseState::Normal => match c {
            '/' => (ParseState::FirstSlash, ParseAction::CommentMightStart),
            _ => (
                enter_literal(c).unwrap_or(ParseState::Normal),
                ParseAction::Nothing,
            ),
        },
        ParseState::FirstSlash => match c {
            '/' => (ParseState::LineComment, ParseAction::ConfirmLineComment),
            '*' => (ParseState::BlockComment, ParseAction::ConfirmBlockComment),
            _ => (
                enter_literal(c).unwrap_or(ParseState::Normal),
                ParseAction::DismissPotential,
            ),
        },
        ParseState::LineComment => match c {
            '\n' => (ParseState::Normal, ParseAction::LineCommentEnd),
            _ => (ParseState::LineComment, ParseAction::Nothing),
        },
        ParseState::BlockComment => match c {
            '*' => (ParseState::BlockCommentSawStar, ParseAction::Nothing),
            _ => (ParseState::BlockComment, ParseAction::Nothing),
        },
        ParseState::BlockCommentSawStar => match c {
            '/' => (ParseState::Normal, ParseAction::BlockCommentEnd),
            '*' => (ParseState::BlockCommentSawStar, ParseAction::Nothing),
            _ => (ParseState::BlockComment, ParseAction::Nothing),
        },
        ParseState::StringDoubleQuotes => match c {
            '"' | '\n' => (ParseState::Normal, ParseAction::Nothing),
            '\\' => (ParseState::StringDoubleQuotesEscaped, ParseAction::Nothing),
            _ => (ParseState::StringDoubleQuotes, ParseAction::Nothing),
        },
        ParseState::StringDoubleQuotesEscaped => {
            (ParseState::StringDoubleQuotes, ParseAction::Nothing)
        }
        ParseState::StringSingleQuotes => match c {
            '\'' | '\n' => (ParseState::Normal, ParseAction::Nothing),
            '\\' => (ParseState::StringSingleQuotesEscaped, ParseAction::Nothing),
            _ => (ParseState::StringSingleQuotes, ParseAction::Nothing),
        },
        ParseState::StringSingleQuotesEscaped => {
            (ParseState::StringSingleQuotes, ParseAction::Nothing)
        }
        ParseState::TemplateLiteral => match c {
            '`' => (ParseState::Normal, ParseAction::Nothing),
            '\\' => (ParseState::TemplateLiteralEscaped, ParseAction::Nothing),
            _ => (ParseState::TemplateLiteral, ParseAction::Nothing),
        },
        ParseState::TemplateLiteralEscaped => (ParseState::TemplateLiteral, ParseAction::Nothing),
        ParseState::End => (ParseState::End, ParseAction::Nothing),
    }
}

pub(crate) fn c_do_action(
    action: ParseAction,
    comment_state: CommentState,
    position: usize,
    mut matches: Vec<CommentMatch>,
) -> Result<(CommentState, Vec<CommentMatch>), StripError> {
    let next_state = match (action, comment_state) {
        (ParseAction::Nothing, state) => state,
        (ParseAction::CommentMightStart, CommentState::NotIn) => CommentState::SawFirstSlash {
            slash_idx: position,
        },
        (ParseAction::ConfirmLineComment, CommentState::SawFirstSlash { slash_idx }) => {
            CommentState::InLine {
                start_idx: slash_idx,
            }
        }
        (ParseAction::ConfirmBlockComment, CommentState::SawFirstSlash { slash_idx }) => {
            CommentState::InBlock {
                start_idx: slash_idx,
            }
        }
        (ParseAction::LineCommentEnd, CommentState::InLine { start_idx }) => {
            matches.push(CommentMatch {
                from: start_idx,
                to: position,
            });
            CommentState::NotIn
        }
        (ParseAction::BlockCommentEnd, CommentState::InBlock { start_idx }) => {
            matches.push(CommentMatch {
                from: start_idx,
                to: position + 1,
            });
            CommentState::NotIn
        }
        (ParseAction::DismissPotential | ParseAction::Unterminated, _) => CommentState::NotIn,
        (action, state) => {
            tracing::debug!(?action, ?state, "unexpected comment scanner action");
            return Err("Comment scanner reached an inconsistent state");
        }
    };
    Ok((next_state, matches))
}

/// Finds `//` and `/* */` comments outside of string, character and template
/// literals.
pub fn find_comments(input: &str) -> Result<Vec<CommentMatch>, StripError> {
    find_comments_impl(input, c_state_transition, c_do_action)
}
