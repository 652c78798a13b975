pub type StripError = &'static str;

/// Byte range `from..to` of a comment inside the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMatch {
    pub from: usize,
    pub to: usize,
}

pub trait Start: Sized {
    fn start() -> Self;
}

/// Drives a character state machine over `input`.
///
/// `state_transition` maps the current parse state and character to the next
/// state plus an action; `do_action` folds that action into the comment
/// tracking state and the list of matches found so far. A final `None`
/// character is fed once at the end of input so open comments can be closed
/// or dismissed.
pub fn find_comments_impl<ParseState, ParseAction, CommentState, StateTransitionFn, DoActionFn>(
    input: &str,
    state_transition: StateTransitionFn,
    do_action: DoActionFn,
) -> Result<Vec<CommentMatch>, StripError>
where
    ParseState: Start + Copy + Eq,
    ParseAction: Copy + Eq,
    CommentState: Start + Copy + Eq,
    StateTransitionFn: Fn(ParseState, Option<char>) -> (ParseState, ParseAction),
    DoActionFn: Fn(
        ParseAction,
        CommentState,
        usize,
        Vec<CommentMatch>,
    ) -> Result<(CommentState, Vec<CommentMatch>), StripError>,
{
    let mut matches = Vec::new();
    let mut current_parse_state = ParseState::start();
    let mut current_comment_state = CommentState::start();
    let mut char_indices = input.char_indices();

    loop {
        let char_info = char_indices.next();
        let current_char = char_info.map(|(_, c)| c);
        let position = char_info.map_or(input.len(), |(idx, _)| idx);

        let (next_parse_state, action) = state_transition(current_parse_state, current_char);
        let (next_comment_state, next_matches) =
            do_action(action, current_comment_state, position, matches)?;

        current_parse_state = next_parse_state;
        current_comment_state = next_comment_state;
        matches = next_matches;

        if current_char.is_none() {
            break;
        }
    }
    Ok(matches)
}

/// Deletes every matched range from `input`.
///
/// Ranges must lie on char boundaries and must not overlap once sorted.
pub fn remove_matches(
    mut input: String,
    mut matches: Vec<CommentMatch>,
) -> Result<String, StripError> {
    if matches.is_empty() {
        return Ok(input);
    }
    check_matches_bounds(&input, &matches)?;

    matches.sort_by_key(|m| m.from);
    check_sorted_matches_overlap(&matches)?;

    for m in matches.into_iter().rev() {
        input.drain(m.from..m.to);
    }
    Ok(input)
}

fn check_matches_bounds(input: &str, matches: &[CommentMatch]) -> Result<(), StripError> {
    let len = input.len();
    for m in matches {
        if m.from > len || m.to > len || m.from > m.to {
            tracing::debug!(from = m.from, to = m.to, len, "comment match out of bounds");
            return Err("Match indices out of bounds or invalid range (from > to)");
        }
        if !input.is_char_boundary(m.from) || !input.is_char_boundary(m.to) {
            tracing::debug!(from = m.from, to = m.to, "comment match splits a character");
            return Err("Match indices do not fall on character boundaries");
        }
    }
    Ok(())
}

fn check_sorted_matches_overlap(matches: &[CommentMatch]) -> Result<(), StripError> {
    let mut last_to = 0;
    for m in matches {
        if m.from < last_to {
            tracing::debug!(from = m.from, last_to, "comment matches overlap");
            return Err("Matches are overlapping");
        }
        last_to = m.to;
    }
    Ok(())
}
