//! Score-string parsing.
//!
//! Results are typed in as free text: either `"2x1"` (the two scores joined
//! by a literal `x`) or `"2 1"` (joined by whitespace). Parsing is a pure
//! function with no side effects; a rejected string is an ordinary value the
//! front-end can show before asking again, not an exception to recover from.

use crate::error::{Error, Result};

/// Parses a raw score string into `(score_first, score_second)`.
///
/// If the string contains `x`, it is split on `x`; otherwise, if it contains
/// whitespace, it is split on whitespace; otherwise parsing fails. The split
/// must produce exactly two integer tokens (tokens are trimmed, so
/// `" 2 x 1 "` is fine). The first number maps to the first participant of
/// the current fixture, the second to the second.
///
/// Signed tokens are accepted: validation of score plausibility is not this
/// function's contract.
///
/// # Errors
/// [`Error::InvalidScoreFormat`] when no delimiter is present, when the
/// split yields anything other than two tokens, or when a token is not an
/// integer.
pub fn parse_score(input: &str) -> Result<(i32, i32)> {
    fn parse_token(token: &str, input: &str) -> Result<i32> {
        token
            .trim()
            .parse()
            .map_err(|_| Error::InvalidScoreFormat(input.to_string()))
    }

    let tokens: Vec<&str> = if input.contains('x') {
        input.split('x').collect()
    } else if input.contains(char::is_whitespace) {
        input.split_whitespace().collect()
    } else {
        return Err(Error::InvalidScoreFormat(input.to_string()));
    };

    match tokens.as_slice() {
        [first, second] => Ok((parse_token(first, input)?, parse_token(second, input)?)),
        _ => Err(Error::InvalidScoreFormat(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails(input: &str) {
        assert_eq!(
            parse_score(input).unwrap_err(),
            Error::InvalidScoreFormat(input.to_string()),
            "{input:?} should be rejected"
        );
    }

    #[test]
    fn x_separated() {
        assert_eq!(parse_score("2x1").unwrap(), (2, 1));
        assert_eq!(parse_score("0x0").unwrap(), (0, 0));
        assert_eq!(parse_score("10x3").unwrap(), (10, 3));
    }

    #[test]
    fn whitespace_separated() {
        assert_eq!(parse_score("2 1").unwrap(), (2, 1));
        assert_eq!(parse_score("2   1").unwrap(), (2, 1));
        assert_eq!(parse_score("2\t1").unwrap(), (2, 1));
    }

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(parse_score(" 2 x 1 ").unwrap(), (2, 1));
    }

    #[test]
    fn signed_scores_pass_through() {
        // plausibility is the caller's business, not the parser's
        assert_eq!(parse_score("2x-1").unwrap(), (2, -1));
    }

    #[test]
    fn rejects_missing_delimiter() {
        fails("21");
        fails("abc");
        fails("");
    }

    #[test]
    fn rejects_wrong_token_count() {
        fails("2x1x3");
        fails("2 1 3");
        fails("2x");
        fails("x1");
    }

    #[test]
    fn rejects_non_integer_tokens() {
        fails("axb");
        fails("2xb");
        fails("two 1");
    }
}
