use std::str::FromStr;

use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::char,
    sequence::{delimited, terminated},
};

fn until_closing_bracket(input: &str) -> IResult<&str, &str> {
    terminated(take_until("]"), char(']'))(input)
}

pub(super) fn parenthesized(input: &str) -> IResult<&str, &str> {
    delimited(char('('), take_until(")"), char(')'))(input)
}

/// Value of a response code such as `[UIDNEXT 4392]`, given the text right
/// after the code name. `None` if the code is never closed.
pub(super) fn response_code_value(input: &str) -> Option<&str> {
    until_closing_bracket(input).ok().map(|(_, value)| value)
}

/// Tokens of a parenthesized, space separated list such as
/// `(\Seen \Answered)`. An empty list yields no tokens.
pub(super) fn flag_list(input: &str) -> Option<Vec<&str>> {
    parenthesized(input)
        .ok()
        .map(|(_, list)| list.split(' ').filter(|flag| !flag.is_empty()).collect())
}

pub(super) fn number<T: FromStr>(token: &str) -> Option<T> {
    token.trim().parse().ok()
}

/// Strips the surrounding quotes of a quoted string and resolves its `\"`
/// and `\\` escapes. Anything else is returned as is.
pub(super) fn unquote(token: &str) -> String {
    let Some(inner) = token
        .strip_prefix('"')
        .and_then(|token| token.strip_suffix('"'))
    else {
        return token.to_string();
    };
    let mut unquoted = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                unquoted.push(escaped);
                continue;
            }
        }
        unquoted.push(c);
    }
    unquoted
}
