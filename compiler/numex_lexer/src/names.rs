//! nom grammar for variable names: `\w+` optionally followed by `[index]`.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::{pair, preceded},
    IResult,
};

/// The shape of a buffered word that looks like a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameShape<'a> {
    Plain(&'a str),
    Indexed {
        base: &'a str,
        index: &'a str,
        closed: bool,
    },
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn bracket_suffix(input: &str) -> IResult<&str, (&str, Option<char>)> {
    preceded(char('['), pair(take_while(|c: char| c != ']'), opt(char(']'))))(input)
}

fn name_shape(input: &str) -> IResult<&str, NameShape<'_>> {
    let (rest, base) = take_while1(is_word_char)(input)?;
    let (rest, suffix) = opt(bracket_suffix)(rest)?;
    let shape = match suffix {
        None => NameShape::Plain(base),
        Some((index, close)) => NameShape::Indexed {
            base,
            index,
            closed: close.is_some(),
        },
    };
    Ok((rest, shape))
}

/// Matches the whole word against the name grammar, or returns `None`.
pub(crate) fn parse_name(word: &str) -> Option<NameShape<'_>> {
    all_consuming(name_shape)(word)
        .ok()
        .map(|(_, shape)| shape)
}
