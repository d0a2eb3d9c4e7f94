use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    error::{ErrorKind, ParseError},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::error::{Error, Result};

use super::{NbtPath, PathComponent};

pub(super) fn parse_path(input: &str) -> Result<NbtPath> {
    if input.is_empty() || input == "{}" {
        return Ok(NbtPath::root());
    }

    match all_consuming(components)(input) {
        Ok((_, components)) => Ok(NbtPath::from(components)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(Error::invalid_path(input, input.len() - e.input.len()))
        }
        Err(nom::Err::Incomplete(_)) => Err(Error::invalid_path(input, input.len())),
    }
}

fn components(input: &str) -> IResult<&str, Vec<PathComponent>> {
    let (input, first) = alt((index, key))(input)?;
    let (input, rest) = many0(alt((index, preceded(char('.'), key))))(input)?;

    let mut components = Vec::with_capacity(rest.len() + 1);
    components.push(first);
    components.extend(rest);
    Ok((input, components))
}

fn index(input: &str) -> IResult<&str, PathComponent> {
    map(
        delimited(
            char('['),
            map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
                s.parse::<i32>()
            }),
            char(']'),
        ),
        PathComponent::Index,
    )(input)
}

fn key(input: &str) -> IResult<&str, PathComponent> {
    map(
        alt((
            parse_escaped('"'),
            parse_escaped('\''),
            map(is_not("{}[].'\" "), String::from),
        )),
        PathComponent::Key,
    )(input)
}

// A quoted key, where a backslash makes the next character literal.
fn parse_escaped<'a, E: ParseError<&'a str>>(
    surround: char,
) -> impl FnMut(&'a str) -> IResult<&'a str, String, E> {
    move |input: &'a str| {
        let (rest, _) = char::<&'a str, E>(surround)(input)?;
        let mut owned = String::new();
        let mut chars = rest.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some((_, escaped)) => owned.push(escaped),
                    None => break,
                }
            } else if c == surround {
                return Ok((&rest[i + c.len_utf8()..], owned));
            } else {
                owned.push(c);
            }
        }
        Err(nom::Err::Error(E::from_error_kind(input, ErrorKind::Char)))
    }
}
