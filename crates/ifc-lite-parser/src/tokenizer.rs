// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STEP file tokenizer using nom combinators
//!
//! Parses STEP/IFC entity definitions and header records into tokens.

use ifc_lite_model::{AttributeValue, DecodedEntity, EntityId, IfcType};
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{opt, recognize},
    multi::separated_list0,
    sequence::{delimited, pair},
    IResult, Parser,
};

/// Raw token from STEP file (before conversion to AttributeValue)
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Entity reference (#123)
    EntityRef(u32),
    /// String value ('text'), still STEP-encoded
    String(&'a str),
    /// Integer value
    Integer(i64),
    /// Float value
    Float(f64),
    /// Enumeration (.VALUE.)
    Enum(&'a str),
    /// List of tokens
    List(Vec<Token<'a>>),
    /// Typed value like IFCLABEL('text')
    TypedValue(&'a str, Vec<Token<'a>>),
    /// Null value ($)
    Null,
    /// Derived value (*)
    Derived,
}

impl<'a> Token<'a> {
    /// Convert token to owned AttributeValue
    ///
    /// `.T.` and `.F.` become booleans; `.U.` stays an enumeration.
    pub fn to_attribute_value(&self) -> AttributeValue {
        match self {
            Token::EntityRef(id) => AttributeValue::EntityRef(EntityId(*id)),
            Token::String(s) => AttributeValue::String(decode_string(s)),
            Token::Integer(i) => AttributeValue::Integer(*i),
            Token::Float(f) => AttributeValue::Float(*f),
            Token::Enum("T") => AttributeValue::Bool(true),
            Token::Enum("F") => AttributeValue::Bool(false),
            Token::Enum(s) => AttributeValue::Enum((*s).to_string()),
            Token::List(items) => {
                AttributeValue::List(items.iter().map(|t| t.to_attribute_value()).collect())
            }
            Token::TypedValue(name, args) => AttributeValue::TypedValue(
                name.to_ascii_uppercase(),
                args.iter().map(|t| t.to_attribute_value()).collect(),
            ),
            Token::Null => AttributeValue::Null,
            Token::Derived => AttributeValue::Derived,
        }
    }
}

/// Decode the body of a STEP string literal
///
/// Handles doubled quotes and backslashes plus the `\X\hh`, `\X2\...\X0\`
/// and `\X4\...\X0\` code point escapes. Unknown escapes are kept verbatim.
pub fn decode_string(raw: &str) -> String {
    if !raw.contains('\'') && !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(c) = rest.chars().next() {
        if c == '\'' && rest.starts_with("''") {
            out.push('\'');
            rest = &rest[2..];
        } else if c == '\\' {
            if let Some(tail) = rest.strip_prefix("\\\\") {
                out.push('\\');
                rest = tail;
            } else if let Some((decoded, tail)) = decode_escape(rest) {
                out.push_str(&decoded);
                rest = tail;
            } else {
                out.push('\\');
                rest = &rest[1..];
            }
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

fn decode_escape(input: &str) -> Option<(String, &str)> {
    if let Some(tail) = input.strip_prefix("\\X\\") {
        let hex = tail.get(..2)?;
        let code = u32::from_str_radix(hex, 16).ok()?;
        return Some((char::from_u32(code)?.to_string(), &tail[2..]));
    }

    let (width, tail) = if let Some(tail) = input.strip_prefix("\\X2\\") {
        (4, tail)
    } else if let Some(tail) = input.strip_prefix("\\X4\\") {
        (8, tail)
    } else {
        return None;
    };
    let end = tail.find("\\X0\\")?;
    let digits = &tail[..end];
    if digits.len() % width != 0 {
        return None;
    }

    let mut decoded = String::new();
    let mut units: Vec<u16> = Vec::new();
    for chunk in digits.as_bytes().chunks(width) {
        let hex = std::str::from_utf8(chunk).ok()?;
        let code = u32::from_str_radix(hex, 16).ok()?;
        if width == 4 {
            units.push(code as u16);
        } else {
            decoded.push(char::from_u32(code)?);
        }
    }
    if width == 4 {
        decoded = String::from_utf16(&units).ok()?;
    }
    Some((decoded, &tail[end + 4..]))
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse whitespace
fn ws(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

/// Parse an entity reference (#123)
fn entity_ref(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('#')(input)?;
    let (rest, digits) = take_while1(|c: char| c.is_ascii_digit())(input)?;
    let id = digits.parse::<u32>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((rest, Token::EntityRef(id)))
}

/// Parse a STEP string ('text' with '' for escaped quotes)
fn step_string(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('\'')(input)?;

    let bytes = input.as_bytes();
    let mut end = 0;
    loop {
        match memchr::memchr(b'\'', &bytes[end..]) {
            Some(offset) => {
                end += offset;
                if bytes.get(end + 1) == Some(&b'\'') {
                    end += 2;
                    continue;
                }
                break;
            }
            None => {
                return Err(nom::Err::Error(nom::error::Error::new(
                    input,
                    nom::error::ErrorKind::Char,
                )))
            }
        }
    }

    Ok((&input[end + 1..], Token::String(&input[..end])))
}

/// Parse a number (integer or float)
fn number(input: &str) -> IResult<&str, Token> {
    let (rest, num_str) = recognize((
        opt(alt((char('-'), char('+')))),
        take_while1(|c: char| c.is_ascii_digit()),
        opt(pair(char('.'), take_while(|c: char| c.is_ascii_digit()))),
        opt((
            alt((char('e'), char('E'))),
            opt(alt((char('+'), char('-')))),
            take_while1(|c: char| c.is_ascii_digit()),
        )),
    ))
    .parse(input)?;

    let invalid = || nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float));
    let digits = num_str.strip_prefix('+').unwrap_or(num_str);

    if digits.contains(['.', 'e', 'E']) {
        let f: f64 = lexical_core::parse(digits.as_bytes()).map_err(|_| invalid())?;
        Ok((rest, Token::Float(f)))
    } else {
        let i: i64 = lexical_core::parse(digits.as_bytes()).map_err(|_| invalid())?;
        Ok((rest, Token::Integer(i)))
    }
}

/// Parse an enumeration (.VALUE.)
fn enumeration(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('.')(input)?;
    let (input, name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = char('.')(input)?;
    Ok((input, Token::Enum(name)))
}

/// Parse null ($)
fn null_value(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('$')(input)?;
    Ok((input, Token::Null))
}

/// Parse derived (*)
fn derived_value(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('*')(input)?;
    Ok((input, Token::Derived))
}

/// Parse a parenthesised, comma separated token list
fn token_list(input: &str) -> IResult<&str, Vec<Token>> {
    delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), token),
        pair(ws, char(')')),
    )
    .parse(input)
}

/// Parse a list of tokens
fn list(input: &str) -> IResult<&str, Token> {
    let (input, items) = token_list(input)?;
    Ok((input, Token::List(items)))
}

/// Parse a typed value like IFCLABEL('text')
fn typed_value(input: &str) -> IResult<&str, Token> {
    let (input, type_name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = ws(input)?;
    let (input, args) = token_list(input)?;
    Ok((input, Token::TypedValue(type_name, args)))
}

/// Parse any token
fn token(input: &str) -> IResult<&str, Token> {
    alt((
        entity_ref,
        step_string,
        null_value,
        derived_value,
        enumeration,
        number,
        list,
        typed_value,
    ))
    .parse(input)
}

// ============================================================================
// Entity Parsing
// ============================================================================

/// Parse a complete entity definition
///
/// Format: `#123=IFCWALL(attr1,attr2,...);`
pub fn parse_entity(input: &str) -> Result<DecodedEntity, String> {
    let input = input.trim_start();

    let (input, _) = char::<&str, nom::error::Error<&str>>('#')
        .parse(input)
        .map_err(|_| "Expected # at start of entity")?;

    let (input, id_str) = take_while1::<_, &str, nom::error::Error<&str>>(|c: char| {
        c.is_ascii_digit()
    })
    .parse(input)
    .map_err(|_| "Expected entity ID")?;

    let id: u32 = id_str.parse().map_err(|_| "Invalid entity ID")?;

    let (input, _) = (ws, char('='), ws)
        .parse(input)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| "Expected = after entity ID")?;

    let (input, type_name) =
        take_while1::<_, &str, nom::error::Error<&str>>(|c: char| c.is_alphanumeric() || c == '_')
            .parse(input)
            .map_err(|_| "Expected type name")?;

    let (input, _) = ws(input).unwrap_or((input, ()));

    let (_, tokens) =
        token_list(input).map_err(|e| format!("Failed to parse attributes: {:?}", e))?;

    Ok(DecodedEntity {
        id: EntityId(id),
        ifc_type: IfcType::parse(type_name),
        attributes: tokens.iter().map(|t| t.to_attribute_value()).collect(),
    })
}

/// Parse entity from raw bytes at given position
pub fn parse_entity_at(content: &str, start: usize, end: usize) -> Result<DecodedEntity, String> {
    let slice = content
        .get(start..end)
        .ok_or_else(|| format!("Entity bounds {}..{} out of range", start, end))?;
    parse_entity(slice)
}

/// Parse the records of a HEADER section
///
/// Each record has the form `NAME(arg, ...);`. Returns the upper-cased record
/// names with their decoded arguments, stopping at the first malformed record.
pub fn parse_header_records(section: &str) -> Vec<(String, Vec<AttributeValue>)> {
    let mut records = Vec::new();
    let mut rest = section;
    loop {
        let Ok((after_ws, _)) = ws(rest) else { break };
        if after_ws.is_empty() {
            break;
        }
        let Ok((after, Token::TypedValue(name, args))) = typed_value(after_ws) else {
            break;
        };
        records.push((
            name.to_ascii_uppercase(),
            args.iter().map(|t| t.to_attribute_value()).collect(),
        ));
        let Ok((after, _)) = (ws, char::<&str, nom::error::Error<&str>>(';')).parse(after) else {
            break;
        };
        rest = after;
    }
    records
}
