//! Lexical analyzer for captured page markup.
//!
//! The lexer converts serialized HTML/XML into a flat stream of [`Token`]s.
//! It is deliberately forgiving: page captures are rarely well-formed XML, so
//! a `<` that does not start a recognizable construct is kept as text and
//! [`tokenize`] never fails.
//!
//! Raw-text elements (`script`, `style`, `textarea`, `title`) are handled
//! here: everything up to their closing tag becomes a single text token.

use winnow::{
    Parser as _,
    ascii::multispace0,
    combinator::{alt, delimited, opt, preceded, repeat},
    error::ModalResult,
    token::{one_of, take_till, take_until, take_while},
};

type Input<'src> = &'src str;

/// Elements whose content is not markup.
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

/// A start tag with its attributes in source order.
///
/// Attribute values are borrowed verbatim, without quotes and without
/// entity decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartTag<'src> {
    pub name: &'src str,
    pub attributes: Vec<(&'src str, Option<&'src str>)>,
    pub self_closing: bool,
}

/// A lexical unit of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    Text(&'src str),
    /// Comment body, without the `<!--`/`-->` delimiters.
    Comment(&'src str),
    /// Declarations, processing instructions and CDATA sections, kept as written.
    Verbatim(&'src str),
    StartTag(StartTag<'src>),
    EndTag(&'src str),
}

fn text<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    take_till(1.., '<').map(Token::Text).parse_next(input)
}

fn comment<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    delimited("<!--", take_until(0.., "-->"), "-->")
        .map(Token::Comment)
        .parse_next(input)
}

fn cdata<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    ("<![CDATA[", take_until(0.., "]]>"), "]]>")
        .take()
        .map(Token::Verbatim)
        .parse_next(input)
}

fn declaration<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    ("<!", take_till(0.., '>'), '>')
        .take()
        .map(Token::Verbatim)
        .parse_next(input)
}

fn instruction<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    ("<?", take_until(0.., "?>"), "?>")
        .take()
        .map(Token::Verbatim)
        .parse_next(input)
}

/// Element name: a letter followed by name characters (including `:` for
/// namespaced names such as `svg:g`).
fn tag_name<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
        }),
    )
        .take()
        .parse_next(input)
}

fn attribute_name<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, '/' | '>' | '<' | '=' | '"' | '\'')
    })
    .parse_next(input)
}

fn attribute_value<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    alt((
        delimited('"', take_till(0.., '"'), '"'),
        delimited('\'', take_till(0.., '\''), '\''),
        take_while(1.., |c: char| !c.is_whitespace() && c != '>'),
    ))
    .parse_next(input)
}

fn attribute<'src>(input: &mut Input<'src>) -> ModalResult<(&'src str, Option<&'src str>)> {
    (
        attribute_name,
        opt(preceded((multispace0, '=', multispace0), attribute_value)),
    )
        .parse_next(input)
}

fn start_tag<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    (
        preceded('<', tag_name),
        repeat(0.., preceded(multispace0, attribute)),
        preceded(multispace0, opt('/')),
        '>',
    )
        .map(
            |(name, attributes, slash, _): (
                &'src str,
                Vec<(&'src str, Option<&'src str>)>,
                Option<char>,
                char,
            )| {
                Token::StartTag(StartTag {
                    name,
                    attributes,
                    self_closing: slash.is_some(),
                })
            },
        )
        .parse_next(input)
}

fn end_tag<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    ("</", tag_name, take_till(0.., '>'), '>')
        .map(|(_, name, _, _): (&'src str, &'src str, &'src str, char)| Token::EndTag(name))
        .parse_next(input)
}

fn markup_token<'src>(input: &mut Input<'src>) -> ModalResult<Token<'src>> {
    alt((
        text,
        comment,
        cdata,
        declaration,
        instruction,
        end_tag,
        start_tag,
    ))
    .parse_next(input)
}

pub(crate) fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|raw| raw.eq_ignore_ascii_case(name))
}

/// Splits `input` at the closing tag of the raw-text element `name`.
///
/// The closing tag is matched ASCII case-insensitively. Without a closing
/// tag the rest of the input is content.
fn split_raw_text<'src>(input: &'src str, name: &str) -> (&'src str, &'src str) {
    let close = input.match_indices("</").map(|(start, _)| start).find(|start| {
        input
            .get(start + 2..start + 2 + name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
    });

    match close {
        Some(end) => input.split_at(end),
        None => (input, ""),
    }
}

/// Tokenizes `source` into markup tokens.
///
/// Never fails: unrecognized `<` characters are emitted as one-character
/// text tokens, which the document builder merges with neighbouring text.
pub(crate) fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut input: Input<'_> = source;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let checkpoint = input;
        match markup_token.parse_next(&mut input) {
            Ok(Token::StartTag(tag)) => {
                let raw_text = !tag.self_closing && is_raw_text_element(tag.name);
                let name = tag.name;
                tokens.push(Token::StartTag(tag));

                if raw_text {
                    let (content, rest) = split_raw_text(input, name);
                    if !content.is_empty() {
                        tokens.push(Token::Text(content));
                    }
                    input = rest;
                }
            }
            Ok(token) => tokens.push(token),
            Err(_) => {
                let (lone, rest) = checkpoint.split_at(1);
                tokens.push(Token::Text(lone));
                input = rest;
            }
        }
    }

    tokens
}
