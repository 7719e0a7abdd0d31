//! Parser for object declarations.
//!
//! ```text
//! object := identifier string? '{' entry* '}'
//! entry  := identifier '=' value ';'?
//!         | object
//! value  := number | string | 'true' | 'false' | 'autosize' | '@' string
//! ```
//!
//! An entry and a nested object both start with an identifier, so the token
//! after it decides which one is being parsed.

use nom::{
    Parser as _,
    branch::alt,
    combinator::{opt, peek},
};

use crate::{
    ast::{Entry, Node, ObjectDecl, ObjectNode, ValueLiteral},
    error::{ErrorHandlingParser, ParserError},
    token::{
        Token,
        layout,
        keyword::{autosize, false_, true_},
        literal::{number, string, string_contents},
        naming::identifier,
        symbol::{at, brace_left, brace_right, equals, semicolon},
    },
    util::{InputSpan, Result, join_spans},
};

/// Parses an object declaration, consuming the complete input.
///
/// Layout before the object is skipped.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, ObjectNode, ParserError> {
    let (rest, _) = layout.convert_errors().parse(input)?;
    let (rest, object) = parse(rest)?;

    if rest.fragment().is_empty() {
        Ok((rest, object))
    } else {
        Err(nom::Err::Failure(ParserError::unexpected_token(
            rest.location_offset(),
        )))
    }
}

/// Parses an object declaration.
pub fn parse(input: InputSpan<'_>) -> Result<'_, ObjectNode, ParserError> {
    let (rest, kind) = identifier
        .convert_error_to(ParserError::expect_object)
        .parse(input)?;
    object_after_kind(rest, &kind)
}

fn object_after_kind<'a>(
    input: InputSpan<'a>,
    kind: &Token<'a>,
) -> Result<'a, ObjectNode, ParserError> {
    let (rest, name) = opt(string).convert_errors().parse(input)?;

    if name.is_none() && !input.extra.allow_unnamed_objects() {
        return Err(nom::Err::Failure(ParserError::unnamed_object(kind)));
    }

    let (rest, open_brace) = brace_left
        .or_fail_with(ParserError::missing_open_brace(kind))
        .parse(rest)?;

    let (rest, entries) = entries(rest, &open_brace)?;

    let (rest, close_brace) = brace_right
        .or_fail_with(ParserError::from)
        .parse(rest)?;

    let kind_node = Node::new(kind.lexeme_span, kind.lexeme_str.to_string());
    let name_node = name.map(|name| {
        Node::new(
            name.lexeme_span,
            string_contents(name.lexeme_str).to_string(),
        )
    });

    let span = join_spans(&kind.lexeme_span, &close_brace.lexeme_span);
    let object = ObjectDecl::new(kind_node, name_node, entries);

    Ok((rest, Node::new(span, object)))
}

fn entries<'a>(
    mut input: InputSpan<'a>,
    open_brace: &Token<'a>,
) -> Result<'a, Vec<Entry>, ParserError> {
    let mut entries = Vec::new();

    loop {
        if brace_right(input).is_ok() {
            return Ok((input, entries));
        }

        let (rest, entry) = entry
            .or_fail_with(ParserError::unclosed_object(open_brace))
            .parse(input)?;

        entries.push(entry);
        input = rest;
    }
}

fn entry(input: InputSpan<'_>) -> Result<'_, Entry, ParserError> {
    let (rest, ident) = identifier.convert_errors().parse(input)?;

    if let Ok((rest, equals_token)) = equals(rest) {
        let (rest, value) = value
            .or_fail_with(ParserError::expect_value(&equals_token))
            .parse(rest)?;
        let (rest, _) = opt(semicolon).convert_errors().parse(rest)?;

        let name = Node::new(ident.lexeme_span, ident.lexeme_str.to_string());
        return Ok((rest, Entry::Field { name, value }));
    }

    // a nested object needs a name or a brace right after its kind
    let (_, _) = peek(alt((string, brace_left)))
        .or_fail_with(ParserError::missing_equals_or_brace(&ident))
        .parse(rest)?;

    let (rest, child) = object_after_kind(rest, &ident)?;
    Ok((rest, Entry::Child(child)))
}

/// Parses a field value.
fn value(input: InputSpan<'_>) -> Result<'_, Node<ValueLiteral>, ParserError> {
    alt((number_value, text_value, keyword_value, reference_value)).parse(input)
}

fn number_value(input: InputSpan<'_>) -> Result<'_, Node<ValueLiteral>, ParserError> {
    let (rest, token) = number.convert_errors().parse(input)?;

    let value = token
        .lexeme_str
        .parse::<f64>()
        .map_err(|_| nom::Err::Failure(ParserError::invalid_number(&token)))?;

    Ok((rest, Node::new(token.lexeme_span, ValueLiteral::Number(value))))
}

fn text_value(input: InputSpan<'_>) -> Result<'_, Node<ValueLiteral>, ParserError> {
    let (rest, token) = string.convert_errors().parse(input)?;
    let value = ValueLiteral::Text(string_contents(token.lexeme_str).to_string());
    Ok((rest, Node::new(token.lexeme_span, value)))
}

fn keyword_value(input: InputSpan<'_>) -> Result<'_, Node<ValueLiteral>, ParserError> {
    let true_value = true_.map(|token| (token, ValueLiteral::Boolean(true)));
    let false_value = false_.map(|token| (token, ValueLiteral::Boolean(false)));
    let autosize_value = autosize.map(|token| (token, ValueLiteral::Autosize));

    let (rest, (token, value)) = alt((true_value, false_value, autosize_value))
        .convert_errors()
        .parse(input)?;

    Ok((rest, Node::new(token.lexeme_span, value)))
}

fn reference_value(input: InputSpan<'_>) -> Result<'_, Node<ValueLiteral>, ParserError> {
    let (rest, at_token) = at.convert_errors().parse(input)?;
    let (rest, name) = string
        .or_fail_with(ParserError::missing_reference_name(&at_token))
        .parse(rest)?;

    let span = join_spans(&at_token.lexeme_span, &name.lexeme_span);
    let value = ValueLiteral::Reference(string_contents(name.lexeme_str).to_string());

    Ok((rest, Node::new(span, value)))
}
