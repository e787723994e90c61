//! Template tokenization at compile-time.
//!
//! The grammar is small:
//!
//! ```text
//! template    := token*
//! token       := "{{" | "}}" | placeholder | text
//! placeholder := "{" name? "}"
//! text        := (any char except '{' and '}')+
//! ```
//!
//! Anything left over after `token*` is an unescaped brace or a malformed
//! placeholder and is reported against the template literal.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::{map, value},
    multi::many0,
    sequence::delimited,
};
use syn::LitStr;

use crate::constants::{MAX_TEMPLATE_LEN, MAX_TOKENS, TOKENS_INITIAL_CAPACITY};
use crate::types::{FormatToken, Placeholder};
use crate::validation::{builtin_kind, builtin_names, is_name_char};

/// Token borrowed from the template before validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

fn escaped_brace(input: &str) -> IResult<&str, RawToken<'_>> {
    alt((
        value(RawToken::Text("{"), tag("{{")),
        value(RawToken::Text("}"), tag("}}")),
    ))
    .parse(input)
}

fn placeholder(input: &str) -> IResult<&str, RawToken<'_>> {
    map(
        delimited(char('{'), take_while(is_name_char), char('}')),
        RawToken::Placeholder,
    )
    .parse(input)
}

fn text(input: &str) -> IResult<&str, RawToken<'_>> {
    map(take_while1(|c: char| c != '{' && c != '}'), RawToken::Text).parse(input)
}

fn raw_tokens(input: &str) -> IResult<&str, Vec<RawToken<'_>>> {
    many0(alt((escaped_brace, placeholder, text))).parse(input)
}

/// Tokenize a template into text runs and placeholders.
///
/// Adjacent text runs (including unescaped braces) are merged into one token.
/// Enforces `MAX_TEMPLATE_LEN` and `MAX_TOKENS`.
pub fn tokenize_template(
    template: &str,
    template_lit: &LitStr,
) -> syn::Result<Vec<FormatToken>> {
    if template.len() > MAX_TEMPLATE_LEN {
        return Err(syn::Error::new(
            template_lit.span(),
            format!(
                "Template too long ({} bytes). Maximum allowed: {} bytes.",
                template.len(),
                MAX_TEMPLATE_LEN
            ),
        ));
    }

    let (rest, raw) = raw_tokens(template).map_err(|e| {
        syn::Error::new(template_lit.span(), format!("Invalid template: {e}"))
    })?;

    if !rest.is_empty() {
        let offset = template.len() - rest.len();
        let message = if rest.starts_with('}') {
            format!("Unescaped '}}' at byte {offset} of the template. Use '}}}}' to escape it.")
        } else {
            format!(
                "Malformed placeholder at byte {offset} of the template. \
                 Expected one of {} or '{{}}' with a renderer argument; use '{{{{' for a literal brace.",
                builtin_names()
            )
        };
        return Err(syn::Error::new(template_lit.span(), message));
    }

    let mut tokens: Vec<FormatToken> = Vec::with_capacity(TOKENS_INITIAL_CAPACITY);
    let mut pending_text = String::new();

    let push_token =
        |tokens: &mut Vec<FormatToken>, token: FormatToken| -> syn::Result<()> {
            if tokens.len() >= MAX_TOKENS {
                return Err(syn::Error::new(
                    template_lit.span(),
                    format!(
                        "Too many tokens in template (would exceed {}). Maximum allowed: {}.",
                        tokens.len() + 1,
                        MAX_TOKENS
                    ),
                ));
            }
            tokens.push(token);
            Ok(())
        };

    for token in raw {
        match token {
            RawToken::Text(text) => pending_text.push_str(text),
            RawToken::Placeholder(name) => {
                if !pending_text.is_empty() {
                    let text = std::mem::take(&mut pending_text).into_boxed_str();
                    push_token(&mut tokens, FormatToken::Text(text))?;
                }

                let placeholder = if name.is_empty() {
                    Placeholder::Renderer
                } else if let Some(kind) = builtin_kind(name) {
                    Placeholder::Builtin(kind)
                } else {
                    return Err(syn::Error::new(
                        template_lit.span(),
                        format!(
                            "Unknown placeholder '{{{name}}}'. Expected one of {} \
                             or '{{}}' with a renderer argument.",
                            builtin_names()
                        ),
                    ));
                };
                push_token(&mut tokens, FormatToken::Placeholder(placeholder))?;
            }
        }
    }

    if !pending_text.is_empty() {
        push_token(&mut tokens, FormatToken::Text(pending_text.into_boxed_str()))?;
    }

    Ok(tokens)
}
