//! Macro argument parsing structures.

use syn::{
    Expr, Ident, LitInt, LitStr, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Comma,
};

use crate::types::Family;
use crate::validation::family;

/// spec! arguments: template, renderers
pub struct SpecArgs {
    pub template: LitStr,
    pub renderers: Punctuated<Expr, Comma>,
}

impl Parse for SpecArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let template: LitStr = input.parse()?;

        let renderers = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(Self {
            template,
            renderers,
        })
    }
}

/// arity_family! arguments: family, max arity
pub struct ArityArgs {
    pub family: Family,
    pub max: usize,
    pub max_lit: LitInt,
}

impl Parse for ArityArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let family = family(&name.to_string()).ok_or_else(|| {
            syn::Error::new(
                name.span(),
                format!("Unknown arity family '{name}'. Expected sprintf, uncurry or tuple"),
            )
        })?;
        input.parse::<Token![,]>()?;
        let max_lit: LitInt = input.parse()?;
        let max = max_lit.base10_parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(Self {
            family,
            max,
            max_lit,
        })
    }
}
