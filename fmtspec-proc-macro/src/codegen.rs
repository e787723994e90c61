//! Code generation for the fmtspec macros.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Expr, Ident, LitStr, spanned::Spanned};

use crate::tokenization::tokenize_template;
use crate::types::{Family, FormatToken, Placeholder, PlaceholderKind};

// ============================================================================
// spec! Templates
// ============================================================================

/// Generate the combinator tree for a template.
///
/// Pieces are folded left to right, `cat(cat(a, b), c)`, so arguments are
/// consumed in template order. Errors on unknown placeholders or when the
/// number of renderer arguments differs from the number of `{}` placeholders.
pub fn generate_spec(template_lit: &LitStr, renderers: &[&Expr]) -> syn::Result<TokenStream> {
    let template = template_lit.value();
    let tokens = tokenize_template(&template, template_lit)?;

    let mut pieces: Vec<TokenStream> = Vec::with_capacity(tokens.len());
    let mut renderer_index: usize = 0;

    for token in &tokens {
        match token {
            FormatToken::Text(text) => {
                let lit_text = LitStr::new(text, Span::call_site());
                pieces.push(quote! { ::fmtspec::literal(#lit_text) });
            }
            FormatToken::Placeholder(Placeholder::Builtin(kind)) => {
                pieces.push(generate_builtin(*kind));
            }
            FormatToken::Placeholder(Placeholder::Renderer) => {
                let Some(renderer) = renderers.get(renderer_index) else {
                    return Err(make_missing_renderer_error(renderer_index + 1, template_lit));
                };
                renderer_index += 1;
                pieces.push(quote! { ::fmtspec::custom(#renderer) });
            }
        }
    }

    if let Some(unused) = renderers.get(renderer_index) {
        let unused_count = renderers.len() - renderer_index;
        return Err(syn::Error::new(
            unused.span(),
            format!(
                "Too many arguments: {unused_count} unused renderer(s) provided. \
                 The template only has {renderer_index} '{{}}' placeholder(s)"
            ),
        ));
    }

    let mut pieces = pieces.into_iter();
    let Some(first) = pieces.next() else {
        return Ok(quote! { ::fmtspec::literal("") });
    };
    Ok(pieces.fold(first, |left, right| quote! { ::fmtspec::cat(#left, #right) }))
}

fn generate_builtin(kind: PlaceholderKind) -> TokenStream {
    match kind {
        PlaceholderKind::Bool => quote! { ::fmtspec::boolean() },
        PlaceholderKind::Int => quote! { ::fmtspec::int() },
        PlaceholderKind::Float => quote! { ::fmtspec::float() },
        PlaceholderKind::String => quote! { ::fmtspec::string() },
        PlaceholderKind::Display => quote! { ::fmtspec::display() },
    }
}

/// Create error for a `{}` placeholder without a renderer argument.
fn make_missing_renderer_error(position: usize, template_lit: &LitStr) -> syn::Error {
    syn::Error::new(
        template_lit.span(),
        format!(
            "Renderer placeholder '{{}}' number {position} has no corresponding argument. \
             Pass a renderer (e.g., |v: MyType| v.to_string()) or use a named placeholder (e.g., '{{int}}')"
        ),
    )
}

// ============================================================================
// Arity Families
// ============================================================================

/// Generate every member of `family` from its smallest arity up to `max`.
pub fn generate_family(family: Family, max: usize) -> TokenStream {
    let members = (family.min_arity()..=max).map(|arity| match family {
        Family::Sprintf => generate_sprintf(arity),
        Family::Uncurry => generate_uncurry(arity),
        Family::Tuple => generate_tuple_impl(arity),
    });
    quote! { #(#members)* }
}

fn type_params(arity: usize) -> Vec<Ident> {
    (1..=arity).map(|i| format_ident!("T{}", i)).collect()
}

fn arg_names(arity: usize) -> Vec<Ident> {
    (1..=arity).map(|i| format_ident!("a{}", i)).collect()
}

/// Where-clause predicates for a chain `callee: FnOnce(T1) -> R1, R1: FnOnce(T2) -> R2, ...`
/// ending in `R`, plus the intermediate result parameters `R1 ..`.
fn chain_bounds(callee: &Ident, params: &[Ident]) -> (Vec<Ident>, Vec<TokenStream>) {
    let output = format_ident!("R");
    let intermediates: Vec<Ident> = (1..params.len()).map(|i| format_ident!("R{}", i)).collect();

    let mut predicates = Vec::with_capacity(params.len());
    let mut current = callee.clone();
    for (i, param) in params.iter().enumerate() {
        let next = intermediates.get(i).unwrap_or(&output);
        predicates.push(quote! { #current: ::core::ops::FnOnce(#param) -> #next });
        current = next.clone();
    }
    (intermediates, predicates)
}

fn generate_sprintf(arity: usize) -> TokenStream {
    let name = format_ident!("sprintf{}", arity);
    let params = type_params(arity);
    let args = arg_names(arity);

    let chain = params
        .iter()
        .rev()
        .fold(quote! { ::std::string::String }, |rest, param| {
            quote! { crate::Curried<#param, #rest> }
        });

    let doc = format!(
        "Discharges a spec with exactly {arity} argument(s), in placeholder order.\n\n\
         Equivalent to `sprintf(spec)` followed by {arity} call(s)."
    );

    quote! {
        #[doc = #doc]
        pub fn #name<#(#params),*>(
            spec: &crate::Spec<::std::string::String, #chain>,
            #(#args: #params),*
        ) -> ::std::string::String {
            crate::sprintf(spec) #((#args))*
        }
    }
}

fn generate_uncurry(arity: usize) -> TokenStream {
    let name = format_ident!("uncurry{}", arity);
    let params = type_params(arity);
    let args = arg_names(arity);
    let callee = format_ident!("F");
    let (intermediates, predicates) = chain_bounds(&callee, &params);

    let doc = format!(
        "Applies a chain of {arity} single-argument functions to {arity} arguments, in order."
    );

    quote! {
        #[doc = #doc]
        pub fn #name<#callee, #(#params,)* #(#intermediates,)* R>(
            f: #callee,
            #(#args: #params),*
        ) -> R
        where
            #(#predicates),*
        {
            f #((#args))*
        }
    }
}

fn generate_tuple_impl(arity: usize) -> TokenStream {
    let callee = format_ident!("F");
    if arity == 0 {
        return quote! {
            impl<#callee> crate::Uncurry<()> for #callee {
                type Output = #callee;

                #[inline]
                fn uncurry(self, _args: ()) -> #callee {
                    self
                }
            }
        };
    }

    let params = type_params(arity);
    let args = arg_names(arity);
    let (intermediates, predicates) = chain_bounds(&callee, &params);

    quote! {
        impl<#callee, #(#params,)* #(#intermediates,)* R> crate::Uncurry<(#(#params,)*)> for #callee
        where
            #(#predicates),*
        {
            type Output = R;

            #[inline]
            fn uncurry(self, (#(#args,)*): (#(#params,)*)) -> R {
                self #((#args))*
            }
        }
    }
}
