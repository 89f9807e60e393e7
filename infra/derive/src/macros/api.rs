use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemFn, ItemStruct, Lit, LitBool, LitStr, Meta, Token};

/// Arguments accepted by `#[api_model(...)]`.
#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<LitBool>,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
        let mut parsed = Self::default();

        for meta in metas {
            let Meta::NameValue(nv) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "Expected name-value arguments like `rename_all = \"...\"`",
                ));
            };
            let Expr::Lit(ExprLit { lit, .. }) = &nv.value else {
                return Err(syn::Error::new_spanned(&nv.value, "Expected a literal value"));
            };

            match lit {
                Lit::Str(s) if nv.path.is_ident("rename_all") => {
                    if parsed.rename_all.replace(s.clone()).is_some() {
                        return Err(syn::Error::new_spanned(&nv, "Duplicate argument"));
                    }
                }
                Lit::Bool(b) if nv.path.is_ident("deny_unknown_fields") => {
                    if parsed.deny_unknown_fields.replace(b.clone()).is_some() {
                        return Err(syn::Error::new_spanned(&nv, "Duplicate argument"));
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &nv,
                        "Unsupported argument; \
                         expected rename_all = \"...\" or deny_unknown_fields = bool",
                    ));
                }
            }
        }

        Ok(parsed)
    }
}

/// Serde settings already present on the struct.
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl ExistingSerde {
    fn scan(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut rename_all = None;
        let mut deny_unknown_fields = false;

        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    rename_all = Some(meta.value()?.parse::<LitStr>()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    deny_unknown_fields = true;
                } else if meta.input.peek(Token![=]) {
                    // Skip other serde options without interpreting them.
                    meta.value()?.parse::<Expr>()?;
                }
                Ok(())
            })?;
        }

        Ok(Self { rename_all, deny_unknown_fields })
    }
}

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    expand_model(args, &input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand_model(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = ModelArgs::parse(args)?;
    let existing = ExistingSerde::scan(&input.attrs)?;
    let derives = derived_trait_names(&input.attrs);

    let missing: Vec<TokenStream> = [
        ("Debug", quote!(Debug)),
        ("Serialize", quote!(::serde::Serialize)),
        ("Deserialize", quote!(::serde::Deserialize)),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();
    let derive_attr = if missing.is_empty() { quote!() } else { quote!(#[derive(#(#missing),*)]) };

    let schema_attr = if derives.contains("ToSchema") {
        quote!()
    } else {
        quote!(#[cfg_attr(feature = "server", derive(::utoipa::ToSchema))])
    };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                current,
                "Conflicting serde rename_all; \
                 remove it or set api_model(rename_all = \"...\") to match",
            ));
        }
        Some(_) => quote!(),
        None => quote!(#[serde(rename_all = #rename)]),
    };

    let deny = args.deny_unknown_fields.as_ref().is_none_or(LitBool::value);
    let deny_attr = match (existing.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        (false, true) => quote!(#[serde(deny_unknown_fields)]),
        _ => quote!(),
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}
