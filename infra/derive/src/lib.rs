#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate of the workspace: error enums,
//! API data models, `OpenAPI`-documented handlers and the runtime entrypoint.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its
//! own macros; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a plain `fn main` running on a
/// [`k1_runtime`](https://docs.rs/tokio) runtime built from a named profile.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default`
/// (also used when no argument is given). The function must return a `Result`.
///
/// ```rust,ignore
/// #[k1_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request/response DTO.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` and `#[serde(deny_unknown_fields)]`
///   unless overridden with `rename_all = "..."` / `deny_unknown_fields = false`.
///
/// ```rust,ignore
/// #[k1_derive::api_model]
/// pub struct TechStackComponent {
///     pub name: String,
///     pub version: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` when the `server` feature is on.
///
/// Arguments are forwarded verbatim to `utoipa::path`.
///
/// ```rust,ignore
/// #[k1_derive::api_handler(get, path = "/health", responses((status = OK)), tag = "System")]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a crate error enum.
///
/// Every variant must use named fields. Variants may carry a
/// `context: Option<Cow<'static, str>>` field; variants wrapping another error
/// (a field named `source` or marked `#[source]`/`#[from]`) must carry one.
///
/// Generates:
/// * `#[derive(Debug, thiserror::Error)]` (skipping what is already derived),
/// * a `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for each wrapped source type,
/// * `From<Source>` for each wrapped source type,
/// * `From<&'static str>` / `From<String>` when an `Internal { message, context }`
///   variant exists,
/// * a private `format_context` helper for `#[error(...)]` strings.
///
/// ```rust,ignore
/// #[k1_derive::k1_error]
/// pub enum DatabaseError {
///     #[error("SurrealDB error{}: {source}", format_context(.context))]
///     Surreal { source: surrealdb::Error, context: Option<Cow<'static, str>> },
///     #[error("Internal database error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn k1_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
