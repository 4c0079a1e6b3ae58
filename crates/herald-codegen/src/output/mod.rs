//! Per-language renderers.
//!
//! Each renderer takes a validated [`Command`](crate::ir::Command) slice and
//! produces one source file's text. All renderers implement the
//! [`Renderer`](crate::traits::Renderer) trait for uniform access via the
//! registry.

#[cfg(feature = "lang-python")]
pub mod python;

#[cfg(feature = "lang-python")]
pub use python::PythonRenderer;

#[cfg(feature = "lang-cplusplus")]
pub mod cplusplus;

#[cfg(feature = "lang-cplusplus")]
pub use cplusplus::CPlusPlusRenderer;

#[cfg(feature = "lang-csharp")]
pub mod csharp;

#[cfg(feature = "lang-csharp")]
pub use csharp::CSharpRenderer;

#[cfg(feature = "lang-javascript")]
pub mod javascript;

#[cfg(feature = "lang-javascript")]
pub use javascript::JavaScriptRenderer;
