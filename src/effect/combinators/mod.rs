//! Combinator types for effect composition.
//!
//! These are the concrete types returned by the constructors and by the
//! methods on `EffectExt`. Most callers only see them behind
//! `impl Effect<...>`.

mod and_then;
mod fail;
mod from_async;
mod from_result;
mod lift;
mod map;
mod map_err;
mod or_else;
mod par_zip;
mod pure;

pub use and_then::AndThen;
pub use fail::Fail;
pub use from_async::FromAsync;
pub use from_result::FromResult;
pub use lift::Lift;
pub use map::Map;
pub use map_err::MapErr;
pub use or_else::OrElse;
pub use par_zip::{ParZip, ParZip3, ParZipWith};
pub use pure::Pure;
