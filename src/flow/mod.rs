//! One-shot flows layered over the adapter: email confirmation, the
//! post-registration redirect countdown, and the password reset pair.
//! These are the only cancellable constructs in the crate; both cancel
//! paths guarantee a torn-down instance produces no observable effect.

pub mod confirm;
pub mod password;
pub mod redirect;
