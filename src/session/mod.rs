//! The trusted boundary around the session cookie. Nothing outside this
//! module reads the cookie or builds `Set-Cookie` values; pages only carry
//! the opaque header values this module hands them.

pub mod cookie;

mod actions;

pub use actions::{
    authenticate, current_user, register, sign_out, Registration, SignInOutcome, SignUpOutcome,
};
pub use cookie::SessionToken;
