//! Search form location and submission.
//!
//! [`locate`] inspects a fetched page for the CNR search form and its captcha;
//! [`submit`] posts the caller's search key and captcha response back through
//! the same session.

mod locate;
mod submit;
mod types;

pub use locate::{captcha_image_url, locate, locate_with};
pub use submit::{build_submission, submit};
pub use types::{FormDescriptor, FormMethod, FormOutcome, VerificationChallenge};
