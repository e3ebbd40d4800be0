//! Request inputs of the sample application, declared with [`input!`](input_hydrator::input).

pub mod filter;
pub mod recaptcha;
pub mod search;

pub use filter::*;
pub use recaptcha::*;
pub use search::*;
