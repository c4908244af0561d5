#[macro_use]
pub mod utils;

pub mod error;
pub mod keyfile;
pub mod pki;
pub mod processor;
pub mod titlekey;
