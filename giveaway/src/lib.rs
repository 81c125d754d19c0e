extern crate thiserror;
#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate log;
#[cfg(test)] #[macro_use] extern crate matches;

pub mod submission;
