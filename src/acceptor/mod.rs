//! Second-Stage Validation Module (Acceptor)
//!
//! Checks each proposer submission for internal consistency before passing it to
//! the learner. A submission is accepted only when its range parses, every word
//! starts inside that range, and its count equals the number of words.
//!
//! The learner itself lives outside this crate. Its contract (`/learn` with a
//! submission body, `/reset` with an empty object) is defined in `protocol`.

pub mod handlers;
pub mod protocol;
pub mod service;
pub mod validator;

#[cfg(test)]
mod tests;
