//! Identity manager for docstore
//!
//! Resolves the identifier and creation timestamp of every saved document.
//!
//! # Rules
//!
//! 1. No id supplied: generate a UUID v4 that is not already stored
//! 2. Supplied id is free: use it
//! 3. Supplied id is taken: depends on `IdPolicy`
//!    - `RegenerateOnCollision` (default): draw fresh ids until one is free
//!    - `OverwriteExisting`: keep the id, replace the document
//! 4. `created` is the supplied value, else the clock's current time. An
//!    overwritten document keeps its original `created`.
//!
//! Resolution never fails.

mod generator;
mod resolver;

pub use generator::{Clock, FixedClock, IdGenerator, SequenceGenerator, SystemClock, UuidGenerator};
pub use resolver::{IdOrigin, IdPolicy, IdentityManager, Resolution};
