//! URL handling module for Link-Harvest
//!
//! Hosts arrive as bare names (`example.com`) or full URLs; the normalizer
//! makes sure every host carries an explicit scheme before it is fetched.

mod normalize;

pub use normalize::normalize_host;
