pub mod fingerprint;
pub mod json;
pub mod lint;
pub mod sarif;
pub mod terminal;
