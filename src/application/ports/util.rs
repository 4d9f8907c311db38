// src/application/ports/util.rs

/// Turns a title into the readable part of a slug. May return an empty
/// string when nothing survives normalization.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
