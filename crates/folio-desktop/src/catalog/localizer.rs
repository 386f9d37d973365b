/// Resolves translation keys into display strings
///
/// Implemented for any `Fn(&str) -> String`, so a lookup closure over the
/// active language catalog can be passed directly.
pub trait Localizer {
    /// Display string for `key`
    fn translate(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Localizer that returns keys unchanged
///
/// Useful when the view layer translates on its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}
