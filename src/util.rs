use std::fmt::Debug;

/// elements of remaining input shown in traces and error messages
pub(crate) const PREVIEW_WIDTH: usize = 33;

/// fixed width, truncated `Debug` rendering.
///
/// Callers bound what they pass in (see `Cursor::preview`), this only trims the rendering.
pub fn formatter<T: Debug + ?Sized>(t: &T) -> String {
    let s: String = format!("{t:?}").chars().take(PREVIEW_WIDTH).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}
