use minijinja::{Error, ErrorKind, State, Value};

/// Context key holding the resolution scale factor, or a wildcard sentinel.
pub const SCALE_KEY: &str = "_scale";

/// `scale(n)`: a size authored at 720 lines, scaled to the requested height.
///
/// When the context carries a wildcard instead of a factor, the wildcard is
/// returned so the call site becomes a pattern hole.
pub fn scale(state: &State, value: f64) -> Result<Value, Error> {
    let factor = state.lookup(SCALE_KEY).ok_or_else(|| {
        Error::new(ErrorKind::UndefinedError, "scale() needs a resolution in context")
    })?;

    if let Some(sentinel) = factor.as_str() {
        return Ok(Value::from(sentinel));
    }

    let factor = f64::try_from(factor)?;
    Ok(Value::from((value * factor).round() as i64))
}

/// Escapes text for use inside a double-quoted script string.
pub fn string_filter(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
