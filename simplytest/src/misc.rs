//! The [`misc`](self) module contains different helper functions.

use std::any::{type_name, Any};

/// Derive a display name for the function type `F`.
///
/// Function items resolve to the last segment of their path with all generic
/// arguments removed (`sum` for `my_crate::math::sum` and `first` for
/// `my_crate::Counter<u8>::first`). Closures, function pointers and trait
/// objects have no name of their own, so their full type name is kept.
pub fn function_name<F: ?Sized>() -> String {
    let full = type_name::<F>();
    if full.contains("{{closure}}")
        || full.starts_with("fn(")
        || full.contains(" fn(")
        || full.starts_with("dyn ")
    {
        return full.to_owned();
    }

    let path = strip_generics(full);

    path.rsplit("::").next().unwrap_or(&path).to_owned()
}

fn strip_generics(path: &str) -> String {
    let mut depth = 0_usize;

    path.chars()
        .filter(|c| match c {
            '<' => {
                depth += 1;

                false
            }
            '>' => {
                depth = depth.saturating_sub(1);

                false
            }
            _ => depth == 0,
        })
        .collect()
}

/// Extract a human readable message from the payload of a caught panic.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
