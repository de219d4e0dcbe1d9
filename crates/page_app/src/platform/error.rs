use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no {0}")]
    MissingElement(&'static str),
    #[error("{0} returned an unexpected type")]
    UnexpectedType(&'static str),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

/// Attaches a context label to fallible browser calls.
pub(crate) trait JsResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, PageError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn context(self, context: &'static str) -> Result<T, PageError> {
        self.map_err(|err| PageError::Js {
            context,
            message: describe(&err),
        })
    }
}

/// Human-readable rendering of a thrown JS value, e.g. `NotAllowedError: play() failed`.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
