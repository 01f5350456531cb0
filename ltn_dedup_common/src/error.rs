use core::fmt;

// Our own error that wraps `anyhow::Error`, so every layer can use `?` on its leaf errors.
pub struct AppError(anyhow::Error);

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Look for a typed leaf error (e.g. `InputNotFoundError`) inside this error.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// `main` returns `Result<()>`, so this is what the user sees when a run fails.
impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

// This enables using `?` on anything that converts into `anyhow::Error` (io errors, confy
// errors, our thiserror types) to turn it into `AppError`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
