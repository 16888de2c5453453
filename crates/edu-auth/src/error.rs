use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; run `edubot auth login`")]
    NotAuthenticated,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Usuario o contraseña incorrectos. Usa 'demo' / 'demo' o credenciales válidas.")]
    InvalidCredentials,

    #[error("login rejected: {0}")]
    Rejected(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("session store error: {0}")]
    SessionStore(String),
}
