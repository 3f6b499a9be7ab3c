//! Validation errors raised by the edit forms

/// Why a draft could not be committed
///
/// A failed submit leaves the modal open with its draft untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} wajib diisi")]
    MissingField(&'static str),

    #[error("{field} harus berupa bilangan bulat non-negatif, bukan '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("batas stok rendah minimal {minimum}")]
    ThresholdTooLow { minimum: u32 },

    #[error("kantin #{0} tidak dikenal")]
    UnknownCanteen(u32),

    #[error("alamat email '{0}' tidak valid")]
    InvalidEmail(String),

    #[error("password wajib diisi untuk admin baru")]
    MissingPassword,
}
