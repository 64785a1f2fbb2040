/// A plain-message error for call sites without a dedicated error enum.
///
/// Used by the configuration bootstrap path where the only sensible
/// reaction is printing the message and exiting.
#[derive(Debug, Clone)]
pub struct CustomError {
    pub message: String,
}
