use std::path::PathBuf;

/// The folder whose files this peer offers to the network.
///
/// File names on the wire are bare names; anything that would escape the
/// folder (separators, parent references) is refused at resolution time.
#[derive(Clone, Debug)]
pub struct SharedFolder {
    pub(crate) path: PathBuf,
}
