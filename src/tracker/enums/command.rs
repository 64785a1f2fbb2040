/// A parsed control-protocol request.
///
/// One request per line; the verb decides how the remainder is split.
/// `SHARE` and `SEARCH` take the rest of the line verbatim so file names
/// may contain spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Signup { username: String, password: String },
    Register { port: u16 },
    Share { file_name: String },
    Search { term: String },
    ListPeers,
    UpdateStats { downloads: String, uploads: String },
    RemoveUser { username: String },
    ChangePassword { old_password: String, new_password: String },
    DeleteAccount { username: String, password: String },
    Unregister,
}
