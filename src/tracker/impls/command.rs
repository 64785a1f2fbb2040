use crate::tracker::enums::command::Command;

impl Command {
    /// Parses one request line.
    ///
    /// The error string becomes the payload of the `ERROR` reply.
    pub fn parse(line: &str) -> Result<Command, String>
    {
        let trimmed = line.trim();
        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        match verb {
            "LOGIN" => {
                let (username, password) = Self::two_tokens(rest, "LOGIN expects <username> <password>")?;
                Ok(Command::Login { username, password })
            }
            "SIGNUP" => {
                let (username, password) = Self::two_tokens(rest, "SIGNUP expects <username> <password>")?;
                Ok(Command::Signup { username, password })
            }
            "REGISTER" => {
                let port = rest.parse::<u16>().map_err(|_| String::from("REGISTER expects <port>"))?;
                Ok(Command::Register { port })
            }
            "SHARE" => {
                if rest.is_empty() {
                    return Err(String::from("SHARE expects <fileName>"));
                }
                Ok(Command::Share { file_name: rest.to_string() })
            }
            "SEARCH" => Ok(Command::Search { term: rest.to_string() }),
            "LIST_PEERS" => Ok(Command::ListPeers),
            "UPDATE_STATS" => {
                let (downloads, uploads) = Self::two_tokens(rest, "UPDATE_STATS expects <downloadCsv> <uploadCsv>")?;
                Ok(Command::UpdateStats { downloads, uploads })
            }
            "REMOVE_USER" => {
                if rest.is_empty() || rest.contains(' ') {
                    return Err(String::from("REMOVE_USER expects <username>"));
                }
                Ok(Command::RemoveUser { username: rest.to_string() })
            }
            "CHANGE_PASSWORD" => {
                let (old_password, new_password) = Self::two_tokens(rest, "CHANGE_PASSWORD expects <old> <new>")?;
                Ok(Command::ChangePassword { old_password, new_password })
            }
            "DELETE_ACCOUNT" => {
                let (username, password) = Self::two_tokens(rest, "DELETE_ACCOUNT expects <username> <password>")?;
                Ok(Command::DeleteAccount { username, password })
            }
            "UNREGISTER" => Ok(Command::Unregister),
            other => Err(format!("unknown command {other}")),
        }
    }

    fn two_tokens(rest: &str, usage: &str) -> Result<(String, String), String>
    {
        match rest.split_once(' ') {
            Some((first, second)) if !first.is_empty() && !second.trim().is_empty() && !second.trim().contains(' ') => {
                Ok((first.to_string(), second.trim().to_string()))
            }
            _ => Err(usage.to_string()),
        }
    }
}
