//! Interactive completion of the credentials needed for a token exchange.

use std::io::{self, BufRead, Write};

use compass_api::types::UserCredentials;

/// Credentials as given on the command line or environment; any may be absent.
#[derive(Clone, Debug, Default)]
pub struct PartialCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub firm_id: Option<String>,
    pub api_key: Option<String>,
}

/// Prints `label` and reads one trimmed line.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before all credentials were entered",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Fills every missing or empty field by prompting, in the order firm id,
/// API key, username, password. The password goes through `read_password`
/// so it can be read without echo.
pub fn complete<R, W, P>(
    given: PartialCredentials,
    input: &mut R,
    output: &mut W,
    mut read_password: P,
) -> io::Result<UserCredentials>
where
    R: BufRead,
    W: Write,
    P: FnMut(&str) -> io::Result<String>,
{
    let firm_id = match non_empty(given.firm_id) {
        Some(v) => v,
        None => prompt_line(input, output, "Enter Cosential firm id: ")?,
    };
    let api_key = match non_empty(given.api_key) {
        Some(v) => v,
        None => prompt_line(input, output, "Enter Cosential api key: ")?,
    };
    let username = match non_empty(given.username) {
        Some(v) => v,
        None => prompt_line(input, output, "Enter Cosential username: ")?,
    };
    let password = match non_empty(given.password) {
        Some(v) => v,
        None => read_password(&format!("Enter password for {}: ", username))?,
    };
    Ok(UserCredentials {
        username,
        password,
        firm_id,
        api_key,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
