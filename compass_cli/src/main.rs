mod prompt;

use std::io;

use anyhow::Result;
use clap::Parser;
use compass_api::types::TokenGrant;
use compass_api::{Client, DEFAULT_ENDPOINT, TEST_ENDPOINT};

use crate::prompt::PartialCredentials;

#[derive(Parser)]
#[command(name = "compass-token")]
#[command(about = "Exchange Cosential credentials for a Compass API user token")]
struct Cli {
    /// Cosential username
    #[arg(long, env = "COMPASS_USERNAME")]
    username: Option<String>,

    /// Cosential password
    #[arg(long, env = "COMPASS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Cosential firm id
    #[arg(long, env = "COMPASS_FIRM_ID")]
    firm_id: Option<String>,

    /// Cosential api key
    #[arg(long, env = "COMPASS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Log HTTP requests and responses
    #[arg(long)]
    debug: bool,

    /// Use the test (UAT) environment
    #[arg(long)]
    test: bool,
}

impl Cli {
    fn credentials(&self) -> PartialCredentials {
        PartialCredentials {
            username: self.username.clone(),
            password: self.password.clone(),
            firm_id: self.firm_id.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let directive = if cli.debug {
        "compass_api=debug"
    } else {
        "compass_api=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let endpoint = if cli.test {
        TEST_ENDPOINT
    } else {
        DEFAULT_ENDPOINT
    };
    let client = Client::unauthenticated(endpoint)?;

    let mut given = cli.credentials();
    loop {
        let credentials = {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            prompt::complete(given, &mut input, &mut output, |label| {
                rpassword::prompt_password(label)
            })?
        };

        println!("Fetching user token from Cosential...");
        match client.get_user_token(&credentials).await {
            Ok(TokenGrant::Granted(token)) => {
                println!("{}'s user token is: {}", credentials.username, token);
                return Ok(());
            }
            Ok(TokenGrant::NotAuthenticated) => {
                println!(
                    "Could not retrieve compass user token.  Make sure your firm id, api key, username and password are correct."
                );
                given = PartialCredentials::default();
            }
            Err(e) => {
                println!("{}", e);
                return Ok(());
            }
        }
    }
}
