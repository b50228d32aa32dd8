//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::anchor::{TrustAnchor, DEFAULT_ANCHOR_PATH};
use crate::credentials::{
    read_certificate, CertificateCredentials, PasswordCredentials, SecretCredentials,
};
use crate::identity::HttpIdentityClient;
use crate::token;

#[derive(Parser)]
#[command(name = "spo-auth")]
#[command(about = "CA trust anchor installation and SharePoint Online token acquisition")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the CA trust anchor (write, install, show)
    Anchor {
        #[command(subcommand)]
        cmd: AnchorCmd,
    },

    /// Acquire an access token (password, secret, certificate)
    Token {
        #[command(subcommand)]
        cmd: TokenCmd,
    },
}

#[derive(Subcommand)]
pub enum AnchorCmd {
    /// Write a certificate file to the anchor destination
    Write {
        /// Certificate file to read
        cert_file: PathBuf,
        /// Destination path
        #[arg(long, default_value = DEFAULT_ANCHOR_PATH)]
        dest: PathBuf,
    },
    /// Run the trust-store rebuild command
    Install {
        /// Anchor path the rebuild should pick up
        #[arg(long, default_value = DEFAULT_ANCHOR_PATH)]
        dest: PathBuf,
    },
    /// Print the anchor description without writing anything
    Show {
        /// Certificate file to read
        cert_file: PathBuf,
        /// Destination path
        #[arg(long, default_value = DEFAULT_ANCHOR_PATH)]
        dest: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum TokenCmd {
    /// Resource-owner password grant
    Password {
        #[arg(long)]
        client_id: String,
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        target_host: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// OAuth scope; repeatable. Defaults to https://<target_host>/.default
        #[arg(long = "scope")]
        scopes: Vec<String>,
    },
    /// Client-credentials grant with a client secret (legacy ACS endpoint)
    Secret {
        #[arg(long)]
        client_id: String,
        #[arg(long)]
        client_secret: String,
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        target_host: String,
        #[arg(long)]
        target_identifier: String,
    },
    /// Client-credentials grant with a certificate client assertion
    Certificate {
        #[arg(long)]
        client_id: String,
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        target_host: String,
        /// PEM private key file matching the registered certificate
        #[arg(long)]
        key_file: PathBuf,
        #[arg(long)]
        thumbprint: String,
        /// OAuth scope; repeatable. Defaults to https://<target_host>/.default
        #[arg(long = "scope")]
        scopes: Vec<String>,
    },
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Anchor { cmd } => cmd_anchor(cmd),
        Commands::Token { cmd } => cmd_token(cmd),
    }
}

fn cmd_anchor(cmd: AnchorCmd) -> Result<()> {
    match cmd {
        AnchorCmd::Write { cert_file, dest } => {
            let certificate = read_certificate(&cert_file)?;
            let anchor = TrustAnchor::with_path(certificate, dest);
            println!("{anchor}");
            anchor.write()?;
            println!("Wrote anchor: {}", anchor.path().display());
            Ok(())
        }
        AnchorCmd::Install { dest } => {
            TrustAnchor::with_path(String::new(), dest).install();
            println!("Triggered trust store refresh");
            Ok(())
        }
        AnchorCmd::Show { cert_file, dest } => {
            let certificate = read_certificate(&cert_file)?;
            let anchor = TrustAnchor::with_path(certificate, dest);
            println!("{anchor}");
            Ok(())
        }
    }
}

fn cmd_token(cmd: TokenCmd) -> Result<()> {
    let client = HttpIdentityClient::new();
    let rt = tokio::runtime::Runtime::new()?;

    let result = match cmd {
        TokenCmd::Password {
            client_id,
            tenant_id,
            target_host,
            username,
            password,
            scopes,
        } => {
            let creds = PasswordCredentials {
                client_id,
                tenant_id,
                target_host,
                username,
                password,
                scopes: if scopes.is_empty() { None } else { Some(scopes) },
                extra: Vec::new(),
            };
            rt.block_on(token::acquire_token_by_password(&client, &creds))?
        }
        TokenCmd::Secret {
            client_id,
            client_secret,
            tenant_id,
            target_host,
            target_identifier,
        } => {
            let creds = SecretCredentials {
                client_id,
                client_secret,
                tenant_id,
                target_host,
                target_identifier,
            };
            rt.block_on(token::acquire_token_with_secret(&client, &creds))?
        }
        TokenCmd::Certificate {
            client_id,
            tenant_id,
            target_host,
            key_file,
            thumbprint,
            scopes,
        } => {
            let private_key = read_certificate(&key_file)?;
            let creds = CertificateCredentials {
                client_id,
                tenant_id,
                target_host,
                private_key,
                thumbprint,
                scopes: if scopes.is_empty() { None } else { Some(scopes) },
                extra: Vec::new(),
            };
            rt.block_on(token::acquire_token_with_certificate(&client, &creds))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
