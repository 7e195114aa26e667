use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the web server for the voice assistant
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,

        /// Don't open the default web browser after starting
        #[arg(long, action, default_value = "false")]
        no_browser: bool,
    },
    /// Chat with the assistant in the terminal
    Chat {
        /// Reply language, "english" or "hindi"
        #[arg(long, default_value = "english")]
        language: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve {
            host,
            port,
            no_browser,
        }) => {
            serve::run(host, port, !no_browser).await?;
        }
        Some(Command::Chat { language }) => {
            chat::run(&language).await?;
        }
        None => {}
    }

    Ok(())
}
