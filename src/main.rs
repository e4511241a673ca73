use {
  anyhow::Context,
  api::YouTubeApi,
  auth::Authenticator,
  channel::Channel,
  client::Client,
  comment::Comment,
  comment_thread::CommentThread,
  config::Config,
  credentials::InstalledCredentials,
  crossterm::style::Stylize,
  deleter::{DeleteReport, delete_comments},
  listing::Listing,
  orchestrator::{Outcome, run_sweep},
  ownership::validate_ownership,
  prompt::confirm,
  scanner::scan_comments,
  serde::{Deserialize, Serialize},
  spam::is_spam,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
  },
  thiserror::Error,
  token::{StoredToken, TokenResponse},
  tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
  },
  unicode_normalization::UnicodeNormalization,
  url::Url,
  utils::{sanitize_comment, truncate},
  video::Video,
};

mod api;
mod auth;
mod channel;
mod client;
mod comment;
mod comment_thread;
mod config;
mod credentials;
mod deleter;
mod listing;
mod orchestrator;
mod ownership;
mod prompt;
mod scanner;
mod spam;
mod token;
mod utils;
mod video;

const CONTINUE_PROMPT: &str = "Do you want to continue anyway? (y/n): ";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let config = Config::load()?;

  let credentials = InstalledCredentials::load()?;

  let token = Authenticator::new(credentials).authorize().await?;

  let client = Client::new(token);

  let mut ask = || confirm(CONTINUE_PROMPT);

  match run_sweep(&client, &config.video_id, &mut ask).await? {
    Outcome::Aborted => {
      println!("Stopped. No comments were touched.");
    }
    Outcome::Clean => {
      println!("No spam comments found.");
    }
    Outcome::Swept(report) => {
      println!(
        "Done: {} deleted, {} failed.",
        report.deleted.len(),
        report.failed.len()
      );
    }
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
