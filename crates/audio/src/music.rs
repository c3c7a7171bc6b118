//! Background music download.
//!
//! The track is fetched on a detached thread with a blocking HTTP client and
//! handed back as raw bytes; decoding and playback stay on the caller's thread.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MUSIC_URL: &str =
    "https://raw.githubusercontent.com/JakeAdlerWriter/RAW/main/tetris-music.mp3";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Progress of a music download.
#[derive(Debug)]
pub enum Fetch {
    Pending,
    Ready(Vec<u8>),
    Failed(anyhow::Error),
}

/// Handle to an in-flight download.
pub struct MusicLoader {
    rx: Option<Receiver<Result<Vec<u8>>>>,
}

impl MusicLoader {
    /// Start downloading `url` in the background.
    pub fn spawn(url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("music-fetch".into())
            .spawn(move || {
                let _ = tx.send(fetch(&url));
            });
        match spawned {
            Ok(_) => Self { rx: Some(rx) },
            Err(err) => {
                log::warn!("could not start music download: {}", err);
                Self { rx: None }
            }
        }
    }

    /// Non-blocking check; yields `Ready`/`Failed` at most once.
    pub fn poll(&mut self) -> Fetch {
        let Some(rx) = self.rx.as_ref() else {
            return Fetch::Failed(anyhow::anyhow!("music download not running"));
        };
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                match result {
                    Ok(bytes) => Fetch::Ready(bytes),
                    Err(err) => Fetch::Failed(err),
                }
            }
            Err(TryRecvError::Empty) => Fetch::Pending,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Fetch::Failed(anyhow::anyhow!("music download thread exited"))
            }
        }
    }
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("building HTTP client")?;
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()?;
    let bytes = resp.bytes().context("reading music body")?;
    Ok(bytes.to_vec())
}
