//! Audio feedback for Atomic Tetris.
//!
//! [`Audio`] turns game events into short synthesized tones and keeps the
//! looped background track in step with the game phase. Every failure here is
//! environmental (no device, no network, undecodable track): it is logged and
//! the game carries on silently.

pub mod music;
pub mod tone;

pub use atomic_tetris_core as core;
pub use atomic_tetris_types as types;

pub use music::{Fetch, MusicLoader, DEFAULT_MUSIC_URL};
pub use tone::{ToneSource, ToneSpec, SAMPLE_RATE};

use std::io::Cursor;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::core::GameEvent;
use crate::types::Phase;

pub const MUSIC_VOLUME: f32 = 0.3;

/// Startup audio preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSettings {
    pub sound: bool,
    pub music: bool,
    pub music_url: String,
    /// Open the system output device. Off for headless runs.
    pub device: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sound: true,
            music: false,
            music_url: DEFAULT_MUSIC_URL.to_string(),
            device: true,
        }
    }
}

/// Music plays only while enabled and the game is actively running.
pub fn music_should_play(enabled: bool, phase: Phase) -> bool {
    enabled && phase == Phase::Playing
}

/// Where the background track is in its lifecycle.
enum Track {
    NotLoaded,
    Loading(MusicLoader),
    Loaded(Sink),
    Unavailable,
}

struct Backend {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Backend {
    fn open() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().context("opening audio output")?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    fn play_tone(&self, source: ToneSource) -> Result<()> {
        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        sink.detach();
        Ok(())
    }

    fn music_sink(&self, bytes: Vec<u8>) -> Result<Sink> {
        let decoder = Decoder::new_looped(Cursor::new(bytes)).context("decoding music")?;
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(MUSIC_VOLUME);
        sink.pause();
        sink.append(decoder);
        Ok(sink)
    }
}

pub struct Audio {
    backend: Option<Backend>,
    sound_enabled: bool,
    music_enabled: bool,
    music_url: String,
    track: Track,
    /// Phase seen by the last [`Audio::sync_music`].
    phase: Phase,
}

impl Audio {
    pub fn new(settings: AudioSettings) -> Self {
        let backend = if settings.device {
            match Backend::open() {
                Ok(backend) => Some(backend),
                Err(err) => {
                    log::warn!("audio unavailable: {:#}", err);
                    None
                }
            }
        } else {
            None
        };

        Self {
            backend,
            sound_enabled: settings.sound,
            music_enabled: settings.music,
            music_url: settings.music_url,
            track: Track::NotLoaded,
            phase: Phase::Idle,
        }
    }

    /// No device, no downloads; toggles still track state.
    pub fn silent() -> Self {
        Self::new(AudioSettings {
            device: false,
            ..AudioSettings::default()
        })
    }

    pub fn has_device(&self) -> bool {
        self.backend.is_some()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        log::debug!("sound {}", on_off(self.sound_enabled));
        self.sound_enabled
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        log::debug!("music {}", on_off(self.music_enabled));
        self.sync_music(self.phase);
        self.music_enabled
    }

    /// Play the tone for every event that has one.
    pub fn on_events<'a>(&self, events: impl IntoIterator<Item = &'a GameEvent>) {
        if !self.sound_enabled {
            return;
        }
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        for sound in events.into_iter().filter_map(GameEvent::sound) {
            if let Err(err) = backend.play_tone(ToneSource::for_event(sound)) {
                log::warn!("tone playback failed: {:#}", err);
            }
        }
    }

    /// Start or pause the background track for `phase`.
    ///
    /// The first time music is wanted the download starts; playback begins
    /// once [`Audio::pump`] has received the bytes.
    pub fn sync_music(&mut self, phase: Phase) {
        self.phase = phase;
        if self.backend.is_none() {
            return;
        }

        if self.music_enabled && matches!(self.track, Track::NotLoaded) {
            log::info!("loading music from {}", self.music_url);
            self.track = Track::Loading(MusicLoader::spawn(self.music_url.clone()));
            return;
        }
        if let Track::Loaded(sink) = &self.track {
            if music_should_play(self.music_enabled, phase) {
                sink.play();
            } else {
                sink.pause();
            }
        }
    }

    /// Collect a finished download, then re-apply the current phase.
    pub fn pump(&mut self) {
        let Track::Loading(loader) = &mut self.track else {
            return;
        };
        let fetched = match loader.poll() {
            Fetch::Pending => return,
            Fetch::Ready(bytes) => bytes,
            Fetch::Failed(err) => {
                log::warn!("music unavailable: {:#}", err);
                self.track = Track::Unavailable;
                return;
            }
        };

        log::info!("music loaded ({} bytes)", fetched.len());
        self.track = match self.backend.as_ref().map(|b| b.music_sink(fetched)) {
            Some(Ok(sink)) => Track::Loaded(sink),
            Some(Err(err)) => {
                log::warn!("music unavailable: {:#}", err);
                Track::Unavailable
            }
            None => Track::Unavailable,
        };
        self.sync_music(self.phase);
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
