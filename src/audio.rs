//! Verse narration playback using `rodio`.
//!
//! The player holds one source at a time. Changing the source drops the
//! current sink; the output device is only opened on the first play attempt.

use anyhow::{Context, Result, anyhow};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, info};

struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

pub struct AudioPlayer {
    output: Option<AudioOutput>,
    sink: Option<Sink>,
    source: Option<PathBuf>,
    volume: f32,
    muted: bool,
}

impl AudioPlayer {
    pub fn new(volume: f32) -> Self {
        Self {
            output: None,
            sink: None,
            source: None,
            volume,
            muted: false,
        }
    }

    #[cfg(test)]
    pub fn source(&self) -> Option<&std::path::Path> {
        self.source.as_deref()
    }

    /// Replace the current source. Playback of the old source stops.
    pub fn set_source(&mut self, path: PathBuf) {
        self.stop();
        debug!(path = %path.display(), "Audio source set");
        self.source = Some(path);
    }

    /// Start or resume the current source. A finished source restarts from
    /// the beginning.
    pub fn play(&mut self) -> Result<()> {
        if let Some(sink) = &self.sink {
            if !sink.empty() {
                sink.play();
                debug!("Resumed audio playback");
                return Ok(());
            }
        }

        let path = self
            .source
            .clone()
            .ok_or_else(|| anyhow!("No audio source selected"))?;
        let file = File::open(&path).with_context(|| format!("Opening {}", path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Decoding {}", path.display()))?;

        let handle = self.output_handle()?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        sink.set_volume(self.effective_volume());
        sink.append(decoder);
        sink.play();
        info!(path = %path.display(), muted = self.muted, "Started audio playback");
        self.sink = Some(sink);
        Ok(())
    }

    pub fn pause(&self) {
        if let Some(sink) = &self.sink {
            debug!("Pausing audio playback");
            sink.pause();
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn output_handle(&mut self) -> Result<OutputStreamHandle> {
        if let Some(output) = &self.output {
            return Ok(output.handle.clone());
        }
        let (stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        self.output = Some(AudioOutput {
            _stream: stream,
            handle: handle.clone(),
        });
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn play_without_source_fails() {
        let mut player = AudioPlayer::new(1.0);
        assert!(player.play().is_err());
    }

    #[test]
    fn play_missing_file_fails_and_keeps_source() {
        let mut player = AudioPlayer::new(1.0);
        player.set_source(PathBuf::from("/nonexistent/ayati-link/000.mp3"));
        assert!(player.play().is_err());
        assert_eq!(
            player.source(),
            Some(Path::new("/nonexistent/ayati-link/000.mp3"))
        );
    }

    #[test]
    fn muting_zeroes_effective_volume() {
        let mut player = AudioPlayer::new(0.8);
        player.set_muted(true);
        assert_eq!(player.effective_volume(), 0.0);
        player.set_muted(false);
        assert_eq!(player.effective_volume(), 0.8);
    }
}
