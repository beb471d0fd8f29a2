use std::sync::{Arc, RwLock};
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::sound::audio_sink::AudioSink;
use crate::spin::PITCH_STEPS;

// Tick cue: base pitch plus one step per iteration, cycling.
const TICK_BASE_FREQUENCY: f32 = 800.0;
const TICK_STEP_FREQUENCY: f32 = 60.0;
const TICK_DURATION_MS: u64 = 40;
const TICK_GAIN: f32 = 0.15;

// Win chime: three rising notes played back to back.
const WIN_NOTES: [f32; 3] = [880.0, 1100.0, 1320.0];
const WIN_NOTE_DURATION_MS: u64 = 180;
const WIN_GAIN: f32 = 0.12;

pub struct SoundSinks {
    effect_sink: AudioSink
}

pub fn build_sound_sinks() -> SoundSinks {
    let mut sinks = SoundSinks { effect_sink: AudioSink::new() };
    sinks.setup_effects();
    sinks
}

/// A no-device instance for tests and headless environments.
pub fn build_disabled_sound_sinks() -> SoundSinks {
    SoundSinks { effect_sink: AudioSink::new() }
}

impl SoundSinks {
    fn setup_effects(&mut self) {
        match OutputStream::try_default() {
            Ok((stream, stream_handle)) => match Sink::try_new(&stream_handle) {
                Ok(sink) => {
                    log::info!("Audio output initialised.");
                    self.effect_sink.set_os(Some(Arc::new(stream)));
                    self.effect_sink.set_sink(Some(Arc::new(RwLock::new(sink))));
                },
                Err(e) => {
                    log::warn!("Audio sink unavailable, sound disabled: {}", e);
                }
            },
            Err(e) => {
                log::warn!("Audio output unavailable, sound disabled: {}", e);
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.effect_sink.is_available()
    }

    /// The per-tick cue of a selection run. The pitch climbs through
    /// PITCH_STEPS discrete steps, then wraps.
    pub fn play_tick(&self, pitch_step: u32) {
        let step = pitch_step % PITCH_STEPS;
        let frequency = TICK_BASE_FREQUENCY + step as f32 * TICK_STEP_FREQUENCY;
        let source = SineWave::new(frequency)
            .take_duration(Duration::from_millis(TICK_DURATION_MS))
            .amplify(TICK_GAIN);
        self.effect_sink.append(source);
    }

    /// The celebratory chime once a winner is revealed.
    pub fn play_win(&self) {
        for note in WIN_NOTES.iter() {
            let source = SineWave::new(*note)
                .take_duration(Duration::from_millis(WIN_NOTE_DURATION_MS))
                .amplify(WIN_GAIN);
            self.effect_sink.append(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sound::sounds::build_disabled_sound_sinks;

    #[test]
    fn test_disabled_sinks_never_fail() {
        // GIVEN sinks with no audio device
        let sinks = build_disabled_sound_sinks();
        assert!(!sinks.is_available());

        // WHEN we play every cue
        for step in 0..6 {
            sinks.play_tick(step);
        }
        sinks.play_win();

        // THEN playback quietly no-ops; sound must never abort a run
    }
}
