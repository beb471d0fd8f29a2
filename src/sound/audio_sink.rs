use std::sync::{Arc, RwLock};

use rodio::source::Source;
use rodio::{OutputStream, Sink};

/// Holds an optional output stream and sink. Audio is cosmetic: when either
/// is missing (no device, init failure) every call degrades to a logged
/// no-op and the caller carries on.
pub struct AudioSink {
    os: Option<Arc<OutputStream>>,
    sink: Option<Arc<RwLock<Sink>>>
}

impl AudioSink {
    pub fn new() -> AudioSink {
        AudioSink { os: None, sink: None }
    }

    pub fn set_os(&mut self, os: Option<Arc<OutputStream>>) {
        self.os = os;
    }

    pub fn set_sink(&mut self, sink: Option<Arc<RwLock<Sink>>>) {
        self.sink = sink;
    }

    pub fn is_available(&self) -> bool {
        self.os.is_some() && self.sink.is_some()
    }

    pub fn append<S>(&self, source: S)
    where
        S: Source<Item = f32> + Send + 'static
    {
        if let Some(sink) = &self.sink {
            let writeable = sink.write();
            if let Ok(w) = writeable {
                w.append(source);
            } else {
                log::error!("No write lock on the audio sink.");
            }
        } else {
            log::debug!("No audio sink, dropping source.");
        }
    }
}
