//! Microphone capture using cpal

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{Result, ServiceError};

/// Single-shot microphone capture.
///
/// One Listen press records a fixed window of audio from the default input
/// device and hands it back as mono f32 at the requested rate. The device
/// is a single shared resource; overlapping captures are refused.
pub struct AudioCapture {
    is_recording: Arc<AtomicBool>,
}

impl AudioCapture {
    pub fn new() -> Self {
        let host = cpal::default_host();
        match host.default_input_device() {
            Some(device) => {
                info!(
                    "Default input device: {}",
                    device.name().unwrap_or_default()
                );
            }
            None => {
                warn!("No default input device found");
            }
        }

        Self {
            is_recording: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    /// Record `duration` of audio and return it as mono f32 at
    /// `target_rate`. Blocks the calling thread for the whole window;
    /// callers run it on a blocking task.
    pub fn capture(&self, duration: Duration, target_rate: u32) -> Result<Vec<f32>> {
        if self.is_recording.swap(true, Ordering::SeqCst) {
            return Err(ServiceError::Capture("Already listening.".to_string()));
        }

        let result = run_capture(duration, target_rate);
        self.is_recording.store(false, Ordering::SeqCst);
        result
    }
}

fn run_capture(duration: Duration, target_rate: u32) -> Result<Vec<f32>> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| ServiceError::Capture("No microphone found.".to_string()))?;

    let supported = device
        .default_input_config()
        .map_err(|e| ServiceError::Capture(e.to_string()))?;
    let sample_format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();
    let channels = config.channels as usize;
    let native_rate = config.sample_rate.0;

    debug!(
        "Capturing {:?} at {} Hz, {} channel(s), {:?}",
        duration, native_rate, channels, sample_format
    );

    let (tx, rx) = mpsc::channel::<Vec<f32>>();
    let err_fn = |e| warn!("Input stream error: {}", e);

    let stream = match sample_format {
        SampleFormat::F32 => {
            let tx = tx.clone();
            device.build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let _ = tx.send(downmix(data, channels));
                },
                err_fn,
                None,
            )
        }
        SampleFormat::I16 => {
            let tx = tx.clone();
            device.build_input_stream(
                &config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    let samples: Vec<f32> =
                        data.iter().map(|&s| s as f32 / 32768.0).collect();
                    let _ = tx.send(downmix(&samples, channels));
                },
                err_fn,
                None,
            )
        }
        SampleFormat::U16 => {
            let tx = tx.clone();
            device.build_input_stream(
                &config,
                move |data: &[u16], _: &cpal::InputCallbackInfo| {
                    let samples: Vec<f32> = data
                        .iter()
                        .map(|&s| (s as f32 - 32768.0) / 32768.0)
                        .collect();
                    let _ = tx.send(downmix(&samples, channels));
                },
                err_fn,
                None,
            )
        }
        other => {
            return Err(ServiceError::Capture(format!(
                "Unsupported sample format: {:?}",
                other
            )))
        }
    }
    .map_err(|e| ServiceError::Capture(e.to_string()))?;

    stream
        .play()
        .map_err(|e| ServiceError::Capture(e.to_string()))?;

    let mut samples = Vec::new();
    let deadline = Instant::now() + duration;
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(remaining) {
            Ok(chunk) => samples.extend(chunk),
            Err(_) => break,
        }
    }
    drop(stream);

    debug!("Captured {} samples", samples.len());
    Ok(resample(&samples, native_rate, target_rate))
}

/// Average interleaved frames down to a single channel.
fn downmix(data: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return data.to_vec();
    }
    data.chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Linear-interpolation resampler. Good enough for speech headed to a
/// recognition service.
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }
    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = (samples.len() as f64 / ratio) as usize;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * ratio;
        let idx = pos as usize;
        let frac = (pos - idx as f64) as f32;
        let a = samples[idx];
        let b = samples.get(idx + 1).copied().unwrap_or(a);
        out.push(a + (b - a) * frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downmix_averages_channels() {
        let stereo = [0.2, 0.4, -1.0, 1.0];
        let mono = downmix(&stereo, 2);
        assert_eq!(mono.len(), 2);
        assert!((mono[0] - 0.3).abs() < 1e-6);
        assert!(mono[1].abs() < 1e-6);
    }

    #[test]
    fn downmix_passes_mono_through() {
        let mono = [0.1, 0.2, 0.3];
        assert_eq!(downmix(&mono, 1), mono.to_vec());
    }

    #[test]
    fn resample_halves_sample_count() {
        let samples: Vec<f32> = (0..480).map(|i| i as f32 / 480.0).collect();
        let out = resample(&samples, 48000, 16000);
        assert_eq!(out.len(), 160);
        // Values stay monotone for a monotone ramp
        assert!(out.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn resample_identity_when_rates_match() {
        let samples = vec![0.5_f32, -0.5, 0.25];
        assert_eq!(resample(&samples, 16000, 16000), samples);
    }
}
