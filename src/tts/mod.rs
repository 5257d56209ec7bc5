pub mod interface;
pub mod synth;
pub mod factory;

pub use interface::SpeechInterface;
pub use synth::NativeSynth;
pub use factory::SynthFactory;
