//! Configuration loading tests

use std::io::Write;

use rt_translator::config::Config;

#[test]
fn defaults_cover_every_field() {
    let config = Config::default();

    assert_eq!(config.system_config.host, "127.0.0.1");
    assert_eq!(config.system_config.port, 12390);
    assert_eq!(config.system_config.static_dir, "web");
    assert!(config.system_config.background_image.is_none());

    assert_eq!(config.service_config.translation.source_lang, "auto");
    assert_eq!(config.service_config.translation.timeout_secs, 10);
    assert_eq!(config.service_config.recognition.listen_secs, 5);
    assert_eq!(config.service_config.recognition.sample_rate, 16000);

    assert!(config.service_config.speech.rate.is_none());
    assert!(config.service_config.speech.volume.is_none());
    assert!(config.service_config.speech.voice.is_none());
}

#[test]
fn empty_yaml_mapping_is_a_valid_config() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "{{}}").unwrap();

    let config = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.system_config.port, 12390);
}

#[test]
fn yaml_overrides_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        concat!(
            "system_config:\n",
            "  port: 9000\n",
            "  background_image: /tmp/bg.jpg\n",
            "service_config:\n",
            "  recognition:\n",
            "    listen_secs: 8\n",
            "  speech:\n",
            "    rate: 50\n",
        )
    )
    .unwrap();

    let config = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.system_config.port, 9000);
    assert_eq!(
        config.system_config.background_image.as_deref(),
        Some("/tmp/bg.jpg")
    );
    assert_eq!(config.service_config.recognition.listen_secs, 8);
    assert_eq!(config.service_config.speech.rate, Some(50));
    // Untouched sections keep their defaults
    assert_eq!(config.service_config.translation.timeout_secs, 10);
}

#[test]
fn json_config_loads_too() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"{{"system_config": {{"host": "0.0.0.0"}}, "service_config": {{}}}}"#
    )
    .unwrap();

    let config = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.system_config.host, "0.0.0.0");
    assert_eq!(config.system_config.port, 12390);
}

#[test]
fn missing_file_is_an_error() {
    assert!(Config::load("/nonexistent/conf.yaml").is_err());
}
