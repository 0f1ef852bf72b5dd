use registar::config::AppConfig;

#[test]
fn load_without_config_file_yields_defaults() {
    // no registar.toml in the crate root during tests
    let config = AppConfig::load();
    assert_eq!(config.print.width, 40);
}
