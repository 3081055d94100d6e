use super::*;

#[test]
fn test_default_config() {
    let config = BenchConfig::default();

    assert_eq!(config.workers, 4);
    assert_eq!(config.top_n, 10);
    assert_eq!(config.partition_policy, PartitionPolicy::Truncating);
    assert_eq!(config.files.len(), 7);
    assert_eq!(config.files[0], PathBuf::from("calgary/bib"));
    assert_eq!(config.files[6], PathBuf::from("calgary/trans"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(BenchConfig::default().validate().is_ok());
}

#[test]
fn test_config_validation() {
    let config = BenchConfig {
        workers: 0,
        ..BenchConfig::default()
    };
    assert!(config.validate().is_err());

    let config = BenchConfig {
        top_n: 0,
        ..BenchConfig::default()
    };
    assert!(config.validate().is_err());

    let config = BenchConfig {
        files: Vec::new(),
        ..BenchConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_file_lookup() {
    let config = BenchConfig::default();
    assert_eq!(config.file(1), Some(&PathBuf::from("calgary/paper1")));
    assert_eq!(config.file(7), None);
}
