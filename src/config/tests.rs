#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.tracker_config.save_retries, 3);
            assert_eq!(config.tracker_server.len(), 1);
            assert!(config.tracker_server[0].enabled);
            assert_eq!(config.peer_config.listen_port, 9100);
        }

        #[test]
        fn test_configuration_toml_round_trip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.log_level, config.log_level);
            assert_eq!(parsed.tracker_config.users_file, config.tracker_config.users_file);
            assert_eq!(parsed.peer_config.chunk_size, config.peer_config.chunk_size);
        }

        #[test]
        fn test_configuration_rejects_garbage() {
            assert!(Configuration::load(b"not valid { toml").is_err());
        }

        #[test]
        fn test_validate_accepts_defaults() {
            let config = Configuration::init();
            Configuration::validate(&config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.tracker_server[0].bind_address = String::from("not-an-address");
            Configuration::validate(&config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_zero_chunk_size() {
            let mut config = Configuration::init();
            config.peer_config.chunk_size = 0;
            Configuration::validate(&config);
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::other("disk on fire"));
            assert!(format!("{}", error).contains("disk on fire"));
        }
    }
}
