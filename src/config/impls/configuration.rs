use std::fs::File;
use std::io::Write;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::tracker_server_config::TrackerServerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                users_file: String::from("users.csv"),
                admin_stats_file: String::from("admin_stats.csv"),
                save_retries: 3,
                save_retry_delay_ms: 250,
            },
            tracker_server: vec!(
                TrackerServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:9000"),
                }
            ),
            peer_config: PeerConfig {
                tracker_address: String::from("127.0.0.1:9000"),
                listen_address: String::from("0.0.0.0"),
                listen_port: 9100,
                shared_folder: String::from("shared"),
                download_folder: String::from("downloads"),
                chunk_size: 8192,
                query_timeout_ms: 3000,
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let mut config = Configuration::init();
        match Configuration::load_file("config.toml") {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&config).unwrap();
                let save_file = Configuration::save_file("config.toml", config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config);
        Ok(config)
    }

    pub fn validate(config: &Configuration) {
        for server in &config.tracker_server {
            Self::validate_bind_address("[tracker_server] bind_address", &server.bind_address);
        }
        Self::validate_bind_address("[peer_config] tracker_address", &config.peer_config.tracker_address);

        if config.peer_config.chunk_size == 0 {
            panic!("[VALIDATE CONFIG] [peer_config] chunk_size must be greater than zero");
        }
        if config.peer_config.listen_port == u16::MAX {
            panic!("[VALIDATE CONFIG] [peer_config] listen_port {} leaves no room for the query responder port", config.peer_config.listen_port);
        }
    }

    pub fn validate_bind_address(name: &str, value: &str)
    {
        if value.parse::<std::net::SocketAddr>().is_err() {
            panic!("[VALIDATE CONFIG] Error checking {} [:] Value: \"{}\" is not a valid socket address", name, value);
        }
    }
}
