use serde::{Deserialize, Serialize};

use std::env;
use std::fs::File;
use std::io::Read;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub homeserver_url: String,
    pub bot_user_id: String,
    pub room_id: String,
}

impl Config {
    pub fn read() -> Self {
        let path = match env::var("CONFIG_PATH") {
            Ok(val) => val,
            Err(_) => "./config.toml".to_string(),
        };

        let mut file = File::open(path).expect("Unable to open configuration file");
        let mut data = String::new();
        file.read_to_string(&mut data)
            .expect("Unable to read configuration file");

        toml::from_str(&data).expect("Unable to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parse_config() {
        let data = "\
            homeserver_url = \"https://matrix.local\"\n\
            bot_user_id = \"@anicobot:matrix.local\"\n\
            room_id = \"!abcdef:matrix.local\"\n";

        let config: Config = toml::from_str(data).unwrap();
        assert_eq!(config.homeserver_url, "https://matrix.local");
        assert_eq!(config.bot_user_id, "@anicobot:matrix.local");
        assert_eq!(config.room_id, "!abcdef:matrix.local");
    }
}
