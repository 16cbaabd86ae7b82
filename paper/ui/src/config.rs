use paper_model::config::Configuration;

const CONFIG: &str = include_str!("../config.json");

/// Load the bundled configuration, falling back to the defaults when it can't be parsed.
pub fn load() -> Configuration {
    parse(CONFIG).unwrap_or_else(|err| {
        log::warn!("Failed to parse configuration, using defaults: {err}");
        Configuration::default()
    })
}

fn parse(content: &str) -> Result<Configuration, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bundled() {
        let config = parse(CONFIG).unwrap();
        assert_eq!(config.global.locale(), "en-US");
        assert_eq!(config.global.product_name(), "Paper");
    }

    #[test]
    fn invalid() {
        assert!(parse("{ global").is_err());
    }
}
