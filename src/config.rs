use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub default_target_reps: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")?;
        let default_target_reps = match env::var("DEFAULT_TARGET_REPS") {
            Ok(value) => parse_target_reps(&value)?,
            Err(_) => 1,
        };

        Ok(Self {
            port,
            default_target_reps,
        })
    }
}

fn parse_target_reps(value: &str) -> anyhow::Result<u32> {
    let reps: u32 = value
        .trim()
        .parse()
        .with_context(|| format!("DEFAULT_TARGET_REPS is not a number: {}", value))?;
    if reps == 0 {
        anyhow::bail!("DEFAULT_TARGET_REPS must be at least 1");
    }
    Ok(reps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_reps() {
        assert_eq!(parse_target_reps("3").unwrap(), 3);
        assert_eq!(parse_target_reps(" 5 ").unwrap(), 5);
        assert!(parse_target_reps("0").is_err());
        assert!(parse_target_reps("five").is_err());
    }
}
