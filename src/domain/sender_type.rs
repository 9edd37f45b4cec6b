use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SenderType {
    #[default]
    User,
    Bot,
}

impl SenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderType::User => "user",
            SenderType::Bot => "bot",
        }
    }
}

impl FromStr for SenderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(SenderType::User),
            "bot" => Ok(SenderType::Bot),
            _ => Err(format!("Invalid sender type: {}", s)),
        }
    }
}

impl fmt::Display for SenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_when_parsing_then_accepts() {
        assert_eq!("User".parse::<SenderType>(), Ok(SenderType::User));
        assert_eq!("BOT".parse::<SenderType>(), Ok(SenderType::Bot));
    }

    #[test]
    fn given_unknown_value_when_parsing_then_fails() {
        assert!("agent".parse::<SenderType>().is_err());
    }
}
