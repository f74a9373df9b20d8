use crate::commands::{find::MESSAGE_USAGE, FindCommand};
use crate::error::{ParseError, ParseResult};

/// Parse the arguments of `find` into a [`FindCommand`].
pub fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(MESSAGE_USAGE.to_string()));
    }
    Ok(FindCommand::new(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_find() {
        let cmd = parse_find("  villa \t loft ").unwrap();
        assert_eq!(cmd.keywords(), &["villa", "loft"]);
        assert!(parse_find("   ").is_err());
    }
}
