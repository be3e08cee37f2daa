use crate::error::{BookError, Result};

/// Checks that `args` holds exactly `N` tokens and borrows them as an array.
pub fn expect_args<'a, const N: usize>(
    command: &str,
    usage: &'static str,
    args: &'a [String],
) -> Result<[&'a str; N]> {
    if args.len() != N {
        return Err(BookError::Argument {
            command: command.to_string(),
            expected: N,
            got: args.len(),
            usage,
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_count_borrows_tokens() {
        let args = strings(&["alice", "1234567890"]);
        let [name, phone] = expect_args::<2>("add", "add <name> <phone>", &args).unwrap();
        assert_eq!(name, "alice");
        assert_eq!(phone, "1234567890");
    }

    #[test]
    fn too_few_and_too_many() {
        let few = strings(&["alice"]);
        let many = strings(&["alice", "1", "2"]);
        assert!(expect_args::<2>("add", "add <name> <phone>", &few).is_err());
        assert!(expect_args::<2>("add", "add <name> <phone>", &many).is_err());
    }

    #[test]
    fn error_message_names_usage() {
        let err = expect_args::<1>("phone", "phone <name>", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'phone' takes 1 argument(s), got 0. Usage: phone <name>"
        );
    }
}
