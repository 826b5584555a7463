/// One line split at its first space.
#[derive(Debug, PartialEq, Eq)]
pub struct Statement<'a> {
    /// Lowercased, OBJ keywords are matched case-insensitively.
    pub keyword: String,
    pub remainder: &'a str,
}

/// Returns `None` for lines carrying nothing after a keyword.
pub fn split_statement(line: &str) -> Option<Statement<'_>> {
    let (keyword, remainder) = line.trim().split_once(' ')?;
    Some(Statement {
        keyword: keyword.to_ascii_lowercase(),
        remainder,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_at_first_space_only() {
        let statement = split_statement("  V 1 2 3\r").unwrap();
        assert_eq!(statement.keyword, "v");
        assert_eq!(statement.remainder, "1 2 3");
    }

    #[test]
    fn remainder_is_not_trimmed_further() {
        let statement = split_statement("o  Cube").unwrap();
        assert_eq!(statement.remainder, " Cube");
    }

    #[test]
    fn lines_without_separator_are_skipped() {
        assert_eq!(split_statement(""), None);
        assert_eq!(split_statement("   "), None);
        assert_eq!(split_statement("o   "), None);
        assert_eq!(split_statement("v\t1\t2\t3"), None);
    }
}
