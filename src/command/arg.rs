use std::fmt;

/// A single argument taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Int(i64),
    Text(String),
    /// A comma-separated token, each part coerced on its own
    Tuple(Vec<Arg>),
}

impl Arg {
    /// Coerce a raw token.
    ///
    /// Tokens containing a comma become a [`Arg::Tuple`]; every other token (and
    /// every tuple part) becomes an [`Arg::Int`] when it is an optionally signed
    /// integer literal, and stays [`Arg::Text`] otherwise.
    pub fn parse(token: &str) -> Self {
        if token.contains(',') {
            Arg::Tuple(token.split(',').map(Self::scalar).collect())
        } else {
            Self::scalar(token)
        }
    }

    fn scalar(part: &str) -> Self {
        if is_integer_literal(part) {
            if let Ok(value) = part.parse::<i64>() {
                return Arg::Int(value);
            }
        }
        Arg::Text(part.to_owned())
    }

    /// Numeric value of an integer, or of text that reads as a finite number
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Arg::Int(value) => Some(*value as f32),
            Arg::Text(text) => text.parse::<f32>().ok().filter(|v| v.is_finite()),
            Arg::Tuple(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Arg]> {
        match self {
            Arg::Tuple(parts) => Some(parts),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(value) => write!(f, "{value}"),
            Arg::Text(text) => write!(f, "{text:?}"),
            Arg::Tuple(parts) => {
                f.write_str("(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{part}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn is_integer_literal(part: &str) -> bool {
    let digits = part.strip_prefix(['+', '-']).unwrap_or(part);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(Arg::parse("50"), Arg::Int(50));
        assert_eq!(Arg::parse("+7"), Arg::Int(7));
        assert_eq!(Arg::parse("-12"), Arg::Int(-12));
    }

    #[test]
    fn test_non_integers_stay_text() {
        assert_eq!(Arg::parse("red"), Arg::Text("red".to_owned()));
        assert_eq!(Arg::parse("1.5"), Arg::Text("1.5".to_owned()));
        assert_eq!(Arg::parse("-"), Arg::Text("-".to_owned()));
        assert_eq!(Arg::parse("+-3"), Arg::Text("+-3".to_owned()));
        // too large for i64
        assert_eq!(
            Arg::parse("99999999999999999999"),
            Arg::Text("99999999999999999999".to_owned())
        );
    }

    #[test]
    fn test_comma_tokens_coerce_each_part() {
        assert_eq!(
            Arg::parse("10,-20"),
            Arg::Tuple(vec![Arg::Int(10), Arg::Int(-20)])
        );
        assert_eq!(
            Arg::parse("red,5,"),
            Arg::Tuple(vec![
                Arg::Text("red".to_owned()),
                Arg::Int(5),
                Arg::Text(String::new()),
            ])
        );
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Arg::Int(3).as_number(), Some(3.0));
        assert_eq!(Arg::Text("2.5".to_owned()).as_number(), Some(2.5));
        assert_eq!(Arg::Text("inf".to_owned()).as_number(), None);
        assert_eq!(Arg::Text("abc".to_owned()).as_number(), None);
        assert_eq!(Arg::parse("1,2").as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Arg::parse("10,x").to_string(), "(10, \"x\")");
    }
}
