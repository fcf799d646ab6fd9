use crate::query::types::QueryDescriptor;
use crate::resolvers::{Answer, ResolveError, Resolver, ResultItem};
use tracing::debug;

/// Integer literals (decimal, `0x`, `0b`, `0o`) shown in every base.
pub struct NumberResolver;

impl Resolver for NumberResolver {
    fn name(&self) -> &str {
        "number"
    }

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError> {
        let text = query.text().trim();

        let value = match parse_literal(text) {
            Literal::Value(value) => value,
            Literal::NotANumber => return Ok(Vec::new()),
            // Bare digit runs this long are usually identifiers, not numbers.
            Literal::Overflow { prefixed: false } => {
                debug!(target: "quick_info::number", query = text, "Decimal literal exceeds 64 bits");
                return Ok(Vec::new());
            }
            Literal::Overflow { prefixed: true } => {
                return Err(ResolveError::InvalidInput(format!(
                    "{text} does not fit in 64 bits"
                )));
            }
        };

        let mut rows = vec![
            ("Decimal", value.to_string()),
            ("Hex", format!("0x{value:X}")),
            ("Binary", format!("0b{value:b}")),
            ("Octal", format!("0o{value:o}")),
        ];
        if let Some(c) = u32::try_from(value).ok().and_then(char::from_u32) {
            if !c.is_control() {
                rows.push(("Unicode", format!("U+{value:04X} {c}")));
            }
        }

        Ok(vec![ResultItem::new(Answer::section(
            "Number",
            vec![Answer::pairs(rows)],
        ))])
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Literal {
    Value(u64),
    NotANumber,
    Overflow { prefixed: bool },
}

pub fn parse_literal(text: &str) -> Literal {
    let lower = text.to_ascii_lowercase();
    let (digits, radix, prefixed) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16, true)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2, true)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8, true)
    } else {
        (lower.as_str(), 10, false)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Literal::NotANumber;
    }

    match u64::from_str_radix(digits, radix) {
        Ok(value) => Literal::Value(value),
        Err(_) => Literal::Overflow { prefixed },
    }
}
