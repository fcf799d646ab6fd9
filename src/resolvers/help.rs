use crate::query::types::QueryDescriptor;
use crate::resolvers::{Answer, ResolveError, Resolver, ResultItem};
use tracing::debug;

const EXAMPLES: &[(&str, &str)] = &[
    ("8.8.8.8", "details about an IPv4 or IPv6 address"),
    ("ip", "the address you are connecting from"),
    ("0xff", "a number in decimal, hex, binary and octal"),
    ("sha256 hello", "SHA-256 digest of the text after the keyword"),
    ("1700000000", "a unix timestamp as a UTC date"),
    ("2024-02-29", "weekday, ISO week and day of year of a date"),
    ("8.8.8.8|0x2a", "several queries at once, separated by |"),
];

pub fn is_help_query(text: &str) -> bool {
    let text = text.trim();
    text == "?" || text.eq_ignore_ascii_case("help")
}

pub struct HelpResolver;

impl Resolver for HelpResolver {
    fn name(&self) -> &str {
        "help"
    }

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError> {
        if !is_help_query(query.text()) {
            return Ok(Vec::new());
        }
        debug!(target: "quick_info::help", "Serving help");

        let examples = EXAMPLES
            .iter()
            .map(|(query, caption)| Answer::QueryLink {
                query: query.to_string(),
                caption: caption.to_string(),
            })
            .collect();

        Ok(vec![ResultItem::help(Answer::section(
            "Type a query, for example:",
            examples,
        ))])
    }
}
