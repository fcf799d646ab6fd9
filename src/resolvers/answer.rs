/// Renderable content produced by a resolver.
///
/// All strings are plain text; the renderer escapes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Monospaced text, e.g. digests.
    Fixed(String),
    /// Label/value rows.
    Pairs(Vec<(String, String)>),
    Link {
        text: String,
        url: String,
    },
    /// A link that re-runs `query` when followed.
    QueryLink {
        query: String,
        caption: String,
    },
    List(Vec<Answer>),
    Section {
        title: String,
        items: Vec<Answer>,
    },
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Answer::Text(text.into())
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Answer::Fixed(text.into())
    }

    pub fn pairs<K: Into<String>, V: Into<String>>(rows: impl IntoIterator<Item = (K, V)>) -> Self {
        Answer::Pairs(rows.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn section(title: impl Into<String>, items: Vec<Answer>) -> Self {
        Answer::Section {
            title: title.into(),
            items,
        }
    }
}

/// One value contributed by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    answer: Answer,
    help: bool,
}

impl ResultItem {
    pub fn new(answer: Answer) -> Self {
        Self {
            answer,
            help: false,
        }
    }

    /// An item that marks the whole query as a help query.
    pub fn help(answer: Answer) -> Self {
        Self { answer, help: true }
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn is_help(&self) -> bool {
        self.help
    }
}

impl From<Answer> for ResultItem {
    fn from(answer: Answer) -> Self {
        ResultItem::new(answer)
    }
}
