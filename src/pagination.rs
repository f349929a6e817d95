use crate::config::LimitPolicy;
use crate::error::RecipeError;
use crate::model::char_len;

/// Constant markup wrapped around every sealed page.
///
/// The overhead is fixed per page, which is what lets the packer account
/// for it before a page is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWrap {
    prefix: String,
    suffix: String,
}

impl PageWrap {
    /// Custom wrap with the given constant prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        PageWrap {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Fenced code block, the wrap chat surfaces render monospaced.
    pub fn code_block() -> Self {
        PageWrap::new("```\n", "```")
    }

    /// No markup; pages are sealed as-is.
    pub fn none() -> Self {
        PageWrap::new("", "")
    }

    /// Constant character overhead the markup adds to any page.
    pub fn overhead(&self) -> usize {
        char_len(&self.prefix) + char_len(&self.suffix)
    }

    /// Character length `body` will have once wrapped.
    pub fn wrapped_len(&self, body: &str) -> usize {
        self.overhead() + char_len(body)
    }

    /// Wrap a finished page body.
    pub fn apply(&self, body: &str) -> String {
        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

/// Splits rendered rows into pages that fit a message-size ceiling.
///
/// Rows are packed greedily in input order; every page body starts with the
/// header, rows are never reordered or truncated, and the ceiling applies
/// to the wrapped page, markup included.
#[derive(Debug, Clone)]
pub struct Paginator {
    header: String,
    empty_message: String,
    wrap: PageWrap,
    max_message_length: usize,
}

impl Paginator {
    /// Set up a paginator.
    ///
    /// A blank `header` or `empty_message` is a programmer error, reported
    /// as [`RecipeError::Setup`] rather than as user-facing validation.
    pub fn new(
        header: &str,
        empty_message: &str,
        wrap: PageWrap,
        limits: &LimitPolicy,
    ) -> Result<Self, RecipeError> {
        if header.trim().is_empty() {
            return Err(RecipeError::Setup("header must not be blank".to_string()));
        }
        if empty_message.trim().is_empty() {
            return Err(RecipeError::Setup(
                "empty message must not be blank".to_string(),
            ));
        }

        Ok(Paginator {
            header: header.to_string(),
            empty_message: empty_message.to_string(),
            wrap,
            max_message_length: limits.max_message_length,
        })
    }

    /// Render `rows` in order and pack them into pages.
    ///
    /// An empty collection produces a single page holding the fallback
    /// message, unwrapped, since there is nothing to pack. Otherwise a row
    /// moves to a fresh header-seeded page when appending it would push the
    /// wrapped page over the ceiling, and the final buffer is always
    /// sealed. A row that cannot fit even on a fresh page is kept whole:
    /// the page is emitted oversized rather than the row truncated.
    pub fn paginate<T>(&self, rows: &[T], mut render: impl FnMut(&T) -> String) -> Vec<String> {
        if rows.is_empty() {
            return vec![self.empty_message.clone()];
        }

        let mut pages = Vec::new();
        let mut buffer = self.seeded_buffer();

        for row in rows {
            let rendered = render(row);
            // The candidate is the current buffer plus the bare row; the
            // ceiling is compared against its wrapped length, not raw.
            let candidate_len = self.wrap.wrapped_len(&buffer) + char_len(&rendered);
            if candidate_len > self.max_message_length {
                pages.push(self.wrap.apply(&buffer));
                buffer = self.seeded_buffer();
            }
            buffer.push_str(&rendered);
            buffer.push('\n');
        }

        pages.push(self.wrap.apply(&buffer));
        pages
    }

    fn seeded_buffer(&self) -> String {
        format!("{}\n", self.header)
    }
}
