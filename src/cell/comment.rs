//! Cell comments.
//!
//! A comment is exclusively owned by at most one cell at a time. Clones
//! share the same attachment token, so attaching a clone of an attached
//! comment fails the same way the original would.

use std::rc::Rc;

use crate::error::{Error, Result};

/// A note attached to a single cell.
#[derive(Debug, Clone)]
pub struct Comment {
    text: String,
    author: String,
    attached: Rc<std::cell::Cell<bool>>,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Comment {
            text: text.into(),
            author: author.into(),
            attached: Rc::new(std::cell::Cell::new(false)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Claim the comment for a cell. Fails if this comment (or a clone
    /// of it) is already attached somewhere.
    pub(crate) fn attach(&self) -> Result<()> {
        if self.attached.get() {
            return Err(Error::CommentReuse);
        }
        self.attached.set(true);
        Ok(())
    }

    pub(crate) fn detach(&self) {
        self.attached.set(false);
    }
}

impl PartialEq for Comment {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.author == other.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_exclusive() {
        let comment = Comment::new("note", "author");
        assert!(comment.attach().is_ok());
        assert!(matches!(comment.attach(), Err(Error::CommentReuse)));
        comment.detach();
        assert!(comment.attach().is_ok());
    }

    #[test]
    fn clones_share_the_attachment_token() {
        let comment = Comment::new("note", "author");
        let alias = comment.clone();
        comment.attach().unwrap();
        assert!(matches!(alias.attach(), Err(Error::CommentReuse)));
    }
}
