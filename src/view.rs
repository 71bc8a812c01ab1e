//! Draws viewable objects into a terminal window.

use crate::twitter::Tweet;
use colored::Colorize;

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    color: bool,
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use tweetsearch::view::ViewOptions;
    /// let opts = ViewOptions::build().color(true).build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct ViewOptionsBuilder {
    color: bool,
}

impl ViewOptionsBuilder {
    /// Sets the "color" option to true or false.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions { color: self.color }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

impl Viewable for Tweet {
    /// Renders the author and timestamp on one line and the body on the
    /// next, followed by a trailing newline.
    fn view(&self, opts: &ViewOptions) -> String {
        let handle = format!("@{}", self.handle());
        let handle = if opts.color {
            handle.cyan().bold().to_string()
        } else {
            handle
        };
        format!("{handle} - {}\n{}\n", self.created_at(), self.text())
    }
}
