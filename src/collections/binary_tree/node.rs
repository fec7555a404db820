use std::fmt::{self, Debug, Display, Formatter};

pub(crate) type Branch<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            left: None,
            right: None,
            value,
        })
    }
}

/// Renders a branch as `(value left right)`, with `()` standing in for an empty branch.
pub(crate) struct Parenthesised<'a, T>(pub &'a Branch<T>);

enum Token<'a, T> {
    Branch(&'a Branch<T>),
    Text(&'static str),
}

impl<T: Display> Display for Parenthesised<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Pending output, next to be written on top.
        let mut pending = vec![Token::Branch(self.0)];
        while let Some(token) = pending.pop() {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Branch(None) => f.write_str("()")?,
                Token::Branch(Some(node)) => {
                    write!(f, "({} ", node.value)?;
                    pending.push(Token::Text(")"));
                    pending.push(Token::Branch(&node.right));
                    pending.push(Token::Text(" "));
                    pending.push(Token::Branch(&node.left));
                },
            }
        }
        Ok(())
    }
}

/// Draws a branch sideways, with left children above their parent and right children below. Each
/// line is prefixed with one marker per ancestor, so the output grows with `n * h`.
pub(crate) struct Sideways<'a, T>(pub &'a Branch<T>);

enum Line<'a, T> {
    Branch(&'a Branch<T>, String),
    Value(&'a T, String),
}

impl<T: Debug> Debug for Sideways<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Line::Branch(self.0, String::new())];
        let mut separator = "";
        while let Some(line) = pending.pop() {
            match line {
                Line::Branch(Some(node), prefix) => {
                    pending.push(Line::Branch(&node.right, prefix.clone() + "└    "));
                    pending.push(Line::Value(&node.value, prefix.clone()));
                    pending.push(Line::Branch(&node.left, prefix + "┌    "));
                },
                Line::Branch(None, prefix) => {
                    write!(f, "{separator}{prefix}-")?;
                    separator = "\n";
                },
                Line::Value(value, prefix) => {
                    write!(f, "{separator}{prefix}({value:?})")?;
                    separator = "\n";
                },
            }
        }
        Ok(())
    }
}
