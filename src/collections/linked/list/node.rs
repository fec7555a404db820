pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of the chain. Each node owns the one after it, so the list as a whole is a
/// strictly singly-owned chain with no back references.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node {
            value,
            next,
        })
    }
}
