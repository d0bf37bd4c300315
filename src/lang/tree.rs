use std::mem;

/// Decision tree attached to a command.
///
/// Comparators pop one value and branch; `Signal` selects a jump
/// channel; `Empty` pops nothing and selects none.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Empty,
    Signal(u8),
    LessThan { left: Box<Tree>, right: Box<Tree> },
    Equal { left: Box<Tree>, right: Box<Tree> },
}

impl Default for Tree {
    fn default() -> Tree {
        Tree::Empty
    }
}

impl Tree {
    pub fn less_than(left: Tree, right: Tree) -> Tree {
        Tree::LessThan {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn equal(left: Tree, right: Tree) -> Tree {
        Tree::Equal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn is_comparator(&self) -> bool {
        matches!(self, Tree::LessThan { .. } | Tree::Equal { .. })
    }

    /// Walks the tree against live stack values.
    ///
    /// Each comparator pops exactly one value. A NaN comparison never
    /// holds, so NaN always descends right.
    pub fn evaluate<E, F>(&self, threshold: f64, mut pop: F) -> Result<u8, E>
    where
        F: FnMut() -> Result<f64, E>,
    {
        let mut node = self;
        loop {
            node = match node {
                Tree::Empty => return Ok(0),
                Tree::Signal(code) => return Ok(*code),
                Tree::LessThan { left, right } => {
                    if pop()? < threshold {
                        left
                    } else {
                        right
                    }
                }
                Tree::Equal { left, right } => {
                    if pop()? == threshold {
                        left
                    } else {
                        right
                    }
                }
            };
        }
    }
}

/// Builds a command's tree one punctuation mark at a time.
///
/// `tree` is the subtree under construction and `chain` the list of
/// question nodes already closed over it. The finished tree is the
/// chain with the last subtree attached at its open right slot.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Tree,
    chain: Tree,
}

impl TreeBuilder {
    pub fn question(&mut self) {
        let node = Tree::less_than(mem::take(&mut self.tree), Tree::Empty);
        if self.chain.is_comparator() {
            extend(&mut self.chain, node);
        } else {
            self.chain = node;
        }
    }

    pub fn bang(&mut self) {
        if let Tree::Signal(code) = self.tree {
            self.tree = Tree::equal(Tree::Signal(code), Tree::Empty);
        } else if self.tree.is_comparator() {
            wrap_rightmost(&mut self.tree);
        } else {
            self.tree = Tree::equal(Tree::Empty, Tree::Empty);
        }
    }

    pub fn heart(&mut self, code: u8) {
        if let Tree::Empty = self.tree {
            self.tree = Tree::Signal(code);
        } else if self.tree.is_comparator() {
            fill_rightmost(&mut self.tree, code);
        }
        // a heart facing a slot already holding a signal is ignored
    }

    pub fn finish(mut self) -> Tree {
        let tree = mem::take(&mut self.tree);
        if self.chain.is_comparator() {
            let mut chain = mem::take(&mut self.chain);
            extend(&mut chain, tree);
            chain
        } else {
            tree
        }
    }
}

/// Replaces the open right slot of the rightmost comparator.
fn extend(node: &mut Tree, new: Tree) {
    if let Tree::LessThan { right, .. } | Tree::Equal { right, .. } = node {
        if right.is_comparator() {
            extend(right, new);
        } else {
            **right = new;
        }
    }
}

/// Closes the rightmost leaf slot under an `Equal` node.
fn wrap_rightmost(node: &mut Tree) {
    if let Tree::LessThan { right, .. } | Tree::Equal { right, .. } = node {
        if right.is_comparator() {
            wrap_rightmost(right);
        } else if let Tree::Signal(code) = **right {
            **right = Tree::equal(Tree::Signal(code), Tree::Empty);
        } else {
            **right = Tree::equal(Tree::Empty, Tree::Empty);
        }
    }
}

fn fill_rightmost(node: &mut Tree, code: u8) {
    if let Tree::LessThan { right, .. } | Tree::Equal { right, .. } = node {
        if right.is_comparator() {
            fill_rightmost(right, code);
        } else if let Tree::Empty = **right {
            **right = Tree::Signal(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_then_bang() {
        // ♥♡! closes the first heart under an Equal, drops the second
        let mut builder = TreeBuilder::default();
        builder.heart(2);
        builder.heart(13);
        builder.bang();
        assert_eq!(
            builder.finish(),
            Tree::equal(Tree::Signal(2), Tree::Empty)
        );
    }

    #[test]
    fn question_chain_with_bang() {
        // ?♥!💖
        let mut builder = TreeBuilder::default();
        builder.question();
        builder.heart(2);
        builder.bang();
        builder.heart(5);
        assert_eq!(
            builder.finish(),
            Tree::less_than(
                Tree::Empty,
                Tree::equal(Tree::Signal(2), Tree::Signal(5)),
            )
        );
    }

    #[test]
    fn heart_question_bang_heart() {
        // ♥?!♡
        let mut builder = TreeBuilder::default();
        builder.heart(2);
        builder.question();
        builder.bang();
        builder.heart(13);
        assert_eq!(
            builder.finish(),
            Tree::less_than(
                Tree::Signal(2),
                Tree::equal(Tree::Empty, Tree::Signal(13)),
            )
        );
    }

    #[test]
    fn nested_questions() {
        // ?💖?
        let mut builder = TreeBuilder::default();
        builder.question();
        builder.heart(5);
        builder.question();
        assert_eq!(
            builder.finish(),
            Tree::less_than(
                Tree::Empty,
                Tree::less_than(Tree::Signal(5), Tree::Empty),
            )
        );
    }

    #[test]
    fn evaluate_empty_pops_nothing() {
        let mut pops = 0;
        let code = Tree::Empty
            .evaluate(1.0, || -> Result<f64, ()> {
                pops += 1;
                Ok(0.0)
            })
            .unwrap();
        assert_eq!(code, 0);
        assert_eq!(pops, 0);
    }

    #[test]
    fn evaluate_branches() {
        let tree = Tree::less_than(Tree::Signal(2), Tree::Signal(3));
        let low = tree.evaluate(5.0, || -> Result<f64, ()> { Ok(1.0) });
        let high = tree.evaluate(5.0, || -> Result<f64, ()> { Ok(9.0) });
        assert_eq!(low, Ok(2));
        assert_eq!(high, Ok(3));
    }

    #[test]
    fn evaluate_nan_goes_right() {
        let less = Tree::less_than(Tree::Signal(2), Tree::Signal(3));
        let equal = Tree::equal(Tree::Signal(2), Tree::Signal(3));
        assert_eq!(
            less.evaluate(5.0, || -> Result<f64, ()> { Ok(f64::NAN) }),
            Ok(3)
        );
        assert_eq!(
            equal.evaluate(5.0, || -> Result<f64, ()> { Ok(f64::NAN) }),
            Ok(3)
        );
    }

    #[test]
    fn evaluate_propagates_errors() {
        let tree = Tree::less_than(Tree::Signal(2), Tree::Signal(3));
        let result = tree.evaluate(5.0, || -> Result<f64, &str> { Err("gone") });
        assert_eq!(result, Err("gone"));
    }
}
