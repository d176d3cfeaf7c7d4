use std::fmt::{self, Display, Write};

use crate::node::Node;

/// Renders an [`AvlTree`](crate::AvlTree) as a [Graphviz] digraph through its
/// [`Display`] implementation.
///
/// Created by [`AvlTree::to_dot()`](crate::AvlTree::to_dot). Each node is
/// labelled with its key and cached height.
///
/// [Graphviz]: https://graphviz.org/
#[derive(Debug)]
pub struct Dot<'a, K>(pub(crate) Option<&'a Node<K>>);

impl<K> Display for Dot<'_, K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        if let Some(n) = self.0 {
            recurse(n, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse<K, W>(n: &Node<K>, buf: &mut W) -> fmt::Result
where
    W: Write,
    K: Display,
{
    writeln!(buf, r#""{}" [label="{} | h={}"];"#, n.key(), n.key(), n.height())?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(buf, "\"{}\" -> \"{}\";", n.key(), v.key())?;
                recurse(v, buf)?;
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key())?;
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key())?;
            }
        };
    }

    Ok(())
}
