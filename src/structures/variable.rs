/*!
Named variables, i.e. what an [atom](crate::structures::atom) stands for.

- A threshold `x(i, h, k)` is true when mark *k* on subject *i* is at or above the frontier of boundary *h*.
- A coalition `y(B)` is true when the subjects of *B* are, together, sufficient to clear a boundary.

```rust
# use mrsort_sat::structures::{coalition::Coalition, variable::Variable};
let threshold = Variable::Threshold { subject: 0, boundary: 1, mark: 12 };
assert_eq!(threshold.to_string(), "x(0, 1, 12)");

let coalition = Variable::Coalition([0, 2].into_iter().collect::<Coalition>());
assert_eq!(coalition.to_string(), "y{0, 2}");
```
*/

use crate::structures::{
    coalition::Coalition,
    dataset::{Boundary, Mark, Subject},
};

/// A variable of an MR-Sort instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    Threshold {
        subject: Subject,
        boundary: Boundary,
        mark: Mark,
    },
    Coalition(Coalition),
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Threshold {
                subject,
                boundary,
                mark,
            } => write!(f, "x({subject}, {boundary}, {mark})"),
            Self::Coalition(coalition) => write!(f, "y{coalition}"),
        }
    }
}
