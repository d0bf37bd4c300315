/*!
# Hyeo-ung

An interpreter for the Hyeo-ung esoteric programming language.
Programs are Hangul syllables with dots, hearts, and a pair of
punctuation marks; everything else is a comment. Values live on
numbered stacks of `f64`, and control flow is a jump table keyed by
the signals that heart marks raise.

```
use hyeong::mach::Runtime;

let mut runtime = Runtime::new("");
runtime.run("형...").unwrap();
assert_eq!(runtime.state().values(3), [3.0]);
```

*/

pub mod lang;
pub mod mach;
pub mod term;
