/*!
Computes which elements of a subtree participate in sequential (Tab-key)
keyboard navigation, and in what order.

The two entry points are [`is_tabbable`], a pure predicate over a single
element, and [`tabbable`], which walks a subtree and returns its elements in
native tab order: positive-tabindex elements first, ascending, then
zero/implicit-index elements in document order.

# Example

```
use kbnav_dom::parse::parse;
use kbnav_tabbable::{tabbable, CheckOptions};

let document = parse(r##"<button>a</button><a href="#">b</a><a>c</a>"##).unwrap();
let order = tabbable(&document.body().unwrap(), &CheckOptions::default());
assert_eq!(order.len(), 2); // the href-less anchor is skipped
```
*/

mod is_tabbable;
mod option;
mod tabbable;
mod tabindex;

pub use crate::is_tabbable::is_tabbable;
pub use crate::option::CheckOptions;
pub use crate::tabbable::tabbable;
pub use crate::tabindex::effective_tabindex;
