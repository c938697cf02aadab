//! A focus trap over the tabbable elements of a container.

use kbnav_dom::Element;
use kbnav_tabbable::{tabbable, CheckOptions};

/// Cycles keyboard focus through the tabbable elements of a container.
///
/// The trap never caches the tabbable list: every step recomputes it
/// against the current tree, so elements that appear, disappear, or become
/// disabled between keystrokes are picked up immediately.
///
/// The trap does not move focus itself; it answers "which element should
/// receive focus" and leaves the actual focusing to the host.
pub struct FocusTrap {
    root: Element,
    options: CheckOptions,
    last_index: usize,
    focused: Option<Element>,
}

impl FocusTrap {
    /// Creates a trap over the descendants of `root`.
    pub fn new(root: Element, options: CheckOptions) -> Self {
        Self {
            root,
            options,
            last_index: 0,
            focused: None,
        }
    }

    /// Returns the element focus should land on when the trap activates:
    /// the caller-designated target if given, otherwise the tabbable entry
    /// at the last-remembered index.
    ///
    /// Returns [`None`] when no target is designated and the container has
    /// no entry at that index.
    pub fn activate(&mut self, initial: Option<Element>) -> Option<Element> {
        let target = initial.or_else(|| {
            let list = tabbable(&self.root, &self.options);
            list.get(self.last_index).cloned()
        })?;
        self.focused = Some(target.clone());
        Some(target)
    }

    /// Returns the element after the tracked one, wrapping from last to
    /// first.
    pub fn next(&mut self) -> Option<Element> {
        self.step(1)
    }

    /// Returns the element before the tracked one, wrapping from first to
    /// last.
    pub fn previous(&mut self) -> Option<Element> {
        self.step(-1)
    }

    /// The element the trap believes is focused.
    pub fn focused(&self) -> Option<&Element> {
        self.focused.as_ref()
    }

    /// Records that focus moved by means other than the trap, e.g. a
    /// pointer click inside the container.
    pub fn set_focused(&mut self, element: Element) {
        self.focused = Some(element);
    }

    fn step(&mut self, delta: isize) -> Option<Element> {
        let list = tabbable(&self.root, &self.options);
        if list.is_empty() {
            log::debug!("focus trap has no tabbable elements, staying put");
            return None;
        }
        let len = list.len() as isize;
        let tracked = self
            .focused
            .as_ref()
            .and_then(|focused| list.iter().position(|e| e.ptr_eq(focused)));
        // When the tracked element left the list, Tab restarts at the first
        // entry and Shift+Tab at the last.
        let index = match tracked {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None if delta > 0 => 0,
            None => list.len() - 1,
        };
        self.last_index = index;
        let target = list[index].clone();
        self.focused = Some(target.clone());
        Some(target)
    }
}

#[cfg(test)]
mod test {
    use kbnav_dom::parse::parse;
    use kbnav_dom::Element;
    use kbnav_tabbable::CheckOptions;
    use markup5ever::{local_name, ns, Attribute, QualName};
    use pretty_assertions::assert_eq;
    use tendril::StrTendril;

    use crate::FocusTrap;

    #[ctor::ctor]
    fn init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn id(element: &Element) -> String {
        element.attr(&local_name!("id")).unwrap().to_string()
    }

    const THREE_BUTTONS: &str = r#"<div id="trap">
        <button id="a">a</button>
        <button id="b">b</button>
        <button id="c">c</button>
    </div>"#;

    #[test]
    fn activate_prefers_the_designated_target() {
        let document = parse(THREE_BUTTONS).unwrap();
        let mut trap = FocusTrap::new(
            document.get_element_by_id("trap").unwrap(),
            CheckOptions::default(),
        );
        let b = document.get_element_by_id("b").unwrap();
        assert_eq!(id(&trap.activate(Some(b)).unwrap()), "b");
        assert_eq!(id(&trap.next().unwrap()), "c");
    }

    #[test]
    fn activate_falls_back_to_the_remembered_index() {
        let document = parse(THREE_BUTTONS).unwrap();
        let mut trap = FocusTrap::new(
            document.get_element_by_id("trap").unwrap(),
            CheckOptions::default(),
        );
        assert_eq!(id(&trap.activate(None).unwrap()), "a");
        trap.next();
        trap.next();
        assert_eq!(id(&trap.activate(None).unwrap()), "c");
    }

    #[test]
    fn stepping_wraps_in_both_directions() {
        let document = parse(THREE_BUTTONS).unwrap();
        let mut trap = FocusTrap::new(
            document.get_element_by_id("trap").unwrap(),
            CheckOptions::default(),
        );
        trap.activate(None);
        assert_eq!(id(&trap.next().unwrap()), "b");
        assert_eq!(id(&trap.next().unwrap()), "c");
        assert_eq!(id(&trap.next().unwrap()), "a");
        assert_eq!(id(&trap.previous().unwrap()), "c");
    }

    #[test]
    fn empty_container_never_moves() {
        let document = parse(r#"<div id="trap"><p>no controls</p></div>"#).unwrap();
        let mut trap = FocusTrap::new(
            document.get_element_by_id("trap").unwrap(),
            CheckOptions::default(),
        );
        assert!(trap.activate(None).is_none());
        assert!(trap.next().is_none());
        assert!(trap.previous().is_none());
    }

    #[test]
    fn recomputes_the_list_every_step() {
        let document = parse(THREE_BUTTONS).unwrap();
        let mut trap = FocusTrap::new(
            document.get_element_by_id("trap").unwrap(),
            CheckOptions::default(),
        );
        trap.activate(None);
        trap.next();
        // Disable the focused button under the trap's feet.
        let b = document.get_element_by_id("b").unwrap();
        let rcdom::NodeData::Element { ref attrs, .. } = b.node.data else {
            panic!("not an element");
        };
        attrs.borrow_mut().push(Attribute {
            name: QualName::new(None, ns!(), local_name!("disabled")),
            value: StrTendril::new(),
        });
        assert_eq!(id(&trap.next().unwrap()), "a");
        assert_eq!(id(&trap.previous().unwrap()), "c");
    }

    #[test]
    fn tracked_element_outside_the_list_restarts_at_the_edges() {
        let document = parse(THREE_BUTTONS).unwrap();
        let mut trap = FocusTrap::new(
            document.get_element_by_id("trap").unwrap(),
            CheckOptions::default(),
        );
        trap.set_focused(document.get_element_by_id("trap").unwrap());
        assert_eq!(id(&trap.next().unwrap()), "a");
        trap.set_focused(document.get_element_by_id("trap").unwrap());
        assert_eq!(id(&trap.previous().unwrap()), "c");
    }
}
