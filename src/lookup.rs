//! Path-based descent into a value tree

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use crate::value::JsonValue;

/// One step of a lookup path
#[derive(Debug, Clone, PartialEq)]
pub enum PathComponent<'a> {
    /// An object field selected by name
    Name(Cow<'a, str>),
    /// An array element selected by index
    Index(usize),
}

impl<'a> From<&'a str> for PathComponent<'a> {
    fn from(name: &'a str) -> Self {
        PathComponent::Name(Cow::Borrowed(name))
    }
}

impl From<String> for PathComponent<'static> {
    fn from(name: String) -> Self {
        PathComponent::Name(Cow::Owned(name))
    }
}

impl From<usize> for PathComponent<'_> {
    fn from(index: usize) -> Self {
        PathComponent::Index(index)
    }
}

impl Display for PathComponent<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathComponent::Name(name) => write!(f, "{name}"),
            PathComponent::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Resolve a path against a tree.
///
/// Names descend into objects and indices into arrays; a missing field, an
/// out-of-range index or a mis-typed segment yields [None]. Reaching a leaf
/// (string, number or constant) returns that node immediately, even when
/// path segments remain.
pub fn lookup<'v>(root: &'v JsonValue, path: &[PathComponent<'_>]) -> Option<&'v JsonValue> {
    let mut current = root;
    for component in path {
        match current {
            JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Const(_) => {
                return Some(current);
            }
            JsonValue::Object(object) => match component {
                PathComponent::Name(name) => current = object.get(name.as_ref())?,
                PathComponent::Index(_) => return None,
            },
            JsonValue::Array(array) => match component {
                PathComponent::Index(index) => current = array.get(*index)?,
                PathComponent::Name(_) => return None,
            },
        }
    }
    Some(current)
}

/// Shorthand for building a path literal of mixed names and indices
#[macro_export]
macro_rules! json_path {
    ($($segment:expr),* $(,)?) => {
        [$($crate::lookup::PathComponent::from($segment)),*]
    };
}

/// A path assembled incrementally, component by component
#[derive(Debug, Default, Clone)]
pub struct Path<'a> {
    components: VecDeque<PathComponent<'a>>,
}

impl<'a> Path<'a> {
    pub fn new() -> Self {
        Path::default()
    }

    /// The number of components within the path
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Checks whether the path is the empty path
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Push a new name component onto the end of the path
    pub fn push_name(&mut self, name: impl Into<Cow<'a, str>>) {
        self.components.push_back(PathComponent::Name(name.into()));
    }

    /// Push a new index component onto the end of the path
    pub fn push_index(&mut self, index: usize) {
        self.components.push_back(PathComponent::Index(index));
    }

    /// Push a whole bunch of names onto the end of the path in order
    pub fn push_names(&mut self, names: &[&'a str]) {
        names.iter().for_each(|name| self.push_name(*name));
    }

    /// Push a whole bunch of indexes onto the end of the path in order
    pub fn push_indexes(&mut self, indexes: &[usize]) {
        indexes.iter().for_each(|index| self.push_index(*index));
    }

    /// Pop the last component off the back of the path
    pub fn pop(&mut self) -> Option<PathComponent<'a>> {
        self.components.pop_back()
    }

    /// Resolve this path against a tree, with [lookup]'s semantics
    pub fn resolve<'v>(&self, root: &'v JsonValue) -> Option<&'v JsonValue> {
        let (front, back) = self.components.as_slices();
        let value = lookup(root, front)?;
        lookup(value, back)
    }
}

impl Display for Path<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{lookup, Path, PathComponent};
    use crate::parser::Parser;
    use crate::value::JsonValue;
    use crate::json_path;

    fn config() -> JsonValue {
        Parser::new()
            .parse_str(
                "{\"main\":{\"fullscreen\":0,\"width\":800,\"height\":480,\"profile\":\"test\"}}",
            )
            .unwrap()
    }

    #[test]
    fn should_descend_through_objects_by_name() {
        let root = config();
        let width = lookup(&root, &json_path!["main", "width"]).unwrap();
        let number = width.as_number().unwrap();
        assert!(number.is_int());
        assert_eq!(number.to_int(), 800);
        assert_eq!(number.to_double(), 800.0);
    }

    #[test]
    fn should_descend_through_arrays_by_index() {
        let root = Parser::new().parse_str("{\"rows\": [[1, 2], [3, 4]]}").unwrap();
        let cell = lookup(&root, &json_path!["rows", 1usize, 0usize]).unwrap();
        assert_eq!(cell.as_number().unwrap().to_int(), 3);
    }

    #[test]
    fn should_return_none_for_missing_segments() {
        let root = config();
        assert!(lookup(&root, &json_path!["main", "depth"]).is_none());
        assert!(lookup(&root, &json_path!["other"]).is_none());
    }

    #[test]
    fn should_return_none_for_mis_typed_segments() {
        let root = config();
        // an index cannot select within an object
        assert!(lookup(&root, &json_path![0usize]).is_none());
    }

    #[test]
    fn should_stop_early_at_a_leaf() {
        let root = config();
        let profile = lookup(&root, &json_path!["main", "profile", "extra", "deep"]).unwrap();
        assert_eq!(profile.as_string().unwrap().utf8(), "test");
    }

    #[test]
    fn should_return_the_root_for_an_empty_path() {
        let root = config();
        let found = lookup(&root, &[]).unwrap();
        assert!(found.as_object().is_some());
    }

    #[test]
    fn should_resolve_incrementally_built_paths() {
        let root = config();
        let mut path = Path::new();
        path.push_names(&["main", "height"]);
        assert_eq!(path.len(), 2);
        let height = path.resolve(&root).unwrap();
        assert_eq!(height.as_number().unwrap().to_int(), 480);
        path.pop();
        path.push_name("fullscreen".to_owned());
        let fullscreen = path.resolve(&root).unwrap();
        assert_eq!(fullscreen.as_number().unwrap().to_int(), 0);
    }

    #[test]
    fn should_render_paths_with_separators() {
        let mut path = Path::new();
        path.push_name("rows");
        path.push_index(3);
        assert_eq!(path.to_string(), "rows/3");
        assert_eq!(PathComponent::from(7usize).to_string(), "7");
    }
}
